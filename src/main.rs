//! Fablestage main entry point.
//!
//! A frame-driven retelling of the Tortoise and the Hare using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the audio bridge and console input
//! - scene lifecycle control, step scripts, and linear tweens from the
//!   library crate
//!
//! This executable is the session bootstrap plus a console presentation
//! surface: captions and affordances print to stdout, and taps arrive as
//! typed lines (or automatically in autoplay mode). In a deployed AR build
//! this file is replaced by the camera/surface bootstrap and a real
//! renderer; everything it talks to lives in the library.
//!
//! # Main Loop
//!
//! 1. Parse CLI, load config, initialize logging and the audio bridge
//! 2. Select the render mode (AR unless `--fallback`), load scene 0
//! 3. Tick the schedule at the configured rate: input, scripts, scene
//!    transitions, tweens, caption expiry
//! 4. Exit when the story raises the `exit_story` flag
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --fallback --autoplay
//! ```

mod app;
mod components;
mod error;
mod events;
mod resources;
mod story;
mod systems;

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use clap::Parser;
use crossbeam_channel::unbounded;

use crate::components::affordance::Affordance;
use crate::components::caption::{Dialogue, Narration};
use crate::events::audio::AudioCmd;
use crate::events::interaction::InteractionCmd;
use crate::resources::audio::{AudioBridge, setup_audio, shutdown_audio};
use crate::resources::config::StoryConfig;
use crate::resources::director::RenderMode;
use crate::resources::models::ModelCatalog;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::director::{request_scene, set_render_mode};

/// The Tortoise and the Hare, on your terminal.
#[derive(Parser)]
#[command(version, about = "Fablestage: an interactive retelling of the Tortoise and the Hare")]
struct Cli {
    /// Present in non-AR fallback mode instead of camera AR.
    #[arg(long)]
    fallback: bool,

    /// Activate the first available affordance automatically.
    #[arg(long)]
    autoplay: bool,

    /// Path to the configuration file (default: ./fablestage.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON model catalog overriding the built-in asset set.
    #[arg(long, value_name = "PATH")]
    models: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => StoryConfig::with_path(path),
        None => StoryConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.autoplay {
        config.autoplay = true;
    }
    let tick_rate = config.tick_rate.max(1);
    let autoplay = config.autoplay;
    let volume = config.master_volume;

    let mut world = app::build_world(config);
    setup_audio(&mut world); // must go before the first scene load

    if let Some(path) = &cli.models {
        match std::fs::read_to_string(path).map_err(|e| e.to_string()) {
            Ok(json) => match ModelCatalog::from_json(&json) {
                Ok(catalog) => {
                    world.insert_resource(catalog);
                    log::info!("model catalog loaded from {}", path.display());
                }
                Err(e) => log::error!("{e}; keeping the built-in catalog"),
            },
            Err(e) => log::error!("could not read {}: {e}", path.display()),
        }
    }

    if world
        .resource::<AudioBridge>()
        .tx_cmd
        .send(AudioCmd::SetVolume { volume })
        .is_err()
    {
        log::warn!("audio bridge unavailable; continuing silent");
    }

    // Session bootstrap: mode first, then scene 0. A real AR build decides
    // the mode from camera/surface acquisition; here the CLI decides.
    let mode = if cli.fallback {
        RenderMode::Fallback
    } else {
        RenderMode::Ar
    };
    if let Err(e) = set_render_mode(&mut world, mode) {
        log::error!("render mode not applied: {e}");
    }
    if let Err(e) = request_scene(&mut world, 0) {
        log::error!("could not start the story: {e}");
        return;
    }

    let mut schedule = app::build_schedule();
    schedule.add_systems((
        announce_scene,
        announce_narration,
        announce_dialogue,
        announce_affordances,
    ));
    schedule.add_systems(autoplay_system);
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // Console input thread: each line is a tap. "next"/"prev" navigate,
    // anything else activates the affordance with that id or label.
    let (tx_input, rx_input) = unbounded::<String>();
    if !autoplay {
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            let mut line = String::new();
            loop {
                line.clear();
                match stdin.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        let _ = tx_input.send(line.trim().to_string());
                    }
                }
            }
        });
    }

    let dt = 1.0 / tick_rate as f32;
    loop {
        for line in rx_input.try_iter() {
            let cmd = match line.as_str() {
                "" => continue,
                "next" => InteractionCmd::Advance,
                "prev" | "back" => InteractionCmd::Retreat,
                other => InteractionCmd::Activate(other.to_string()),
            };
            world.resource_mut::<Messages<InteractionCmd>>().write(cmd);
        }

        app::tick(&mut world, &mut schedule, dt);

        if world.resource::<WorldSignals>().has_flag("exit_story") {
            break;
        }
        std::thread::sleep(Duration::from_secs_f32(dt));
    }

    shutdown_audio(&mut world);
    println!("The end.");
}

/// Print the scene header whenever the title changes.
fn announce_scene(signals: Res<WorldSignals>, mut last_title: Local<String>) {
    let Some(title) = signals.get_string("scene_title") else {
        return;
    };
    if title != &*last_title {
        *last_title = title.clone();
        println!("\n== {title} ==");
        if let Some(instructions) = signals.get_string("scene_instructions")
            && !instructions.is_empty()
        {
            println!("   ({instructions})");
        }
    }
}

fn announce_narration(query: Query<&Narration, Added<Narration>>) {
    for narration in query.iter() {
        println!("  {}", narration.text);
    }
}

fn announce_dialogue(query: Query<&Dialogue, Added<Dialogue>>) {
    for dialogue in query.iter() {
        println!("  {}: \"{}\"", dialogue.speaker, dialogue.text);
    }
}

fn announce_affordances(query: Query<&Affordance, Added<Affordance>>) {
    for affordance in query.iter() {
        println!("  [{}]", affordance.label);
    }
}

/// In autoplay mode, activate the first available affordance after the
/// configured idle delay. Ids sort alphabetically, which conveniently picks
/// "cheer" over "sleep" at the nap scene and keeps the story moving.
///
/// Each distinct set of affordances is acted on once; tap targets that stay
/// armed after activation (the tortoise, the finish line) are not hammered
/// again until the set changes.
fn autoplay_system(
    config: Res<StoryConfig>,
    time: Res<WorldTime>,
    affordances: Query<&Affordance>,
    mut writer: MessageWriter<InteractionCmd>,
    mut idle: Local<f32>,
    mut last_acted: Local<String>,
) {
    if !config.autoplay {
        return;
    }
    if affordances.is_empty() {
        *idle = 0.0;
        return;
    }
    *idle += time.delta;
    if *idle < config.autoplay_delay {
        return;
    }
    *idle = 0.0;

    let mut ids: Vec<&str> = affordances.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    let bundle = ids.join("|");
    if bundle == *last_acted {
        return;
    }
    if let Some(id) = ids.first() {
        writer.write(InteractionCmd::Activate((*id).to_string()));
        *last_acted = bundle;
    }
}
