//! ECS resources that bridge the world with the audio playback thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the bridge thread
//! and insert the [`AudioBridge`] and message mailboxes. Call
//! [`shutdown_audio`] during teardown to stop the thread.
//!
//! The thread spawned here is a logging stub: real voice/effect playback
//! belongs to the platform layer, which can substitute its own thread by
//! constructing the bridge with [`AudioBridge::new`] over its own channels.
//! Either way the story side only ever sees commands going out and
//! started/failed/finished messages coming back — and a failure is never
//! more than a log line.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::stub_audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the bridge thread, when this process owns it.
    pub handle: Option<std::thread::JoinHandle<()>>,
}

impl AudioBridge {
    /// Wrap externally owned channels (platform-provided player).
    pub fn new(tx_cmd: Sender<AudioCmd>, rx_msg: Receiver<AudioMessage>) -> Self {
        AudioBridge {
            tx_cmd,
            rx_msg,
            handle: None,
        }
    }
}

/// Spawn the stub audio thread and register the bridge resources.
///
/// Inserts [`AudioBridge`] plus the `Messages` mailboxes for both
/// directions so systems can write commands and read responses.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || stub_audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle: Some(handle),
    });
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Register bridge resources over caller-owned channels (no thread spawned).
pub fn setup_audio_with_channels(
    world: &mut World,
    tx_cmd: Sender<AudioCmd>,
    rx_msg: Receiver<AudioMessage>,
) {
    world.insert_resource(AudioBridge::new(tx_cmd, rx_msg));
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Gracefully request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if let Some(handle) = bridge.handle {
            let _ = handle.join();
        }
    }
}
