//! The cooperative step runner.
//!
//! [`script_runner`] advances every running
//! [`Script`](crate::components::script::Script) each tick: it resolves the
//! script's waiting state (a countdown or a world flag), then executes steps
//! in order until the script parks on the next wait or runs out of steps.
//! Finished scripts despawn themselves.
//!
//! Step side effects follow the story's degradation policy throughout:
//! audio is fire-and-continue (a caption's schedule never depends on the
//! voice line), unknown models/clips are logged and skipped, and a step
//! addressing an actor that no longer exists is a logged no-op. The
//! narrative text and scene progression survive every failure mode.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, error, warn};

use crate::components::affordance::Affordance;
use crate::components::caption::{Dialogue, Narration};
use crate::components::clip::ActiveClip;
use crate::components::position::Position;
use crate::components::prop::Prop;
use crate::components::script::{Script, Step, Waiting};
use crate::components::ttl::Ttl;
use crate::components::tween::TweenPosition;
use crate::error::StoryError;
use crate::events::audio::AudioCmd;
use crate::resources::director::{Director, NextScene};
use crate::resources::models::ModelCatalog;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Bundled system parameters for step execution.
#[derive(SystemParam)]
pub struct StepContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub signals: ResMut<'w, WorldSignals>,
    pub director: Res<'w, Director>,
    pub next_scene: ResMut<'w, NextScene>,
    pub catalog: Res<'w, ModelCatalog>,
    pub props: Query<'w, 's, &'static mut Prop>,
    pub audio: MessageWriter<'w, AudioCmd>,
}

/// Advance all running scripts by one tick.
pub fn script_runner(
    time: Res<WorldTime>,
    mut scripts: Query<(Entity, &mut Script)>,
    mut ctx: StepContext,
) {
    let dt = time.delta.max(0.0);

    for (entity, mut script) in scripts.iter_mut() {
        // Resolve the outstanding wait, if any.
        match script.waiting.take() {
            None => {}
            Some(Waiting::For(remaining)) => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    script.waiting = Some(Waiting::For(remaining));
                    continue;
                }
            }
            Some(Waiting::Until(flag)) => {
                if ctx.signals.has_flag(&flag) {
                    // Consume the flag so a later wait on the same name
                    // starts fresh.
                    ctx.signals.clear_flag(&flag);
                } else {
                    script.waiting = Some(Waiting::Until(flag));
                    continue;
                }
            }
        }

        // Execute until the next wait or the end of the list.
        while script.waiting.is_none() && script.cursor < script.steps.len() {
            let step = script.steps[script.cursor].clone();
            script.cursor += 1;
            script.waiting = run_step(&step, &mut ctx);
        }

        if script.finished() {
            ctx.commands.entity(entity).try_despawn();
        }
    }
}

/// Execute one step. Returns the wait it parks the script on, if any.
fn run_step(step: &Step, ctx: &mut StepContext) -> Option<Waiting> {
    let root = ctx.director.content_root();
    match step {
        Step::Narration {
            voice,
            text,
            anchor,
            seconds,
        } => {
            // Audio first, then the banner on its own schedule. A failed
            // voice line comes back as a bridge message and a log line, not
            // a delay.
            if let Some(voice) = voice {
                ctx.audio.write(AudioCmd::PlayVoice { id: voice.clone() });
            }
            ctx.commands.spawn((
                Narration::new(text.clone()),
                Position { pos: *anchor },
                Ttl::new(*seconds),
                ChildOf(root),
            ));
            Some(Waiting::For(*seconds))
        }
        Step::Dialogue {
            speaker,
            voice,
            text,
            anchor,
            seconds,
        } => {
            if let Some(voice) = voice {
                ctx.audio.write(AudioCmd::PlayVoice { id: voice.clone() });
            }
            ctx.commands.spawn((
                Dialogue::new(speaker.clone(), text.clone()),
                Position { pos: *anchor },
                Ttl::new(*seconds),
                ChildOf(root),
            ));
            Some(Waiting::For(*seconds))
        }
        Step::PlayClip { actor, clip } => {
            let Some(entity) = lookup_actor(ctx, actor) else {
                return None;
            };
            let Ok(prop) = ctx.props.get(entity) else {
                warn!("actor '{actor}' is not a prop; clip '{clip}' skipped");
                return None;
            };
            match ctx.catalog.resolve_clip(&prop.model_key, clip) {
                Ok(_) => {
                    if let Ok(mut ecmd) = ctx.commands.get_entity(entity) {
                        ecmd.insert(ActiveClip::new(clip.clone()));
                    }
                }
                Err(e) => warn!("{e}; animation skipped"),
            }
            None
        }
        Step::MoveActor {
            actor,
            from,
            to,
            seconds,
            done_flag,
            milestone,
        } => {
            let Some(entity) = lookup_actor(ctx, actor) else {
                return None;
            };
            let mut tween = TweenPosition::new(*from, *to, *seconds);
            if let Some(flag) = done_flag {
                tween = tween.with_done_flag(flag.clone());
            }
            if let Some((at, flag)) = milestone {
                tween = tween.with_milestone(*at, flag.clone());
            }
            if let Ok(mut ecmd) = ctx.commands.get_entity(entity) {
                // Snap to the start point so a re-run begins from the right
                // place.
                ecmd.insert((Position { pos: *from }, tween));
            }
            None
        }
        Step::SetVisible { actor, visible } => {
            let Some(entity) = lookup_actor(ctx, actor) else {
                return None;
            };
            if let Ok(mut prop) = ctx.props.get_mut(entity) {
                prop.visible = *visible;
            }
            None
        }
        Step::PlayFx { id } => {
            ctx.audio.write(AudioCmd::PlayFx { id: id.clone() });
            None
        }
        Step::Wait { seconds } => Some(Waiting::For(*seconds)),
        Step::AwaitFlag { flag } => {
            if ctx.signals.has_flag(flag) {
                ctx.signals.clear_flag(flag);
                None
            } else {
                Some(Waiting::Until(flag.clone()))
            }
        }
        Step::ShowAffordance { id, label } => {
            ctx.commands
                .spawn((Affordance::button(id, label), ChildOf(root)));
            None
        }
        Step::ShowChoice { options } => {
            for option in options {
                ctx.commands.spawn((
                    Affordance::button(&option.id, &option.label).with_choice_group("choice"),
                    ChildOf(root),
                ));
            }
            None
        }
        Step::SetFlag { flag } => {
            ctx.signals.set_flag(flag.clone());
            None
        }
        Step::LoadScene { index } => {
            match ctx.director.check_index(*index) {
                Ok(()) => ctx.next_scene.set(*index),
                Err(e) => error!("script loadScene rejected: {e}"),
            }
            None
        }
    }
}

/// Resolve an actor key against the registry. A missing key is the stale
/// reference case after teardown: logged, and the step becomes a no-op.
fn lookup_actor(ctx: &StepContext, actor: &str) -> Option<Entity> {
    match ctx.signals.actor(actor) {
        Some(entity) => Some(entity),
        None => {
            debug!(
                "{}",
                StoryError::UnknownActor {
                    key: actor.to_string()
                }
            );
            None
        }
    }
}
