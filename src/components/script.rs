//! Narrative step scripts.
//!
//! A [`Script`] is an ordered list of [`Step`]s executed by the cooperative
//! step runner ([`crate::systems::script`]). Each scene's opening sequence
//! and each of its branches is one step list; the source story's promise
//! chains ("narrate, then reveal the button, then...") become explicit,
//! inspectable data.
//!
//! Steps are either immediate side effects (play a clip, start a movement,
//! spawn an affordance) or waiting points: a timed wait, or a wait on a
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals) flag
//! raised by a tween. The runner executes steps in order, parking the script
//! while a wait is outstanding; a script entity despawns itself when its
//! last step finishes. Scene teardown despawns running scripts with the rest
//! of the content root, which is what cancels an in-flight sequence.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One labeled option of a user choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Branch id activated when this option is picked.
    pub id: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        ChoiceOption {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One step of a narrative sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Step {
    /// Attempt the voice line, show a narration banner for `seconds`, and
    /// wait out the duration. Audio failure never delays the banner.
    Narration {
        voice: Option<String>,
        text: String,
        anchor: Vec3,
        seconds: f32,
    },
    /// Like `Narration`, with a speaker label and a bubble near the speaker.
    Dialogue {
        speaker: String,
        voice: Option<String>,
        text: String,
        anchor: Vec3,
        seconds: f32,
    },
    /// Switch the named actor's animation clip. Unknown actors or clips are
    /// logged and skipped.
    PlayClip { actor: String, clip: String },
    /// Start a linear movement on the named actor. Non-blocking; pair with
    /// `AwaitFlag` on `done_flag` when the sequence must wait for arrival.
    MoveActor {
        actor: String,
        from: Vec3,
        to: Vec3,
        seconds: f32,
        done_flag: Option<String>,
        /// `(fraction, flag)` raised when progress first crosses `fraction`.
        milestone: Option<(f32, String)>,
    },
    /// Show or hide the named actor.
    SetVisible { actor: String, visible: bool },
    /// Fire a sound effect.
    PlayFx { id: String },
    /// Block for a fixed number of seconds.
    Wait { seconds: f32 },
    /// Block until a world flag is raised.
    AwaitFlag { flag: String },
    /// Spawn a single continuation button.
    ShowAffordance { id: String, label: String },
    /// Spawn one button per option, grouped so that picking either removes
    /// both.
    ShowChoice {
        options: SmallVec<[ChoiceOption; 2]>,
    },
    /// Raise a world flag (the final scene raises the exit flag this way).
    SetFlag { flag: String },
    /// Request a scene transition.
    LoadScene { index: usize },
}

/// What a parked script is waiting on.
#[derive(Clone, Debug, PartialEq)]
pub enum Waiting {
    /// Remaining seconds of a timed wait.
    For(f32),
    /// A `WorldSignals` flag.
    Until(String),
}

/// A running step list. One per scene opening or activated branch.
#[derive(Component, Clone, Debug)]
pub struct Script {
    pub steps: Vec<Step>,
    /// Index of the next step to execute.
    pub cursor: usize,
    /// Set while the script is parked on a wait.
    pub waiting: Option<Waiting>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Script {
            steps,
            cursor: 0,
            waiting: None,
        }
    }

    /// True once every step has executed.
    pub fn finished(&self) -> bool {
        self.cursor >= self.steps.len() && self.waiting.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_script_starts_at_zero() {
        let script = Script::new(vec![Step::Wait { seconds: 1.0 }]);
        assert_eq!(script.cursor, 0);
        assert!(script.waiting.is_none());
        assert!(!script.finished());
    }

    #[test]
    fn test_empty_script_is_finished() {
        let script = Script::new(Vec::new());
        assert!(script.finished());
    }

    #[test]
    fn test_parked_script_not_finished() {
        let mut script = Script::new(vec![Step::Wait { seconds: 1.0 }]);
        script.cursor = 1;
        script.waiting = Some(Waiting::For(0.5));
        assert!(!script.finished());
    }

    #[test]
    fn test_step_roundtrips_through_serde() {
        let step = Step::MoveActor {
            actor: "tortoise".into(),
            from: Vec3::new(-1.1, 0.3, 0.2),
            to: Vec3::new(1.5, 0.3, 0.2),
            seconds: 5.0,
            done_flag: None,
            milestone: Some((0.8, "tortoise_at_line".into())),
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        match back {
            Step::MoveActor {
                actor, milestone, ..
            } => {
                assert_eq!(actor, "tortoise");
                assert_eq!(milestone.unwrap().1, "tortoise_at_line");
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }
}
