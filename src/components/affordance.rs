//! Affordance components.
//!
//! An affordance is a user-activatable control that advances or branches the
//! narrative: a "Continue" button, one option of a binary choice, or a tap
//! target attached to a placed prop ("tap the tortoise"). Affordances are
//! plain entities owned by the active scene's content root and destroyed
//! unconditionally on teardown — never hidden and reused by identity lookup.
//!
//! Activation arrives as
//! [`InteractionCmd::Activate`](crate::events::interaction::InteractionCmd)
//! from the interaction entry points. Buttons are consumed on activation
//! (the whole choice group at once, for choices); tap targets stay armed and
//! can be activated again.

use bevy_ecs::prelude::Component;

/// How an affordance behaves when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffordanceKind {
    /// A one-shot button; despawned on activation.
    Button,
    /// A tappable prop; survives activation and can fire again.
    TapTarget,
}

/// A user-activatable control bound to a branch of the current scene.
#[derive(Component, Clone, Debug)]
pub struct Affordance {
    /// Branch id this affordance triggers; unique within a scene.
    pub id: String,
    /// Human-readable label for the presentation layer.
    pub label: String,
    pub kind: AffordanceKind,
    /// Choice membership: activating any member despawns the whole group.
    pub choice_group: Option<String>,
}

impl Affordance {
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Affordance {
            id: id.into(),
            label: label.into(),
            kind: AffordanceKind::Button,
            choice_group: None,
        }
    }

    pub fn tap_target(id: impl Into<String>, label: impl Into<String>) -> Self {
        Affordance {
            id: id.into(),
            label: label.into(),
            kind: AffordanceKind::TapTarget,
            choice_group: None,
        }
    }

    pub fn with_choice_group(mut self, group: impl Into<String>) -> Self {
        self.choice_group = Some(group.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_defaults() {
        let a = Affordance::button("talk", "Talk");
        assert_eq!(a.id, "talk");
        assert_eq!(a.label, "Talk");
        assert_eq!(a.kind, AffordanceKind::Button);
        assert!(a.choice_group.is_none());
    }

    #[test]
    fn test_choice_group_builder() {
        let a = Affordance::button("sleep", "Let Hare Sleep").with_choice_group("nap");
        assert_eq!(a.choice_group.as_deref(), Some("nap"));
    }

    #[test]
    fn test_tap_target_kind() {
        let a = Affordance::tap_target("finish_line", "Finish Line");
        assert_eq!(a.kind, AffordanceKind::TapTarget);
    }
}
