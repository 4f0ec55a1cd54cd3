//! Global signal storage resource.
//!
//! [`WorldSignals`] is the world-wide signal map for cross-system
//! communication:
//! - presence flags, raised by tweens and scripts and awaited by the step
//!   runner (and the `exit_story` flag the platform loop watches)
//! - string signals, e.g. the current scene title and instruction line the
//!   presentation layer displays
//! - the actor registry: the stable lookup keys ("tortoise", "hare") under
//!   which a scene's setup registers its placed entities, so branch steps
//!   can address them without holding entity ids across teardown
//!
//! The scene-change observer clears flags and actors on every transition;
//! nothing raised by scene N is observable from scene N+1.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

/// World-wide signal store: flags, strings, and the actor registry.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
    /// String signals addressed by string keys.
    strings: FxHashMap<String, String>,
    /// Actors of the active scene, by stable lookup key.
    actors: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    /// Register an actor entity under a stable lookup key.
    pub fn set_actor(&mut self, key: impl Into<String>, entity: Entity) {
        self.actors.insert(key.into(), entity);
    }
    /// Look up an actor by key.
    pub fn actor(&self, key: &str) -> Option<Entity> {
        self.actors.get(key).copied()
    }

    /// Drop all per-scene state: every flag and every registered actor.
    ///
    /// Called by the scene-change observer so waits and actor references
    /// from a torn-down scene cannot leak into the next one.
    pub fn reset_scene_state(&mut self) {
        self.flags.clear();
        self.actors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    #[test]
    fn test_flags_set_clear() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("exit_story"));
        signals.set_flag("exit_story");
        assert!(signals.has_flag("exit_story"));
        signals.clear_flag("exit_story");
        assert!(!signals.has_flag("exit_story"));
    }

    #[test]
    fn test_strings() {
        let mut signals = WorldSignals::default();
        signals.set_string("scene_title", "Scene 1: The First Meeting");
        assert_eq!(
            signals.get_string("scene_title").map(String::as_str),
            Some("Scene 1: The First Meeting")
        );
        assert!(signals.get_string("missing").is_none());
    }

    #[test]
    fn test_actor_registry() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        let mut signals = WorldSignals::default();
        signals.set_actor("tortoise", entity);
        assert_eq!(signals.actor("tortoise"), Some(entity));
        assert_eq!(signals.actor("hare"), None);
    }

    #[test]
    fn test_reset_scene_state_clears_flags_and_actors_only() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        let mut signals = WorldSignals::default();
        signals.set_flag("tortoise_done");
        signals.set_actor("tortoise", entity);
        signals.set_string("scene_title", "whatever");

        signals.reset_scene_state();
        assert!(!signals.has_flag("tortoise_done"));
        assert_eq!(signals.actor("tortoise"), None);
        // strings survive; the observer overwrites them per scene
        assert!(signals.get_string("scene_title").is_some());
    }
}
