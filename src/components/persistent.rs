//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are never part of a content
//! root and survive scene transitions. Used for the content roots themselves
//! and for observer entities.

use bevy_ecs::prelude::Component;

/// Tag component for entities that must outlive scene teardown.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
