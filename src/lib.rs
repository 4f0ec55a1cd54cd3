//! Fablestage library.
//!
//! A frame-driven, ECS-based story engine for the staged Tortoise-and-Hare
//! fable: scene lifecycle control, narration/dialogue timing, linear
//! position tweens, and branching narrative scripts. The AR/camera session,
//! gesture recognition, rig playback, and visual presentation are external
//! collaborators behind entity, message, and channel seams.
//!
//! This module exposes the components, resources, systems, and events for
//! use by the console binary and the integration tests.

pub mod app;
pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod story;
pub mod systems;
