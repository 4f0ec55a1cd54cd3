//! ECS components for scene content.
//!
//! Everything spawned under a content root is built from these components.
//! They define placement, model identity, animation, timed lifetime, and the
//! narrative machinery (captions, affordances, step scripts).
//!
//! Submodules overview:
//! - [`affordance`] – user-activatable controls (buttons, choices, tap targets)
//! - [`caption`] – narration banners and dialogue bubbles
//! - [`clip`] – the named animation clip a prop is currently playing
//! - [`persistent`] – marker for entities that survive scene teardown
//! - [`position`] – world-space position of a placed entity
//! - [`prop`] – a placed model instance from the catalog
//! - [`rotation`] – Euler rotation in degrees
//! - [`scale`] – per-axis scale factor
//! - [`script`] – ordered step list driving a scene's narrative sequence
//! - [`ttl`] – countdown that despawns an entity when it expires
//! - [`tween`] – linear position interpolation over a fixed duration

pub mod affordance;
pub mod caption;
pub mod clip;
pub mod persistent;
pub mod position;
pub mod prop;
pub mod rotation;
pub mod scale;
pub mod script;
pub mod ttl;
pub mod tween;
