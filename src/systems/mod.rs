//! Engine systems.
//!
//! This module groups the ECS systems that advance the story each tick.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward commands, poll
//!   messages, log playback failures) and the built-in stub thread
//! - [`director`] – the scene controller's public API and the pending-scene
//!   pump
//! - [`interaction`] – resolve taps and navigation requests from the input
//!   layer
//! - [`script`] – the cooperative step runner driving narrative sequences
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – expire captions and other timed entities
//! - [`tween`] – advance linear position tweens

pub mod audio;
pub mod director;
pub mod interaction;
pub mod script;
pub mod time;
pub mod ttl;
pub mod tween;
