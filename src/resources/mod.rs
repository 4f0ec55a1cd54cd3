//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read or mutated by systems:
//! timing, the world signal store, the scene controller, the story data, the
//! model catalog, the audio bridge, and configuration.
//!
//! Overview
//! - `audio` – bridge and channels for the audio playback thread
//! - `config` – INI-backed playback and session settings
//! - `director` – authoritative scene index, render mode, content roots, and
//!   the pending scene request
//! - `models` – logical model catalog (assets and named clips)
//! - `storybook` – the six immutable scene definitions
//! - `worldsignals` – world-wide flags, strings, and the actor registry
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod config;
pub mod director;
pub mod models;
pub mod storybook;
pub mod worldsignals;
pub mod worldtime;
