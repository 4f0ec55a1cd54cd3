//! Event and message types exchanged across systems.
//!
//! Events provide a decoupled way for the interaction entry points, the
//! scene controller, and the audio bridge to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the audio playback thread
//! - [`interaction`] – taps and navigation requests from the input layer
//! - [`scene`] – scene transition event and the observer that applies it
//!
//! See each submodule for concrete event data and semantics.

pub mod audio;
pub mod interaction;
pub mod scene;
