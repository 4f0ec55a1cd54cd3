//! Scene lifecycle controller state.
//!
//! [`Director`] is the authoritative owner of the current scene index, the
//! render mode, and the two content-root entities. [`NextScene`] holds a
//! pending transition request. Systems request transitions by setting
//! [`NextScene`]; the observer in [`crate::events::scene`] applies them
//! (teardown, then setup) when a
//! [`SceneChangedEvent`](crate::events::scene::SceneChangedEvent) fires.
//!
//! Requests set while another is already pending coalesce: the last request
//! before the transition applies wins. Teardown is unconditional, so
//! re-entering any scene mid-animation of another is always clean.

use bevy_ecs::prelude::{Entity, Resource};

use crate::error::StoryError;

/// Whether the session presents over the live camera feed or in the non-AR
/// fallback view. Chosen once by the bootstrap, locked on the first scene
/// load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Ar,
    Fallback,
}

/// Authoritative scene state and content-root selection.
#[derive(Resource, Debug)]
pub struct Director {
    current: usize,
    scene_count: usize,
    mode: RenderMode,
    /// True once the first scene has loaded; the mode cannot change after.
    mode_locked: bool,
    /// True once any scene has been entered (leaves the implicit
    /// uninitialized pre-state).
    entered: bool,
    ar_root: Entity,
    fallback_root: Entity,
}

impl Director {
    pub fn new(scene_count: usize, ar_root: Entity, fallback_root: Entity) -> Self {
        Director {
            current: 0,
            scene_count,
            mode: RenderMode::Fallback,
            mode_locked: false,
            entered: false,
            ar_root,
            fallback_root,
        }
    }

    /// Index of the active scene. Meaningful only once [`Self::entered`].
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn scene_count(&self) -> usize {
        self.scene_count
    }

    /// True once the first scene has been entered.
    pub fn entered(&self) -> bool {
        self.entered
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Select the render mode. Must happen before the first scene load;
    /// afterwards the mode is locked and the call is rejected.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> Result<(), StoryError> {
        if self.mode_locked {
            return Err(StoryError::RenderModeLocked);
        }
        self.mode = mode;
        Ok(())
    }

    /// The content root matching the current render mode.
    pub fn content_root(&self) -> Entity {
        match self.mode {
            RenderMode::Ar => self.ar_root,
            RenderMode::Fallback => self.fallback_root,
        }
    }

    /// Validate a requested index against the scene count.
    pub fn check_index(&self, index: usize) -> Result<(), StoryError> {
        if index < self.scene_count {
            Ok(())
        } else {
            Err(StoryError::InvalidSceneIndex {
                index,
                count: self.scene_count,
            })
        }
    }

    /// Index one step forward, wrapping from the last scene to the first.
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.scene_count
    }

    /// Index one step backward, wrapping from the first scene to the last.
    pub fn prev_index(&self) -> usize {
        (self.current + self.scene_count - 1) % self.scene_count
    }

    /// Record that a validated transition has been applied. Locks the render
    /// mode on first use.
    pub fn enter_scene(&mut self, index: usize) {
        debug_assert!(index < self.scene_count);
        self.current = index;
        self.entered = true;
        self.mode_locked = true;
    }
}

/// Intent to load a scene. `None` means no transition pending.
#[derive(Resource, Debug, Default)]
pub struct NextScene {
    pending: Option<usize>,
}

impl NextScene {
    /// Request a transition. A request already pending is overwritten.
    pub fn set(&mut self, index: usize) {
        self.pending = Some(index);
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Consume the pending request.
    pub fn take(&mut self) -> Option<usize> {
        self.pending.take()
    }
}
