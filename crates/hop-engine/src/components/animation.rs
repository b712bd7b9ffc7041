//! Animation bookkeeping: named frame sequences with independent,
//! call-count-driven cycles.
//!
//! Frame advance is driven purely by `next` calls, never by wall-clock
//! time, so playback is deterministic and reproducible for any tick
//! sequence. The caller invokes `next` exactly once per rendered tick.

use std::collections::HashMap;

use thiserror::Error;

use crate::core::frame::Frame;

/// `next` was called with a name that was never registered, or with no
/// name while no animation had ever been selected.
///
/// This is always a caller or configuration mistake, surfaced at the
/// call site; the manager never substitutes a default frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing animation: {}", .name.as_deref().unwrap_or("<none selected>"))]
pub struct MissingAnimation {
    /// The requested name, or `None` when nothing was ever selected.
    pub name: Option<String>,
}

/// One registered animation: its frame sequence plus cycle position.
#[derive(Debug, Clone)]
struct Track {
    frames: Vec<Frame>,
    /// How many consecutive `next` calls each logical frame is held for.
    frame_scale: u64,
    /// Total `next` calls this track has served.
    cursor: u64,
}

impl Track {
    fn index_at(&self, cursor: u64) -> usize {
        ((cursor / self.frame_scale) % self.frames.len() as u64) as usize
    }

    /// Yield the frame for the next cursor position and advance. The
    /// cycle is infinite: after the last frame it wraps to the first.
    fn advance(&mut self) -> &Frame {
        let idx = self.index_at(self.cursor);
        self.cursor += 1;
        &self.frames[idx]
    }

    /// The frame most recently yielded, if any.
    fn current(&self) -> Option<&Frame> {
        if self.cursor == 0 {
            return None;
        }
        Some(&self.frames[self.index_at(self.cursor - 1)])
    }
}

/// Owns every animation of one game object and tracks which is selected.
///
/// Each track's cycle position persists independently of the selection:
/// switching names never resets another name's progress, so an
/// interrupted walk cycle resumes exactly where it left off.
#[derive(Debug, Clone, Default)]
pub struct AnimationManager {
    tracks: HashMap<String, Track>,
    current: Option<String>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `frames` under `name`. Each logical frame repeats
    /// `frame_scale` consecutive `next` calls before the cycle advances,
    /// so the visible frame rate is tick rate / `frame_scale`.
    ///
    /// Re-registering a name replaces its frames and restarts its cycle.
    /// A `frame_scale` of 0 is treated as 1. An empty `frames` vector is
    /// dropped: a later `next` for that name fails with
    /// [`MissingAnimation`] instead of cycling over nothing.
    pub fn add_animation(&mut self, name: impl Into<String>, frames: Vec<Frame>, frame_scale: u32) {
        let name = name.into();
        if frames.is_empty() {
            log::warn!("dropping empty animation {name:?}");
            return;
        }
        if frame_scale == 0 {
            log::debug!("animation {name:?}: frame_scale 0 treated as 1");
        }
        self.tracks.insert(
            name,
            Track {
                frames,
                frame_scale: frame_scale.max(1) as u64,
                cursor: 0,
            },
        );
    }

    /// Advance the selected animation by one step and return its frame.
    ///
    /// `Some(name)` switches the selection first, without resetting that
    /// track's progress: it resumes where it left off even across
    /// intervening calls under other names. `None` keeps the current
    /// selection.
    pub fn next(&mut self, name: Option<&str>) -> Result<&Frame, MissingAnimation> {
        if let Some(name) = name {
            if !self.tracks.contains_key(name) {
                return Err(MissingAnimation {
                    name: Some(name.to_owned()),
                });
            }
            if self.current.as_deref() != Some(name) {
                self.current = Some(name.to_owned());
            }
        }
        let current = self.current.as_deref().ok_or(MissingAnimation { name: None })?;
        let track = self
            .tracks
            .get_mut(current)
            .ok_or_else(|| MissingAnimation {
                name: Some(current.to_owned()),
            })?;
        Ok(track.advance())
    }

    /// The frame most recently yielded for the current selection.
    /// `None` before the first successful `next`.
    pub fn current_frame(&self) -> Option<&Frame> {
        let current = self.current.as_deref()?;
        self.tracks.get(current)?.current()
    }

    /// Name of the currently selected animation.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Read-only view of a name's raw frame sequence.
    pub fn frames(&self, name: &str) -> Option<&[Frame]> {
        self.tracks.get(name).map(|t| t.frames.as_slice())
    }
}
