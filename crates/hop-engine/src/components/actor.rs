//! The actor: a moving, animated game object with a bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::animation::{AnimationManager, MissingAnimation};
use crate::components::motion::{Direction, Moving};
use crate::core::frame::Frame;
use crate::core::rect::Rect;

/// Movement tunables, fixed for the lifetime of the actor.
/// All values are in pixels and pixels-per-tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Horizontal run speed.
    pub speed: f32,
    /// Downward acceleration applied each tick. Must be positive:
    /// ground contact is detected as `velocity.y == gravity`.
    pub gravity: f32,
    /// Upward velocity granted by a jump.
    pub jump_force: f32,
    /// Terminal downward velocity.
    pub max_fall_speed: f32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            gravity: 1.0,
            jump_force: 8.0,
            max_fall_speed: 8.0,
        }
    }
}

/// A game object that falls, jumps, animates, and occupies a box.
///
/// The actor integrates nothing itself: the surrounding game loop applies
/// `velocity` to the position and resolves collisions. Per tick, callers
/// run `update_vertical_movement` first, integrate and resolve outside,
/// then `animate` for rendering.
///
/// Resting on ground is not a separate flag. External collision
/// resolution pins `velocity.y` back to `gravity` every tick the actor
/// stands on something, so `is_falling` (strictly greater) stays false.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Directional intent, written by the input collaborator; the
    /// vertical flags are rederived from velocity each physics update.
    pub moving: Moving,
    /// Last horizontal facing, for sprite mirroring.
    pub last_dir: Direction,
    /// Current velocity in pixels per tick. Y grows downward.
    pub velocity: Vec2,
    air_ticks: u32,
    animations: AnimationManager,
    pos: Vec2,
    size: Option<Vec2>,
    config: ActorConfig,
}

impl Actor {
    pub fn new(config: ActorConfig) -> Self {
        Self {
            moving: Moving::default(),
            last_dir: Direction::default(),
            velocity: Vec2::ZERO,
            air_ticks: 0,
            animations: AnimationManager::new(),
            pos: Vec2::ZERO,
            size: None,
            config,
        }
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    /// Apply gravity and rederive the vertical movement flags.
    /// Call exactly once per tick, before position integration.
    pub fn update_vertical_movement(&mut self) {
        self.velocity.y = (self.velocity.y + self.config.gravity).min(self.config.max_fall_speed);
        self.moving.down = self.velocity.y > 0.0;
        self.moving.up = self.velocity.y <= 0.0;
        if self.is_falling() {
            self.air_ticks += 1;
        } else {
            self.air_ticks = 0;
        }
    }

    /// Whether the actor is truly airborne. Strictly greater: the steady
    /// resting state, where collision resolution re-pins `velocity.y`
    /// to `gravity` each tick, does not count as falling.
    pub fn is_falling(&self) -> bool {
        self.velocity.y > self.config.gravity
    }

    /// Consecutive ticks spent airborne. Resets to zero on ground
    /// contact. Extension point for coyote-time or jump buffering; no
    /// such policy is applied here.
    pub fn air_ticks(&self) -> u32 {
        self.air_ticks
    }

    /// Launch upward at full jump force. Callers decide when a jump is
    /// allowed; this does not check for ground contact.
    pub fn jump(&mut self) {
        self.velocity.y = -self.config.jump_force;
    }

    /// Register an animation on the owned manager.
    /// See [`AnimationManager::add_animation`].
    pub fn add_animation(&mut self, name: impl Into<String>, frames: Vec<Frame>, frame_scale: u32) {
        self.animations.add_animation(name, frames, frame_scale);
    }

    /// Read-only access to the owned animation manager.
    pub fn animations(&self) -> &AnimationManager {
        &self.animations
    }

    /// Pull the next frame of `name` for this tick.
    ///
    /// The first frame ever pulled sizes the bounding box from its
    /// dimensions. The box is never resized afterwards: animations
    /// sharing an actor are expected to share frame dimensions.
    pub fn animate(&mut self, name: &str) -> Result<&Frame, MissingAnimation> {
        let frame = self.animations.next(Some(name))?;
        if self.size.is_none() {
            self.size = Some(frame.size());
        }
        Ok(frame)
    }

    /// The frame to draw this tick: a horizontally mirrored copy when
    /// facing left, an unmirrored copy otherwise. Computed fresh per
    /// call, never cached. `None` until a frame has been pulled via
    /// [`Actor::animate`].
    pub fn surf_to_blit(&self) -> Option<Frame> {
        let frame = self.animations.current_frame()?;
        Some(if self.last_dir == Direction::Left {
            frame.mirror_horizontal()
        } else {
            frame.clone()
        })
    }

    /// The occupied box. `None` until the first `animate` call sizes it.
    pub fn rect(&self) -> Option<Rect> {
        self.size.map(|size| Rect::from_pos_size(self.pos, size))
    }

    // Position accessors pass straight through to the box's top-left
    // corner. Nothing is validated or constrained: collision resolution
    // is entirely the caller's responsibility.

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y;
    }
}
