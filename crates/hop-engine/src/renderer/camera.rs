use glam::Vec2;

use crate::core::rect::Rect;

/// Scroll camera that trails a tracked target with first-order lag.
///
/// The position is the smoothed top-left offset of the viewport in world
/// space. Each `update` moves it a `1 / follow_buffer` fraction of the
/// remaining distance toward centering the target, so the camera
/// approaches the target asymptotically and may never exactly reach it.
/// Renderers only consume the truncated integers from `int_x`/`int_y`,
/// which do converge.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Smoothed viewport offset in world space.
    pub pos: Vec2,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Whether to track the target on the X axis.
    pub follow_x: bool,
    /// Whether to track the target on the Y axis.
    pub follow_y: bool,
    follow_buffer: f32,
}

impl Camera {
    /// Camera at the origin following both axes with no lag.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            width,
            height,
            follow_x: true,
            follow_y: true,
            follow_buffer: 1.0,
        }
    }

    /// Set the follow lag divisor: 1 snaps instantly, larger values
    /// converge slower. Anything below 1 (zero included) is treated
    /// as 1, since a divisor in (0, 1) would overshoot the target.
    pub fn with_follow_buffer(mut self, buffer: f32) -> Self {
        self.set_follow_buffer(buffer);
        self
    }

    /// Restrict following to one axis.
    pub fn with_follow_axes(mut self, follow_x: bool, follow_y: bool) -> Self {
        self.follow_x = follow_x;
        self.follow_y = follow_y;
        self
    }

    pub fn set_follow_buffer(&mut self, buffer: f32) {
        if buffer < 1.0 {
            log::debug!("camera follow_buffer {buffer} treated as 1 (instant snap)");
        }
        self.follow_buffer = buffer.max(1.0);
    }

    pub fn follow_buffer(&self) -> f32 {
        self.follow_buffer
    }

    /// Move toward centering `target` in the viewport.
    /// Call once per tick, after collision resolution has corrected the
    /// target's position.
    pub fn update(&mut self, target: &Rect) {
        let center = target.center();
        if self.follow_x {
            self.pos.x += (center.x - self.pos.x - self.width / 2.0) / self.follow_buffer;
        }
        if self.follow_y {
            self.pos.y += (center.y - self.pos.y - self.height / 2.0) / self.follow_buffer;
        }
    }

    /// Offset truncated toward zero, for integer tile-grid math.
    pub fn int_x(&self) -> i32 {
        self.pos.x as i32
    }

    /// Offset truncated toward zero, for integer tile-grid math.
    pub fn int_y(&self) -> i32 {
        self.pos.y as i32
    }
}
