use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Paddle component - one per learning agent
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub agent: u8,  // 0 = left (agent 1), 1 = right (agent 2)
    pub x: f32,     // Left edge, fixed for the run
    pub y: f32,     // Top edge, clamped to arena
    pub vel_y: f32, // Pixels per tick applied on the next move
}

impl Paddle {
    pub fn new(agent: u8, x: f32, y: f32, vel_y: f32) -> Self {
        Self { agent, x, y, vel_y }
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - square, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Centered ball heading diagonally in a random quadrant
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vel = Vec2::new(sx, sy) * config.ball_speed;
        Self::new(config.ball_spawn(), vel, config.ball_size)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }
}

/// Axis-aligned rectangle in screen space (+y is down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
