use glam::Vec2;

use crate::{Geometry, RandomSource};

/// Which wall a paddle stands in front of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// Paddle component - both paddles read their height from [`PaddleTrack`]
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Ball component
///
/// `speed` tracks the velocity magnitude so rebounds can reuse it without
/// recomputing the vector length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Place the ball at `center` heading in a uniformly random direction
    pub fn launch(center: Vec2, speed: f32, rng: &mut impl RandomSource) -> Self {
        let angle = rng.unit() * std::f32::consts::TAU;
        Self {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            speed,
        }
    }

    /// Point the velocity at `degrees` keeping the tracked speed.
    /// Screen space: positive y is down.
    pub fn set_heading_degrees(&mut self, degrees: f32) {
        let radians = degrees.to_radians();
        self.vel = Vec2::new(radians.cos(), radians.sin()) * self.speed;
    }

    /// Add `increment` to the speed keeping the heading
    pub fn increase_speed(&mut self, increment: f32) {
        let current = self.vel.length();
        if current == 0.0 {
            self.speed += increment;
            return;
        }

        let new_speed = current + increment;
        self.vel *= new_speed / current;
        self.speed = new_speed;
    }

    /// Heading in degrees, normalized to `[0, 360)`
    pub fn heading_degrees(&self) -> f32 {
        self.vel.y.atan2(self.vel.x).to_degrees().rem_euclid(360.0)
    }
}

/// Shared vertical position of both paddles
///
/// The top edge is stored as a fraction of arena height so that a resize keeps
/// the paddles at the same relative place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleTrack {
    pub ratio: f32,
}

/// Keyboard movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl PaddleTrack {
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    /// Move both paddles by a fixed pixel step
    pub fn nudge(&mut self, dir: Direction, geometry: &Geometry, step: f32) {
        let top = geometry.paddle_top;
        let moved = match dir {
            Direction::Up => top - step,
            Direction::Down => top + step,
        };
        self.store(moved, geometry);
    }

    /// Centre both paddles on an arena-relative pointer y
    pub fn point_at(&mut self, y: f32, geometry: &Geometry) {
        self.store(y - geometry.paddle_height / 2.0, geometry);
    }

    /// Pull the stored ratio back inside the arena
    pub fn clamp_to(&mut self, geometry: &Geometry) {
        self.store(geometry.paddle_top, geometry);
    }

    fn store(&mut self, top: f32, geometry: &Geometry) {
        if geometry.height <= 0.0 {
            return;
        }
        self.ratio = geometry.clamp_paddle_top(top) / geometry.height;
    }
}
