//! Render-ready view of one simulation step

use crate::{Ball, Geometry, Side, Status};

/// Ball placement as the display surface needs it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    /// Top-left corner of the ball's bounding box
    pub left: f32,
    pub top: f32,
    pub diameter: f32,
    pub radius: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: BallView,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    /// Ball speed rounded for display
    pub speed: u32,
    pub bounces: u32,
    pub status: Status,
}

impl Snapshot {
    pub fn capture(ball: &Ball, geometry: &Geometry, bounces: u32, status: Status) -> Self {
        let radius = geometry.ball_radius;
        Self {
            ball: BallView {
                left: ball.pos.x - radius,
                top: ball.pos.y - radius,
                diameter: radius * 2.0,
                radius,
                visible: status.is_running(),
            },
            left_paddle: paddle_view(geometry, Side::Left),
            right_paddle: paddle_view(geometry, Side::Right),
            speed: ball.speed.round().max(0.0) as u32,
            bounces,
            status,
        }
    }

    pub fn paddle(&self, side: Side) -> &PaddleView {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}

fn paddle_view(geometry: &Geometry, side: Side) -> PaddleView {
    PaddleView {
        left: geometry.paddle_x(side),
        top: geometry.paddle_top,
        width: geometry.paddle_width,
        height: geometry.paddle_height,
    }
}

/// Display surface fed once per frame
///
/// Implementations must finish drawing before the next frame is scheduled.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}
