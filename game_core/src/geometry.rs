use glam::Vec2;

use crate::{Config, Side};

/// Measured size of the game container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Box around a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Pixel geometry for one frame
///
/// Every size is a reference constant multiplied by `scale`, which depends on
/// the container width only. The arena height is the container height as
/// measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    /// Top edge shared by both paddles, already clamped into the arena
    pub paddle_top: f32,
}

impl Geometry {
    pub fn compute(viewport: Viewport, config: &Config, paddle_ratio: f32) -> Self {
        let scale = viewport.width / config.ref_width;
        let paddle_width = config.paddle_width * scale;
        let paddle_height = config.paddle_height * scale;
        let offset = config.paddle_offset * scale;

        Self {
            scale,
            width: viewport.width,
            height: viewport.height,
            paddle_width,
            paddle_height,
            ball_radius: config.ball_radius * scale,
            left_paddle_x: offset,
            right_paddle_x: viewport.width - offset - paddle_width,
            paddle_top: clamp_top(paddle_ratio * viewport.height, viewport.height, paddle_height),
        }
    }

    /// Clamp a paddle top edge into `[0, height - paddle_height]`
    pub fn clamp_paddle_top(&self, top: f32) -> f32 {
        clamp_top(top, self.height, self.paddle_height)
    }

    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    pub fn paddle_rect(&self, side: Side) -> Aabb {
        Aabb::from_origin_size(
            Vec2::new(self.paddle_x(side), self.paddle_top),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

fn clamp_top(top: f32, height: f32, paddle_height: f32) -> f32 {
    top.min(height - paddle_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Geometry {
        Geometry::compute(Viewport::new(800.0, 600.0), &Config::new(), 260.0 / 600.0)
    }

    #[test]
    fn test_reference_resolution_is_unscaled() {
        let geometry = reference();
        assert_eq!(geometry.scale, 1.0);
        assert_eq!(geometry.paddle_height, 80.0);
        assert_eq!(geometry.paddle_width, 10.0);
        assert_eq!(geometry.ball_radius, 10.0);
        assert_eq!(geometry.left_paddle_x, 10.0);
        assert_eq!(geometry.right_paddle_x, 780.0);
        assert!((geometry.paddle_top - 260.0).abs() < 1e-3);
    }

    #[test]
    fn test_sizes_scale_linearly_with_width() {
        let config = Config::new();
        for width in [400.0, 800.0, 1000.0, 1600.0] {
            let geometry = Geometry::compute(Viewport::new(width, 600.0), &config, 0.0);
            let scale = width / 800.0;
            assert!((geometry.scale - scale).abs() < 1e-6);
            assert!((geometry.paddle_height - 80.0 * scale).abs() < 1e-4);
            assert!((geometry.paddle_width - 10.0 * scale).abs() < 1e-4);
            assert!((geometry.ball_radius - 10.0 * scale).abs() < 1e-4);
            assert!((geometry.left_paddle_x - 10.0 * scale).abs() < 1e-4);
            assert!(
                (geometry.right_paddle_x - (width - 20.0 * scale)).abs() < 1e-3,
                "Right paddle keeps the same scaled offset from the wall"
            );
        }
    }

    #[test]
    fn test_height_does_not_affect_scale() {
        let config = Config::new();
        let tall = Geometry::compute(Viewport::new(800.0, 1200.0), &config, 0.5);
        assert_eq!(tall.scale, 1.0);
        assert_eq!(tall.height, 1200.0);
        assert!((tall.paddle_top - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_top_is_clamped() {
        let config = Config::new();
        let low = Geometry::compute(Viewport::new(800.0, 600.0), &config, 0.99);
        assert_eq!(low.paddle_top, 520.0);
        let high = Geometry::compute(Viewport::new(800.0, 600.0), &config, -0.2);
        assert_eq!(high.paddle_top, 0.0);
    }

    #[test]
    fn test_paddle_top_in_arena_shorter_than_paddle() {
        let geometry = Geometry::compute(Viewport::new(800.0, 50.0), &Config::new(), 0.5);
        assert_eq!(geometry.paddle_top, 0.0);
    }

    #[test]
    fn test_paddle_rects() {
        let geometry = reference();
        let left = geometry.paddle_rect(Side::Left);
        assert_eq!(left.min.x, 10.0);
        assert_eq!(left.max.x - left.min.x, 10.0);
        assert_eq!(left.max.y - left.min.y, 80.0);
        let right = geometry.paddle_rect(Side::Right);
        assert_eq!(right.min.x, 780.0);
        assert_eq!(right.max.x, 790.0);
    }

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }
}
