//! Viewport context
//!
//! Carries the pixel dimensions of the surface the pointer events refer to.
//! It is passed to the controller explicitly instead of being read from a
//! shared canvas.

use glam::Vec2;

use crate::error::{ArcballError, ArcballResult};

/// Pixel dimensions of the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> ArcballResult<Self> {
        if width == 0 || height == 0 {
            return Err(ArcballError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Center of the viewport in pixels
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    /// Map pixel coordinates (origin top-left, y down) to normalized
    /// device coordinates in `[-1, 1]` with y pointing up.
    ///
    /// Points outside the viewport map outside the unit square.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            2.0 * x / self.width as f32 - 1.0,
            1.0 - 2.0 * y / self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Viewport::new(0, 700),
            Err(ArcballError::InvalidViewport {
                width: 0,
                height: 700
            })
        );
        assert!(Viewport::new(700, 0).is_err());
    }

    #[test]
    fn ndc_corners_and_center() {
        let viewport = Viewport::new(700, 700).unwrap();
        assert_eq!(viewport.to_ndc(350.0, 350.0), Vec2::ZERO);
        assert_eq!(viewport.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(700.0, 700.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn aspect_and_center() {
        let viewport = Viewport::new(1280, 720).unwrap();
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(viewport.center(), Vec2::new(640.0, 360.0));
    }
}
