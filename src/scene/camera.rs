//! Projection and per-frame transform uniforms

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use super::ArcballController;
use crate::viewport::Viewport;

/// Camera projection type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::perspective(60.0, 1.0, 0.1, 100.0)
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Perspective {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn orthographic(width: f32, height: f32, near: f32, far: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Projection::Orthographic {
            left: -half_w,
            right: half_w,
            bottom: -half_h,
            top: half_h,
            near,
            far,
        }
    }

    /// Default perspective matched to a viewport's aspect ratio
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut projection = Projection::default();
        projection.set_aspect(viewport.aspect());
        projection
    }

    pub fn matrix(&self) -> Mat4 {
        match self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(*fov_y, *aspect, *near, *far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh(*left, *right, *bottom, *top, *near, *far),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if let Projection::Perspective { aspect: a, .. } = self {
            *a = aspect;
        }
    }
}

/// Transform uniform block (`u_model`, `u_view`, `u_projection`, `u_viewPos`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_pos: Vec4,
}

impl TransformUniforms {
    /// Build the uniforms for the controller's current mode
    pub fn from_arcball(arcball: &ArcballController, projection: &Projection) -> Self {
        let frame = arcball.frame_matrices();
        let eye = arcball.view_position();
        Self {
            model: frame.model,
            view: frame.view,
            projection: projection.matrix(),
            view_pos: eye.extend(1.0),
        }
    }
}
