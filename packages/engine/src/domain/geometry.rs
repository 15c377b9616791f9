use crate::rigid_body::Pose;

/// Width/height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self { width: side, height: side }
    }

    /// Both sides finite and strictly positive
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// `self` when usable, otherwise `fallback`
    pub fn or(self, fallback: Size) -> Size {
        if self.is_usable() { self } else { fallback }
    }
}

/// Visual transform for one element: translate then rotate.
///
/// The element's top-left corner is placed so that its centre sits on the
/// body centre; rotation happens around the element's own centre
/// (CSS default `transform-origin`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Radians
    pub rotation: f32,
}

impl Transform {
    pub fn from_pose(pose: Pose, size: Size) -> Self {
        Self {
            translate_x: pose.position.x - size.width / 2.0,
            translate_y: pose.position.y - size.height / 2.0,
            rotation: pose.angle,
        }
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}rad)",
            self.translate_x, self.translate_y, self.rotation
        )
    }
}
