//! Pointer-driven micro-interactions. All functions are stateless: they map a
//! pointer position and an element's bounding box onto a transform.

use crate::animator::Transform;
use crate::constants::*;
use crate::easing::lerp;

/// Viewport-relative bounding box (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Button drifting toward the pointer, slightly enlarged.
pub fn magnetic_pull(rect: &Rect, pointer_x: f64, pointer_y: f64) -> Transform {
    let (cx, cy) = rect.center();
    Transform {
        translate_x: (pointer_x - cx) * MAGNETIC_PULL,
        translate_y: (pointer_y - cy) * MAGNETIC_PULL,
        scale: MAGNETIC_SCALE,
        rotate_deg: 0.0,
    }
}

/// Card rotation in degrees about the X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lift_px: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        lift_px: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, self.lift_px
        )
    }
}

pub fn tilt(rect: &Rect, pointer_x: f64, pointer_y: f64) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::FLAT;
    }
    let (cx, cy) = rect.center();
    let dx = ((pointer_x - cx) / (rect.width / 2.0)).clamp(-1.0, 1.0);
    // pointer above centre tips the card toward the viewer
    let dy = ((cy - pointer_y) / (rect.height / 2.0)).clamp(-1.0, 1.0);
    Tilt {
        rotate_x: TILT_MAX_DEG * dy,
        rotate_y: TILT_MAX_DEG * dx,
        lift_px: TILT_LIFT_PX,
    }
}

/// Ripple overlay geometry, relative to the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: &Rect, click_x: f64, click_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: click_x - rect.left - size / 2.0,
            top: click_y - rect.top - size / 2.0,
        }
    }

    /// Scale and opacity at eased progress `t`: grows 0 → 2× while fading out.
    pub fn frame(t: f64) -> (f64, f64) {
        (
            lerp(0.0, RIPPLE_MAX_SCALE, t),
            lerp(RIPPLE_START_OPACITY, 0.0, t),
        )
    }
}

/// Keys that activate a focused link or button.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
