//! Pure mapping from a drag offset to the card's visual transform.

/// Pointer delta since drag start, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

impl DragOffset {
    pub const ORIGIN: DragOffset = DragOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Visual transform for the top card, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation_deg: f32,
}

/// Rotation reached at the edge of the interpolation range.
pub const MAX_ROTATION_DEG: f32 = 30.0;

/// The rotation interpolation spans `-1.5..=1.5` viewport widths.
pub const ROTATION_SPAN_FACTOR: f32 = 1.5;

/// Map a drag offset to the card's transform.
///
/// Translation follows the offset directly. Rotation interpolates linearly
/// from `-MAX_ROTATION_DEG` at `-1.5 * viewport_width` through zero to
/// `+MAX_ROTATION_DEG` at `+1.5 * viewport_width`, clamped beyond the
/// endpoints. Pure and side-effect free: safe to call once per frame.
pub fn card_transform(offset: DragOffset, viewport_width: f32) -> CardTransform {
    let span = ROTATION_SPAN_FACTOR * viewport_width;
    let rotation_deg = if span > 0.0 {
        (offset.x / span).clamp(-1.0, 1.0) * MAX_ROTATION_DEG
    } else {
        0.0
    };

    CardTransform {
        translate_x: offset.x,
        translate_y: offset.y,
        rotation_deg,
    }
}
