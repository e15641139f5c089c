use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rotated rectangle draw payload.
///
/// The rect is defined by its center and full size, rotated clockwise
/// around its center by `rotation_deg` degrees (0° = unrotated, +Y down).
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub rotation_deg: f32,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(center: Vec2, size: Vec2, rotation_deg: f32, color: Color) -> Self {
        Self { center, size, rotation_deg, color }
    }
}

impl DrawList {
    /// Records a rotated solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(
        &mut self,
        z: ZIndex,
        center: Vec2,
        size: Vec2,
        rotation_deg: f32,
        color: Color,
    ) {
        self.push(z, DrawCmd::Rect(RectCmd::new(center, size, rotation_deg, color)));
    }
}
