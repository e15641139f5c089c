/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders. A non-valid viewport (zero, negative, or
/// non-finite) means there is nothing to draw.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_viewport() {
        assert!(Viewport::new(300.0, 300.0).is_valid());
    }

    #[test]
    fn degenerate_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 300.0).is_valid());
        assert!(!Viewport::new(300.0, 0.0).is_valid());
        assert!(!Viewport::new(-1.0, 300.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 300.0).is_valid());
    }
}
