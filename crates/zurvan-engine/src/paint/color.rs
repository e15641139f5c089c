/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Correct blending with linear filtering (avoids fringes).
/// - Matches the GPU blending configuration used by the shape renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    ///
    /// This is the preferred constructor for user-facing colors: pass the
    /// fill color and an opacity, and the premultiplication is handled here.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_full_alpha_is_identity() {
        let c = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn straight_half_alpha_premultiplies_rgb() {
        let c = Color::from_straight(0.0, 0.0, 0.0, 0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 0.0));

        let w = Color::from_straight(1.0, 1.0, 1.0, 0.5);
        assert_eq!((w.r, w.g, w.b, w.a), (0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn to_straight_roundtrip() {
        let c = Color::from_straight(0.8, 0.4, 0.2, 0.5);
        let (r, g, b, a) = c.to_straight();
        assert!((r - 0.8).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn to_straight_zero_alpha_is_all_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
