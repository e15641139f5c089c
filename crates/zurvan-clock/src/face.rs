//! Dial composition: the circular background and the 60 tick marks.

use zurvan_engine::coords::{Vec2, Viewport};
use zurvan_engine::paint::Color;
use zurvan_engine::scene::{DrawList, ZIndex};

use crate::angles;

/// Z-layers for the complete scene, back to front.
pub(crate) const Z_DIAL: ZIndex = ZIndex::new(0);
pub(crate) const Z_TICKS: ZIndex = ZIndex::new(1);
pub(crate) const Z_HOUR: ZIndex = ZIndex::new(2);
pub(crate) const Z_MINUTE: ZIndex = ZIndex::new(3);
pub(crate) const Z_SECOND: ZIndex = ZIndex::new(4);

pub const TICK_COUNT: u32 = 60;

/// Every 5th tick marks an hour position and is rendered larger.
pub const MAJOR_EVERY: u32 = 5;

/// Tick marks sit `(side - TICK_INSET) / 2` from the dial center.
const TICK_INSET: f32 = 50.0;

const MAJOR_SIZE: Vec2 = Vec2::new(5.0, 25.0);
const MINOR_SIZE: Vec2 = Vec2::new(2.0, 5.0);

const DIAL_COLOR: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
const TICK_COLOR: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

/// One of the 60 fixed marks around the dial, identified by index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TickMark {
    pub index: u32,
}

impl TickMark {
    #[inline]
    pub fn is_major(self) -> bool {
        self.index % MAJOR_EVERY == 0
    }

    /// Mark dimensions (width across, height along the radial direction).
    #[inline]
    pub fn size(self) -> Vec2 {
        if self.is_major() { MAJOR_SIZE } else { MINOR_SIZE }
    }

    /// Angular position: 6° per index, clockwise from 12 o'clock.
    #[inline]
    pub fn angle_deg(self) -> f32 {
        self.index as f32 * 6.0
    }
}

/// All 60 tick marks in index order.
pub fn tick_marks() -> impl Iterator<Item = TickMark> {
    (0..TICK_COUNT).map(|index| TickMark { index })
}

/// Center of the drawing region.
#[inline]
pub(crate) fn center_of(region: Viewport) -> Vec2 {
    Vec2::new(region.width / 2.0, region.height / 2.0)
}

/// Dial diameter: the region's smaller side, so the face stays circular on
/// non-square regions.
#[inline]
pub(crate) fn dial_side(region: Viewport) -> f32 {
    region.width.min(region.height)
}

/// Pushes the dial background and tick marks.
///
/// A degenerate region (zero or negative) pushes nothing; an empty draw is
/// the defined behavior, not an error.
pub fn compose(list: &mut DrawList, region: Viewport) {
    if !region.is_valid() {
        return;
    }

    let center = center_of(region);
    let side = dial_side(region);

    list.push_solid_circle(Z_DIAL, center, side / 2.0, DIAL_COLOR);

    let radial = (side - TICK_INSET) / 2.0;
    for mark in tick_marks() {
        let angle = mark.angle_deg();
        let mark_center = center + angles::direction(angle) * radial;
        list.push_solid_rect(Z_TICKS, mark_center, mark.size(), angle, TICK_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zurvan_engine::scene::DrawCmd;

    const REGION: Viewport = Viewport::new(300.0, 300.0);

    #[test]
    fn exactly_sixty_marks_twelve_major() {
        let marks: Vec<TickMark> = tick_marks().collect();
        assert_eq!(marks.len(), 60);

        let majors: Vec<u32> = marks
            .iter()
            .filter(|m| m.is_major())
            .map(|m| m.index)
            .collect();
        assert_eq!(majors.len(), 12);
        assert_eq!(majors, (0..60).step_by(5).collect::<Vec<u32>>());
    }

    #[test]
    fn major_and_minor_dimensions() {
        assert_eq!(TickMark { index: 0 }.size(), Vec2::new(5.0, 25.0));
        assert_eq!(TickMark { index: 1 }.size(), Vec2::new(2.0, 5.0));
        assert_eq!(TickMark { index: 55 }.size(), Vec2::new(5.0, 25.0));
    }

    #[test]
    fn marks_are_six_degrees_apart() {
        for mark in tick_marks() {
            assert_eq!(mark.angle_deg(), mark.index as f32 * 6.0);
        }
    }

    #[test]
    fn compose_pushes_dial_then_sixty_ticks() {
        let mut list = DrawList::new();
        compose(&mut list, REGION);

        let circles = list
            .items()
            .iter()
            .filter(|it| matches!(it.cmd, DrawCmd::Circle(_)))
            .count();
        let rects = list
            .items()
            .iter()
            .filter(|it| matches!(it.cmd, DrawCmd::Rect(_)))
            .count();

        assert_eq!(circles, 1);
        assert_eq!(rects, 60);
    }

    #[test]
    fn dial_fills_the_region() {
        let mut list = DrawList::new();
        compose(&mut list, REGION);

        let DrawCmd::Circle(dial) = &list.items()[0].cmd else {
            panic!("first command should be the dial circle");
        };
        assert_eq!(dial.center, Vec2::new(150.0, 150.0));
        assert_eq!(dial.radius, 150.0);
    }

    #[test]
    fn ticks_sit_at_the_documented_radius() {
        let mut list = DrawList::new();
        compose(&mut list, REGION);

        let expected = (300.0 - 50.0) / 2.0;
        let center = Vec2::new(150.0, 150.0);

        for it in list.items().iter().skip(1) {
            let DrawCmd::Rect(rect) = &it.cmd else {
                panic!("expected tick rect");
            };
            let d = rect.center - center;
            let dist = (d.x * d.x + d.y * d.y).sqrt();
            assert!((dist - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_region_composes_nothing() {
        let mut list = DrawList::new();
        compose(&mut list, Viewport::new(0.0, 0.0));
        assert!(list.is_empty());

        compose(&mut list, Viewport::new(-300.0, 300.0));
        assert!(list.is_empty());
    }
}
