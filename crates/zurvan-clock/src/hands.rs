//! Hand composition: three rotated rectangles anchored at the dial center.

use zurvan_engine::coords::{Vec2, Viewport};
use zurvan_engine::paint::Color;
use zurvan_engine::scene::{DrawList, ZIndex};

use crate::angles::{self, HandAngles};
use crate::face::{center_of, Z_HOUR, Z_MINUTE, Z_SECOND};

const HOUR_WIDTH: f32 = 10.0;
const MINUTE_WIDTH: f32 = 7.0;
const SECOND_WIDTH: f32 = 1.0;

const MINUTE_OPACITY: f32 = 0.5;

/// Fixed drawing parameters for one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    /// Nominal length; the visible shaft extends half of this from center.
    pub length: f32,
    pub width: f32,
    pub color: Color,
}

/// Styles for hour, minute, and second hand, in stacking order.
///
/// Lengths follow the region: hour at 0.7 × height, minute at 0.8 × width,
/// second at the full width.
pub fn styles(region: Viewport) -> [HandStyle; 3] {
    [
        HandStyle {
            length: 0.7 * region.height,
            width: HOUR_WIDTH,
            color: Color::from_straight(0.0, 0.0, 0.0, 1.0),
        },
        HandStyle {
            length: 0.8 * region.width,
            width: MINUTE_WIDTH,
            color: Color::from_straight(0.0, 0.0, 0.0, MINUTE_OPACITY),
        },
        HandStyle {
            length: region.width,
            width: SECOND_WIDTH,
            color: Color::from_straight(1.0, 0.0, 0.0, 1.0),
        },
    ]
}

/// Pushes the three hands, each exactly once, hour lowest and second on top.
///
/// A degenerate region pushes nothing.
pub fn compose(list: &mut DrawList, region: Viewport, angles: HandAngles) {
    if !region.is_valid() {
        return;
    }

    let center = center_of(region);
    let [hour, minute, second] = styles(region);

    push_hand(list, Z_HOUR, center, &hour, angles.hour);
    push_hand(list, Z_MINUTE, center, &minute, angles.minute);
    push_hand(list, Z_SECOND, center, &second, angles.second);
}

/// One hand: a rect of height `length / 2`, its base at the dial center,
/// rotated clockwise by `angle_deg` from 12 o'clock.
///
/// The rect's own center therefore sits `length / 4` from the dial center
/// along the hand direction.
fn push_hand(list: &mut DrawList, z: ZIndex, center: Vec2, style: &HandStyle, angle_deg: f32) {
    let shaft_center = center + angles::direction(angle_deg) * (style.length / 4.0);
    let size = Vec2::new(style.width, style.length / 2.0);
    list.push_solid_rect(z, shaft_center, size, angle_deg, style.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use zurvan_engine::scene::DrawCmd;

    const REGION: Viewport = Viewport::new(300.0, 300.0);

    fn composed(angles: HandAngles) -> DrawList {
        let mut list = DrawList::new();
        compose(&mut list, REGION, angles);
        list
    }

    #[test]
    fn style_table_matches_the_design() {
        let [hour, minute, second] = styles(REGION);

        assert_eq!(hour.length, 210.0); // 0.7 × height
        assert_eq!(hour.width, 10.0);
        assert_eq!(hour.color.to_straight(), (0.0, 0.0, 0.0, 1.0));

        assert_eq!(minute.length, 240.0); // 0.8 × width
        assert_eq!(minute.width, 7.0);
        assert_eq!(minute.color.to_straight().3, 0.5);

        assert_eq!(second.length, 300.0); // full width
        assert_eq!(second.width, 1.0);
        assert_eq!(second.color.to_straight(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn three_hands_one_rect_each() {
        let list = composed(HandAngles { hour: 0.0, minute: 0.0, second: 0.0 });
        assert_eq!(list.items().len(), 3);
        assert!(list
            .items()
            .iter()
            .all(|it| matches!(it.cmd, DrawCmd::Rect(_))));
    }

    #[test]
    fn hand_at_noon_points_straight_up() {
        let list = composed(HandAngles { hour: 0.0, minute: 0.0, second: 0.0 });

        let DrawCmd::Rect(hour) = &list.items()[0].cmd else {
            panic!("expected hour hand rect");
        };

        // Shaft center is length/4 above the dial center, shaft is length/2 tall.
        assert_eq!(hour.center, Vec2::new(150.0, 150.0 - 210.0 / 4.0));
        assert_eq!(hour.size, Vec2::new(10.0, 105.0));
        assert_eq!(hour.rotation_deg, 0.0);
    }

    #[test]
    fn hand_at_three_extends_to_the_right() {
        let list = composed(HandAngles { hour: 90.0, minute: 0.0, second: 0.0 });

        let DrawCmd::Rect(hour) = &list.items()[0].cmd else {
            panic!("expected hour hand rect");
        };

        assert!((hour.center.x - (150.0 + 210.0 / 4.0)).abs() < 1e-3);
        assert!((hour.center.y - 150.0).abs() < 1e-3);
        assert_eq!(hour.rotation_deg, 90.0);
    }

    #[test]
    fn stacking_order_puts_second_hand_on_top() {
        let mut list = composed(HandAngles { hour: 45.0, minute: 120.0, second: 300.0 });

        let zs: Vec<i32> = list.iter_in_paint_order().map(|it| it.key.z.0).collect();
        let mut sorted = zs.clone();
        sorted.sort();
        assert_eq!(zs, sorted);

        // Second hand (red) is the last painted item.
        let last = list.iter_in_paint_order().last().expect("three hands");
        let DrawCmd::Rect(rect) = &last.cmd else { panic!("expected rect") };
        assert_eq!(rect.color.to_straight(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn degenerate_region_composes_nothing() {
        let mut list = DrawList::new();
        compose(
            &mut list,
            Viewport::new(0.0, 0.0),
            HandAngles { hour: 0.0, minute: 0.0, second: 0.0 },
        );
        assert!(list.is_empty());
    }
}
