//! Hand-angle computation.
//!
//! Pure functions mapping calendar fields to rotation angles in degrees,
//! measured clockwise from 12 o'clock and wrapped to `[0, 360)`.

use chrono::{NaiveTime, Timelike};

use zurvan_engine::coords::Vec2;

/// Rotation angles for the three hands, in degrees clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Hour-hand angle. The minute term gives continuous motion across the hour.
#[inline]
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    (((hour % 12) * 30) as f32 + minute as f32 / 2.0) % 360.0
}

/// Minute-hand angle: 6° per minute.
#[inline]
pub fn minute_angle(minute: u32) -> f32 {
    ((minute * 6) % 360) as f32
}

/// Second-hand angle: 6° per second.
#[inline]
pub fn second_angle(second: u32) -> f32 {
    ((second * 6) % 360) as f32
}

/// Derives all three hand angles from a time of day.
pub fn hand_angles(t: NaiveTime) -> HandAngles {
    HandAngles {
        hour: hour_angle(t.hour(), t.minute()),
        minute: minute_angle(t.minute()),
        second: second_angle(t.second()),
    }
}

/// Unit vector pointing from the dial center toward `angle_deg`, where 0°
/// is 12 o'clock and angles grow clockwise (+Y down on screen).
#[inline]
pub fn direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    #[test]
    fn three_o_clock() {
        let a = hand_angles(t(3, 0, 0));
        assert_eq!(a, HandAngles { hour: 90.0, minute: 0.0, second: 0.0 });
    }

    #[test]
    fn half_past_six() {
        let a = hand_angles(t(6, 30, 0));
        assert_eq!(a.hour, 195.0); // 6*30 + 30/2
        assert_eq!(a.minute, 180.0);
        assert_eq!(a.second, 0.0);
    }

    #[test]
    fn forty_five_seconds_past_midnight() {
        let a = hand_angles(t(0, 0, 45));
        assert_eq!(a, HandAngles { hour: 0.0, minute: 0.0, second: 270.0 });
    }

    #[test]
    fn one_second_to_noon_stays_in_range() {
        let a = hand_angles(t(11, 59, 59));
        assert_eq!(a.hour, 359.5); // 11*30 + 59/2
        assert_eq!(a.minute, 354.0);
        assert_eq!(a.second, 354.0);

        for v in [a.hour, a.minute, a.second] {
            assert!((0.0..360.0).contains(&v));
        }
    }

    #[test]
    fn afternoon_hours_wrap_to_twelve_hour_dial() {
        assert_eq!(hour_angle(15, 0), hour_angle(3, 0));
        assert_eq!(hour_angle(23, 59), 11.0 * 30.0 + 29.5);
    }

    #[test]
    fn angles_are_deterministic() {
        let time = t(9, 41, 7);
        let a = hand_angles(time);
        let b = hand_angles(time);
        assert_eq!(a, b);
        assert_eq!(a.hour.to_bits(), b.hour.to_bits());
        assert_eq!(a.minute.to_bits(), b.minute.to_bits());
        assert_eq!(a.second.to_bits(), b.second.to_bits());
    }

    #[test]
    fn direction_hits_cardinal_points() {
        let close = |v: Vec2, x: f32, y: f32| (v.x - x).abs() < 1e-6 && (v.y - y).abs() < 1e-6;

        assert!(close(direction(0.0), 0.0, -1.0)); // 12 o'clock: up
        assert!(close(direction(90.0), 1.0, 0.0)); // 3 o'clock: right
        assert!(close(direction(180.0), 0.0, 1.0)); // 6 o'clock: down
        assert!(close(direction(270.0), -1.0, 0.0)); // 9 o'clock: left
    }
}
