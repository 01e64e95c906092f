//! Conversions between clock-face angles, touch points and mark indices.
//!
//! # Coordinate System
//!
//! Points live in the host view's local space:
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Clock angles are measured in degrees clockwise from 12 o'clock, so 0° is
//! the top of the face and 90° is 3 o'clock. Marks are laid out evenly
//! starting at the top, and a touch resolves to the nearest mark.
//!
//! # Example
//!
//! ```
//! use clockface::geometry::{mark_position, touch_to_mark_index};
//! use clockface::glam::Vec2;
//!
//! let center = Vec2::new(100.0, 100.0);
//! let three_oclock = mark_position(center, 80.0, 3, 12);
//! assert_eq!(touch_to_mark_index(three_oclock, center, 12), 3);
//! ```

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

/// Degrees spanned by one mark when `total_marks` marks share the face.
pub fn degrees_per_mark(total_marks: usize) -> f32 {
    360.0 / total_marks as f32
}

/// Converts a clockwise-from-top angle in degrees into the radians used for
/// placement.
///
/// Placement works counter-clockwise from the right, so the result carries a
/// quarter-turn offset and [`mark_position`] flips both axes when projecting.
pub fn to_radians_clockwise_from_top(degrees: f32) -> f32 {
    degrees.to_radians() + FRAC_PI_2
}

/// Returns the point at `radius` from `center` for mark `mark_index` of
/// `total_marks`.
///
/// Mark 0 is always directly above `center`.
pub fn mark_position(center: Vec2, radius: f32, mark_index: usize, total_marks: usize) -> Vec2 {
    let degrees = mark_index as f32 * degrees_per_mark(total_marks.max(1));
    point_at_angle(center, radius, degrees)
}

/// Returns the point at `radius` from `center` in the direction of a
/// clockwise-from-top angle.
pub fn point_at_angle(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let angle = to_radians_clockwise_from_top(degrees);
    center + radius * Vec2::new(-angle.cos(), -angle.sin())
}

/// Angle of `touch` around `center` in degrees clockwise from top, in
/// `[0, 360]`.
pub fn touch_angle(touch: Vec2, center: Vec2) -> f32 {
    let relative = touch - center;
    180.0 - relative.x.atan2(relative.y).to_degrees()
}

/// Resolves a touch to the index of the nearest of `total_marks` marks.
///
/// The result is always in `[0, total_marks - 1]`. Indices that fall
/// outside that range after quantization resolve to mark 0 rather than
/// wrapping modulo `total_marks`. A touch on the exact center reads as
/// 180° (`atan2(0, 0) == 0`) and lands on the 6 o'clock mark.
pub fn touch_to_mark_index(touch: Vec2, center: Vec2, total_marks: usize) -> usize {
    let relative = touch - center;
    if total_marks == 0 || !relative.is_finite() {
        return 0;
    }

    let increment = degrees_per_mark(total_marks);
    let mut angle = touch_angle(touch, center);
    // pulls float noise at the top of the face onto 12 o'clock
    if angle < 0.0 {
        angle = 0.0;
    }
    angle -= increment / 2.0;

    let index = (angle / increment).floor() as i64 + 1;
    if index < 0 || index > total_marks as i64 - 1 {
        0
    } else {
        index as usize
    }
}

/// Resolves a tapped hour mark into a 24-hour value, keeping the AM/PM half
/// of `current_hour`.
///
/// An index past the end of `hour_marks` falls back to the first mark.
pub fn resolve_hour(mark_index: usize, hour_marks: &[u8], current_hour: u8) -> u8 {
    let tapped = mark_at(hour_marks, mark_index, 12);
    let is_am = current_hour < 12;
    match (tapped % 12, is_am) {
        (0, true) => 0,
        (0, false) => 12,
        (hour, true) => hour,
        (hour, false) => hour + 12,
    }
}

/// Resolves a tapped minute mark into its literal minute value.
///
/// An index past the end of `minute_marks` falls back to the first mark.
pub fn resolve_minute(mark_index: usize, minute_marks: &[u8]) -> u8 {
    mark_at(minute_marks, mark_index, 0)
}

fn mark_at(marks: &[u8], index: usize, fallback: u8) -> u8 {
    marks
        .get(index)
        .or_else(|| marks.first())
        .copied()
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HOUR_MARKS;

    const CENTER: Vec2 = Vec2::new(100.0, 100.0);
    const VALID_MARK_COUNTS: [usize; 6] = [12, 60, 6, 4, 2, 1];

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn first_mark_is_above_center() {
        for total in VALID_MARK_COUNTS {
            assert_close(mark_position(CENTER, 80.0, 0, total), Vec2::new(100.0, 20.0));
        }
    }

    #[test]
    fn quarter_turn_lands_at_three_oclock() {
        assert_close(mark_position(CENTER, 80.0, 3, 12), Vec2::new(180.0, 100.0));
        assert_close(mark_position(CENTER, 80.0, 6, 12), Vec2::new(100.0, 180.0));
        assert_close(mark_position(CENTER, 80.0, 9, 12), Vec2::new(20.0, 100.0));
    }

    #[test]
    fn touch_angle_runs_clockwise_from_top() {
        assert!(touch_angle(Vec2::new(100.0, 20.0), CENTER).abs() < 1e-3);
        assert!((touch_angle(Vec2::new(180.0, 100.0), CENTER) - 90.0).abs() < 1e-3);
        assert!((touch_angle(Vec2::new(100.0, 180.0), CENTER) - 180.0).abs() < 1e-3);
        assert!((touch_angle(Vec2::new(20.0, 100.0), CENTER) - 270.0).abs() < 1e-3);
    }

    #[test]
    fn mark_positions_round_trip() {
        for total in VALID_MARK_COUNTS {
            for index in 0..total {
                let point = mark_position(CENTER, 80.0, index, total);
                assert_eq!(touch_to_mark_index(point, CENTER, total), index, "{index}/{total}");
            }
        }
    }

    #[test]
    fn touch_just_left_of_top_wraps_to_first_mark() {
        assert_eq!(touch_to_mark_index(Vec2::new(99.0, 20.0), CENTER, 12), 0);
        assert_eq!(touch_to_mark_index(Vec2::new(70.0, 20.0), CENTER, 12), 11);
    }

    #[test]
    fn marks_split_at_half_increment() {
        // halfway between 12 and 1 o'clock
        let boundary = point_at_angle(CENTER, 80.0, 15.0);
        assert_eq!(touch_to_mark_index(boundary + Vec2::new(-0.01, 0.0), CENTER, 12), 0);
        let past = point_at_angle(CENTER, 80.0, 16.0);
        assert_eq!(touch_to_mark_index(past, CENTER, 12), 1);
    }

    #[test]
    fn center_touch_reads_as_six_oclock() {
        for total in VALID_MARK_COUNTS {
            assert_eq!(touch_to_mark_index(CENTER, CENTER, total), total / 2, "{total}");
        }
        // no jump between the center and a point just below it
        let below = CENTER + Vec2::new(0.0, 1e-4);
        assert_eq!(touch_to_mark_index(below, CENTER, 12), 6);
        assert_eq!(touch_to_mark_index(CENTER, CENTER, 12), 6);
    }

    #[test]
    fn degenerate_inputs_resolve_to_zero() {
        assert_eq!(touch_to_mark_index(Vec2::new(f32::NAN, 3.0), CENTER, 12), 0);
        assert_eq!(touch_to_mark_index(Vec2::new(180.0, 100.0), CENTER, 0), 0);
    }

    #[test]
    fn single_mark_face_always_resolves_to_zero() {
        for degrees in [0.0, 45.0, 179.0, 181.0, 359.0] {
            let point = point_at_angle(CENTER, 50.0, degrees);
            assert_eq!(touch_to_mark_index(point, CENTER, 1), 0);
        }
    }

    #[test]
    fn resolve_hour_keeps_period() {
        assert_eq!(resolve_hour(0, &HOUR_MARKS, 9), 0);
        assert_eq!(resolve_hour(0, &HOUR_MARKS, 21), 12);
        assert_eq!(resolve_hour(5, &HOUR_MARKS, 14), 17);
        assert_eq!(resolve_hour(5, &HOUR_MARKS, 2), 5);
        assert_eq!(resolve_hour(11, &HOUR_MARKS, 12), 23);
        assert_eq!(resolve_hour(99, &HOUR_MARKS, 13), 12);
    }

    #[test]
    fn resolve_minute_is_literal() {
        let marks: Vec<u8> = (0..12).map(|i| i * 5).collect();
        assert_eq!(resolve_minute(3, &marks), 15);
        assert_eq!(resolve_minute(11, &marks), 55);
        assert_eq!(resolve_minute(12, &marks), 0);
        assert_eq!(resolve_minute(0, &[]), 0);
    }
}
