// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// Full rotation in degrees.
const FULL_TURN: i64 = 360;
/// Half rotation in degrees, also the wheel reversal offset.
const HALF_TURN: i64 = 180;
/// Largest steering rotation before reversing the drive is cheaper.
const QUARTER_TURN: i64 = 90;

/// Bound an angle on (-180, 180].
///
/// Any number of excess rotations is removed. Both -180 and 180 map
/// to 180 since the lower bound is exclusive.
pub fn bound_angle(angle: i64) -> i64 {
    // Remove excess rotations.
    let mut angle = angle % FULL_TURN;

    // Force positive.
    if angle < 0 {
        angle += FULL_TURN;
    }

    if angle > HALF_TURN {
        angle -= FULL_TURN;
    }

    angle
}

/// Return the sign of x (-1 or 1).
///
/// Zero is treated as positive.
#[inline]
pub fn sign(x: i64) -> i64 {
    if x < 0 {
        -1
    } else {
        1
    }
}

/// Optimized steering command for a single swerve module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SteerCommand {
    /// Target angle relative to the raw current angle.
    pub angle: i64,
    /// Rotation from the raw current angle to the target angle.
    pub delta: i64,
    /// Whether the drive motor must run in reverse.
    pub reversed: bool,
}

impl std::fmt::Display for SteerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Angle={}° Delta={}° Drive={}",
            self.angle,
            self.delta,
            if self.reversed { "reverse" } else { "forward" }
        )
    }
}

/// Calculate the steering command with the least wheel rotation.
///
/// A wheel at θ and a wheel at θ+180° with the drive reversed travel in the
/// same direction. The returned command picks whichever heading is closest
/// to the current heading, so the rotation never exceeds 90°.
///
/// The target angle is expressed on the raw current angle, not on the bounded
/// one. This keeps the result continuous for encoders that count full
/// rotations instead of wrapping.
pub fn steer_command(raw_target_angle: i64, raw_curr_angle: i64) -> SteerCommand {
    let target_angle = bound_angle(raw_target_angle);
    let curr_angle = bound_angle(raw_curr_angle);

    let mut delta = target_angle - curr_angle;
    if delta.abs() > HALF_TURN {
        // Case: delta(target=179, curr=-179) = -2.
        delta -= FULL_TURN * sign(delta);
    }

    let reversed = delta.abs() > QUARTER_TURN;
    if reversed {
        // Case: delta(target=135, curr=0) = -45.
        delta -= HALF_TURN * sign(delta);
    }

    SteerCommand {
        angle: raw_curr_angle + delta,
        delta,
        reversed,
    }
}

/// Optimize the steer rotation.
///
/// Returns the target angle expressed on the raw current angle. See
/// [`steer_command`] for the drive direction.
#[inline]
pub fn optimize_steer(raw_target_angle: i64, raw_curr_angle: i64) -> i64 {
    steer_command(raw_target_angle, raw_curr_angle).angle
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_bound_angle() {
        assert_eq!(bound_angle(0), 0);
        assert_eq!(bound_angle(180), 180);
        assert_eq!(bound_angle(-180), 180);
        assert_eq!(bound_angle(360), 0);
        assert_eq!(bound_angle(540), 180);
        assert_eq!(bound_angle(-540), 180);
        assert_eq!(bound_angle(181), -179);
        assert_eq!(bound_angle(-181), 179);
        assert_eq!(bound_angle(-179), -179);
        assert_eq!(bound_angle(719), -1);
    }

    #[test]
    fn test_bound_angle_extremes() {
        assert!(bound_angle(i64::MIN) > -180);
        assert!(bound_angle(i64::MIN) <= 180);
        assert!(bound_angle(i64::MAX) > -180);
        assert!(bound_angle(i64::MAX) <= 180);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(5), 1);
        assert_eq!(sign(-5), -1);
        assert_eq!(sign(0), 1);
        assert_eq!(sign(i64::MIN), -1);
    }

    #[test]
    fn test_optimize_steer() {
        assert_eq!(optimize_steer(179, -179), -181);
        assert_eq!(optimize_steer(135, 0), -45);
        assert_eq!(optimize_steer(0, 0), 0);
        assert_eq!(optimize_steer(90, -90), -90);
    }

    #[test]
    fn test_optimize_steer_keeps_rotation_count() {
        // Target 10° from a wheel that already turned two full rotations.
        assert_eq!(optimize_steer(10, 720), 730);
        assert_eq!(optimize_steer(10, -720), -710);
        // Reversal on top of the accumulated rotations.
        assert_eq!(optimize_steer(180, 725), 720);
    }

    #[test]
    fn test_steer_command() {
        let command = steer_command(135, 0);
        assert_eq!(command.angle, -45);
        assert_eq!(command.delta, -45);
        assert!(command.reversed);

        let command = steer_command(179, -179);
        assert_eq!(command.angle, -181);
        assert_eq!(command.delta, -2);
        assert!(!command.reversed);

        let command = steer_command(90, -90);
        assert_eq!(command.delta, 0);
        assert!(command.reversed);
    }

    #[test]
    fn test_steer_command_display() {
        assert_eq!(
            steer_command(135, 0).to_string(),
            "Angle=-45° Delta=-45° Drive=reverse"
        );
        assert_eq!(
            steer_command(10, 0).to_string(),
            "Angle=10° Delta=10° Drive=forward"
        );
    }

    proptest! {
        #[test]
        fn prop_bound_angle_range(angle in any::<i64>()) {
            let bounded = bound_angle(angle);
            prop_assert!(bounded > -180);
            prop_assert!(bounded <= 180);
        }

        #[test]
        fn prop_bound_angle_idempotent(angle in any::<i64>()) {
            prop_assert_eq!(bound_angle(bound_angle(angle)), bound_angle(angle));
        }

        #[test]
        fn prop_bound_angle_periodic(angle in -1_000_000_000i64..1_000_000_000, k in -1_000i64..1_000) {
            prop_assert_eq!(bound_angle(angle + 360 * k), bound_angle(angle));
        }

        #[test]
        fn prop_optimize_steer_rotation(
            raw_target in -1_000_000_000i64..1_000_000_000,
            raw_curr in -1_000_000_000i64..1_000_000_000,
        ) {
            prop_assert!((optimize_steer(raw_target, raw_curr) - raw_curr).abs() <= 90);
        }

        #[test]
        fn prop_optimize_steer_heading(
            raw_target in -1_000_000_000i64..1_000_000_000,
            raw_curr in -1_000_000_000i64..1_000_000_000,
        ) {
            let heading = bound_angle(optimize_steer(raw_target, raw_curr));
            prop_assert!(
                heading == bound_angle(raw_target) || heading == bound_angle(raw_target + 180)
            );
        }

        #[test]
        fn prop_steer_command_reversed(
            raw_target in -1_000_000_000i64..1_000_000_000,
            raw_curr in -1_000_000_000i64..1_000_000_000,
        ) {
            let command = steer_command(raw_target, raw_curr);
            let heading = bound_angle(command.angle);
            if command.reversed {
                prop_assert_eq!(heading, bound_angle(raw_target + 180));
            } else {
                prop_assert_eq!(heading, bound_angle(raw_target));
            }
        }
    }
}
