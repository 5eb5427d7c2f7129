// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::chart::Chart;
use crate::math::ticks;

/// Return all integer angles from `min` up to and including `max`.
pub fn sweep_range(min: i64, max: i64) -> Vec<i64> {
    (min..=max).collect()
}

/// Apply the optimizer to every current angle.
///
/// The result has the same length and order as `curr_angles`.
pub fn optimize_sweep<F>(target_angle: i64, curr_angles: &[i64], optimizer: F) -> Vec<i64>
where
    F: Fn(i64, i64) -> i64,
{
    curr_angles
        .iter()
        .map(|curr_angle| {
            let optimized = optimizer(target_angle, *curr_angle);
            trace!(
                "Target: {:>5}° Current: {:>5}° Optimized: {:>5}°",
                target_angle,
                curr_angle,
                optimized
            );
            optimized
        })
        .collect()
}

/// Optimizer effects for a single target angle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sweep {
    /// Target angle in degrees.
    pub target_angle: i64,
    /// Swept current angles.
    pub curr_angles: Vec<i64>,
    /// Optimized target angle per current angle.
    pub optimized: Vec<i64>,
}

impl Sweep {
    /// Run the optimizer over the current angles.
    pub fn run<F>(target_angle: i64, curr_angles: Vec<i64>, optimizer: F) -> Self
    where
        F: Fn(i64, i64) -> i64,
    {
        let optimized = optimize_sweep(target_angle, &curr_angles, optimizer);

        debug!(
            "Swept {} current angles for target {}°",
            curr_angles.len(),
            target_angle
        );

        Self {
            target_angle,
            curr_angles,
            optimized,
        }
    }

    /// Build the chart showing the optimizer effects.
    pub fn chart(&self, curr_tick_step: i64, optimized_tick_step: i64) -> Chart {
        Chart {
            title: format!("Target angle: {}", self.target_angle),
            x: self.curr_angles.clone(),
            y: self.optimized.clone(),
            x_ticks: ticks(&self.curr_angles, curr_tick_step),
            y_ticks: ticks(&self.optimized, optimized_tick_step),
            x_label: "Curr angle".to_string(),
            y_label: "Optimized angle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::math::optimize_steer;

    #[test]
    fn test_sweep_range() {
        let range = sweep_range(SWEEP_MIN, SWEEP_MAX);

        assert_eq!(range.len(), 1081);
        assert_eq!(range.first(), Some(&-540));
        assert_eq!(range.last(), Some(&540));
        assert!(sweep_range(1, 0).is_empty());
    }

    #[test]
    fn test_optimize_sweep() {
        let curr_angles = vec![-179, 0, 90, 720];
        let optimized = optimize_sweep(179, &curr_angles, optimize_steer);

        assert_eq!(optimized, vec![-181, -1, 179, 719]);
    }

    #[test]
    fn test_optimize_sweep_calls_optimizer_in_order() {
        let curr_angles = vec![3, 1, 2];
        let optimized = optimize_sweep(7, &curr_angles, |target, curr| target * 10 + curr);

        assert_eq!(optimized, vec![73, 71, 72]);
    }

    #[test]
    fn test_sweep_chart() {
        let sweep = Sweep::run(
            90,
            sweep_range(SWEEP_MIN, SWEEP_MAX),
            optimize_steer,
        );

        assert_eq!(sweep.curr_angles.len(), sweep.optimized.len());

        let chart = sweep.chart(CURR_TICK_STEP, OPTIMIZED_TICK_STEP);

        assert_eq!(chart.title, "Target angle: 90");
        assert_eq!(chart.x_label, "Curr angle");
        assert_eq!(chart.y_label, "Optimized angle");
        assert_eq!(chart.x_ticks.first(), Some(&-540));
        assert_eq!(chart.x_ticks.last(), Some(&540));
        assert!(chart
            .x
            .iter()
            .zip(chart.y.iter())
            .all(|(curr, optimized)| (optimized - curr).abs() <= 90));
        assert!(chart.y_ticks.windows(2).all(|w| w[1] - w[0] == 180));
        assert!(chart.validate().is_ok());
    }
}
