// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `swerve` library computes steering targets for a swerve drive wheel module.
//!
//! The `math` module holds the pure core: angle bounding, the sign function and the
//! steering optimizer. A wheel heading of θ and θ+180° drive the same direction with the
//! motor reversed, so the optimizer returns whichever target needs the least rotation.
//!
//! The `sweep` module applies an optimizer over a range of current angles and turns the
//! result into a `Chart`. The `chart` module defines the chart data, its explicit style
//! and the `Renderer` capability, together with a terminal renderer.

pub mod chart;
pub mod math;
pub mod sweep;

#[macro_use]
extern crate log;

mod config;

pub use self::config::*;

/// Swerve runtime module containing various constants.
pub mod consts {
    /// Swerve runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use swerve::consts::VERSION;
    ///
    /// println!("Swerve runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default target angle in degrees.
    pub const DEFAULT_TARGET_ANGLE: i64 = 0;

    /// Lower bound of the current angle sweep in degrees.
    pub const SWEEP_MIN: i64 = -540;

    /// Upper bound of the current angle sweep in degrees, inclusive.
    pub const SWEEP_MAX: i64 = 540;

    /// Tick step on the current angle axis.
    pub const CURR_TICK_STEP: i64 = 45;

    /// Tick step on the optimized angle axis.
    pub const OPTIMIZED_TICK_STEP: i64 = 180;
}
