// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

pub use angle::*;

mod angle;

/// Return ticks that cover the range of the data.
///
/// The first tick is the minimum of the data, every next tick is `step`
/// further, up to and including the maximum. Returns no ticks for empty
/// data or a step that is not positive.
pub fn ticks(data: &[i64], step: i64) -> Vec<i64> {
    if step <= 0 {
        return Vec::new();
    }

    let (Some(min), Some(max)) = (data.iter().min(), data.iter().max()) else {
        return Vec::new();
    };

    (*min..=*max).step_by(step as usize).collect()
}
