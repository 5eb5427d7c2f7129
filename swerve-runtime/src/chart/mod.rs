// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour;

mod error;
mod term;

pub use self::error::Error;
pub use self::term::TerminalRenderer;

pub type Result<T = ()> = std::result::Result<T, error::Error>;

/// Line chart of a single integer series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    /// Chart title.
    pub title: String,
    /// Horizontal axis data.
    pub x: Vec<i64>,
    /// Vertical axis data.
    pub y: Vec<i64>,
    /// Horizontal axis tick positions.
    pub x_ticks: Vec<i64>,
    /// Vertical axis tick positions.
    pub y_ticks: Vec<i64>,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
}

impl Chart {
    /// Check the chart can be rendered.
    pub fn validate(&self) -> Result {
        if self.x.len() != self.y.len() {
            return Err(Error::LengthMismatch {
                x: self.x.len(),
                y: self.y.len(),
            });
        }

        if self.x.is_empty() {
            return Err(Error::EmptySeries);
        }

        Ok(())
    }
}

/// Chart appearance.
///
/// The style is passed along with every render call, there is no
/// process wide style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    /// Plot area width in terminal cells.
    pub width: usize,
    /// Plot area height in terminal cells.
    pub height: usize,
    /// Colour of the data line.
    pub line_colour: Colour,
    /// Colour of the grid.
    pub grid_colour: Colour,
    /// Draw grid lines at the ticks.
    pub grid: bool,
    /// Glyph used for data points.
    pub marker: char,
    /// Emit ANSI colour codes.
    pub color: bool,
}

impl ChartStyle {
    /// Bayesian Methods for Hackers look, on a 10 by 5 aspect.
    pub fn bmh() -> Self {
        Self {
            width: 100,
            height: 25,
            line_colour: Colour::RGB(0x34, 0x8A, 0xBD),
            grid_colour: Colour::RGB(0xB2, 0xB2, 0xB2),
            grid: true,
            marker: '•',
            color: true,
        }
    }

    /// Enable or disable ANSI colour codes.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::bmh()
    }
}

/// Chart renderer.
///
/// Implementations display the chart and release any resources they
/// acquired before returning.
pub trait Renderer {
    fn render(&mut self, chart: &Chart, style: &ChartStyle) -> Result;
}
