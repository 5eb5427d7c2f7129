use std::io::Write;

use ansi_term::Style;

use super::{Chart, ChartStyle, Renderer, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Grid,
    Line,
}

/// Map a value on [min, max] to a cell index on [0, cells).
fn scale(value: i64, min: i64, max: i64, cells: usize) -> usize {
    let span = (max as f64 - min as f64).max(1.0);
    let ratio = (value as f64 - min as f64) / span;

    (ratio * (cells - 1) as f64).round() as usize
}

/// Smallest and largest value of both data and ticks.
fn bounds(data: &[i64], ticks: &[i64]) -> (i64, i64) {
    data.iter()
        .chain(ticks.iter())
        .fold((i64::MAX, i64::MIN), |(min, max), v| {
            (min.min(*v), max.max(*v))
        })
}

/// Center text over a given width.
fn center(text: &str, offset: usize, width: usize) -> String {
    let pad = offset + width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = cell;
        }
    }

    fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn row_line(&mut self, row: usize) {
        for col in 0..self.width {
            self.set(col, row, Cell::Grid);
        }
    }

    fn col_line(&mut self, col: usize) {
        for row in 0..self.height {
            self.set(col, row, Cell::Grid);
        }
    }

    /// Draw a line segment between two cells.
    ///
    /// Steep segments fill every row in between, so a jump in the data
    /// shows as a vertical line.
    fn segment(&mut self, from: (usize, usize), to: (usize, usize)) {
        let (c0, r0) = (from.0 as f64, from.1 as f64);
        let (dc, dr) = (to.0 as f64 - c0, to.1 as f64 - r0);

        let steps = dc.abs().max(dr.abs()) as usize;
        if steps == 0 {
            self.set(from.0, from.1, Cell::Line);
            return;
        }

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let col = (c0 + dc * t).round() as usize;
            let row = (r0 + dr * t).round() as usize;
            self.set(col, row, Cell::Line);
        }
    }
}

/// Chart renderer writing to a terminal.
///
/// The chart is rasterized into a grid of character cells with the axes,
/// tick labels and titles drawn around it.
pub struct TerminalRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TerminalRenderer<W> {
    /// Construct a new terminal renderer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, style: &ChartStyle, colour: Style, text: String) -> String {
        if style.color {
            colour.paint(text).to_string()
        } else {
            text
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, chart: &Chart, style: &ChartStyle) -> Result {
        chart.validate()?;

        let width = style.width.max(2);
        let height = style.height.max(2);

        let (x_min, x_max) = bounds(&chart.x, &chart.x_ticks);
        let (y_min, y_max) = bounds(&chart.y, &chart.y_ticks);

        let col_of = |x: i64| scale(x, x_min, x_max, width);
        let row_of = |y: i64| height - 1 - scale(y, y_min, y_max, height);

        let mut canvas = Canvas::new(width, height);

        if style.grid {
            chart.x_ticks.iter().for_each(|x| canvas.col_line(col_of(*x)));
            chart.y_ticks.iter().for_each(|y| canvas.row_line(row_of(*y)));
        }

        let points = chart
            .x
            .iter()
            .zip(chart.y.iter())
            .map(|(x, y)| (col_of(*x), row_of(*y)))
            .collect::<Vec<_>>();

        canvas.set(points[0].0, points[0].1, Cell::Line);
        for pair in points.windows(2) {
            canvas.segment(pair[0], pair[1]);
        }

        let mut y_tick_labels = vec![None; height];
        for y in &chart.y_ticks {
            y_tick_labels[row_of(*y)] = Some(y.to_string());
        }

        let gutter = y_tick_labels
            .iter()
            .flatten()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut x_tick_cols = vec![false; width];
        for x in &chart.x_ticks {
            x_tick_cols[col_of(*x)] = true;
        }

        let mut lines = Vec::with_capacity(height + 5);

        let title = center(&chart.title, 0, gutter + 1 + width);
        lines.push(self.paint(style, Style::new().bold(), title));
        lines.push(chart.y_label.clone());

        let line_style = Style::new().fg(style.line_colour);
        let grid_style = Style::new().fg(style.grid_colour);

        for (row, label) in y_tick_labels.iter().enumerate() {
            let mut line = match label {
                Some(label) => format!("{:>gutter$}┤", label),
                None => format!("{}│", " ".repeat(gutter)),
            };

            for col in 0..width {
                match canvas.get(col, row) {
                    Cell::Empty => line.push(' '),
                    Cell::Grid => line.push_str(&self.paint(style, grid_style, "·".to_string())),
                    Cell::Line => {
                        line.push_str(&self.paint(style, line_style, style.marker.to_string()))
                    }
                }
            }

            lines.push(line);
        }

        let axis = x_tick_cols
            .iter()
            .map(|tick| if *tick { '┬' } else { '─' })
            .collect::<String>();
        lines.push(format!("{}└{}", " ".repeat(gutter), axis));

        let offset = gutter + 1;
        let mut tick_line = vec![' '; offset + width];
        let mut free_from = 0;
        for x in &chart.x_ticks {
            let label = x.to_string().chars().collect::<Vec<_>>();
            let start = (offset + col_of(*x)).saturating_sub(label.len() / 2);
            let end = start + label.len();

            if start < free_from || end > tick_line.len() {
                continue;
            }

            tick_line[start..end].copy_from_slice(&label);
            free_from = end + 1;
        }
        lines.push(tick_line.into_iter().collect());

        lines.push(center(&chart.x_label, offset, width));

        for line in lines {
            writeln!(self.writer, "{}", line.trim_end())?;
        }

        self.writer.flush()?;

        Ok(())
    }
}
