//! Coordinate series staged into scratch files.
//!
//! A series is an ephemeral ordered sequence of coordinate tuples. It is
//! written once to a scratch file when a plot operation consumes it; the
//! session never keeps the data afterwards. The constructors replace the
//! arity-based overloads of ad-hoc plotting APIs: the x column is either an
//! implicit `0..n` index or supplied explicitly, and an optional constant
//! shift can be added to x.

/// One set of (x, y) samples backing a single plotted element
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<(f64, f64)>,
}

impl Series {
    /// Build a series from y values alone; x becomes the sample index `0..n`.
    pub fn from_y(y: &[f64]) -> Self {
        let points = y
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        Self { points }
    }

    /// Build a series from explicit x and y columns.
    ///
    /// Extra values in the longer column are dropped, so the series length
    /// is the length of the shorter input.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        let points = x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)).collect();
        Self { points }
    }

    /// Return the series with a constant shift added to every x value.
    pub fn shifted(mut self, dx: f64) -> Self {
        for point in &mut self.points {
            point.0 += dx;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// One set of (x, y, z) samples for a 3D line plot
#[derive(Debug, Clone, PartialEq)]
pub struct Series3 {
    points: Vec<(f64, f64, f64)>,
}

impl Series3 {
    /// Build a 3D series from explicit x, y and z columns, truncated to the
    /// shortest input.
    pub fn from_xyz(x: &[f64], y: &[f64], z: &[f64]) -> Self {
        let points = x
            .iter()
            .zip(y.iter())
            .zip(z.iter())
            .map(|((&a, &b), &c)| (a, b, c))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn points(&self) -> &[(f64, f64, f64)] {
        &self.points
    }
}

/// An (x, upper, lower) band for a filled region between two curves
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    rows: Vec<(f64, f64, f64)>,
}

impl Band {
    /// Build a band from upper and lower bounds; x becomes the sample index.
    pub fn from_bounds(upper: &[f64], lower: &[f64]) -> Self {
        let rows = upper
            .iter()
            .zip(lower.iter())
            .enumerate()
            .map(|(i, (&u, &l))| (i as f64, u, l))
            .collect();
        Self { rows }
    }

    /// Build a band from explicit x values and upper/lower bounds, truncated
    /// to the shortest input.
    pub fn from_x_bounds(x: &[f64], upper: &[f64], lower: &[f64]) -> Self {
        let rows = x
            .iter()
            .zip(upper.iter())
            .zip(lower.iter())
            .map(|((&a, &u), &l)| (a, u, l))
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn rows(&self) -> &[(f64, f64, f64)] {
        &self.rows
    }
}
