//! The plot session: one rendering conversation with the external process
//! and the scratch files backing it.
//!
//! A session owns the command channel and the scratch-file counter. Create
//! operations stage series data in scratch files and open an in-flight
//! [`Figure`]; one-line setters configure canvas, axes, legend and output
//! path. Teardown closes the channel and removes the scratch files (kept in
//! debug mode so they stay inspectable).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::channel::Channel;
use crate::command;
use crate::errors::Result;
use crate::figure::{Figure, Figure3d};
use crate::scratch::ScratchSet;
use crate::series::{Band, Series, Series3};
use crate::style::{
    BoxPlotOptions, FillOptions, HistogramOptions, LegendPosition, LineOptions, PointOptions,
    Scale,
};

/// Session construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Base font size for the canvas
    pub font_size: u32,

    /// Write commands to a local file instead of the renderer and keep
    /// scratch files on teardown
    pub debug: bool,

    /// Directory scratch data files are created in
    pub scratch_dir: PathBuf,

    /// Command stream destination in debug mode
    pub debug_file: PathBuf,

    /// Renderer executable
    pub renderer: String,

    /// Arguments passed to the renderer
    pub renderer_args: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            font_size: 20,
            debug: false,
            scratch_dir: PathBuf::from("."),
            debug_file: PathBuf::from("debug_plotter.txt"),
            renderer: "gnuplot".to_string(),
            renderer_args: vec!["-persistent".to_string()],
        }
    }
}

/// The object coordinating one rendering conversation and its scratch files
pub struct Session {
    channel: Channel,
    scratch: ScratchSet,
    config: SessionConfig,
}

impl Session {
    /// Open a session: launch the renderer (or the debug sink) and emit the
    /// initial canvas configuration.
    ///
    /// If the channel cannot be opened a warning is logged and every
    /// subsequent operation becomes a no-op; construction itself never
    /// fails for this reason.
    pub fn new(config: SessionConfig) -> Self {
        let channel = if config.debug {
            Channel::open_debug_file(&config.debug_file)
        } else {
            Channel::open_renderer(&config.renderer, &config.renderer_args)
        };
        let scratch = ScratchSet::new(config.scratch_dir.clone());
        let mut session = Self {
            channel,
            scratch,
            config,
        };
        session.emit_terminal(
            session.config.width,
            session.config.height,
            session.config.font_size,
        );
        session
    }

    /// Open a session with the default canvas (1200x900, font 20).
    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    /// Whether the channel to the renderer is still accepting commands.
    pub fn is_active(&self) -> bool {
        self.channel.is_open()
    }

    pub(crate) fn channel_mut(&mut self) -> &mut Channel {
        &mut self.channel
    }

    pub(crate) fn scratch_mut(&mut self) -> &mut ScratchSet {
        &mut self.scratch
    }

    fn emit_terminal(&mut self, width: u32, height: u32, font_size: u32) {
        self.channel
            .send(&command::terminal(width, height, font_size));
    }

    /// Re-emit the canvas configuration to start a new figure without
    /// destroying the session.
    pub fn reset(&mut self, width: u32, height: u32, font_size: u32) {
        self.emit_terminal(width, height, font_size);
    }

    /// [`reset`](Self::reset) with the canvas settings the session was
    /// constructed with.
    pub fn reset_default(&mut self) {
        self.emit_terminal(
            self.config.width,
            self.config.height,
            self.config.font_size,
        );
    }

    /// Emit a blank command to force the external process to render the
    /// accumulated commands, then flush the channel.
    pub fn finalize(&mut self) {
        self.channel.send_raw("\n");
        self.channel.send("unset multiplot");
        self.channel.flush();
    }

    // One-line setters. Text is forwarded as-is; all of them are no-ops on
    // a dead channel.

    pub fn set_title(&mut self, title: &str) {
        self.channel.send(&format!("set title '{title}'"));
    }

    pub fn set_xlabel(&mut self, label: &str) {
        self.channel.send(&format!("set xlabel '{label}'"));
    }

    pub fn set_ylabel(&mut self, label: &str) {
        self.channel.send(&format!("set ylabel '{label}'"));
    }

    pub fn set_xrange(&mut self, low: f64, high: f64) {
        self.channel.send(&format!("set xrange [{low}:{high}]"));
    }

    pub fn set_yrange(&mut self, low: f64, high: f64) {
        self.channel.send(&format!("set yrange [{low}:{high}]"));
    }

    pub fn set_xscale(&mut self, scale: Scale) {
        match scale {
            Scale::Log => self.channel.send("set logscale x"),
            Scale::Linear => self.channel.send("unset logscale x"),
        }
    }

    pub fn set_yscale(&mut self, scale: Scale) {
        match scale {
            Scale::Log => self.channel.send("set logscale y"),
            Scale::Linear => self.channel.send("unset logscale y"),
        }
    }

    pub fn set_grid(&mut self, enabled: bool) {
        if enabled {
            self.channel.send("set grid");
        } else {
            self.channel.send("unset grid");
        }
    }

    pub fn set_legend(&mut self, position: LegendPosition) {
        self.channel
            .send(&format!("set key {}", position.key_spec()));
    }

    pub fn hide_legend(&mut self) {
        self.channel.send("set key off");
    }

    /// Path the rendered image is written to on the next render.
    pub fn set_save_path(&mut self, path: &str) {
        self.channel.send(&format!("set output '{path}'"));
    }

    pub fn set_multiplot(&mut self, rows: u32, cols: u32, title: &str) {
        self.channel.send(&command::multiplot(rows, cols, title));
    }

    pub fn unset_multiplot(&mut self) {
        self.channel.send("unset multiplot");
    }

    /// Place x tick labels at the implicit positions 1..=n.
    pub fn set_xtics<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.send_tics_implicit("x", labels);
    }

    /// Place y tick labels at the implicit positions 1..=n.
    pub fn set_ytics<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.send_tics_implicit("y", labels);
    }

    /// Place x tick labels at explicit positions; counts must match.
    pub fn set_xtics_at<S: AsRef<str>>(&mut self, labels: &[S], positions: &[f64]) -> Result<()> {
        self.send_tics_at("x", labels, positions)
    }

    /// Place y tick labels at explicit positions; counts must match.
    pub fn set_ytics_at<S: AsRef<str>>(&mut self, labels: &[S], positions: &[f64]) -> Result<()> {
        self.send_tics_at("y", labels, positions)
    }

    fn send_tics_implicit<S: AsRef<str>>(&mut self, axis: &str, labels: &[S]) {
        if labels.is_empty() {
            debug!("empty {axis} tick label list skipped");
            return;
        }
        let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        self.channel.send(&command::tics_implicit(axis, &labels));
    }

    fn send_tics_at<S: AsRef<str>>(
        &mut self,
        axis: &str,
        labels: &[S],
        positions: &[f64],
    ) -> Result<()> {
        let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        let line = command::tics_at(axis, &labels, positions)?;
        if labels.is_empty() {
            debug!("empty {axis} tick label list skipped");
            return Ok(());
        }
        self.channel.send(&line);
        Ok(())
    }

    fn emit_auto_range(&mut self, file: &str) {
        for line in command::auto_range(file) {
            self.channel.send(&line);
        }
    }

    // Create operations. Each stages the series in a fresh scratch file and
    // opens the figure's plot statement; continuations are added through
    // the returned figure.

    /// Begin a figure with a line series.
    ///
    /// Series with fewer than two points are skipped: no scratch file is
    /// written and the returned figure starts empty.
    pub fn line_plot(&mut self, series: &Series, options: &LineOptions) -> Result<Figure<'_>> {
        if !self.channel.is_open() {
            return Ok(Figure::detached(self));
        }
        if series.len() < 2 {
            debug!("line series with {} points skipped", series.len());
            return Ok(Figure::detached(self));
        }
        let path = self.scratch.write_pairs(series)?;
        let file = path.to_string_lossy().into_owned();
        if options.auto_range {
            self.emit_auto_range(&file);
        }
        let clause = command::line_clause(&file, options);
        Ok(Figure::opened(self, &clause))
    }

    /// Begin a figure with a scatter series.
    ///
    /// Series with fewer than two points are skipped, as for
    /// [`line_plot`](Self::line_plot).
    pub fn scatter_plot(&mut self, series: &Series, options: &PointOptions) -> Result<Figure<'_>> {
        if !self.channel.is_open() {
            return Ok(Figure::detached(self));
        }
        if series.len() < 2 {
            debug!("scatter series with {} points skipped", series.len());
            return Ok(Figure::detached(self));
        }
        let path = self.scratch.write_pairs(series)?;
        let file = path.to_string_lossy().into_owned();
        if options.auto_range {
            self.emit_auto_range(&file);
        }
        let clause = command::point_clause(&file, options);
        Ok(Figure::opened(self, &clause))
    }

    /// Begin a figure with a histogram of the given values.
    ///
    /// The values are staged as (index, value) rows and binned by the
    /// renderer; the bin width comes from the options.
    pub fn histogram(
        &mut self,
        values: &[f64],
        options: &HistogramOptions,
    ) -> Result<Figure<'_>> {
        if !self.channel.is_open() {
            return Ok(Figure::detached(self));
        }
        if values.is_empty() {
            debug!("empty histogram skipped");
            return Ok(Figure::detached(self));
        }
        let path = self.scratch.write_pairs(&Series::from_y(values))?;
        let file = path.to_string_lossy().into_owned();
        for line in command::histogram_preamble(options) {
            self.channel.send(&line);
        }
        let clause = command::histogram_clause(&file, options);
        Ok(Figure::opened(self, &clause))
    }

    /// Begin a figure with a filled region between two curves.
    pub fn fill_plot(&mut self, band: &Band, options: &FillOptions) -> Result<Figure<'_>> {
        if !self.channel.is_open() {
            return Ok(Figure::detached(self));
        }
        if band.is_empty() {
            debug!("empty fill band skipped");
            return Ok(Figure::detached(self));
        }
        let path = self.scratch.write_band(band)?;
        let clause = command::fill_clause(&path.to_string_lossy(), options);
        Ok(Figure::opened(self, &clause))
    }

    /// Begin a 3D figure with a line series.
    pub fn line_plot_3d(
        &mut self,
        series: &Series3,
        options: &LineOptions,
    ) -> Result<Figure3d<'_>> {
        if !self.channel.is_open() {
            return Ok(Figure3d::detached(self));
        }
        if series.len() < 2 {
            debug!("3D line series with {} points skipped", series.len());
            return Ok(Figure3d::detached(self));
        }
        let path = self.scratch.write_triples(series)?;
        let clause = command::line3d_clause(&path.to_string_lossy(), options);
        Ok(Figure3d::opened(self, &clause))
    }

    /// Draw a complete grouped box plot.
    ///
    /// One box per group, side by side; the grid scratch file holds one row
    /// per data point across all groups. Category labels become x tick
    /// marks unless disabled. The statement is self-contained: it is
    /// terminated and the boxplot style unset before returning.
    pub fn box_plot<S: AsRef<str>>(
        &mut self,
        categories: &[S],
        groups: &[Vec<f64>],
        options: &BoxPlotOptions,
    ) -> Result<()> {
        if !self.channel.is_open() {
            return Ok(());
        }
        let rows = groups.iter().map(Vec::len).min().unwrap_or(0);
        if rows == 0 {
            debug!("box plot with an empty group skipped");
            return Ok(());
        }

        self.channel.send("set style data boxplot");
        self.channel.send("set style boxplot outliers pointtype 7");
        self.channel
            .send(&format!("set boxwidth {}", options.box_width));
        if options.show_category_ticks {
            self.send_tics_implicit("x", categories);
        }
        if let Some(spec) = options.color.spec() {
            for group in 1..=groups.len() {
                self.channel
                    .send(&format!("set linetype {group} lc {spec} lw 2"));
            }
        }

        let path = self.scratch.write_grid(groups)?;
        let statement = command::boxplot_clauses(&path.to_string_lossy(), groups.len());
        self.channel.send_raw("plot ");
        self.channel.send_raw(&statement);
        self.channel.send_raw("\n");
        self.channel.send("unset style boxplot");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.channel.close();
        if !self.config.debug {
            self.scratch.cleanup();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_canvas_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 900);
        assert_eq!(config.font_size, 20);
        assert!(!config.debug);
        assert_eq!(config.renderer, "gnuplot");
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = SessionConfig {
            debug: true,
            ..SessionConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: SessionConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
