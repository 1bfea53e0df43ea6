//! The in-flight figure: the plot statement between a create operation and
//! the render that forces the external process to draw.
//!
//! A figure is only obtainable from a session create operation and borrows
//! the session for its whole life, so continuation clauses can never be
//! emitted before a statement exists. A figure created from a degenerate
//! series starts empty; the first successful add then opens the statement
//! itself instead of emitting a dangling comma.

use tracing::debug;

use crate::command;
use crate::errors::Result;
use crate::series::{Band, Series, Series3};
use crate::session::Session;
use crate::style::{FillOptions, LineOptions, PointOptions};

struct Statement<'a> {
    session: &'a mut Session,
    keyword: &'static str,
    opened: bool,
    done: bool,
}

impl<'a> Statement<'a> {
    fn new(session: &'a mut Session, keyword: &'static str) -> Self {
        Self {
            session,
            keyword,
            opened: false,
            done: false,
        }
    }

    /// Append one series clause, opening the statement on first use.
    fn append(&mut self, clause: &str) {
        let channel = self.session.channel_mut();
        if self.opened {
            channel.send_raw(", ");
        } else {
            channel.send_raw(self.keyword);
            channel.send_raw(" ");
            self.opened = true;
        }
        channel.send_raw(clause);
    }

    /// Terminate the statement and force a render: the blank command plus
    /// the multiplot teardown, then a flush.
    fn finish(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        let channel = self.session.channel_mut();
        channel.send_raw("\n");
        channel.send("unset multiplot");
        channel.flush();
    }
}

impl Drop for Statement<'_> {
    fn drop(&mut self) {
        // An in-flight statement must not be left dangling on the channel.
        if self.opened {
            self.finish();
        }
    }
}

/// An in-flight 2D figure
pub struct Figure<'a> {
    statement: Statement<'a>,
}

impl<'a> Figure<'a> {
    pub(crate) fn detached(session: &'a mut Session) -> Self {
        Self {
            statement: Statement::new(session, "plot"),
        }
    }

    pub(crate) fn opened(session: &'a mut Session, clause: &str) -> Self {
        let mut figure = Self::detached(session);
        figure.statement.append(clause);
        figure
    }

    /// True when no series clause has been emitted yet.
    pub fn is_empty(&self) -> bool {
        !self.statement.opened
    }

    /// Append a line series as a continuation clause.
    ///
    /// Series with fewer than two points are skipped.
    pub fn add_line(&mut self, series: &Series, options: &LineOptions) -> Result<()> {
        if !self.statement.session.is_active() {
            return Ok(());
        }
        if series.len() < 2 {
            debug!("line series with {} points skipped", series.len());
            return Ok(());
        }
        let path = self.statement.session.scratch_mut().write_pairs(series)?;
        let clause = command::line_clause(&path.to_string_lossy(), options);
        self.statement.append(&clause);
        Ok(())
    }

    /// Append a scatter series as a continuation clause.
    ///
    /// Series with fewer than two points are skipped.
    pub fn add_scatter(&mut self, series: &Series, options: &PointOptions) -> Result<()> {
        if !self.statement.session.is_active() {
            return Ok(());
        }
        if series.len() < 2 {
            debug!("scatter series with {} points skipped", series.len());
            return Ok(());
        }
        let path = self.statement.session.scratch_mut().write_pairs(series)?;
        let clause = command::point_clause(&path.to_string_lossy(), options);
        self.statement.append(&clause);
        Ok(())
    }

    /// Append a filled region between two curves.
    pub fn fill_between(&mut self, band: &Band, options: &FillOptions) -> Result<()> {
        if !self.statement.session.is_active() {
            return Ok(());
        }
        if band.is_empty() {
            debug!("empty fill band skipped");
            return Ok(());
        }
        let path = self.statement.session.scratch_mut().write_band(band)?;
        let clause = command::fill_clause(&path.to_string_lossy(), options);
        self.statement.append(&clause);
        Ok(())
    }

    /// Terminate the figure and force the renderer to draw it.
    pub fn render(mut self) {
        self.statement.finish();
    }
}

/// An in-flight 3D figure (an `splot` statement)
pub struct Figure3d<'a> {
    statement: Statement<'a>,
}

impl<'a> Figure3d<'a> {
    pub(crate) fn detached(session: &'a mut Session) -> Self {
        Self {
            statement: Statement::new(session, "splot"),
        }
    }

    pub(crate) fn opened(session: &'a mut Session, clause: &str) -> Self {
        let mut figure = Self::detached(session);
        figure.statement.append(clause);
        figure
    }

    /// True when no series clause has been emitted yet.
    pub fn is_empty(&self) -> bool {
        !self.statement.opened
    }

    /// Append a 3D line series as a continuation clause.
    ///
    /// Series with fewer than two points are skipped.
    pub fn add_line(&mut self, series: &Series3, options: &LineOptions) -> Result<()> {
        if !self.statement.session.is_active() {
            return Ok(());
        }
        if series.len() < 2 {
            debug!("3D line series with {} points skipped", series.len());
            return Ok(());
        }
        let path = self.statement.session.scratch_mut().write_triples(series)?;
        let clause = command::line3d_clause(&path.to_string_lossy(), options);
        self.statement.append(&clause);
        Ok(())
    }

    /// Terminate the figure and force the renderer to draw it.
    pub fn render(mut self) {
        self.statement.finish();
    }
}
