//! # plotpipe
//!
//! Quick line, scatter, histogram, box and 3D plots driven through a pipe
//! to an external `gnuplot` process. Series data is staged in temporary
//! whitespace-separated text files; the session turns plotting calls into
//! the command script the renderer consumes.
//!
//! ```no_run
//! use plotpipe::{LineOptions, Series, Session};
//!
//! fn main() -> plotpipe::Result<()> {
//!     let mut session = Session::with_defaults();
//!     session.set_save_path("plot.png");
//!     session.set_title("response");
//!
//!     let mut figure = session.line_plot(
//!         &Series::from_y(&[0.2, 0.3, 0.1, 0.9, 0.75]),
//!         &LineOptions::default(),
//!     )?;
//!     figure.add_line(
//!         &Series::from_y(&[0.1, 0.2, 0.4, 0.5, 0.6]),
//!         &LineOptions {
//!             title: "baseline".to_string(),
//!             ..LineOptions::default()
//!         },
//!     )?;
//!     figure.render();
//!     Ok(())
//! }
//! ```
//!
//! Opening the renderer can fail (for instance when `gnuplot` is not
//! installed); the session then logs a warning once and every operation
//! becomes a silent no-op, so plotting never takes the host program down.

pub mod errors;
pub mod figure;
pub mod series;
pub mod session;
pub mod style;

mod channel;
mod command;
mod scratch;

pub use errors::{PlotError, Result};
pub use figure::{Figure, Figure3d};
pub use series::{Band, Series, Series3};
pub use session::{Session, SessionConfig};
pub use style::{
    BoxPlotOptions, Color, FillOptions, HistogramOptions, LegendPosition, LineOptions, LineStyle,
    Marker, PointOptions, Scale,
};
