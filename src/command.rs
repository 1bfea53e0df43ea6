//! Renderer command-string formatting.
//!
//! Everything the session sends down the channel is assembled here: the
//! terminal configuration, axis/tick setters, the per-series plot clauses
//! and the statistics commands backing auto ranging. Keeping the formatting
//! in one place keeps the session logic free of string plumbing and makes
//! the grammar unit-testable without a channel.

use crate::errors::{PlotError, Result};
use crate::style::{FillOptions, HistogramOptions, LineOptions, PointOptions};

/// Canvas/terminal configuration line emitted at construction and on reset.
pub(crate) fn terminal(width: u32, height: u32, font_size: u32) -> String {
    format!("set terminal pngcairo enhanced font ',{font_size}' size {width}, {height}")
}

pub(crate) fn multiplot(rows: u32, cols: u32, title: &str) -> String {
    format!("set multiplot layout {rows}, {cols} title '{title}'")
}

fn tics_line(axis: &str, entries: &[String]) -> String {
    format!("set {axis}tics ({})", entries.join(", "))
}

/// Tick-list line for the given axis ("x" or "y") with labels placed at
/// the implicit positions 1..=n.
pub(crate) fn tics_implicit(axis: &str, labels: &[&str]) -> String {
    let entries: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("\"{label}\" {}", i + 1))
        .collect();
    tics_line(axis, &entries)
}

/// Tick-list line with explicit positions; counts must match.
pub(crate) fn tics_at(axis: &str, labels: &[&str], positions: &[f64]) -> Result<String> {
    if positions.len() != labels.len() {
        return Err(PlotError::TickCountMismatch {
            labels: labels.len(),
            positions: positions.len(),
        });
    }
    let entries: Vec<String> = labels
        .iter()
        .zip(positions.iter())
        .map(|(label, position)| format!("\"{label}\" {position}"))
        .collect();
    Ok(tics_line(axis, &entries))
}

/// A line-series clause, shared by 2D (`using 1:2`) and 3D (`using 1:2:3`).
///
/// `allow_smooth` is off for 3D statements; the renderer rejects `smooth`
/// there.
fn line_clause_using(file: &str, using: &str, options: &LineOptions, allow_smooth: bool) -> String {
    let mut clause = format!("\"{file}\" using {using}");
    if options.smooth && allow_smooth {
        clause.push_str(" smooth unique");
    }
    if options.marker.point_index().is_some() {
        clause.push_str(" with linespoints");
    } else {
        clause.push_str(" with lines");
    }
    if let Some(spec) = options.color.spec() {
        clause.push_str(&format!(" linecolor {spec}"));
    }
    if options.width != 1.0 {
        clause.push_str(&format!(" linewidth {}", options.width));
    }
    if let Some(dash) = options.style.dash_index() {
        clause.push_str(&format!(" dashtype {dash}"));
    }
    if let Some(point) = options.marker.point_index() {
        clause.push_str(&format!(" pointtype {point}"));
    }
    clause.push_str(&format!(" title '{}'", options.title));
    clause
}

pub(crate) fn line_clause(file: &str, options: &LineOptions) -> String {
    line_clause_using(file, "1:2", options, true)
}

pub(crate) fn line3d_clause(file: &str, options: &LineOptions) -> String {
    line_clause_using(file, "1:2:3", options, false)
}

pub(crate) fn point_clause(file: &str, options: &PointOptions) -> String {
    // A scatter series without a marker would be invisible; fall back to
    // the filled dot.
    let point = options
        .marker
        .point_index()
        .unwrap_or(7);
    let mut clause = format!(
        "\"{file}\" using 1:2 with points pointtype {point} pointsize {}",
        options.size
    );
    if let Some(spec) = options.color.spec() {
        clause.push_str(&format!(" linecolor {spec}"));
    }
    clause.push_str(&format!(" title '{}'", options.title));
    clause
}

pub(crate) fn fill_clause(file: &str, options: &FillOptions) -> String {
    let mut clause = format!(
        "\"{file}\" using 1:2:3 with filledcurves fs transparent solid {}",
        options.opacity
    );
    if let Some(spec) = options.color.spec() {
        clause.push_str(&format!(" linecolor {spec}"));
    }
    clause.push_str(&format!(" title '{}'", options.title));
    clause
}

/// Setup lines defining the value binning for a histogram clause.
pub(crate) fn histogram_preamble(options: &HistogramOptions) -> Vec<String> {
    vec![
        format!("binwidth={}", options.bin_width),
        "bin(v,width)=width*floor(v/width)+width/2.0".to_string(),
        "set boxwidth binwidth*0.9".to_string(),
        "set style fill solid 0.5".to_string(),
    ]
}

pub(crate) fn histogram_clause(file: &str, options: &HistogramOptions) -> String {
    let mut clause =
        format!("\"{file}\" using (bin($2,binwidth)):(1.0) smooth freq with boxes");
    if let Some(spec) = options.color.spec() {
        clause.push_str(&format!(" linecolor {spec}"));
    }
    clause.push_str(&format!(" title '{}'", options.title));
    clause
}

/// The complete per-group clause list of a box plot statement.
pub(crate) fn boxplot_clauses(file: &str, group_count: usize) -> String {
    let mut statement = format!("\"{file}\" using (1):1 title '' with boxplot");
    for group in 2..=group_count {
        statement.push_str(&format!(
            ", '' using ({group}):{group} title '' with boxplot"
        ));
    }
    statement
}

/// Query statistics from a just-written scratch file and derive a y range
/// padded by 5% of the data span on each side.
pub(crate) fn auto_range(file: &str) -> [String; 2] {
    [
        format!("stats \"{file}\" using 2 nooutput name \"PP\""),
        "set yrange [PP_min - 0.05*(PP_max - PP_min):PP_max + 0.05*(PP_max - PP_min)]"
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, LineStyle, Marker};

    #[test]
    fn terminal_line_matches_canvas_settings() {
        assert_eq!(
            terminal(1200, 900, 20),
            "set terminal pngcairo enhanced font ',20' size 1200, 900"
        );
    }

    #[test]
    fn tics_with_implicit_positions() {
        let cmd = tics_implicit("x", &["a", "b", "c"]);
        assert_eq!(cmd, "set xtics (\"a\" 1, \"b\" 2, \"c\" 3)");
    }

    #[test]
    fn tics_with_explicit_positions() {
        let cmd = tics_at("y", &["lo", "hi"], &[0.5, 2.5]).unwrap();
        assert_eq!(cmd, "set ytics (\"lo\" 0.5, \"hi\" 2.5)");
    }

    #[test]
    fn tics_count_mismatch_is_an_error() {
        let err = tics_at("x", &["a", "b"], &[1.0]).unwrap_err();
        match err {
            crate::errors::PlotError::TickCountMismatch { labels, positions } => {
                assert_eq!(labels, 2);
                assert_eq!(positions, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_line_clause_uses_auto_color() {
        let clause = line_clause("0.dat", &LineOptions::default());
        assert_eq!(
            clause,
            "\"0.dat\" using 1:2 smooth unique with lines title ''"
        );
    }

    #[test]
    fn styled_line_clause_carries_every_attribute() {
        let options = LineOptions {
            title: "gyro".to_string(),
            color: Color::named("blue"),
            width: 2.0,
            style: LineStyle::DashDot,
            marker: Marker::Circle,
            smooth: false,
            auto_range: false,
        };
        let clause = line_clause("3.dat", &options);
        assert_eq!(
            clause,
            "\"3.dat\" using 1:2 with linespoints linecolor 'blue' linewidth 2 \
             dashtype 4 pointtype 6 title 'gyro'"
        );
    }

    #[test]
    fn line3d_clause_never_smooths() {
        let clause = line3d_clause("0.dat", &LineOptions::default());
        assert_eq!(clause, "\"0.dat\" using 1:2:3 with lines title ''");
    }

    #[test]
    fn point_clause_falls_back_to_dot_marker() {
        let options = PointOptions {
            marker: Marker::None,
            ..PointOptions::default()
        };
        let clause = point_clause("1.dat", &options);
        assert_eq!(
            clause,
            "\"1.dat\" using 1:2 with points pointtype 7 pointsize 1 title ''"
        );
    }

    #[test]
    fn boxplot_clauses_cover_every_group() {
        let statement = boxplot_clauses("0box.dat", 3);
        assert_eq!(
            statement,
            "\"0box.dat\" using (1):1 title '' with boxplot, \
             '' using (2):2 title '' with boxplot, \
             '' using (3):3 title '' with boxplot"
        );
    }

    #[test]
    fn auto_range_queries_the_y_column() {
        let [stats, range] = auto_range("2.dat");
        assert_eq!(stats, "stats \"2.dat\" using 2 nooutput name \"PP\"");
        assert!(range.starts_with("set yrange [PP_min - 0.05*"));
    }
}
