//! End-to-end session scenarios against the debug command sink.
//!
//! Tests:
//! 1. Line plot with implicit x: scratch rows and the plot statement
//! 2. Scatter create + add: two scratch files, one comma-joined statement
//! 3. Fill-between: (x, upper, lower) scratch rows
//! 4. Teardown: scratch files removed in normal mode, kept in debug mode
//! 5. Reset followed by finalize re-emits only canvas configuration

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use plotpipe::{
    Band, FillOptions, LineOptions, PointOptions, Series, Session, SessionConfig,
};

/// Session writing its command stream to `commands.txt` inside the temp dir.
fn debug_session(dir: &TempDir) -> (Session, PathBuf) {
    let commands = dir.path().join("commands.txt");
    let config = SessionConfig {
        debug: true,
        scratch_dir: dir.path().to_path_buf(),
        debug_file: commands.clone(),
        ..SessionConfig::default()
    };
    (Session::new(config), commands)
}

/// Drop the session (flushing the sink) and read back the command stream.
fn commands_after(session: Session, commands: &Path) -> String {
    drop(session);
    fs::read_to_string(commands).expect("read command stream")
}

#[test]
fn line_plot_stages_rows_and_references_the_scratch_file() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, commands) = debug_session(&dir);

    let figure = session
        .line_plot(
            &Series::from_y(&[0.2, 0.3, 0.1, 0.9, 0.75]),
            &LineOptions::default(),
        )
        .expect("create line plot");
    figure.render();

    let dat = dir.path().join("0.dat");
    let rows = fs::read_to_string(&dat).expect("read scratch file");
    assert_eq!(rows, "0 0.2\n1 0.3\n2 0.1\n3 0.9\n4 0.75\n");

    let stream = commands_after(session, &commands);
    assert!(
        stream.contains(&format!(
            "plot \"{}\" using 1:2 smooth unique with lines title ''",
            dat.display()
        )),
        "unexpected command stream:\n{stream}"
    );
}

#[test]
fn scatter_create_then_add_joins_clauses_with_a_comma() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, commands) = debug_session(&dir);

    let mut figure = session
        .scatter_plot(&Series::from_y(&[1.0, 2.0, 3.0]), &PointOptions::default())
        .expect("create scatter plot");
    figure
        .add_scatter(&Series::from_y(&[4.0, 5.0, 6.0]), &PointOptions::default())
        .expect("add scatter plot");
    figure.render();

    let first = dir.path().join("0.dat");
    let second = dir.path().join("1.dat");
    assert!(first.exists());
    assert!(second.exists());

    let stream = commands_after(session, &commands);
    let statement = stream
        .lines()
        .find(|line| line.starts_with("plot "))
        .expect("plot statement");
    assert!(statement.contains(&format!("\"{}\" using 1:2 with points", first.display())));
    assert!(statement.contains(&format!(", \"{}\" using 1:2 with points", second.display())));
}

#[test]
fn fill_between_stages_upper_and_lower_bounds() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, commands) = debug_session(&dir);

    let figure = session
        .fill_plot(
            &Band::from_bounds(&[0.4, 0.5], &[0.1, 0.2]),
            &FillOptions::default(),
        )
        .expect("create fill plot");
    figure.render();

    let dat = dir.path().join("0.dat");
    let rows = fs::read_to_string(&dat).expect("read scratch file");
    assert_eq!(rows, "0 0.4 0.1\n1 0.5 0.2\n");

    let stream = commands_after(session, &commands);
    assert!(stream.contains("with filledcurves fs transparent solid 0.3"));
}

#[test]
fn teardown_removes_scratch_files_in_normal_mode() {
    let dir = TempDir::new().expect("tempdir");
    // "cat" stands in for the renderer so the channel stays open without
    // requiring gnuplot on the test machine.
    let config = SessionConfig {
        scratch_dir: dir.path().to_path_buf(),
        renderer: "cat".to_string(),
        renderer_args: vec![],
        ..SessionConfig::default()
    };
    let mut session = Session::new(config);
    assert!(session.is_active());

    let figure = session
        .line_plot(&Series::from_y(&[1.0, 2.0, 3.0]), &LineOptions::default())
        .expect("create line plot");
    figure.render();

    let dat = dir.path().join("0.dat");
    assert!(dat.exists());
    drop(session);
    assert!(!dat.exists(), "scratch file should be removed on teardown");
}

#[test]
fn teardown_keeps_scratch_files_in_debug_mode() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, _) = debug_session(&dir);

    let figure = session
        .line_plot(&Series::from_y(&[1.0, 2.0, 3.0]), &LineOptions::default())
        .expect("create line plot");
    figure.render();
    drop(session);

    assert!(
        dir.path().join("0.dat").exists(),
        "debug mode must keep scratch files inspectable"
    );
}

#[test]
fn reset_then_finalize_reemits_only_canvas_configuration() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, commands) = debug_session(&dir);

    session.reset(800, 600, 12);
    session.finalize();

    let stream = commands_after(session, &commands);
    assert_eq!(
        stream,
        "set terminal pngcairo enhanced font ',20' size 1200, 900\n\
         set terminal pngcairo enhanced font ',12' size 800, 600\n\
         \n\
         unset multiplot\n"
    );
    assert!(!stream
        .lines()
        .any(|line| line.starts_with("plot") || line.starts_with("splot")));
}
