//! The one-way text channel feeding the external renderer.
//!
//! In normal mode the channel owns a spawned renderer process and writes
//! command lines into its piped stdin. In debug mode the commands go to a
//! plain buffered file instead, so the stream can be inspected afterwards.
//!
//! Open failures are reported once and downgrade the channel to a dead
//! state; every later write is a silent no-op. A write failure mid-session
//! is treated the same way, so a vanished renderer never turns into a
//! cascade of errors at the call sites.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use tracing::{debug, warn};

enum Sink {
    Pipe { child: Child, stdin: ChildStdin },
    File(BufWriter<File>),
}

pub(crate) struct Channel {
    sink: Option<Sink>,
}

impl Channel {
    /// Spawn the renderer and take its stdin as the command sink.
    pub(crate) fn open_renderer(program: &str, args: &[String]) -> Self {
        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => match child.stdin.take() {
                Some(stdin) => {
                    debug!("renderer '{program}' launched");
                    Self {
                        sink: Some(Sink::Pipe { child, stdin }),
                    }
                }
                None => {
                    warn!("renderer '{program}' has no stdin pipe; plot commands will be dropped");
                    let _ = child.wait();
                    Self { sink: None }
                }
            },
            Err(source) => {
                warn!("failed to launch renderer '{program}': {source}; plot commands will be dropped");
                Self { sink: None }
            }
        }
    }

    /// Open a plain file standing in for the renderer pipe (debug mode).
    pub(crate) fn open_debug_file(path: &Path) -> Self {
        match File::create(path) {
            Ok(file) => {
                debug!("debug command sink opened at {}", path.display());
                Self {
                    sink: Some(Sink::File(BufWriter::new(file))),
                }
            }
            Err(source) => {
                warn!(
                    "failed to open debug command sink {}: {source}; plot commands will be dropped",
                    path.display()
                );
                Self { sink: None }
            }
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one command line (trailing newline added).
    pub(crate) fn send(&mut self, line: &str) {
        self.write_bytes(line.as_bytes());
        self.write_bytes(b"\n");
    }

    /// Append raw text without a trailing newline, for clauses appended to
    /// an in-flight plot statement.
    pub(crate) fn send_raw(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let result = match self.sink.as_mut() {
            Some(Sink::Pipe { stdin, .. }) => stdin.write_all(bytes),
            Some(Sink::File(writer)) => writer.write_all(bytes),
            None => return,
        };
        if let Err(source) = result {
            warn!("renderer channel write failed: {source}; dropping further plot commands");
            self.sink = None;
        }
    }

    pub(crate) fn flush(&mut self) {
        let result = match self.sink.as_mut() {
            Some(Sink::Pipe { stdin, .. }) => stdin.flush(),
            Some(Sink::File(writer)) => writer.flush(),
            None => return,
        };
        if let Err(source) = result {
            warn!("renderer channel flush failed: {source}; dropping further plot commands");
            self.sink = None;
        }
    }

    /// Flush, close the sink and reap the renderer process.
    pub(crate) fn close(&mut self) {
        match self.sink.take() {
            Some(Sink::Pipe { mut child, mut stdin }) => {
                let _ = stdin.flush();
                // Dropping stdin sends EOF so the renderer can finish.
                drop(stdin);
                let _ = child.wait();
            }
            Some(Sink::File(mut writer)) => {
                let _ = writer.flush();
            }
            None => {}
        }
    }
}

impl Drop for Channel {
    fn drop(&mut self) {
        self.close();
    }
}
