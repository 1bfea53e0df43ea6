//! Scratch-file bookkeeping.
//!
//! Every plotted series is staged in a fresh whitespace-separated text file
//! named by a monotonically increasing counter (`0.dat`, `1.dat`, ...; box
//! plot grids get a `box` suffix). Files are never reused or mutated after
//! creation; the set remembers what it created so teardown can remove it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{PlotError, Result};
use crate::series::{Band, Series, Series3};

pub(crate) struct ScratchSet {
    dir: PathBuf,
    counter: u32,
    created: Vec<PathBuf>,
}

impl ScratchSet {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: 0,
            created: Vec::new(),
        }
    }

    /// Path for a file named by the current counter value.
    ///
    /// With the default "." directory the name is kept bare so emitted plot
    /// statements reference the file by relative path.
    fn path_for(&self, suffix: &str) -> PathBuf {
        let name = format!("{}{suffix}.dat", self.counter);
        if self.dir == Path::new(".") {
            PathBuf::from(name)
        } else {
            self.dir.join(name)
        }
    }

    fn commit(&mut self, path: PathBuf) -> PathBuf {
        debug!("scratch file {} written", path.display());
        self.created.push(path.clone());
        self.counter += 1;
        path
    }

    fn open(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path).map_err(|source| PlotError::ScratchWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }

    fn finish(path: &Path, mut writer: BufWriter<File>) -> Result<()> {
        writer.flush().map_err(|source| PlotError::ScratchWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a two-column (x, y) series, one row per sample.
    pub(crate) fn write_pairs(&mut self, series: &Series) -> Result<PathBuf> {
        let path = self.path_for("");
        let mut writer = Self::open(&path)?;
        for &(x, y) in series.points() {
            writeln!(writer, "{x} {y}").map_err(|source| PlotError::ScratchWrite {
                path: path.clone(),
                source,
            })?;
        }
        Self::finish(&path, writer)?;
        Ok(self.commit(path))
    }

    /// Write a three-column (x, y, z) series.
    pub(crate) fn write_triples(&mut self, series: &Series3) -> Result<PathBuf> {
        let path = self.path_for("");
        let mut writer = Self::open(&path)?;
        for &(x, y, z) in series.points() {
            writeln!(writer, "{x} {y} {z}").map_err(|source| PlotError::ScratchWrite {
                path: path.clone(),
                source,
            })?;
        }
        Self::finish(&path, writer)?;
        Ok(self.commit(path))
    }

    /// Write a three-column (x, upper, lower) band.
    pub(crate) fn write_band(&mut self, band: &Band) -> Result<PathBuf> {
        let path = self.path_for("");
        let mut writer = Self::open(&path)?;
        for &(x, upper, lower) in band.rows() {
            writeln!(writer, "{x} {upper} {lower}").map_err(|source| PlotError::ScratchWrite {
                path: path.clone(),
                source,
            })?;
        }
        Self::finish(&path, writer)?;
        Ok(self.commit(path))
    }

    /// Write a box-plot grid: one row per data point, one column per group,
    /// truncated to the shortest group so every row is complete.
    pub(crate) fn write_grid(&mut self, groups: &[Vec<f64>]) -> Result<PathBuf> {
        let path = self.path_for("box");
        let rows = groups.iter().map(Vec::len).min().unwrap_or(0);
        let mut writer = Self::open(&path)?;
        for row in 0..rows {
            let line: Vec<String> = groups.iter().map(|g| g[row].to_string()).collect();
            writeln!(writer, "{}", line.join(" ")).map_err(|source| {
                PlotError::ScratchWrite {
                    path: path.clone(),
                    source,
                }
            })?;
        }
        Self::finish(&path, writer)?;
        Ok(self.commit(path))
    }

    /// Remove every file created during this session.
    pub(crate) fn cleanup(&mut self) {
        for path in self.created.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!("scratch file {} removed", path.display()),
                Err(source) => {
                    warn!("failed to remove scratch file {}: {source}", path.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_names_files_sequentially() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut scratch = ScratchSet::new(dir.path());
        let a = scratch
            .write_pairs(&Series::from_y(&[1.0, 2.0]))
            .expect("write");
        let b = scratch
            .write_grid(&[vec![1.0], vec![2.0]])
            .expect("write");
        let c = scratch
            .write_pairs(&Series::from_y(&[3.0, 4.0]))
            .expect("write");
        assert_eq!(a.file_name().and_then(|n| n.to_str()), Some("0.dat"));
        assert_eq!(b.file_name().and_then(|n| n.to_str()), Some("1box.dat"));
        assert_eq!(c.file_name().and_then(|n| n.to_str()), Some("2.dat"));
    }

    #[test]
    fn pairs_are_written_one_row_per_sample() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut scratch = ScratchSet::new(dir.path());
        let path = scratch
            .write_pairs(&Series::from_y(&[0.2, 0.3]).shifted(1.0))
            .expect("write");
        let contents = std::fs::read_to_string(path).expect("read back");
        assert_eq!(contents, "1 0.2\n2 0.3\n");
    }

    #[test]
    fn grid_rows_truncate_to_shortest_group() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut scratch = ScratchSet::new(dir.path());
        let path = scratch
            .write_grid(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]])
            .expect("write");
        let contents = std::fs::read_to_string(path).expect("read back");
        assert_eq!(contents, "1 4\n2 5\n");
    }

    #[test]
    fn cleanup_removes_created_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut scratch = ScratchSet::new(dir.path());
        let path = scratch
            .write_pairs(&Series::from_y(&[1.0, 2.0]))
            .expect("write");
        assert!(path.exists());
        scratch.cleanup();
        assert!(!path.exists());
    }
}
