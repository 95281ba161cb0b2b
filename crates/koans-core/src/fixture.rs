//! Read-only fixture files.
//!
//! A fixture is opened for the duration of one closure and closed when the
//! closure returns, whichever way it returns. Nothing outlives the call, so
//! a koan that fails halfway through cannot leak an open file into the next.

use crate::error::{Fault, KoanError};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Open `path` and hand its lines to `f`. The file is closed before this
/// function returns.
pub fn with_lines<T, F>(path: impl AsRef<Path>, f: F) -> Result<T, KoanError>
where
    F: FnOnce(Lines<BufReader<File>>) -> Result<T, KoanError>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Fault::new(format!("cannot open fixture {}: {}", path.display(), e))
    })?;
    debug!(fixture = %path.display(), "fixture opened");

    let result = f(BufReader::new(file).lines());

    debug!(fixture = %path.display(), "fixture closed");
    result
}

/// Read every line of a fixture into memory
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, KoanError> {
    with_lines(path, |lines| Ok(lines.collect::<std::io::Result<Vec<_>>>()?))
}

/// Directory fixture names are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn with_lines<T, F>(&self, name: &str, f: F) -> Result<T, KoanError>
    where
        F: FnOnce(Lines<BufReader<File>>) -> Result<T, KoanError>,
    {
        with_lines(self.path(name), f)
    }
}
