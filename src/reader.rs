//! Dataset readers producing weight sets and streams.
//!
//! Two plain-text formats are understood:
//! - BinPP: item count, capacity, then one weight per line.
//! - Jburkardt: a `<prefix>c.txt` capacity file and a `<prefix>w.txt` weights file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{WeightSet, WeightStream};

pub trait DatasetReader {
    fn load(&self) -> Result<WeightSet>;

    /// The full weight set, in file order.
    fn offline(&self) -> Result<WeightSet> {
        self.load()
    }

    /// A single-pass stream over the weights, in file order.
    fn online(&self) -> Result<WeightStream<'static>> {
        Ok(self.offline()?.into_stream())
    }
}

pub struct BinppReader {
    path: PathBuf,
}

impl BinppReader {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::Dataset(format!("unknown file [{}]", path.display())));
        }
        Ok(Self { path })
    }
}

impl DatasetReader for BinppReader {
    fn load(&self) -> Result<WeightSet> {
        let set = parse_binpp(&fs::read_to_string(&self.path)?)?;
        debug!(path = %self.path.display(), items = set.len(), capacity = set.capacity, "loaded binpp dataset");
        Ok(set)
    }
}

pub struct JburkardtReader {
    capacity_path: PathBuf,
    weights_path: PathBuf,
}

impl JburkardtReader {
    /// `prefix` is the shared file stem, e.g. `data/p01_`.
    pub fn new(prefix: impl AsRef<Path>) -> Result<Self> {
        let prefix = prefix.as_ref().to_string_lossy().into_owned();
        let capacity_path = PathBuf::from(format!("{prefix}c.txt"));
        let weights_path = PathBuf::from(format!("{prefix}w.txt"));
        if !capacity_path.exists() || !weights_path.exists() {
            return Err(Error::Dataset(format!("unknown file [{prefix}]")));
        }
        Ok(Self {
            capacity_path,
            weights_path,
        })
    }
}

impl DatasetReader for JburkardtReader {
    fn load(&self) -> Result<WeightSet> {
        let set = parse_jburkardt(
            &fs::read_to_string(&self.capacity_path)?,
            &fs::read_to_string(&self.weights_path)?,
        )?;
        debug!(path = %self.weights_path.display(), items = set.len(), capacity = set.capacity, "loaded jburkardt dataset");
        Ok(set)
    }
}

fn parse_line(line: &str, lineno: usize, what: &str) -> Result<u32> {
    line.trim()
        .parse::<u32>()
        .map_err(|_| Error::Dataset(format!("line {lineno}: invalid {what} '{}'", line.trim())))
}

pub fn parse_binpp(text: &str) -> Result<WeightSet> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut next = |what: &str| -> Result<u32> {
        let (lineno, line) = lines
            .next()
            .ok_or_else(|| Error::Dataset(format!("missing {what}")))?;
        parse_line(line, lineno, what)
    };

    let count = next("item count")?;
    let capacity = next("capacity")?;
    let weights = (0..count)
        .map(|_| next("weight"))
        .collect::<Result<Vec<_>>>()?;
    Ok(WeightSet::new(capacity, weights))
}

pub fn parse_jburkardt(capacity: &str, weights: &str) -> Result<WeightSet> {
    let capacity_line = capacity
        .lines()
        .next()
        .ok_or_else(|| Error::Dataset("missing capacity".to_string()))?;
    let capacity = parse_line(capacity_line, 1, "capacity")?;
    let weights = weights
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_line(l, i + 1, "weight"))
        .collect::<Result<Vec<_>>>()?;
    Ok(WeightSet::new(capacity, weights))
}
