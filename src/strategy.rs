//! The three packing disciplines.
//!
//! Every heuristic implements exactly one of these traits. Callers that only
//! need "something that packs" can hold a [`Strategy`].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{Solution, WeightSet, WeightStream};

/// Packs a stream one item at a time; each placement is final before the next
/// item is read.
pub trait Online {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution>;
}

/// Packs a fully known weight set, free to reorder it beforehand.
pub trait Offline {
    fn pack(&self, set: &WeightSet) -> Result<Solution>;
}

/// Partitions weights into a fixed number of bins, without a capacity.
pub trait ExtendOffline {
    fn pack(&self, weights: &[u32], bins: usize) -> Result<Solution>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    Online,
    Offline,
    ExtendOffline,
}

/// A boxed strategy tagged with its discipline.
pub enum Strategy {
    Online(Box<dyn Online>),
    Offline(Box<dyn Offline>),
    ExtendOffline(Box<dyn ExtendOffline>),
}

impl Strategy {
    pub fn discipline(&self) -> Discipline {
        match self {
            Strategy::Online(_) => Discipline::Online,
            Strategy::Offline(_) => Discipline::Offline,
            Strategy::ExtendOffline(_) => Discipline::ExtendOffline,
        }
    }
}

pub(crate) fn check_capacity(capacity: u32) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidInput("capacity must be positive".to_string()));
    }
    Ok(())
}

pub(crate) fn check_weights(weights: &[u32]) -> Result<()> {
    match weights.iter().position(|&w| w == 0) {
        Some(idx) => Err(zero_weight(idx)),
        None => Ok(()),
    }
}

/// Largest bin count a fixed-bin-count partition accepts.
///
/// Every bin is allocated up front, so the count is bounded before any work starts.
pub const MAX_BIN_COUNT: usize = 1 << 20;

pub(crate) fn check_bin_count(bins: usize) -> Result<()> {
    if bins == 0 {
        return Err(Error::InvalidInput("bin count must be positive".to_string()));
    }
    if bins > MAX_BIN_COUNT {
        return Err(Error::InvalidInput(format!(
            "bin count {bins} too large, at most {MAX_BIN_COUNT}"
        )));
    }
    Ok(())
}

/// Pulls the next item of a claimed stream, rejecting zero weights.
///
/// `position` is only used in the error message. A rejected stream is
/// abandoned: the run is over and its items are gone. Custom [`Online`]
/// strategies pull through this after [`WeightStream::begin`].
pub fn next_item(stream: &mut WeightStream<'_>, position: usize) -> Result<Option<u32>> {
    match stream.next_weight()? {
        Some(0) => {
            stream.abandon();
            Err(zero_weight(position))
        }
        item => Ok(item),
    }
}

fn zero_weight(position: usize) -> Error {
    Error::InvalidInput(format!("weight at position {position} must be positive"))
}
