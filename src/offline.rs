//! Offline heuristics.
//!
//! The four capacity heuristics sort the weights in decreasing order and hand
//! them to their online counterpart; reordering is the only extra freedom used.

use crate::error::Result;
use crate::online;
use crate::strategy::{
    ExtendOffline, Offline, Online, check_bin_count, check_capacity, check_weights,
};
use crate::types::{Bin, Solution, WeightSet, WeightStream};

pub(crate) fn sorted_decreasing(weights: &[u32]) -> Vec<u32> {
    let mut sorted = weights.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

fn pack_decreasing(algo: &impl Online, set: &WeightSet) -> Result<Solution> {
    check_capacity(set.capacity)?;
    check_weights(&set.weights)?;
    let mut stream = WeightStream::new(set.capacity, sorted_decreasing(&set.weights));
    algo.pack(&mut stream)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NextFit;

impl Offline for NextFit {
    fn pack(&self, set: &WeightSet) -> Result<Solution> {
        pack_decreasing(&online::NextFit, set)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFit;

impl Offline for FirstFit {
    fn pack(&self, set: &WeightSet) -> Result<Solution> {
        pack_decreasing(&online::FirstFit, set)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BestFit;

impl Offline for BestFit {
    fn pack(&self, set: &WeightSet) -> Result<Solution> {
        pack_decreasing(&online::BestFit, set)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WorstFit;

impl Offline for WorstFit {
    fn pack(&self, set: &WeightSet) -> Result<Solution> {
        pack_decreasing(&online::WorstFit, set)
    }
}

/// Greedy number partitioning: heaviest item first, always into the lightest
/// bin (lowest index on ties). Capacity plays no part.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gnp;

impl ExtendOffline for Gnp {
    fn pack(&self, weights: &[u32], bins: usize) -> Result<Solution> {
        check_bin_count(bins)?;
        check_weights(weights)?;

        let mut partition = vec![Bin::new(); bins];
        for w in sorted_decreasing(weights) {
            let lightest = partition
                .iter()
                .enumerate()
                .min_by_key(|(_, b)| b.load())
                .map_or(0, |(idx, _)| idx);
            partition[lightest].push(w);
        }
        Ok(Solution::new(None, partition))
    }
}
