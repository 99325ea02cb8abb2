//! Baseline strategies backed by an external packer.
//!
//! The backend traits are the boundary to a third-party library. The adapters
//! validate input, delegate, and check that the backend neither lost nor
//! invented items before handing back a [`Solution`].

use crate::error::{Error, Result};
use crate::offline::sorted_decreasing;
use crate::strategy::{ExtendOffline, Offline, check_bin_count, check_capacity, check_weights};
use crate::types::{Bin, Solution, WeightSet};

/// Packs weights into as few bins of a fixed volume as the backend manages.
pub trait VolumeBackend {
    fn to_constant_volume(&self, weights: &[u32], capacity: u32) -> Vec<Vec<u32>>;
}

/// Splits weights into a fixed number of bins of similar total weight.
pub trait PartitionBackend {
    fn to_constant_bin_number(&self, weights: &[u32], bins: usize) -> Vec<Vec<u32>>;
}

impl<F> VolumeBackend for F
where
    F: Fn(&[u32], u32) -> Vec<Vec<u32>>,
{
    fn to_constant_volume(&self, weights: &[u32], capacity: u32) -> Vec<Vec<u32>> {
        self(weights, capacity)
    }
}

impl<F> PartitionBackend for F
where
    F: Fn(&[u32], usize) -> Vec<Vec<u32>>,
{
    fn to_constant_bin_number(&self, weights: &[u32], bins: usize) -> Vec<Vec<u32>> {
        self(weights, bins)
    }
}

/// In-crate stand-in for the usual constant-volume / constant-bin-number packers.
///
/// Constant volume places each item, heaviest first, into the fullest bin that
/// can still hold it. Constant bin number places each item, heaviest first,
/// into the lightest bin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceBackend;

impl VolumeBackend for ReferenceBackend {
    fn to_constant_volume(&self, weights: &[u32], capacity: u32) -> Vec<Vec<u32>> {
        let mut bins: Vec<Vec<u32>> = Vec::new();
        let mut sums: Vec<u64> = Vec::new();
        for w in sorted_decreasing(weights) {
            let mut fullest: Option<usize> = None;
            for (idx, &sum) in sums.iter().enumerate() {
                if sum + w as u64 <= capacity as u64 && fullest.is_none_or(|f| sum > sums[f]) {
                    fullest = Some(idx);
                }
            }
            match fullest {
                Some(idx) => {
                    bins[idx].push(w);
                    sums[idx] += w as u64;
                }
                None => {
                    bins.push(vec![w]);
                    sums.push(w as u64);
                }
            }
        }
        bins
    }
}

impl PartitionBackend for ReferenceBackend {
    fn to_constant_bin_number(&self, weights: &[u32], bins: usize) -> Vec<Vec<u32>> {
        let mut parts = vec![Vec::new(); bins];
        let mut sums = vec![0u64; bins];
        for w in sorted_decreasing(weights) {
            let Some((idx, _)) = sums.iter().enumerate().min_by_key(|&(_, &s)| s) else {
                break;
            };
            parts[idx].push(w);
            sums[idx] += w as u64;
        }
        parts
    }
}

/// Offline strategy delegating to a [`VolumeBackend`].
#[derive(Debug, Default, Clone)]
pub struct ConstantVolume<B = ReferenceBackend> {
    backend: B,
}

impl<B: VolumeBackend> ConstantVolume<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: VolumeBackend> Offline for ConstantVolume<B> {
    fn pack(&self, set: &WeightSet) -> Result<Solution> {
        check_capacity(set.capacity)?;
        check_weights(&set.weights)?;
        let packed = self.backend.to_constant_volume(&set.weights, set.capacity);
        into_solution(&set.weights, packed, Some(set.capacity))
    }
}

/// Fixed-bin-count strategy delegating to a [`PartitionBackend`].
#[derive(Debug, Default, Clone)]
pub struct ConstantBinNumber<B = ReferenceBackend> {
    backend: B,
}

impl<B: PartitionBackend> ConstantBinNumber<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: PartitionBackend> ExtendOffline for ConstantBinNumber<B> {
    fn pack(&self, weights: &[u32], bins: usize) -> Result<Solution> {
        check_bin_count(bins)?;
        check_weights(weights)?;
        let packed = self.backend.to_constant_bin_number(weights, bins);
        into_solution(weights, packed, None)
    }
}

fn into_solution(input: &[u32], packed: Vec<Vec<u32>>, capacity: Option<u32>) -> Result<Solution> {
    let mut expected = input.to_vec();
    let mut actual: Vec<u32> = packed.iter().flatten().copied().collect();
    if expected.len() != actual.len() {
        return Err(Error::BackendMismatch(format!(
            "{} items in, {} items out",
            expected.len(),
            actual.len()
        )));
    }
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(Error::BackendMismatch("weights differ from input".to_string()));
    }
    Ok(Solution::new(capacity, packed.into_iter().map(Bin::from).collect()))
}
