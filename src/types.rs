use serde::Serialize;

use crate::error::{Error, Result};

/// A capacity together with the full, reorderable list of item weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightSet {
    pub capacity: u32,
    pub weights: Vec<u32>,
}

impl WeightSet {
    pub fn new(capacity: u32, weights: Vec<u32>) -> Self {
        Self { capacity, weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// A fresh single-pass stream over the weights in their stored order.
    ///
    /// Every call yields an independent stream, so two online strategies can
    /// be run over the same data.
    pub fn stream(&self) -> WeightStream<'static> {
        WeightStream::new(self.capacity, self.weights.clone())
    }

    pub fn into_stream(self) -> WeightStream<'static> {
        WeightStream::new(self.capacity, self.weights)
    }
}

/// Single-pass cursor over item weights.
///
/// A stream moves from pristine to draining on the first pull and becomes
/// exhausted once the underlying iterator ends. It cannot be rewound.
pub struct WeightStream<'a> {
    capacity: u32,
    items: Option<Box<dyn Iterator<Item = u32> + 'a>>,
    started: bool,
}

impl<'a> WeightStream<'a> {
    pub fn new<I>(capacity: u32, weights: I) -> Self
    where
        I: IntoIterator<Item = u32>,
        I::IntoIter: 'a,
    {
        Self {
            capacity,
            items: Some(Box::new(weights.into_iter())),
            started: false,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_pristine(&self) -> bool {
        self.items.is_some() && !self.started
    }

    pub fn is_exhausted(&self) -> bool {
        self.items.is_none()
    }

    /// Claims the stream for a packing run. Only a pristine stream can be claimed.
    pub fn begin(&mut self) -> Result<()> {
        if !self.is_pristine() {
            return Err(Error::ExhaustedStream);
        }
        self.started = true;
        Ok(())
    }

    /// Pulls the next weight, or `None` once the stream has ended.
    pub fn next_weight(&mut self) -> Result<Option<u32>> {
        let Some(items) = self.items.as_mut() else {
            return Err(Error::ExhaustedStream);
        };
        self.started = true;
        match items.next() {
            Some(w) => Ok(Some(w)),
            None => {
                self.items = None;
                Ok(None)
            }
        }
    }

    /// Drops whatever is left; the stream can no longer be read.
    pub(crate) fn abandon(&mut self) {
        self.items = None;
    }
}

impl std::fmt::Debug for WeightStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_exhausted() {
            "exhausted"
        } else if self.started {
            "draining"
        } else {
            "pristine"
        };
        f.debug_struct("WeightStream")
            .field("capacity", &self.capacity)
            .field("state", &state)
            .finish()
    }
}

/// Items assigned together, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bin {
    items: Vec<u32>,
    load: u64,
}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(weight: u32) -> Self {
        Self {
            items: vec![weight],
            load: weight as u64,
        }
    }

    pub fn push(&mut self, weight: u32) {
        self.items.push(weight);
        self.load += weight as u64;
    }

    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn load(&self) -> u64 {
        self.load
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity left over. Negative when a single oversized item was isolated here.
    pub fn remaining(&self, capacity: u32) -> i64 {
        capacity as i64 - self.load as i64
    }
}

impl From<Vec<u32>> for Bin {
    fn from(items: Vec<u32>) -> Self {
        let load = items.iter().map(|&w| w as u64).sum();
        Self { items, load }
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, w) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{w}")?;
        }
        write!(f, "]")
    }
}

/// Bins in creation order.
///
/// `capacity` is `None` for fixed-bin-count partitions, which do not enforce one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub bins: Vec<Bin>,
    pub capacity: Option<u32>,
}

impl Solution {
    pub fn new(capacity: Option<u32>, bins: Vec<Bin>) -> Self {
        Self { bins, capacity }
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn item_count(&self) -> usize {
        self.bins.iter().map(Bin::len).sum()
    }

    pub fn total_load(&self) -> u64 {
        self.bins.iter().map(Bin::load).sum()
    }

    pub fn loads(&self) -> Vec<u64> {
        self.bins.iter().map(Bin::load).collect()
    }

    /// Plain nested weights, bin by bin.
    pub fn to_weights(&self) -> Vec<Vec<u32>> {
        self.bins.iter().map(|b| b.items().to_vec()).collect()
    }

    pub fn unused(&self) -> Option<Vec<i64>> {
        let capacity = self.capacity?;
        Some(self.bins.iter().map(|b| b.remaining(capacity)).collect())
    }

    pub fn average_unused(&self) -> Option<f64> {
        let unused = self.unused()?;
        if unused.is_empty() {
            return Some(0.0);
        }
        Some(unused.iter().sum::<i64>() as f64 / unused.len() as f64)
    }

    /// Population standard deviation of the bin loads.
    pub fn load_std_dev(&self) -> f64 {
        if self.bins.is_empty() {
            return 0.0;
        }
        let n = self.bins.len() as f64;
        let mean = self.total_load() as f64 / n;
        let var = self
            .bins
            .iter()
            .map(|b| {
                let d = b.load() as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        var.sqrt()
    }

    pub fn waste_percent(&self) -> Option<f64> {
        let capacity = self.capacity? as u64;
        let total_capacity = capacity * self.bins.len() as u64;
        if total_capacity == 0 {
            return Some(0.0);
        }
        let used = self.total_load();
        Some(total_capacity.saturating_sub(used) as f64 / total_capacity as f64 * 100.0)
    }
}
