//! Online heuristics: one irrevocable decision per item, no lookahead.
//!
//! The fit test is not uniform. Next Fit, Best Fit and Worst Fit accept an
//! item that exactly fills a bin; First Fit and Refined First Fit require the
//! resulting load to stay strictly below capacity. Both rules are relied upon
//! by existing results and are kept distinct.

use tracing::trace;

use crate::classify::{SizeClass, classify};
use crate::error::Result;
use crate::strategy::{Online, check_capacity, next_item};
use crate::types::{Bin, Solution, WeightStream};

/// Chooses an existing bin for an item, or `None` to open a new one.
trait Placement {
    fn select(&self, bins: &[Bin], capacity: u32, weight: u32) -> Option<usize>;
}

fn pack_with<P: Placement>(rule: &P, stream: &mut WeightStream<'_>) -> Result<Solution> {
    let capacity = stream.capacity();
    check_capacity(capacity)?;
    stream.begin()?;

    let mut bins: Vec<Bin> = Vec::new();
    let mut position = 0;
    while let Some(weight) = next_item(stream, position)? {
        match rule.select(&bins, capacity, weight) {
            Some(idx) => bins[idx].push(weight),
            None => {
                trace!(bin = bins.len(), weight, "open bin");
                bins.push(Bin::with_item(weight));
            }
        }
        position += 1;
    }
    Ok(Solution::new(Some(capacity), bins))
}

/// Keeps a single open bin; when an item does not fit, the bin is closed for good.
#[derive(Debug, Default, Clone, Copy)]
pub struct NextFit;

impl Placement for NextFit {
    fn select(&self, bins: &[Bin], capacity: u32, weight: u32) -> Option<usize> {
        let current = bins.last()?;
        (current.remaining(capacity) >= weight as i64).then(|| bins.len() - 1)
    }
}

impl Online for NextFit {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        pack_with(self, stream)
    }
}

/// Every item gets its own bin. Worst-case reference only.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorstOnline;

impl Placement for WorstOnline {
    fn select(&self, _bins: &[Bin], _capacity: u32, _weight: u32) -> Option<usize> {
        None
    }
}

impl Online for WorstOnline {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        pack_with(self, stream)
    }
}

/// Earliest bin whose load stays strictly below capacity once the item is added.
fn first_fit(bins: &[Bin], capacity: u32, weight: u32) -> Option<usize> {
    bins.iter().position(|b| b.load() + (weight as u64) < capacity as u64)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFit;

impl Placement for FirstFit {
    fn select(&self, bins: &[Bin], capacity: u32, weight: u32) -> Option<usize> {
        first_fit(bins, capacity, weight)
    }
}

impl Online for FirstFit {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        pack_with(self, stream)
    }
}

/// Tightest bin that admits the item; the earliest one on ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFit;

impl Placement for BestFit {
    fn select(&self, bins: &[Bin], capacity: u32, weight: u32) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (idx, bin) in bins.iter().enumerate() {
            let remaining = bin.remaining(capacity);
            if remaining - weight as i64 >= 0 && best.is_none_or(|(_, r)| remaining < r) {
                best = Some((idx, remaining));
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl Online for BestFit {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        pack_with(self, stream)
    }
}

/// Loosest bin that admits the item; the earliest one on ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorstFit;

impl Placement for WorstFit {
    fn select(&self, bins: &[Bin], capacity: u32, weight: u32) -> Option<usize> {
        let mut worst: Option<(usize, i64)> = None;
        for (idx, bin) in bins.iter().enumerate() {
            let remaining = bin.remaining(capacity);
            if remaining < weight as i64 {
                continue;
            }
            let leftover = remaining - weight as i64;
            if worst.is_none_or(|(_, l)| leftover > l) {
                worst = Some((idx, leftover));
            }
        }
        worst.map(|(idx, _)| idx)
    }
}

impl Online for WorstFit {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        pack_with(self, stream)
    }
}

/// Four First Fit sub-packings, one per [`SizeClass`], concatenated at the end.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefinedFirstFit;

/// Picks the sub-packing for each item.
///
/// B2 items are counted; every one whose count is a multiple of 6, 7, 8 or 9
/// joins the A sub-packing instead of its own.
#[derive(Debug, Default)]
struct ClassRouter {
    b2_seen: u64,
}

impl ClassRouter {
    fn route(&mut self, class: SizeClass) -> usize {
        if class != SizeClass::B2 {
            return class.index();
        }
        self.b2_seen += 1;
        if [6, 7, 8, 9].iter().any(|m| self.b2_seen % m == 0) {
            SizeClass::A.index()
        } else {
            SizeClass::B2.index()
        }
    }
}

impl Online for RefinedFirstFit {
    fn pack(&self, stream: &mut WeightStream<'_>) -> Result<Solution> {
        let capacity = stream.capacity();
        check_capacity(capacity)?;
        stream.begin()?;

        let mut packings: [Vec<Bin>; 4] = Default::default();
        let mut router = ClassRouter::default();
        let mut position = 0;
        while let Some(weight) = next_item(stream, position)? {
            let target = router.route(classify(weight, capacity));
            let bins = &mut packings[target];
            match first_fit(bins, capacity, weight) {
                Some(idx) => bins[idx].push(weight),
                None => {
                    trace!(class = target, bin = bins.len(), weight, "open bin");
                    bins.push(Bin::with_item(weight));
                }
            }
            position += 1;
        }

        let bins = packings
            .into_iter()
            .flatten()
            .filter(|b| !b.is_empty())
            .collect();
        Ok(Solution::new(Some(capacity), bins))
    }
}
