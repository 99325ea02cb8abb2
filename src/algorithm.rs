use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::baseline::{ConstantBinNumber, ConstantVolume, ReferenceBackend};
use crate::error::{Error, Result};
use crate::strategy::{Discipline, Strategy};
use crate::types::{Solution, WeightSet, WeightStream};
use crate::{offline, online};

/// Every packing strategy the crate ships, addressable by a stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    OnlineNextFit,
    OnlineFirstFit,
    OnlineBestFit,
    OnlineWorstFit,
    OnlineRefinedFirstFit,
    WorstOnline,
    OfflineNextFit,
    OfflineFirstFit,
    OfflineBestFit,
    OfflineWorstFit,
    Gnp,
    BaselineVolume,
    BaselinePartition,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::OnlineNextFit,
        Algorithm::OnlineFirstFit,
        Algorithm::OnlineBestFit,
        Algorithm::OnlineWorstFit,
        Algorithm::OnlineRefinedFirstFit,
        Algorithm::WorstOnline,
        Algorithm::OfflineNextFit,
        Algorithm::OfflineFirstFit,
        Algorithm::OfflineBestFit,
        Algorithm::OfflineWorstFit,
        Algorithm::Gnp,
        Algorithm::BaselineVolume,
        Algorithm::BaselinePartition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::OnlineNextFit => "online-next-fit",
            Algorithm::OnlineFirstFit => "online-first-fit",
            Algorithm::OnlineBestFit => "online-best-fit",
            Algorithm::OnlineWorstFit => "online-worst-fit",
            Algorithm::OnlineRefinedFirstFit => "online-refined-first-fit",
            Algorithm::WorstOnline => "worst-online",
            Algorithm::OfflineNextFit => "offline-next-fit",
            Algorithm::OfflineFirstFit => "offline-first-fit",
            Algorithm::OfflineBestFit => "offline-best-fit",
            Algorithm::OfflineWorstFit => "offline-worst-fit",
            Algorithm::Gnp => "gnp",
            Algorithm::BaselineVolume => "baseline-volume",
            Algorithm::BaselinePartition => "baseline-partition",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Algorithm::OnlineNextFit => Strategy::Online(Box::new(online::NextFit)),
            Algorithm::OnlineFirstFit => Strategy::Online(Box::new(online::FirstFit)),
            Algorithm::OnlineBestFit => Strategy::Online(Box::new(online::BestFit)),
            Algorithm::OnlineWorstFit => Strategy::Online(Box::new(online::WorstFit)),
            Algorithm::OnlineRefinedFirstFit => {
                Strategy::Online(Box::new(online::RefinedFirstFit))
            }
            Algorithm::WorstOnline => Strategy::Online(Box::new(online::WorstOnline)),
            Algorithm::OfflineNextFit => Strategy::Offline(Box::new(offline::NextFit)),
            Algorithm::OfflineFirstFit => Strategy::Offline(Box::new(offline::FirstFit)),
            Algorithm::OfflineBestFit => Strategy::Offline(Box::new(offline::BestFit)),
            Algorithm::OfflineWorstFit => Strategy::Offline(Box::new(offline::WorstFit)),
            Algorithm::Gnp => Strategy::ExtendOffline(Box::new(offline::Gnp)),
            Algorithm::BaselineVolume => {
                Strategy::Offline(Box::new(ConstantVolume::new(ReferenceBackend)))
            }
            Algorithm::BaselinePartition => {
                Strategy::ExtendOffline(Box::new(ConstantBinNumber::new(ReferenceBackend)))
            }
        }
    }

    pub fn discipline(self) -> Discipline {
        match self {
            Algorithm::OnlineNextFit
            | Algorithm::OnlineFirstFit
            | Algorithm::OnlineBestFit
            | Algorithm::OnlineWorstFit
            | Algorithm::OnlineRefinedFirstFit
            | Algorithm::WorstOnline => Discipline::Online,
            Algorithm::OfflineNextFit
            | Algorithm::OfflineFirstFit
            | Algorithm::OfflineBestFit
            | Algorithm::OfflineWorstFit
            | Algorithm::BaselineVolume => Discipline::Offline,
            Algorithm::Gnp | Algorithm::BaselinePartition => Discipline::ExtendOffline,
        }
    }

    /// Runs the strategy on `weights` taken in the given order.
    ///
    /// Online strategies get a fresh stream; fixed-bin-count strategies need
    /// `bins` and ignore `capacity`.
    pub fn run(self, capacity: u32, weights: &[u32], bins: Option<usize>) -> Result<Solution> {
        let solution = match self.strategy() {
            Strategy::Online(algo) => {
                let mut stream = WeightStream::new(capacity, weights.iter().copied());
                algo.pack(&mut stream)?
            }
            Strategy::Offline(algo) => algo.pack(&WeightSet::new(capacity, weights.to_vec()))?,
            Strategy::ExtendOffline(algo) => {
                let bins = bins.ok_or_else(|| {
                    Error::InvalidInput(format!("{self} needs a bin count"))
                })?;
                algo.pack(weights, bins)?
            }
        };
        debug!(
            algorithm = self.name(),
            items = weights.len(),
            bins = solution.bin_count(),
            "packed"
        );
        Ok(solution)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
                format!("unknown algorithm '{}', expected one of: {}", s, known.join(", "))
            })
    }
}
