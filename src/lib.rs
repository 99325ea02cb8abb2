//! Greedy bin-packing heuristics.
//!
//! Items are positive integer weights packed into bins of a fixed capacity,
//! either online (one irrevocable decision per item, see [`online`]) or
//! offline (the whole set is known and may be sorted first, see [`offline`]).
//! [`offline::Gnp`] and [`baseline::ConstantBinNumber`] instead split the
//! items into a fixed number of bins with balanced loads.
//!
//! ```
//! use bin_packer::{Algorithm, WeightSet};
//! use bin_packer::offline::FirstFit;
//! use bin_packer::strategy::Offline;
//!
//! let set = WeightSet::new(10, vec![6, 3, 5, 4]);
//! let solution = FirstFit.pack(&set).unwrap();
//! assert_eq!(solution.to_weights(), vec![vec![6, 3], vec![5, 4]]);
//!
//! let same = Algorithm::OfflineFirstFit.run(10, &[6, 3, 5, 4], None).unwrap();
//! assert_eq!(same, solution);
//! ```

pub mod algorithm;
pub mod baseline;
pub mod classify;
pub mod error;
pub mod offline;
pub mod online;
pub mod reader;
pub mod render;
pub mod strategy;
pub mod types;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use types::{Bin, Solution, WeightSet, WeightStream};
