use bin_packer::offline::{self, Gnp};
use bin_packer::online::{self, BestFit, FirstFit, NextFit, RefinedFirstFit, WorstFit, WorstOnline};
use bin_packer::strategy::{ExtendOffline, Offline, Online, next_item};
use bin_packer::{Algorithm, Bin, Error, Solution, WeightSet, WeightStream};
use test_case::test_case;

/// The jburkardt p02 instance (capacity 100) in the order it arrives online.
const P02_ARRIVAL: [u32; 14] = [32, 6, 37, 43, 3, 7, 46, 79, 19, 64, 50, 99, 94, 18];
const P02_SORTED: [u32; 14] = [99, 94, 79, 64, 50, 46, 43, 37, 32, 19, 18, 7, 6, 3];

fn online_run(algo: &dyn Online, capacity: u32, weights: &[u32]) -> Vec<Vec<u32>> {
    let mut stream = WeightStream::new(capacity, weights.to_vec());
    algo.pack(&mut stream).unwrap().to_weights()
}

fn offline_run(algo: &dyn Offline, capacity: u32, weights: &[u32]) -> Vec<Vec<u32>> {
    algo.pack(&WeightSet::new(capacity, weights.to_vec()))
        .unwrap()
        .to_weights()
}

fn sorted_items(bins: &[Vec<u32>]) -> Vec<u32> {
    let mut items: Vec<u32> = bins.iter().flatten().copied().collect();
    items.sort_unstable();
    items
}

#[test_case(&NextFit, vec![vec![32, 6, 37], vec![43, 3, 7, 46], vec![79, 19], vec![64], vec![50], vec![99], vec![94], vec![18]]; "next fit")]
#[test_case(&FirstFit, vec![vec![32, 6, 37, 3, 7], vec![43, 46], vec![79, 19], vec![64, 18], vec![50], vec![99], vec![94]]; "first fit")]
#[test_case(&BestFit, vec![vec![32, 6, 37, 3, 7], vec![43, 46], vec![79, 19], vec![64, 18], vec![50], vec![99], vec![94]]; "best fit")]
#[test_case(&WorstFit, vec![vec![32, 6, 37, 19], vec![43, 3, 7, 46], vec![79], vec![64], vec![50, 18], vec![99], vec![94]]; "worst fit")]
#[test_case(&RefinedFirstFit, vec![vec![32, 6, 37, 3, 7], vec![43, 46], vec![79, 19], vec![64, 18], vec![50], vec![99], vec![94]]; "refined first fit")]
fn test_online_p02(algo: &dyn Online, expected: Vec<Vec<u32>>) {
    assert_eq!(online_run(algo, 100, &P02_ARRIVAL), expected);
}

#[test_case(&offline::NextFit, vec![vec![99], vec![94], vec![79], vec![64], vec![50, 46], vec![43, 37], vec![32, 19, 18, 7, 6, 3]]; "next fit")]
#[test_case(&offline::FirstFit, vec![vec![99], vec![94, 3], vec![79, 19], vec![64, 32], vec![50, 46], vec![43, 37, 18], vec![7, 6]]; "first fit")]
#[test_case(&offline::BestFit, vec![vec![99], vec![94, 6], vec![79, 18, 3], vec![64, 32], vec![50, 46], vec![43, 37, 19], vec![7]]; "best fit")]
#[test_case(&offline::WorstFit, vec![vec![99], vec![94], vec![79, 19], vec![64, 32], vec![50, 46], vec![43, 37, 18], vec![7, 6, 3]]; "worst fit")]
fn test_offline_p02(algo: &dyn Offline, expected: Vec<Vec<u32>>) {
    assert_eq!(offline_run(algo, 100, &P02_ARRIVAL), expected);
}

#[test]
fn test_worst_online_p02() {
    let bins = online_run(&WorstOnline, 100, &P02_ARRIVAL);
    assert_eq!(bins.len(), P02_ARRIVAL.len());
    assert!(bins.iter().zip(P02_ARRIVAL).all(|(b, w)| b == &vec![w]));
}

#[test]
fn test_gnp_p02() {
    let sol = Gnp.pack(&P02_SORTED, 3).unwrap();
    assert_eq!(
        sol.to_weights(),
        vec![vec![99, 46, 32, 19, 3], vec![94, 50, 37, 18], vec![79, 64, 43, 7, 6]]
    );
    assert_eq!(sol.loads(), vec![199, 199, 199]);
}

#[test]
fn test_gnp_each_item_goes_to_lightest_bin() {
    // Replay the partition: every item must have joined a bin that was the
    // lightest (and the first lightest) at the moment it arrived.
    let sol = Gnp.pack(&P02_ARRIVAL, 4).unwrap();
    let bins = sol.to_weights();
    let mut sums = vec![0u64; 4];
    let mut taken = vec![0usize; 4];
    for w in P02_SORTED {
        let min = *sums.iter().min().unwrap();
        let target = sums.iter().position(|&s| s == min).unwrap();
        assert_eq!(bins[target][taken[target]], w);
        taken[target] += 1;
        sums[target] += w as u64;
    }
    assert_eq!(sol.loads(), sums);
}

#[test]
fn test_baseline_p02() {
    let volume = Algorithm::BaselineVolume.run(100, &P02_ARRIVAL, None).unwrap();
    assert_eq!(
        volume.to_weights(),
        vec![vec![99], vec![94, 6], vec![79, 18, 3], vec![64, 32], vec![50, 46], vec![43, 37, 19], vec![7]]
    );
    let partition = Algorithm::BaselinePartition.run(0, &P02_ARRIVAL, Some(3)).unwrap();
    assert_eq!(partition, Gnp.pack(&P02_ARRIVAL, 3).unwrap());
}

#[test]
fn test_conservation_all_algorithms() {
    let datasets: [(u32, Vec<u32>); 4] = [
        (100, P02_ARRIVAL.to_vec()),
        (10, vec![10, 1, 9, 2, 8, 3, 7, 4, 6, 5, 5]),
        (7, vec![7, 7, 1, 1, 1, 12, 3]),
        (50, vec![]),
    ];
    for algo in Algorithm::ALL {
        for (capacity, weights) in &datasets {
            let sol = algo.run(*capacity, weights, Some(3)).unwrap();
            let bins = sol.to_weights();
            assert_eq!(sol.item_count(), weights.len(), "{algo} lost or duplicated items");
            let mut expected = weights.clone();
            expected.sort_unstable();
            assert_eq!(sorted_items(&bins), expected, "{algo}");
        }
    }
}

#[test]
fn test_online_irrevocability() {
    let algos: [&dyn Online; 6] = [&NextFit, &FirstFit, &BestFit, &WorstFit, &RefinedFirstFit, &WorstOnline];
    for algo in algos {
        let full = online_run(algo, 100, &P02_ARRIVAL);
        for k in 0..=P02_ARRIVAL.len() {
            let prefix = online_run(algo, 100, &P02_ARRIVAL[..k]);
            assert!(prefix.len() <= full.len());
            for (partial, complete) in prefix.iter().zip(&full) {
                assert!(
                    complete.starts_with(partial),
                    "after {k} items {partial:?} is not a prefix of {complete:?}"
                );
            }
        }
    }
}

#[test]
fn test_offline_is_sorted_then_online() {
    let pairs: [(&dyn Offline, &dyn Online); 4] = [
        (&offline::NextFit, &online::NextFit),
        (&offline::FirstFit, &online::FirstFit),
        (&offline::BestFit, &online::BestFit),
        (&offline::WorstFit, &online::WorstFit),
    ];
    let inputs: [(u32, Vec<u32>); 3] = [
        (100, P02_ARRIVAL.to_vec()),
        (10, vec![1, 9, 2, 8, 5, 5, 3, 7]),
        (20, vec![11, 3, 17, 4, 4, 9, 20, 1]),
    ];
    for (off, on) in pairs {
        for (capacity, weights) in &inputs {
            let mut sorted = weights.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(offline_run(off, *capacity, weights), online_run(on, *capacity, &sorted));
        }
    }
}

#[test]
fn test_item_equal_to_capacity_gets_own_bin() {
    for algo in Algorithm::ALL {
        let sol = algo.run(10, &[10], Some(1)).unwrap();
        assert_eq!(sol.to_weights(), vec![vec![10]], "{algo}");
    }
}

#[test_case(Algorithm::OnlineNextFit, vec![vec![4, 6]]; "next fit")]
#[test_case(Algorithm::OnlineFirstFit, vec![vec![4], vec![6]]; "first fit")]
#[test_case(Algorithm::OnlineBestFit, vec![vec![4, 6]]; "best fit")]
#[test_case(Algorithm::OnlineWorstFit, vec![vec![4, 6]]; "worst fit")]
#[test_case(Algorithm::OnlineRefinedFirstFit, vec![vec![4], vec![6]]; "refined first fit")]
#[test_case(Algorithm::OfflineFirstFit, vec![vec![6], vec![4]]; "offline first fit")]
#[test_case(Algorithm::OfflineBestFit, vec![vec![6, 4]]; "offline best fit")]
fn test_exact_fill_into_existing_bin(algo: Algorithm, expected: Vec<Vec<u32>>) {
    assert_eq!(algo.run(10, &[4, 6], None).unwrap().to_weights(), expected);
}

#[test]
fn test_invalid_input() {
    for algo in Algorithm::ALL {
        let zero_weight = algo.run(10, &[3, 0, 2], Some(2));
        assert!(matches!(zero_weight, Err(Error::InvalidInput(_))), "{algo}");
    }
    for algo in [Algorithm::OnlineFirstFit, Algorithm::OfflineBestFit, Algorithm::BaselineVolume] {
        assert!(matches!(algo.run(0, &[1], None), Err(Error::InvalidInput(_))), "{algo}");
    }
    for algo in [Algorithm::Gnp, Algorithm::BaselinePartition] {
        assert!(matches!(algo.run(10, &[1], Some(0)), Err(Error::InvalidInput(_))), "{algo}");
    }
}

#[test]
fn test_stream_consumed_once() {
    let set = WeightSet::new(100, P02_ARRIVAL.to_vec());
    let mut stream = set.stream();
    let first = NextFit.pack(&mut stream).unwrap();
    assert!(stream.is_exhausted());
    assert!(matches!(WorstFit.pack(&mut stream), Err(Error::ExhaustedStream)));

    // a second stream from the same set is independent
    let again = NextFit.pack(&mut set.stream()).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_partially_read_stream_is_rejected() {
    let mut stream = WeightStream::new(100, P02_ARRIVAL);
    stream.next_weight().unwrap();
    assert!(matches!(BestFit.pack(&mut stream), Err(Error::ExhaustedStream)));
}

#[test]
fn test_zero_weight_mid_stream_exhausts_it() {
    let mut stream = WeightStream::new(10, vec![4, 0, 3]);
    assert!(matches!(FirstFit.pack(&mut stream), Err(Error::InvalidInput(_))));
    assert!(stream.is_exhausted());
    assert!(matches!(FirstFit.pack(&mut stream), Err(Error::ExhaustedStream)));
}

#[test]
fn test_best_fit_p02_listed_order() {
    let weights = [32, 6, 37, 3, 7, 79, 19, 43, 64, 46, 18, 50, 99, 94];
    assert_eq!(
        online_run(&BestFit, 100, &weights),
        vec![
            vec![32, 6, 37, 3, 7],
            vec![79, 19],
            vec![43, 46],
            vec![64, 18],
            vec![50],
            vec![99],
            vec![94]
        ]
    );
}

#[test]
fn test_bin_count_is_bounded() {
    for algo in [Algorithm::Gnp, Algorithm::BaselinePartition] {
        let huge = algo.run(10, &[1, 2], Some(usize::MAX));
        assert!(matches!(huge, Err(Error::InvalidInput(_))), "{algo}");
    }
}

/// Pairs consecutive items, ignoring capacity.
struct Pairs;

impl Online for Pairs {
    fn pack(&self, stream: &mut WeightStream<'_>) -> bin_packer::Result<Solution> {
        stream.begin()?;
        let mut bins: Vec<Bin> = Vec::new();
        let mut position = 0;
        while let Some(weight) = next_item(stream, position)? {
            match bins.last_mut() {
                Some(bin) if bin.len() < 2 => bin.push(weight),
                _ => bins.push(Bin::with_item(weight)),
            }
            position += 1;
        }
        Ok(Solution::new(Some(stream.capacity()), bins))
    }
}

#[test]
fn test_custom_online_strategy() {
    let mut stream = WeightStream::new(10, vec![1, 2, 3, 4, 5]);
    let sol = Pairs.pack(&mut stream).unwrap();
    assert_eq!(sol.to_weights(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert!(matches!(Pairs.pack(&mut stream), Err(Error::ExhaustedStream)));

    let mut stream = WeightStream::new(10, vec![1, 0, 2]);
    let err = Pairs.pack(&mut stream).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: weight at position 1 must be positive");
    assert!(stream.is_exhausted());
}
