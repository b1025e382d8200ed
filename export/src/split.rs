use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::manifest::Frame;

/// Frame counts per split: `floor(n * ratio)` train frames, half of the
/// remainder (rounded down) val, everything left test. A val count of
/// zero is valid and produces an empty val manifest.
pub fn split_counts(n: usize, ratio: f64) -> (usize, usize, usize) {
    let n_train = ((n as f64 * ratio) as usize).min(n);
    let n_val = (n - n_train) / 2;
    (n_train, n_val, n - n_train - n_val)
}

/// The shuffled frame list partitioned into the three splits.
#[derive(Debug)]
pub struct SplitFrames {
    pub train: Vec<Frame>,
    pub val: Vec<Frame>,
    pub test: Vec<Frame>,
}

/// Uniformly shuffles `frames` and partitions them by [`split_counts`].
///
/// A seed makes the partition reproducible across runs; without one each
/// run draws a fresh OS-seeded shuffle.
pub fn split_frames(mut frames: Vec<Frame>, ratio: f64, seed: Option<u64>) -> SplitFrames {
    match seed {
        Some(seed) => frames.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => frames.shuffle(&mut rand::rng()),
    }

    let (n_train, n_val, _) = split_counts(frames.len(), ratio);
    let test = frames.split_off(n_train + n_val);
    let val = frames.split_off(n_train);

    SplitFrames {
        train: frames,
        val,
        test,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn frames(n: usize) -> Vec<Frame> {
        (0..n)
            .map(|i| Frame {
                file_path: format!("images/{i:04}.jpg"),
                transform_matrix: [[0.0; 4]; 4],
            })
            .collect()
    }

    #[test]
    fn counts_for_ten_frames() {
        assert_eq!(split_counts(10, 0.8), (8, 1, 1));
    }

    #[test]
    fn single_frame_lands_in_test() {
        assert_eq!(split_counts(1, 0.8), (0, 0, 1));

        let split = split_frames(frames(1), 0.8, Some(7));
        assert!(split.train.is_empty());
        assert!(split.val.is_empty());
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn counts_always_sum_to_n() {
        for n in 0..50 {
            for ratio in [0.0, 0.3, 0.5, 0.8, 1.0] {
                let (train, val, test) = split_counts(n, ratio);
                assert_eq!(train + val + test, n);
                assert_eq!(train, (n as f64 * ratio) as usize);
                assert_eq!(val, (n - train) / 2);
            }
        }
    }

    #[test]
    fn split_is_a_disjoint_partition_of_the_input() {
        let input: BTreeSet<String> = frames(23).into_iter().map(|f| f.file_path).collect();
        let split = split_frames(frames(23), 0.8, None);

        let mut seen = BTreeSet::new();
        for frame in split
            .train
            .iter()
            .chain(split.val.iter())
            .chain(split.test.iter())
        {
            assert!(seen.insert(frame.file_path.clone()), "duplicated frame");
        }
        assert_eq!(seen, input);
    }

    #[test]
    fn same_seed_gives_the_same_order() {
        let a = split_frames(frames(17), 0.8, Some(42));
        let b = split_frames(frames(17), 0.8, Some(42));

        let order = |s: &SplitFrames| {
            s.train
                .iter()
                .chain(s.val.iter())
                .chain(s.test.iter())
                .map(|f| f.file_path.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&a), order(&b));
    }
}
