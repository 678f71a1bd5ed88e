extern crate proptest;
extern crate rand;
extern crate underbar_collection;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use underbar_collection::{contains, difference, every, filter, flatten, intersection, reject};
use underbar_collection::{shuffle_with, some, uniq, zip, Nested};

proptest! {
    #[test]
    fn uniq_is_idempotent(values in prop::collection::vec(0u8..16, 0..64)) {
        let once = uniq(&values);
        prop_assert_eq!(uniq(&once), once.clone());
        for value in &values {
            prop_assert!(contains(&once, value));
        }
    }

    #[test]
    fn every_and_some_are_dual(values in prop::collection::vec(any::<i16>(), 0..32), limit in any::<i16>()) {
        let below = |n: &i16| *n < limit;
        prop_assert_eq!(every(&values, below), !some(&values, |n| !below(n)));
        prop_assert_eq!(some(&values, below), !every(&values, |n| !below(n)));
    }

    #[test]
    fn filter_and_reject_partition(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let even = |n: &i32| n % 2 == 0;
        let kept = filter(&values, even);
        let dropped = reject(&values, even);
        prop_assert_eq!(kept.len() + dropped.len(), values.len());
        prop_assert!(every(&kept, even));
        prop_assert!(!some(&dropped, even));
    }

    #[test]
    fn shuffle_is_a_permutation(values in prop::collection::vec(any::<u32>(), 0..64), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut shuffled = shuffle_with(&values, &mut rng);
        let mut sorted = values.clone();
        shuffled.sort();
        sorted.sort();
        prop_assert_eq!(shuffled, sorted);
    }

    #[test]
    fn flatten_of_flat_is_identity(values in prop::collection::vec(any::<u8>(), 0..32)) {
        let nested: Vec<Nested<u8>> = values.iter().cloned().map(Nested::item).collect();
        prop_assert_eq!(flatten(&nested), values.clone());
        prop_assert_eq!(flatten(&[Nested::flat(values.clone())]), values);
    }

    #[test]
    fn difference_excludes_others(
        values in prop::collection::vec(0u8..20, 0..32),
        others in prop::collection::vec(prop::collection::vec(0u8..20, 0..8), 0..4)
    ) {
        let kept = difference(&values, &others);
        prop_assert_eq!(uniq(&kept), kept.clone());
        for value in &kept {
            prop_assert!(contains(&values, value));
            prop_assert!(!some(&others, |other| contains(other, value)));
        }
    }

    #[test]
    fn intersection_is_common_and_ordered(
        sequences in prop::collection::vec(prop::collection::vec(0u8..10, 0..16), 1..4)
    ) {
        let shared = intersection(&sequences);
        prop_assert_eq!(uniq(&shared), shared.clone());
        for value in &shared {
            prop_assert!(every(&sequences, |sequence| contains(sequence, value)));
        }
        let expected = filter(&uniq(&sequences[0]), |value| every(&sequences, |sequence| contains(sequence, value)));
        prop_assert_eq!(shared, expected);
    }

    #[test]
    fn zip_is_as_long_as_the_longest(
        left in prop::collection::vec(any::<u8>(), 0..16),
        right in prop::collection::vec(any::<u8>(), 0..16)
    ) {
        let zipped = zip(&[left.clone(), right.clone()]);
        prop_assert_eq!(zipped.len(), left.len().max(right.len()));
        for (i, tuple) in zipped.iter().enumerate() {
            prop_assert_eq!(tuple[0], left.get(i).cloned());
            prop_assert_eq!(tuple[1], right.get(i).cloned());
        }
    }
}
