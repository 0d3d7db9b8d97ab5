use std::collections::{HashMap, HashSet};

use rand::{SeedableRng, rngs::StdRng};
use trueshuffle::shuffle::{BagError, BagState, ShuffleBag};

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn drain(bag: &mut ShuffleBag) -> Vec<String> {
    let mut drawn = Vec::new();
    while let Ok(id) = bag.take_next(None) {
        drawn.push(id);
    }
    drawn
}

#[test]
fn test_refill_holds_each_track_once() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut bag = ShuffleBag::new();
    bag.refill(ids(&["a", "b", "c", "d", "e"]), &mut rng);

    assert_eq!(bag.len(), 5);
    let contents: HashSet<&String> = bag.remaining().iter().collect();
    assert_eq!(contents.len(), 5);
    for id in ["a", "b", "c", "d", "e"] {
        assert!(bag.contains(id));
    }
}

#[test]
fn test_refill_drops_duplicates() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut bag = ShuffleBag::new();
    bag.refill(ids(&["a", "b", "a", "c", "b"]), &mut rng);

    assert_eq!(bag.len(), 3);
    let mut drawn = drain(&mut bag);
    drawn.sort();
    assert_eq!(drawn, ids(&["a", "b", "c"]));
}

#[test]
fn test_refill_replaces_previous_contents() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut bag = ShuffleBag::new();
    bag.refill(ids(&["a", "b"]), &mut rng);
    bag.refill(ids(&["x", "y", "z"]), &mut rng);

    assert_eq!(bag.len(), 3);
    assert!(!bag.contains("a"));
    assert!(!bag.contains("b"));
}

#[test]
fn test_full_drain_has_no_repeats() {
    let tracks: Vec<String> = (0..50).map(|i| format!("spotify:track:{}", i)).collect();
    let mut rng = StdRng::seed_from_u64(4);
    let mut bag = ShuffleBag::new();
    bag.refill(tracks.clone(), &mut rng);

    let drawn = drain(&mut bag);
    assert_eq!(drawn.len(), 50);

    let unique: HashSet<&String> = drawn.iter().collect();
    assert_eq!(unique.len(), 50);
    assert!(drawn.iter().all(|id| tracks.contains(id)));
}

#[test]
fn test_every_permutation_is_reachable_without_bias() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut bag = ShuffleBag::new();
    let mut counts: HashMap<Vec<String>, usize> = HashMap::new();

    for _ in 0..6000 {
        bag.refill(ids(&["a", "b", "c"]), &mut rng);
        *counts.entry(drain(&mut bag)).or_default() += 1;
    }

    // 3! permutations, about 1000 each; the bounds are roughly five standard
    // deviations wide.
    assert_eq!(counts.len(), 6);
    for (permutation, count) in &counts {
        assert!(
            (850..=1150).contains(count),
            "{:?} drawn {} times",
            permutation,
            count
        );
    }
}

#[test]
fn test_same_seed_same_order() {
    let mut first = ShuffleBag::new();
    let mut second = ShuffleBag::new();
    first.refill(ids(&["a", "b", "c", "d"]), &mut StdRng::seed_from_u64(9));
    second.refill(ids(&["a", "b", "c", "d"]), &mut StdRng::seed_from_u64(9));

    assert_eq!(first.remaining(), second.remaining());
}

#[test]
fn test_take_next_on_empty_bag_fails() {
    let mut bag = ShuffleBag::new();
    assert_eq!(bag.take_next(None), Err(BagError::Empty));
    assert_eq!(bag.take_next(Some("a")), Err(BagError::Empty));
}

#[test]
fn test_take_next_skips_excluded_track() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut bag = ShuffleBag::new();
    bag.refill(ids(&["a", "b", "c"]), &mut rng);

    let mut drawn = Vec::new();
    loop {
        match bag.take_next(Some("b")) {
            Ok(id) => drawn.push(id),
            Err(_) => break,
        }
    }

    assert!(!drawn.contains(&"b".to_string()));
    drawn.sort();
    assert_eq!(drawn, ids(&["a", "c"]));
    assert!(bag.is_empty());
}

#[test]
fn test_excluding_the_last_track_exhausts_the_bag() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut bag = ShuffleBag::new();
    bag.refill(ids(&["only"]), &mut rng);

    assert_eq!(bag.take_next(Some("only")), Err(BagError::Exhausted));
    assert_eq!(bag.state(), BagState::Empty);
}

#[test]
fn test_state_follows_draining_and_refill() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut bag = ShuffleBag::new();
    assert_eq!(bag.state(), BagState::Empty);

    bag.refill(ids(&["a", "b"]), &mut rng);
    assert_eq!(bag.state(), BagState::Draining);

    bag.take_next(None).unwrap();
    assert_eq!(bag.state(), BagState::Draining);
    bag.take_next(None).unwrap();
    assert_eq!(bag.state(), BagState::Empty);

    bag.refill(ids(&["a", "b"]), &mut rng);
    assert_eq!(bag.state(), BagState::Draining);
}

#[test]
fn test_refill_with_nothing_leaves_bag_empty() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut bag = ShuffleBag::new();
    bag.refill(Vec::new(), &mut rng);

    assert!(bag.is_empty());
    assert_eq!(bag.take_next(None), Err(BagError::Empty));
}
