#![feature(test)]
extern crate test;

use avltree::AvlTree;
use avltree::keys::seeded_keys;

const NUM_KEYS: usize = 10_000;
const RANGE: u32 = 1_000_000;




// ============================================================================
#[bench]
fn balanced_insert_random_keys(b: &mut test::Bencher) {

    let keys = seeded_keys(RANGE, NUM_KEYS, 1).unwrap();

    b.iter(|| {
        let tree: AvlTree<u32> = keys.iter().cloned().collect();
        assert_eq!(tree.len(), NUM_KEYS);
    });
}




// ============================================================================
#[bench]
fn balanced_insert_sorted_keys(b: &mut test::Bencher) {

    b.iter(|| {
        let tree: AvlTree<u32> = (0..NUM_KEYS as u32).collect();
        assert!(tree.height() <= 14);
    });
}




// ============================================================================
#[bench]
fn balanced_insert_then_remove(b: &mut test::Bencher) {

    let keys = seeded_keys(RANGE, NUM_KEYS, 2).unwrap();

    b.iter(|| {
        let mut tree: AvlTree<u32> = keys.iter().cloned().collect();
        for key in &keys {
            tree.remove(*key);
        }
        assert!(tree.is_empty());
    });
}




// ============================================================================
#[bench]
fn unbalanced_insert_random_keys(b: &mut test::Bencher) {

    let keys = seeded_keys(RANGE, NUM_KEYS, 3).unwrap();

    b.iter(|| {
        let mut tree = AvlTree::new();
        for key in &keys {
            tree.unbalanced_insert(*key);
        }
        assert_eq!(tree.len(), NUM_KEYS);
    });
}




// ============================================================================
#[bench]
fn find_in_balanced_tree(b: &mut test::Bencher) {

    let keys = seeded_keys(RANGE, NUM_KEYS, 4).unwrap();
    let tree: AvlTree<u32> = keys.iter().cloned().collect();

    b.iter(|| {
        let found = keys.iter().filter(|&&key| tree.contains(key)).count();
        assert_eq!(found, NUM_KEYS);
    });
}
