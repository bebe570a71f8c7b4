use std::fmt::Display;
use log::{debug, error, info};
use crate::avl_tree::AvlTree;
use crate::error::Error;




/**
 * Whether a check case drives the tree through its balanced or its
 * unbalanced mutators.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Balanced,
    Unbalanced,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Balanced => "balanced",
            Mode::Unbalanced => "unbalanced",
        }
    }

    fn insert<K: Ord + Copy>(self, tree: &mut AvlTree<K>, key: K) {
        match self {
            Mode::Balanced => tree.insert(key),
            Mode::Unbalanced => tree.unbalanced_insert(key),
        }
    }

    fn remove<K: Ord + Copy>(self, tree: &mut AvlTree<K>, key: K) {
        match self {
            Mode::Balanced => tree.remove(key),
            Mode::Unbalanced => tree.unbalanced_remove(key),
        }
    }

    /**
     * Only a balanced case expects the tree to stay balanced.
     */
    fn audit<K: Ord + Copy>(self, tree: &AvlTree<K>) -> Option<(K, isize)> {
        match self {
            Mode::Balanced => tree.first_unbalanced(),
            Mode::Unbalanced => None,
        }
    }
}




/**
 * What a passing case observed.
 */
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub keys: usize,
    pub max_height: usize,
}




/**
 * Insert all the keys into an empty tree with the balanced mutators, then
 * remove them all again in the same order. After every step the tree must be
 * balanced and must (or must no longer) contain the key. The observer is
 * handed a label and the tree after every step, and on a failure, so that
 * the caller can draw it.
 */
pub fn balanced_case<K, F>(keys: &[K], observer: F) -> Result<Report, Error<K>>
where
    K: Ord + Copy + Display,
    F: FnMut(&str, &AvlTree<K>),
{
    run_case(Mode::Balanced, keys, observer)
}




/**
 * Like `balanced_case`, but with the unbalanced mutators and no balance
 * checks.
 */
pub fn unbalanced_case<K, F>(keys: &[K], observer: F) -> Result<Report, Error<K>>
where
    K: Ord + Copy + Display,
    F: FnMut(&str, &AvlTree<K>),
{
    run_case(Mode::Unbalanced, keys, observer)
}

pub fn run_case<K, F>(mode: Mode, keys: &[K], mut observer: F) -> Result<Report, Error<K>>
where
    K: Ord + Copy + Display,
    F: FnMut(&str, &AvlTree<K>),
{
    let mut tree = AvlTree::new();
    let mut report = Report { keys: keys.len(), max_height: 0 };
    let prefix = format!("Test_{}_", mode.name());

    debug!("{} case: inserting {} keys", mode.name(), keys.len());

    for (n, &key) in keys.iter().enumerate() {
        mode.insert(&mut tree, key);

        if let Some((node, balance)) = mode.audit(&tree) {
            error!("failure after insertion of {}: node {} has balance {}", key, node, balance);
            observer(&format!("Unbalanced_insert_of_{}", key), &tree);
            return Err(Error::Unbalanced { key: node, balance })
        }
        if tree.find(key).is_none() {
            error!("failure after insertion of {}: key not found", key);
            observer(&format!("Missing_insert_of_{}", key), &tree);
            return Err(Error::MissingKey { key })
        }
        report.max_height = report.max_height.max(tree.height());
        observer(&format!("{}{}_add_{}", prefix, n + 1, key), &tree);
    }
    observer(&format!("{}tree_graph", prefix), &tree);

    debug!("{} case: removing {} keys from a tree of height {}", mode.name(), keys.len(), tree.height());

    for (n, &key) in keys.iter().enumerate() {
        mode.remove(&mut tree, key);

        if let Some((node, balance)) = mode.audit(&tree) {
            error!("failure after removal of {}: node {} has balance {}", key, node, balance);
            observer(&format!("Unbalanced_removal_of_{}", key), &tree);
            return Err(Error::Unbalanced { key: node, balance })
        }
        if tree.find(key).is_some() {
            error!("failure after removal of {}: key still found", key);
            observer(&format!("Missing_removal_of_{}", key), &tree);
            return Err(Error::LingeringKey { key })
        }
        observer(&format!("{}{}_remove_{}", prefix, n + 1, key), &tree);
    }

    if !tree.is_empty() {
        error!("failure after removal: {} nodes remain", tree.len());
        observer("Tree_not_empty", &tree);
        return Err(Error::NotEmpty { remaining: tree.len() })
    }
    info!("{} case passed: {} keys, max height {}", mode.name(), report.keys, report.max_height);
    Ok(report)
}
