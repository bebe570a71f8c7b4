use std::cmp::Ordering::{Equal, Greater, Less};
use std::collections::VecDeque;
use std::iter::FromIterator;
use log::{debug, trace};
use crate::error::Error;
use crate::node::{Node, NodeSnapshot};
use crate::path::{slot_mut, Path, Side, Step};




/**
 * A self-balancing binary search tree of unique keys. The balanced mutators
 * keep every node's balance factor within [-1, 1]; the unbalanced ones only
 * restructure the tree as a plain search tree, while still refreshing the
 * cached heights and balance factors along the way.
 */
pub struct AvlTree<K: Ord + Copy> {
    root: Option<Box<Node<K>>>,
}




// ============================================================================
impl<K: Ord + Copy> AvlTree<K> {

    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.breadth_first().count()
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height)
    }

    pub fn contains(&self, key: K) -> bool {
        self.find(key).is_some()
    }




    /**
     * Return the node holding the given key, or `None` if the key is not in
     * the tree.
     */
    pub fn find(&self, key: K) -> Option<&Node<K>> {
        let mut node = self.root.as_deref();

        while let Some(n) = node {
            match key.cmp(&n.key) {
                Greater => node = n.r.as_deref(),
                Less    => node = n.l.as_deref(),
                Equal   => return Some(n),
            }
        }
        None
    }




    /**
     * Insert a key and rebalance the tree. Inserting a key that is already
     * present does nothing.
     */
    pub fn insert(&mut self, key: K) {
        let path = self.insert_raw(key);
        self.rebalance(path)
    }




    /**
     * Remove a key and rebalance the tree. Removing a key that is not present
     * does nothing.
     */
    pub fn remove(&mut self, key: K) {
        let path = self.remove_raw(key);
        self.rebalance(path)
    }




    /**
     * Insert a key without rotating. The heights and balance factors along
     * the descent are brought up to date.
     */
    pub fn unbalanced_insert(&mut self, key: K) {
        let path = self.insert_raw(key);
        self.refresh(path)
    }




    /**
     * Remove a key without rotating. The heights and balance factors along
     * the descent are brought up to date.
     */
    pub fn unbalanced_remove(&mut self, key: K) {
        let path = self.remove_raw(key);
        self.refresh(path)
    }




    /**
     * Return true if no node's balance factor, as computed from its
     * children's heights, lies outside [-1, 1]. An empty tree is balanced.
     */
    pub fn is_balanced(&self) -> bool {
        self.first_unbalanced().is_none()
    }




    /**
     * Free every node, visiting them breadth first so that no recursion over
     * the tree depth takes place.
     */
    pub fn clear(&mut self) {
        let mut queue: VecDeque<Box<Node<K>>> = self.root.take().into_iter().collect();

        while let Some(mut node) = queue.pop_front() {
            queue.extend(node.l.take());
            queue.extend(node.r.take());
        }
    }




    /**
     * Return an iterator over the nodes in breadth-first order.
     */
    pub fn breadth_first(&self) -> BreadthFirst<'_, K> {
        BreadthFirst { queue: self.root.as_deref().into_iter().collect() }
    }




    /**
     * Return an iterator over the keys in increasing order.
     */
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_lmost_path(self.root.as_deref());
        iter
    }




    /**
     * Return a breadth-first record of every node's key, cached height and
     * balance, and children's keys.
     */
    pub fn snapshot(&self) -> Vec<NodeSnapshot<K>> {
        self.breadth_first().map(Node::snapshot).collect()
    }




    /**
     * Check the search-tree order, the cached heights, and the balance of
     * every node. True heights are recomputed from the bottom level up.
     * Cached balance factors are not checked, since they are only refreshed
     * on demand.
     */
    pub fn validate(&self) -> Result<(), Error<K>> {
        let order = self.level_order();
        let mut actual = vec![0; order.len()];

        for (index, &(node, l, r)) in order.iter().enumerate().rev() {
            let lh = l.map_or(0, |i| actual[i]);
            let rh = r.map_or(0, |i| actual[i]);
            actual[index] = lh.max(rh) + 1;

            if let Some(l) = node.left().filter(|l| l.key >= node.key) {
                return Err(Error::Unordered { key: node.key, child: l.key })
            }
            if let Some(r) = node.right().filter(|r| r.key <= node.key) {
                return Err(Error::Unordered { key: node.key, child: r.key })
            }
            if node.height != actual[index] {
                return Err(Error::StaleHeight { key: node.key, cached: node.height, actual: actual[index] })
            }
            let balance = lh as isize - rh as isize;
            if balance < -1 || balance > 1 {
                return Err(Error::Unbalanced { key: node.key, balance })
            }
        }
        if let Some((a, b)) = self.iter().zip(self.iter().skip(1)).find(|(a, b)| a >= b) {
            return Err(Error::Unordered { key: a, child: b })
        }
        Ok(())
    }




    /**
     * List the nodes in level order, each with the positions of its left and
     * right children in the same list.
     */
    fn level_order(&self) -> Vec<(&Node<K>, Option<usize>, Option<usize>)> {
        let mut order = Vec::new();
        let mut queue: VecDeque<&Node<K>> = self.root.as_deref().into_iter().collect();
        let mut next = 1;

        while let Some(node) = queue.pop_front() {
            let l = enqueue(&mut queue, &mut next, node.left());
            let r = enqueue(&mut queue, &mut next, node.right());
            order.push((node, l, r));
        }
        order
    }




    /**
     * Return the key and balance factor of the first node, in breadth-first
     * order, whose balance lies outside [-1, 1].
     */
    pub(crate) fn first_unbalanced(&self) -> Option<(K, isize)> {
        self.breadth_first()
            .map(|node| (node.key, node.balance_from_children()))
            .find(|&(_, balance)| balance < -1 || balance > 1)
    }




    /**
     * Attach a new leaf for the key without rebalancing. Returns the nodes
     * visited on the way down, excluding the new leaf. The path is empty if
     * the tree was empty or the key was already present.
     */
    pub(crate) fn insert_raw(&mut self, key: K) -> Path {
        let mut path = Path::new();
        let mut step = Step::Root;
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            path.push(step);
            let side = match key.cmp(&node.key) {
                Greater => Side::Right,
                Less    => Side::Left,
                Equal   => {
                    path.clear();
                    return path
                }
            };
            step = Step::Turn(side);
            slot = node.child_mut(side);
        }
        *slot = Some(Box::new(Node::new(key)));
        path
    }




    /**
     * Detach the node holding the key without rebalancing. Returns the nodes
     * whose sub-trees changed, from the root down. The path is empty if the
     * key was not found.
     */
    pub(crate) fn remove_raw(&mut self, key: K) -> Path {
        let mut path = Path::new();
        let mut step = Step::Root;
        let mut slot = &mut self.root;

        loop {
            let side = match slot.as_ref().map(|node| key.cmp(&node.key)) {
                Some(Greater) => Side::Right,
                Some(Less)    => Side::Left,
                Some(Equal)   => break,
                None => {
                    path.clear();
                    return path
                }
            };
            path.push(step);
            step = Step::Turn(side);
            slot = slot_mut(slot, Some(side));
        }
        Self::cut_off(slot, step, &mut path);
        path
    }




    /**
     * Remove the node in `slot`, which was reached by `step`. A node with a
     * single child is replaced by that child. A node with two children is
     * replaced by the child with the greater height, or on a tie the one with
     * the greater key; the other child's sub-tree is then re-attached whole,
     * as a leaf position found by searching down from the promoted child. The
     * nodes visited by that search are pushed onto `path`.
     */
    fn cut_off(slot: &mut Option<Box<Node<K>>>, step: Step, path: &mut Path) {
        let mut node = match slot.take() {
            Some(node) => node,
            None => return,
        };

        match (node.l.take(), node.r.take()) {
            (None, None) => {}
            (Some(l), None) => *slot = Some(l),
            (None, Some(r)) => *slot = Some(r),
            (Some(l), Some(r)) => {
                let promote_left = match l.height.cmp(&r.height) {
                    Greater => true,
                    Less    => false,
                    Equal   => l.key > r.key,
                };
                let (child, sibling) = if promote_left { (l, r) } else { (r, l) };

                debug!(
                    "splice: promoting {} child (height {}), re-attaching sibling (height {})",
                    if promote_left { "left" } else { "right" },
                    child.height,
                    sibling.height);

                *slot = Some(child);

                let mut step = step;
                let mut slot = slot;

                while let Some(n) = slot {
                    path.push(step);
                    let side = if sibling.key > n.key { Side::Right } else { Side::Left };
                    step = Step::Turn(side);
                    slot = n.child_mut(side);
                }
                *slot = Some(sibling);
            }
        }
    }




    /**
     * Walk the path bottom-up, recomputing each node's balance factor and
     * rotating where it lies outside [-1, 1]. After a rotation, the new
     * sub-tree root and the demoted node are pushed back so that both are
     * checked again, the demoted node first.
     */
    fn rebalance(&mut self, mut path: Path) {
        while let Some(step) = path.pop() {
            let slot = slot_mut(&mut self.root, path.turns().chain(step.turn()));

            let balance = match slot.as_mut() {
                Some(node) => node.compute_balance(),
                None => continue,
            };
            trace!("rebalance: depth {} balance {}", path.len(), balance);

            if balance > 1 {
                Node::rebalance_to_right(slot);
                path.push(step);
                path.push(Step::Turn(Side::Right));
            } else if balance < -1 {
                Node::rebalance_to_left(slot);
                path.push(step);
                path.push(Step::Turn(Side::Left));
            }
            if let Some(node) = slot.as_mut() {
                node.update_height()
            }
        }
    }




    /**
     * Refresh the heights and balance factors of the nodes on the path,
     * without rotating. No rotation means only the path's own heights change,
     * so one shared descent gathers the heights hanging off the path, the new
     * values are worked out bottom-up, and a second descent writes them.
     */
    fn refresh(&mut self, path: Path) {
        if path.is_empty() {
            return
        }
        let turns: Vec<Side> = path.turns().collect();
        let mut beside = Vec::with_capacity(turns.len());
        let mut node = self.root.as_deref();

        for &side in &turns {
            let n = match node {
                Some(n) => n,
                None => return,
            };
            let (on, off) = match side {
                Side::Left  => (n.left(), n.right()),
                Side::Right => (n.right(), n.left()),
            };
            beside.push(off.map_or(0, |o| o.height));
            node = on;
        }
        let (lh, rh) = match node {
            Some(bottom) => bottom.child_heights(),
            None => return,
        };

        let mut fresh = vec![(lh.max(rh) + 1, lh as isize - rh as isize)];

        for (&side, &off) in turns.iter().zip(&beside).rev() {
            let below = fresh.last().map_or(0, |&(height, _)| height);
            let (lh, rh) = match side {
                Side::Left  => (below, off),
                Side::Right => (off, below),
            };
            fresh.push((lh.max(rh) + 1, lh as isize - rh as isize));
        }

        let mut slot = &mut self.root;
        let mut turns = turns.into_iter();

        for (height, balance) in fresh.into_iter().rev() {
            let node = match slot {
                Some(node) => node,
                None => break,
            };
            node.height = height;
            node.balance = balance;

            match turns.next() {
                Some(side) => slot = node.child_mut(side),
                None => break,
            }
        }
    }
}




/**
 * Queue a child for the level-order walk and return the position it will
 * take in the list.
 */
fn enqueue<'a, K: Ord + Copy>(queue: &mut VecDeque<&'a Node<K>>, next: &mut usize, child: Option<&'a Node<K>>) -> Option<usize> {
    child.map(|c| {
        queue.push_back(c);
        *next += 1;
        *next - 1
    })
}




// ============================================================================
impl<K: Ord + Copy> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}




/**
 * Deep copy, made breadth first. The copies are assembled from the last level
 * upward so each parent can take its finished children.
 */
impl<K: Ord + Copy> Clone for AvlTree<K> {
    fn clone(&self) -> Self {
        let order = self.level_order();
        let mut copies: Vec<Option<Box<Node<K>>>> = order.iter().map(|_| None).collect();

        for (index, &(node, l, r)) in order.iter().enumerate().rev() {
            let copy = Node {
                key: node.key,
                height: node.height,
                balance: node.balance,
                l: l.and_then(|i| copies[i].take()),
                r: r.and_then(|i| copies[i].take()),
            };
            copies[index] = Some(Box::new(copy));
        }
        Self { root: copies.into_iter().next().flatten() }
    }
}

impl<K: Ord + Copy> Drop for AvlTree<K> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<K: Ord + Copy> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + Copy> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key)
        }
    }
}




/**
 * By-reference iterator visiting the nodes level by level.
 */
pub struct BreadthFirst<'a, K: Ord + Copy> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K: Ord + Copy> Iterator for BreadthFirst<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}




/**
 * In-order iterator over the keys. The stack holds the left spine of the
 * sub-tree still to be visited.
 */
pub struct Iter<'a, K: Ord + Copy> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K: Ord + Copy> Iter<'a, K> {
    fn push_lmost_path(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K: Ord + Copy> Iterator for Iter<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_lmost_path(node.right());
        Some(node.key)
    }
}
