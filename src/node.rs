use log::trace;
use crate::path::Side;




/**
 * A node in an AVL tree. The height and balance factor are cached on the
 * node: the height is kept current by every mutation that touches the node,
 * while the balance factor is only as fresh as the last time it was
 * recomputed.
 */
pub struct Node<K: Ord + Copy> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) balance: isize,
    pub(crate) l: Option<Box<Node<K>>>,
    pub(crate) r: Option<Box<Node<K>>>,
}




/**
 * A read-only record of a single node: its key, its cached height and
 * balance factor, and the keys of its children if they exist.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSnapshot<K> {
    pub key: K,
    pub height: usize,
    pub balance: isize,
    pub left: Option<K>,
    pub right: Option<K>,
}




// ============================================================================
impl<K: Ord + Copy> Node<K> {




    /**
     * Create a leaf node with the given key.
     */
    pub(crate) fn new(key: K) -> Self {
        Self { key, height: 1, balance: 0, l: None, r: None }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn balance(&self) -> isize {
        self.balance
    }

    pub fn left(&self) -> Option<&Self> {
        self.l.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.r.as_deref()
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Box<Self>> {
        match side {
            Side::Left => &mut self.l,
            Side::Right => &mut self.r,
        }
    }

    pub fn snapshot(&self) -> NodeSnapshot<K> {
        NodeSnapshot {
            key: self.key,
            height: self.height,
            balance: self.balance,
            left: self.l.as_ref().map(|l| l.key),
            right: self.r.as_ref().map(|r| r.key),
        }
    }




    /**
     * Recompute the cached height from the cached heights of the children.
     * An absent child counts as height zero.
     */
    pub(crate) fn update_height(&mut self) {
        self.height = Self::child_height(&self.l).max(Self::child_height(&self.r)) + 1
    }




    /**
     * Recompute the balance factor from the children's cached heights, store
     * it on the node, and return it.
     */
    pub(crate) fn compute_balance(&mut self) -> isize {
        self.balance = self.balance_from_children();
        self.balance
    }




    /**
     * Return the balance factor implied by the children's cached heights,
     * without touching the cache.
     */
    pub(crate) fn balance_from_children(&self) -> isize {
        let (lh, rh) = self.child_heights();
        lh as isize - rh as isize
    }

    pub(crate) fn child_heights(&self) -> (usize, usize) {
        (Self::child_height(&self.l), Self::child_height(&self.r))
    }




    /**
     * Rotate the sub-tree rooted at `node` to the left. The right child
     * becomes the new sub-tree root, `node` becomes its left child, and the
     * right child's former left sub-tree is handed to `node`. Heights are
     * refreshed child first, then the new root. A node without a right child
     * is returned as is.
     */
    pub(crate) fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        match node.r.take() {
            Some(mut parent) => {
                trace!("rotate left: height {} -> {}", node.height, parent.height);
                node.r = parent.l.take();
                node.update_height();
                parent.l = Some(node);
                parent.update_height();
                parent
            }
            None => node,
        }
    }




    /**
     * Mirror image of `rotate_left`.
     */
    pub(crate) fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        match node.l.take() {
            Some(mut parent) => {
                trace!("rotate right: height {} -> {}", node.height, parent.height);
                node.l = parent.r.take();
                node.update_height();
                parent.r = Some(node);
                parent.update_height();
                parent
            }
            None => node,
        }
    }




    /**
     * Repair a left-heavy sub-tree sitting in `slot`. If the left child leans
     * right, it is first rotated left (the left-right case), then the node is
     * rotated right. The new sub-tree root is written back into `slot`.
     */
    pub(crate) fn rebalance_to_right(slot: &mut Option<Box<Self>>) {
        if let Some(mut node) = slot.take() {
            if node.l.as_mut().map_or(0, |l| l.compute_balance()) < 0 {
                node.l = node.l.take().map(Self::rotate_left);
            }
            *slot = Some(Self::rotate_right(node));
        }
    }




    /**
     * Repair a right-heavy sub-tree sitting in `slot`. Mirror image of
     * `rebalance_to_right`.
     */
    pub(crate) fn rebalance_to_left(slot: &mut Option<Box<Self>>) {
        if let Some(mut node) = slot.take() {
            if node.r.as_mut().map_or(0, |r| r.compute_balance()) > 0 {
                node.r = node.r.take().map(Self::rotate_right);
            }
            *slot = Some(Self::rotate_left(node));
        }
    }

    fn child_height(child: &Option<Box<Self>>) -> usize {
        child.as_ref().map_or(0, |c| c.height)
    }
}
