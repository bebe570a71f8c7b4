use crate::node::Node;




/**
 * Which child of a node a descent went to.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}




/**
 * One visited node on a descent: either the root, or the child reached by
 * turning to one side of the previously visited node.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Root,
    Turn(Side),
}

impl Step {
    pub(crate) fn turn(self) -> Option<Side> {
        match self {
            Step::Root => None,
            Step::Turn(side) => Some(side),
        }
    }
}




/**
 * The nodes visited by a descent from the root, recorded as a stack. A node
 * is identified by the turns taken to reach it, so the stack stays valid
 * while the sub-tree below its top is restructured, and it doubles as the
 * work list for bottom-up rebalancing.
 */
#[derive(Clone, Debug, Default)]
pub(crate) struct Path {
    steps: Vec<Step>,
}




// ============================================================================
impl Path {

    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step)
    }

    pub(crate) fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }




    /**
     * Return the turns leading from the root to the node on top of the stack.
     */
    pub(crate) fn turns(&self) -> impl Iterator<Item = Side> + '_ {
        self.steps.iter().filter_map(|step| step.turn())
    }
}




/**
 * Follow the given turns down from `slot` and return the slot holding the
 * node that was reached. The descent stops early at an empty slot.
 */
pub(crate) fn slot_mut<'a, K, I>(mut slot: &'a mut Option<Box<Node<K>>>, turns: I) -> &'a mut Option<Box<Node<K>>>
where
    K: Ord + Copy,
    I: IntoIterator<Item = Side>,
{
    for side in turns {
        match slot {
            Some(node) => slot = node.child_mut(side),
            None => break,
        }
    }
    slot
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{Path, Side, Step};

    #[test]
    fn turns_skip_the_root_step() {
        let mut path = Path::new();
        path.push(Step::Root);
        path.push(Step::Turn(Side::Left));
        path.push(Step::Turn(Side::Right));

        assert_eq!(path.len(), 3);
        assert_eq!(path.turns().collect::<Vec<_>>(), vec![Side::Left, Side::Right]);
        assert_eq!(path.pop(), Some(Step::Turn(Side::Right)));
        assert_eq!(path.turns().collect::<Vec<_>>(), vec![Side::Left]);

        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.pop(), None);
    }
}
