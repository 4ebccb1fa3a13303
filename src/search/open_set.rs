use fxhash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry. `index` refers to the node table of the running search.
struct SmallestCostHolder {
    estimated_cost: f64,
    order: u64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest estimate first, then the oldest insertion
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// Min-ordered priority queue of node indices keyed on `(f, insertion order)`, with a membership
/// set mirroring the heap contents.
///
/// Keys are never decreased in place. A node that is already queued keeps its first entry
/// (lazy policy), so the tie-breaking of the exploration does not depend on key updates.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<SmallestCostHolder>,
    members: FxHashSet<usize>,
    counter: u64,
}

impl OpenSet {
    pub fn new() -> OpenSet {
        OpenSet::default()
    }

    /// Queues `index` with priority `estimated_cost`, consuming one value of the insertion
    /// counter.
    pub fn push(&mut self, estimated_cost: f64, index: usize) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            order: self.counter,
            index,
        });
        self.counter += 1;
        self.members.insert(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        let SmallestCostHolder { index, .. } = self.heap.pop()?;
        self.members.remove(&index);
        Some(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_estimate_first() {
        let mut open = OpenSet::new();
        open.push(3.0, 0);
        open.push(1.5, 1);
        open.push(2.0, 2);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut open = OpenSet::new();
        for index in [7, 3, 9, 1] {
            open.push(4.0, index);
        }
        let order = std::iter::from_fn(|| open.pop()).collect::<Vec<_>>();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn membership_mirrors_heap() {
        let mut open = OpenSet::new();
        open.push(1.0, 4);
        open.push(2.0, 5);
        assert!(open.contains(4) && open.contains(5));
        assert_eq!(open.len(), 2);
        open.pop();
        assert!(!open.contains(4));
        assert!(open.contains(5));
        open.pop();
        assert_eq!(open.len(), 0);
    }
}
