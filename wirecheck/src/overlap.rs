//! Detection of cells shared between nets.
//!
//! A net always touches its own terminals, and two nets may share a terminal pin, so terminal cells are never
//! claimed. Every other cell belongs to the first net that uses it; any later, different net using it overlaps
//! with that owner.

use std::collections::{BTreeSet, HashMap};

use crate::cell::Cell;
use crate::net::{NetId, ResolvedNet};
use crate::report::Overlap;

/// Tracks cell ownership across nets.
#[derive(Debug, Default)]
pub struct OverlapDetector {
    owners: HashMap<Cell, NetId>,
    overlaps: BTreeSet<Overlap>,
}

impl OverlapDetector {
    /// An empty detector; no cell is owned yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the non-terminal cells of `net`, recording an overlap for each cell another net already owns.
    pub fn claim(&mut self, net: &ResolvedNet) {
        for &cell in net.wire.iter().filter(|&&cell| !net.is_terminal(cell)) {
            let owner = *self.owners.entry(cell).or_insert(net.id);
            if owner != net.id {
                self.overlaps.insert(Overlap::new(cell, owner, net.id));
            }
        }
    }

    /// Number of distinct overlaps found so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.overlaps.len()
    }

    /// Returns the overlaps found, ordered by net pair and then cell.
    #[must_use]
    pub fn finish(self) -> Vec<Overlap> {
        self.overlaps.into_iter().collect()
    }
}

/// Find every overlap between `nets`.
#[must_use]
pub fn find_overlaps<'a>(nets: impl IntoIterator<Item = &'a ResolvedNet>) -> Vec<Overlap> {
    let mut detector = OverlapDetector::new();
    for net in nets {
        detector.claim(net);
    }
    detector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::Net;
    use crate::terminal::{TerminalId, TerminalRegistry};

    fn registry() -> TerminalRegistry {
        vec![(1, 0, 2), (2, 4, 2), (3, 2, 0), (4, 2, 4), (5, 4, 0)].into_iter().collect()
    }

    fn net(id: NetId, terminals: (TerminalId, TerminalId), wire: &[(i64, i64)]) -> ResolvedNet {
        Net::new(terminals, wire.iter().copied().map(Into::into).collect())
            .resolve(id, &registry())
            .expect("net to resolve")
    }

    fn crossing() -> (ResolvedNet, ResolvedNet) {
        let horizontal = net(0, (1, 2), &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        let vertical = net(1, (3, 4), &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        (horizontal, vertical)
    }

    #[test]
    fn crossing_nets_overlap_once() {
        let (horizontal, vertical) = crossing();

        let overlaps = find_overlaps([&horizontal, &vertical]);
        assert_eq!(overlaps, vec![Overlap { net_a: 0, net_b: 1, cell: Cell::new(2, 2, 0) }]);
    }

    #[test]
    fn overlap_does_not_depend_on_order() {
        let (horizontal, vertical) = crossing();

        assert_eq!(find_overlaps([&horizontal, &vertical]), find_overlaps([&vertical, &horizontal]));
    }

    #[test]
    fn shared_terminal_is_not_an_overlap() {
        // Both nets end on terminal 2 at (4, 2).
        let first = net(0, (1, 2), &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        let second = net(1, (5, 2), &[(4, 0), (4, 1), (4, 2)]);

        assert!(find_overlaps([&first, &second]).is_empty());
    }

    #[test]
    fn revisiting_own_cell_is_not_an_overlap() {
        let looping = net(0, (1, 2), &[(0, 2), (1, 2), (1, 3), (1, 2), (2, 2), (3, 2), (4, 2)]);

        assert!(find_overlaps([&looping]).is_empty());
    }

    #[test]
    fn repeated_conflict_counts_once() {
        let (horizontal, _) = crossing();
        let doubling = net(1, (3, 4), &[(2, 0), (2, 1), (2, 2), (3, 2), (2, 2), (2, 3), (2, 4)]);

        let mut detector = OverlapDetector::new();
        detector.claim(&horizontal);
        detector.claim(&doubling);
        assert_eq!(detector.count(), 2);

        let cells = detector.finish().into_iter().map(|o| o.cell).collect::<Vec<_>>();
        assert_eq!(cells, vec![Cell::new(2, 2, 0), Cell::new(3, 2, 0)]);
    }

    #[test]
    fn stacked_layers_do_not_overlap() {
        let (horizontal, _) = crossing();
        let above = Net::new(
            (3, 4),
            vec![(2, 0, 0).into(), (2, 0, 1).into(), (2, 1, 1).into(), (2, 2, 1).into(), (2, 3, 1).into(), (2, 4, 1).into(), (2, 4, 0).into()],
        )
        .resolve(1, &registry())
        .expect("net to resolve");

        assert!(find_overlaps([&horizontal, &above]).is_empty());
    }

    #[test]
    fn later_nets_conflict_with_the_first_owner() {
        // Three nets cross (2, 2); each later net conflicts with the first owner only.
        let (horizontal, vertical) = crossing();
        let third = net(2, (3, 5), &[(2, 0), (2, 1), (2, 2), (3, 2), (3, 1), (3, 0), (4, 0)]);

        let overlaps = find_overlaps([&horizontal, &vertical, &third]);
        assert_eq!(
            overlaps,
            vec![
                Overlap::new(Cell::new(2, 2, 0), 0, 1),
                Overlap::new(Cell::new(2, 2, 0), 0, 2),
                Overlap::new(Cell::new(3, 2, 0), 0, 2),
                Overlap::new(Cell::new(2, 1, 0), 1, 2),
            ]
        );

        let reversed = find_overlaps([&third, &vertical, &horizontal]);
        assert_eq!(reversed.len(), 4);
        let at_centre = reversed.iter().filter(|o| o.cell == Cell::new(2, 2, 0)).map(|o| (o.net_a, o.net_b)).collect::<Vec<_>>();
        assert_eq!(at_centre, vec![(0, 2), (1, 2)]);
    }
}
