//! Terminals: the fixed connection points printed on the base layer.

use std::collections::HashMap;

use itertools::{Itertools, MinMaxResult};

use crate::cell::{Bounds, Cell};

/// Terminal identifier, as used by the netlist.
pub type TerminalId = u32;

/// A fixed connection point on the base layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Terminal {
    /// Netlist identifier.
    pub id: TerminalId,
    /// Where the terminal sits; always on layer 0.
    pub cell: Cell,
}

/// Every terminal of one chip, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct TerminalRegistry {
    terminals: HashMap<TerminalId, Terminal>,
}

impl TerminalRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a terminal at `(x, y)` on the base layer, replacing any previous terminal with the same id.
    pub fn insert(&mut self, id: TerminalId, x: i64, y: i64) {
        self.terminals.insert(id, Terminal { id, cell: Cell::planar(x, y) });
    }

    /// Look up a terminal by id.
    #[must_use]
    pub fn get(&self, id: TerminalId) -> Option<&Terminal> {
        self.terminals.get(&id)
    }

    /// Number of registered terminals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Returns true if no terminal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Returns the smallest footprint covering every terminal, or `None` for an empty registry.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let (min_x, max_x) = match self.terminals.values().map(|t| t.cell.x).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(x) => (x, x),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let (min_y, max_y) = match self.terminals.values().map(|t| t.cell.y).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(y) => (y, y),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        Some(Bounds { min_x, max_x, min_y, max_y })
    }
}

impl FromIterator<(TerminalId, i64, i64)> for TerminalRegistry {
    fn from_iter<I: IntoIterator<Item = (TerminalId, i64, i64)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (id, x, y) in iter {
            registry.insert(id, x, y);
        }
        registry
    }
}
