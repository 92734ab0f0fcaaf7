//! Nets, solutions and netlists.

use std::collections::HashSet;

use crate::cell::{Cell, Coords};
use crate::error::{Result, VerifyError};
use crate::terminal::{Terminal, TerminalId, TerminalRegistry};

/// Index of a net within its solution, in the order the loader produced them.
pub type NetId = usize;

/// One required connection and the wire claimed to realise it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Net {
    /// The two terminals to connect.
    pub terminals: (TerminalId, TerminalId),
    /// Ordered wire points, as supplied.
    pub wire: Vec<Coords>,
}

impl Net {
    /// A net joining `terminals` along `wire`.
    #[must_use]
    pub fn new(terminals: (TerminalId, TerminalId), wire: Vec<Coords>) -> Self {
        Self { terminals, wire }
    }

    /// Number of wire segments, which is one less than the number of wire points.
    #[must_use]
    pub fn segments(&self) -> u64 {
        self.wire.len().saturating_sub(1) as u64
    }

    /// Resolve terminal ids and wire points against the registry.
    ///
    /// # Errors
    /// Returns the first problem found: an empty wire, an unknown terminal, or a malformed wire point.
    pub fn resolve(&self, id: NetId, registry: &TerminalRegistry) -> Result<ResolvedNet> {
        if self.wire.is_empty() {
            return Err(VerifyError::EmptyWire { net: id });
        }

        let lookup = |terminal| registry.get(terminal).copied().ok_or(VerifyError::UnknownTerminal { net: id, terminal });
        let terminals = (lookup(self.terminals.0)?, lookup(self.terminals.1)?);

        let wire = self.wire.iter().map(|coords| coords.to_cell(id)).collect::<Result<Vec<_>>>()?;

        Ok(ResolvedNet { id, terminals, wire })
    }
}

/// A net with its terminals looked up and its wire converted into cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedNet {
    /// Position of the net in its solution.
    pub id: NetId,
    /// Both terminals, in the order the net names them.
    pub terminals: (Terminal, Terminal),
    /// Wire cells in the order supplied, duplicates included.
    pub wire: Vec<Cell>,
}

impl ResolvedNet {
    /// Returns true if `cell` is one of this net's own terminals.
    #[must_use]
    pub fn is_terminal(&self, cell: Cell) -> bool {
        cell == self.terminals.0.cell || cell == self.terminals.1.cell
    }

    /// Returns the terminals that do not appear anywhere on the wire.
    pub fn terminals_off_wire(&self) -> impl Iterator<Item = Terminal> + '_ {
        [self.terminals.0, self.terminals.1].into_iter().filter(move |t| !self.wire.contains(&t.cell))
    }
}

/// Every net of one routed chip, plus the total cost the solution claims.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Solution {
    /// The nets, indexed by [`NetId`].
    pub nets: Vec<Net>,
    /// Total cost the router reported.
    pub claimed_cost: u64,
}

impl Solution {
    /// A solution made of `nets`, claiming `claimed_cost`.
    #[must_use]
    pub fn new(nets: Vec<Net>, claimed_cost: u64) -> Self {
        Self { nets, claimed_cost }
    }
}

/// The connections a chip requires, as unordered terminal pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Netlist {
    /// Required terminal pairs.
    pub pairs: Vec<(TerminalId, TerminalId)>,
}

impl Netlist {
    /// A netlist requiring each of `pairs`.
    #[must_use]
    pub fn new(pairs: Vec<(TerminalId, TerminalId)>) -> Self {
        Self { pairs }
    }

    /// Returns the required pairs that no net of `solution` connects, in either orientation.
    #[must_use]
    pub fn missing(&self, solution: &Solution) -> Vec<(TerminalId, TerminalId)> {
        let made = solution
            .nets
            .iter()
            .flat_map(|net| {
                let (a, b) = net.terminals;
                [(a, b), (b, a)]
            })
            .collect::<HashSet<_>>();

        self.pairs.iter().copied().filter(|pair| !made.contains(pair)).collect()
    }
}
