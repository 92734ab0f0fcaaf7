//! The aggregated outcome of a verification run.

use crate::cell::Cell;
use crate::cost::CostSummary;
use crate::error::VerifyError;
use crate::net::NetId;
use crate::terminal::TerminalId;
use crate::traits::ReportSink;

/// A netlist connection that no net of the solution makes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MissingConnection {
    /// The required terminal pair.
    pub pair: (TerminalId, TerminalId),
}

/// A terminal that does not appear on its own net's wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TerminalOffWire {
    /// The net whose wire misses the terminal.
    pub net: NetId,
    /// The missing terminal.
    pub terminal: TerminalId,
    /// Where that terminal sits.
    pub cell: Cell,
}

/// A net whose wire does not join its two terminals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectivityFailure {
    /// The broken net.
    pub net: NetId,
    /// The terminals it fails to join.
    pub terminals: (TerminalId, TerminalId),
}

/// How a wire cell left the legal routing volume.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BoundsKind {
    /// Above the topmost layer.
    Height,
    /// Outside the chip footprint.
    Footprint,
}

/// A wire cell outside the legal routing volume.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoundsViolation {
    /// The offending net.
    pub net: NetId,
    /// Its two terminals.
    pub terminals: (TerminalId, TerminalId),
    /// The stray cell.
    pub cell: Cell,
    /// Which limit the cell breaks.
    pub kind: BoundsKind,
}

/// Two different nets using the same non-terminal cell.
///
/// `net_a` is always the lower net id. Ordering is by net pair, then cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Overlap {
    /// The lower net id.
    pub net_a: NetId,
    /// The higher net id.
    pub net_b: NetId,
    /// The shared cell.
    pub cell: Cell,
}

impl Overlap {
    /// Record an overlap between two nets, in either order.
    #[must_use]
    pub fn new(cell: Cell, net_a: NetId, net_b: NetId) -> Self {
        Self { net_a: net_a.min(net_b), net_b: net_a.max(net_b), cell }
    }
}

/// Everything found while verifying one solution.
///
/// Nothing here is fatal by itself; callers decide what to do with a report through [`Self::passed`] and the
/// finer-grained predicates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerificationReport {
    /// Nets whose input could not be resolved. They take no part in any other check.
    pub malformed: Vec<VerifyError>,
    /// Required connections no net makes.
    pub missing: Vec<MissingConnection>,
    /// Terminals absent from their own wire.
    pub off_wire: Vec<TerminalOffWire>,
    /// Nets whose wire does not connect its terminals.
    pub connectivity: Vec<ConnectivityFailure>,
    /// Cells above the top layer or outside the footprint.
    pub bounds: Vec<BoundsViolation>,
    /// Cells shared by different nets.
    pub overlaps: Vec<Overlap>,
    /// The cost verdict, present only if [`Self::structure_ok`] holds.
    pub cost: Option<CostSummary>,
}

impl VerificationReport {
    /// Returns true if every net resolved, is present, touches its terminals, is connected and stays in bounds.
    #[must_use]
    pub fn structure_ok(&self) -> bool {
        self.malformed.is_empty()
            && self.missing.is_empty()
            && self.off_wire.is_empty()
            && self.connectivity.is_empty()
            && self.bounds.is_empty()
    }

    /// Returns true if the cost was evaluated and matches the claimed cost.
    #[must_use]
    pub fn cost_ok(&self) -> bool {
        self.cost.as_ref().map_or(false, CostSummary::matches)
    }

    /// Returns true if the solution is accepted. Overlaps are priced into the cost rather than rejected.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.structure_ok() && self.cost_ok()
    }

    /// Hand every record of this report to `sink`, in check order.
    pub fn emit<S: ReportSink + ?Sized>(&self, sink: &mut S) {
        self.malformed.iter().for_each(|error| sink.malformed(error));
        self.missing.iter().for_each(|missing| sink.missing_connection(missing));
        self.off_wire.iter().for_each(|off_wire| sink.terminal_off_wire(off_wire));
        self.connectivity.iter().for_each(|failure| sink.connectivity_failure(failure));
        self.bounds.iter().for_each(|violation| sink.bounds_violation(violation));
        self.overlaps.iter().for_each(|overlap| sink.overlap(overlap));
        if let Some(cost) = &self.cost {
            sink.cost(cost);
        }
    }
}
