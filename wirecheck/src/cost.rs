//! Pricing a routed solution.

use crate::config::VerifyConfig;
use crate::net::{NetId, Solution};
use crate::terminal::TerminalId;

/// Wire segments spent on one net.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NetCost {
    /// The net priced.
    pub net: NetId,
    /// Its two terminals.
    pub terminals: (TerminalId, TerminalId),
    /// Wire points minus one.
    pub segments: u64,
}

/// How the total cost of a solution is made up, and whether it matches the claimed cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CostSummary {
    /// Segments per net, in net order.
    pub nets: Vec<NetCost>,
    /// Number of overlaps priced.
    pub overlaps: usize,
    /// Overlap count times the per-overlap penalty.
    pub penalty: u64,
    /// Segments plus penalty.
    pub total: u64,
    /// The cost the solution claims.
    pub claimed: u64,
}

impl CostSummary {
    /// Total wire segments, without the overlap penalty.
    #[must_use]
    pub fn segments(&self) -> u64 {
        self.nets.iter().map(|net| net.segments).sum()
    }

    /// Returns true if the computed total equals the claimed cost.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.total == self.claimed
    }
}

/// Price a solution: one unit per wire segment plus the configured penalty per overlap.
#[must_use]
pub fn evaluate_cost(solution: &Solution, overlaps: usize, config: &VerifyConfig) -> CostSummary {
    let nets = solution
        .nets
        .iter()
        .enumerate()
        .map(|(net, n)| NetCost { net, terminals: n.terminals, segments: n.segments() })
        .collect::<Vec<_>>();

    let penalty = config.overlap_penalty * overlaps as u64;
    let total = nets.iter().map(|net| net.segments).sum::<u64>() + penalty;

    CostSummary { nets, overlaps, penalty, total, claimed: solution.claimed_cost }
}
