//! Consumers of verification reports.

use crate::cost::CostSummary;
use crate::error::VerifyError;
use crate::report::{BoundsKind, BoundsViolation, ConnectivityFailure, MissingConnection, Overlap, TerminalOffWire};

/// A consumer of verification results, such as a report formatter.
///
/// Every method defaults to ignoring its record, so a sink only implements what it cares about.
pub trait ReportSink {
    /// A net whose input could not be resolved.
    fn malformed(&mut self, _error: &VerifyError) {}
    /// A required connection without a net.
    fn missing_connection(&mut self, _missing: &MissingConnection) {}
    /// A terminal absent from its own wire.
    fn terminal_off_wire(&mut self, _off_wire: &TerminalOffWire) {}
    /// A net whose wire does not connect its terminals.
    fn connectivity_failure(&mut self, _failure: &ConnectivityFailure) {}
    /// A wire cell outside the routing volume.
    fn bounds_violation(&mut self, _violation: &BoundsViolation) {}
    /// A cell shared by two nets.
    fn overlap(&mut self, _overlap: &Overlap) {}
    /// The cost verdict, if the cost was evaluated.
    fn cost(&mut self, _summary: &CostSummary) {}
}

/// Forwards every record to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn malformed(&mut self, error: &VerifyError) {
        log::error!("{}", error);
    }

    fn missing_connection(&mut self, missing: &MissingConnection) {
        log::warn!("no net connects terminals {} and {}", missing.pair.0, missing.pair.1);
    }

    fn terminal_off_wire(&mut self, off_wire: &TerminalOffWire) {
        log::warn!("net {}: terminal {} at {} is not on the wire", off_wire.net, off_wire.terminal, off_wire.cell);
    }

    fn connectivity_failure(&mut self, failure: &ConnectivityFailure) {
        log::warn!("net {}: terminals {} and {} are not connected", failure.net, failure.terminals.0, failure.terminals.1);
    }

    fn bounds_violation(&mut self, violation: &BoundsViolation) {
        let kind = match violation.kind {
            BoundsKind::Height => "above the top layer",
            BoundsKind::Footprint => "outside the footprint",
        };
        log::warn!("net {}: cell {} is {}", violation.net, violation.cell, kind);
    }

    fn overlap(&mut self, overlap: &Overlap) {
        log::warn!("nets {} and {} overlap at {}", overlap.net_a, overlap.net_b, overlap.cell);
    }

    fn cost(&mut self, summary: &CostSummary) {
        for net in &summary.nets {
            log::debug!("net {}: {} segments between {} and {}", net.net, net.segments, net.terminals.0, net.terminals.1);
        }

        if summary.matches() {
            log::info!("cost {} matches ({} segments, {} overlaps)", summary.total, summary.segments(), summary.overlaps);
        } else {
            log::warn!(
                "claimed cost {} but computed {} ({} segments, {} for {} overlaps)",
                summary.claimed,
                summary.total,
                summary.segments(),
                summary.penalty,
                summary.overlaps
            );
        }
    }
}
