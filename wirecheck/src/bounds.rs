//! Layer and footprint limits.

use crate::cell::{exceeds_height, Bounds};
use crate::config::VerifyConfig;
use crate::net::ResolvedNet;
use crate::report::{BoundsKind, BoundsViolation};

/// Check every cell of a net against the layer limit and the chip footprint.
///
/// A cell breaking both rules is reported twice, once per kind. Without `bounds` (an empty terminal registry)
/// only the layer limit is checked.
#[must_use]
pub fn check_bounds(net: &ResolvedNet, bounds: Option<Bounds>, config: &VerifyConfig) -> Vec<BoundsViolation> {
    let terminals = (net.terminals.0.id, net.terminals.1.id);
    let max_layer = i64::from(config.max_layer);
    let mut violations = Vec::new();

    for &cell in &net.wire {
        if exceeds_height(cell, max_layer) {
            violations.push(BoundsViolation { net: net.id, terminals, cell, kind: BoundsKind::Height });
        }

        if let Some(bounds) = bounds {
            if !bounds.contains(cell, config.bounds_margin) {
                violations.push(BoundsViolation { net: net.id, terminals, cell, kind: BoundsKind::Footprint });
            }
        }
    }

    violations
}
