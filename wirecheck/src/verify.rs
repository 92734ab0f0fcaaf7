//! Running every check over a solution.

use rayon::prelude::*;

use crate::bounds::check_bounds;
use crate::cell::Bounds;
use crate::config::VerifyConfig;
use crate::cost::evaluate_cost;
use crate::error::Result;
use crate::graph::is_connected;
use crate::net::{Net, NetId, Netlist, ResolvedNet, Solution};
use crate::overlap::find_overlaps;
use crate::report::{BoundsViolation, ConnectivityFailure, MissingConnection, TerminalOffWire, VerificationReport};
use crate::terminal::TerminalRegistry;

/// The outcome of the checks that only look at a single net.
struct NetCheck {
    net: ResolvedNet,
    off_wire: Vec<TerminalOffWire>,
    connected: bool,
    bounds: Vec<BoundsViolation>,
}

fn check_net(id: NetId, net: &Net, registry: &TerminalRegistry, bounds: Option<Bounds>, config: &VerifyConfig) -> Result<NetCheck> {
    let net = net.resolve(id, registry)?;

    let off_wire = net
        .terminals_off_wire()
        .map(|terminal| TerminalOffWire { net: id, terminal: terminal.id, cell: terminal.cell })
        .collect();
    let connected = is_connected(&net);
    let bounds = check_bounds(&net, bounds, config);

    log::debug!("net {}: {} cells, connected: {}, {} out of bounds", id, net.wire.len(), connected, bounds.len());

    Ok(NetCheck { net, off_wire, connected, bounds })
}

/// Verify `solution` with the default configuration and `max_layer` as the topmost layer.
#[must_use]
pub fn verify(solution: &Solution, registry: &TerminalRegistry, max_layer: u32) -> VerificationReport {
    verify_with(solution, registry, None, &VerifyConfig::with_max_layer(max_layer))
}

/// Verify `solution`, optionally checking it against the connections `netlist` requires.
///
/// Every check runs, whatever the others find; the cost is only evaluated once the solution is structurally
/// sound, as an overlap count over broken wires means nothing.
#[must_use]
pub fn verify_with(
    solution: &Solution,
    registry: &TerminalRegistry,
    netlist: Option<&Netlist>,
    config: &VerifyConfig,
) -> VerificationReport {
    let mut report = VerificationReport::default();

    if let Some(netlist) = netlist {
        report.missing = netlist.missing(solution).into_iter().map(|pair| MissingConnection { pair }).collect();
    }

    let bounds = registry.bounds();

    let checks = solution
        .nets
        .par_iter()
        .enumerate()
        .map(|(id, net)| check_net(id, net, registry, bounds, config))
        .collect::<Vec<_>>();

    let mut resolved = Vec::with_capacity(checks.len());

    for check in checks {
        match check {
            Ok(check) => {
                report.off_wire.extend(check.off_wire);
                if !check.connected {
                    let terminals = (check.net.terminals.0.id, check.net.terminals.1.id);
                    report.connectivity.push(ConnectivityFailure { net: check.net.id, terminals });
                }
                report.bounds.extend(check.bounds);
                resolved.push(check.net);
            }
            Err(error) => {
                log::debug!("net {} excluded from further checks", error.net());
                report.malformed.push(error);
            }
        }
    }

    report.overlaps = find_overlaps(&resolved);

    if report.structure_ok() {
        report.cost = Some(evaluate_cost(solution, report.overlaps.len(), config));
    }

    log::info!(
        "verified {} nets: {} malformed, {} disconnected, {} out of bounds, {} overlaps",
        solution.nets.len(),
        report.malformed.len(),
        report.connectivity.len(),
        report.bounds.len(),
        report.overlaps.len()
    );

    report
}
