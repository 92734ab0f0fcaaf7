//! Verification of routed chip wiring.
//!
//! A chip has a set of terminals printed on its base layer, and a netlist of terminal pairs that must be connected.
//! A solution routes each pair with a wire: an ordered list of cells in a 3D grid whose base layer (`z == 0`) holds
//! the terminals. Cells are connected when they are grid-adjacent, that is when they differ by one unit along exactly
//! one axis.
//!
//! Verifying a solution means answering four questions:
//! - Connectivity: does every wire actually join its two terminals? Each net gets its own adjacency graph over its
//!   wire cells, and the terminals must be reachable from one another in it.
//! - Bounds: does every wire stay at or below the top layer, and within one cell of the terminal footprint?
//! - Overlap: do two different nets use the same cell? Terminal cells are exempt, since every net touches its own
//!   terminals and nets may share a terminal pin.
//! - Cost: a solution costs one unit per wire segment plus a fixed penalty per overlap, and the cost it claims must
//!   be exactly that.
//!
//! Nothing here stops at the first problem. [`verify`] runs every check and returns a [`VerificationReport`] holding
//! all of them, which callers inspect or hand to a [`ReportSink`].

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod bounds;
pub mod cell;
pub mod config;
pub mod cost;
pub mod error;
pub mod graph;
pub mod net;
pub mod overlap;
pub mod report;
pub mod terminal;
pub mod traits;
pub mod verify;

pub use cell::{Cell, Coords};
pub use config::VerifyConfig;
pub use error::VerifyError;
pub use net::{Net, Netlist, Solution};
pub use report::VerificationReport;
pub use terminal::TerminalRegistry;
pub use traits::{LogSink, ReportSink};
pub use verify::{verify, verify_with};
