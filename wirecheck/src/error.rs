//! Errors for input that cannot be checked at all.

use thiserror::Error;

use crate::net::NetId;
use crate::terminal::TerminalId;

/// A net whose input could not be resolved into cells and terminals.
///
/// These never abort a verification run: the offending net is recorded in the report and left out of every
/// later check.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum VerifyError {
    /// A wire point with neither two nor three coordinates.
    #[error("net {net}: wire point has {arity} coordinates, expected 2 or 3")]
    WrongArity {
        /// The net holding the point.
        net: NetId,
        /// How many coordinates the point has.
        arity: usize,
    },

    /// A wire point with a negative coordinate.
    #[error("net {net}: wire point {coords:?} has a negative coordinate")]
    NegativeCoordinate {
        /// The net holding the point.
        net: NetId,
        /// The point as supplied.
        coords: Vec<i64>,
    },

    /// A terminal id the registry does not know.
    #[error("net {net}: unknown terminal {terminal}")]
    UnknownTerminal {
        /// The net naming the terminal.
        net: NetId,
        /// The unknown id.
        terminal: TerminalId,
    },

    /// A net without any wire.
    #[error("net {net}: wire is empty")]
    EmptyWire {
        /// The empty net.
        net: NetId,
    },
}

impl VerifyError {
    /// The net this error belongs to.
    #[must_use]
    pub const fn net(&self) -> NetId {
        match *self {
            Self::WrongArity { net, .. }
            | Self::NegativeCoordinate { net, .. }
            | Self::UnknownTerminal { net, .. }
            | Self::EmptyWire { net } => net,
        }
    }
}

/// Result type for resolving solution input.
pub type Result<T> = std::result::Result<T, VerifyError>;
