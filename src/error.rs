//! Error types for rule violations and malformed input.
//!
//! Navigation failures are not errors; they are reported through
//! [`Movement`](crate::movement::Movement).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SgfError>;

/// Reason a stone placement was refused by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    /// Point lies beyond the board dimensions
    #[error("placed outside the board")]
    OutsideBoard,
    /// The other color is expected to move
    #[error("not this color's turn")]
    NotYourTurn,
    /// Point is not empty
    #[error("point is occupied")]
    Occupied,
    /// Move recreates the position one node back (ko)
    #[error("position is repeating")]
    Repeating,
    /// Placed stone has no liberties after capture resolution
    #[error("suicide")]
    Suicide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgfError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("point ({x}, {y}) is outside the coordinate range 1..=52")]
    InvalidPoint { x: u8, y: u8 },

    #[error("invalid board size {width}x{height}")]
    InvalidBoardSize { width: u8, height: u8 },

    #[error("game tree sequence must contain at least one node")]
    EmptySequence,

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("identifier {0} has a typed property")]
    ReservedIdentifier(String),

    #[error("property {0} cannot be added to this node")]
    MisplacedProperty(String),
}

impl SgfError {
    /// The rule violation behind this error, if it is one.
    #[must_use]
    pub fn illegal_move(&self) -> Option<IllegalMove> {
        match self {
            Self::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}
