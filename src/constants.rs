//! Constants for board geometry and rule inference.
//!
//! Board dimensions are not fixed at compile time: every game record carries
//! its own size on the root node, and these values only fill in what the
//! record leaves out.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when the root node carries no size property.
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Largest coordinate a point may carry (columns and rows `a..z`, `A..Z`).
pub const MAX_COORDINATE: u8 = 52;

/// Smallest legal board dimension.
pub const MIN_BOARD_SIZE: u8 = 1;

// =============================================================================
// Turn Order
// =============================================================================

/// Handicap count from which White makes the first move.
pub const HANDICAP_WHITE_FIRST: u32 = 2;

// =============================================================================
// Playouts
// =============================================================================

/// Consecutive passes that end a random playout.
pub const PLAYOUT_PASSES: usize = 2;

/// Random points sampled before a playout falls back to a full board scan.
pub const PLAYOUT_SAMPLES: usize = 64;
