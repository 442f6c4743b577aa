//! Typed properties of a game-record node.
//!
//! Only the properties the editor and the rules engine interpret get their
//! own variants. Everything else travels as [`Property::Other`] and is carried
//! through edits untouched.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::MAX_COORDINATE;
use crate::error::{Result, SgfError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board intersection, 1-based: `x` counts columns from the left and `y`
/// counts rows from the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    /// A point with both coordinates in `1..=52`.
    pub fn new(x: u8, y: u8) -> Result<Self> {
        if (1..=MAX_COORDINATE).contains(&x) && (1..=MAX_COORDINATE).contains(&y) {
            Ok(Point { x, y })
        } else {
            Err(SgfError::InvalidPoint { x, y })
        }
    }

    /// Orthogonal neighbours inside a `width` x `height` board.
    pub fn neighbors(self, width: u8, height: u8) -> impl Iterator<Item = Point> {
        let Point { x, y } = self;
        [
            (x > 1).then(|| Point { x: x - 1, y }),
            (x < width).then(|| Point { x: x + 1, y }),
            (y > 1).then(|| Point { x, y: y - 1 }),
            (y < height).then(|| Point { x, y: y + 1 }),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Build a point set from coordinate pairs, validating each.
pub fn points<I>(coords: I) -> Result<BTreeSet<Point>>
where
    I: IntoIterator<Item = (u8, u8)>,
{
    coords.into_iter().map(|(x, y)| Point::new(x, y)).collect()
}

/// Property identifier. A node holds at most one property per identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyId {
    Black,
    White,
    Ko,
    MoveNumber,
    AddBlack,
    AddWhite,
    AddEmpty,
    PlayerToPlay,
    Size,
    Handicap,
    Other(String),
}

/// Root properties the editor does not interpret but must keep on the root.
const ROOT_IDENTIFIERS: &[&str] = &["FF", "GM", "CA", "AP", "ST"];

impl PropertyId {
    /// The SGF identifier text.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyId::Black => "B",
            PropertyId::White => "W",
            PropertyId::Ko => "KO",
            PropertyId::MoveNumber => "MN",
            PropertyId::AddBlack => "AB",
            PropertyId::AddWhite => "AW",
            PropertyId::AddEmpty => "AE",
            PropertyId::PlayerToPlay => "PL",
            PropertyId::Size => "SZ",
            PropertyId::Handicap => "HA",
            PropertyId::Other(id) => id,
        }
    }

    /// Parse identifier text, yielding the typed variant for identifiers the
    /// editor interprets.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "B" => PropertyId::Black,
            "W" => PropertyId::White,
            "KO" => PropertyId::Ko,
            "MN" => PropertyId::MoveNumber,
            "AB" => PropertyId::AddBlack,
            "AW" => PropertyId::AddWhite,
            "AE" => PropertyId::AddEmpty,
            "PL" => PropertyId::PlayerToPlay,
            "SZ" => PropertyId::Size,
            "HA" => PropertyId::Handicap,
            other => PropertyId::Other(other.to_owned()),
        }
    }

    pub fn for_move(color: Color) -> Self {
        match color {
            Color::Black => PropertyId::Black,
            Color::White => PropertyId::White,
        }
    }

    pub fn for_stones(color: Color) -> Self {
        match color {
            Color::Black => PropertyId::AddBlack,
            Color::White => PropertyId::AddWhite,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            PropertyId::Black | PropertyId::White | PropertyId::Ko | PropertyId::MoveNumber => {
                Category::Move
            }
            PropertyId::AddBlack
            | PropertyId::AddWhite
            | PropertyId::AddEmpty
            | PropertyId::PlayerToPlay => Category::Setup,
            PropertyId::Size => Category::Root,
            PropertyId::Handicap => Category::GameInfo,
            PropertyId::Other(id) if ROOT_IDENTIFIERS.contains(&id.as_str()) => Category::Root,
            PropertyId::Other(_) => Category::Other,
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Move,
    Setup,
    Root,
    GameInfo,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Property {
    /// A stone placement, or a pass when `point` is `None`.
    Move { color: Color, point: Option<Point> },
    /// Execute the move on this node even if it is illegal.
    Ko,
    MoveNumber(u32),
    AddStones { color: Color, points: BTreeSet<Point> },
    ClearPoints(BTreeSet<Point>),
    PlayerToPlay(Color),
    Size { width: u8, height: u8 },
    Handicap(u32),
    /// Payload the editor preserves but never interprets.
    Other { id: String, values: Vec<String> },
}

impl Property {
    pub fn stone(color: Color, point: Point) -> Self {
        Property::Move {
            color,
            point: Some(point),
        }
    }

    pub fn pass(color: Color) -> Self {
        Property::Move { color, point: None }
    }

    pub fn square(size: u8) -> Self {
        Property::Size {
            width: size,
            height: size,
        }
    }

    /// An uninterpreted property. Identifiers with a typed variant are
    /// refused; build those through their own constructors.
    pub fn other(id: impl Into<String>, values: Vec<String>) -> Result<Self> {
        let id = id.into();
        if !matches!(PropertyId::from_identifier(&id), PropertyId::Other(_)) {
            return Err(SgfError::ReservedIdentifier(id));
        }
        Ok(Property::Other { id, values })
    }

    pub fn id(&self) -> PropertyId {
        match self {
            Property::Move { color, .. } => PropertyId::for_move(*color),
            Property::Ko => PropertyId::Ko,
            Property::MoveNumber(_) => PropertyId::MoveNumber,
            Property::AddStones { color, .. } => PropertyId::for_stones(*color),
            Property::ClearPoints(_) => PropertyId::AddEmpty,
            Property::PlayerToPlay(_) => PropertyId::PlayerToPlay,
            Property::Size { .. } => PropertyId::Size,
            Property::Handicap(_) => PropertyId::Handicap,
            Property::Other { id, .. } => PropertyId::from_identifier(id),
        }
    }

    pub fn category(&self) -> Category {
        self.id().category()
    }

    /// The point set of a setup property that adds or clears stones.
    pub fn setup_points(&self) -> Option<&BTreeSet<Point>> {
        match self {
            Property::AddStones { points, .. } | Property::ClearPoints(points) => Some(points),
            _ => None,
        }
    }
}
