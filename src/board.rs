//! Board simulator.
//!
//! A [`Board`] is never stored in the game record. It is rebuilt on demand by
//! replaying the nodes on the path from the root to a position: setup
//! properties place and remove stones directly, moves go through
//! [`Board::place_stone`] with full capture handling.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::trace;

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_COORDINATE, MIN_BOARD_SIZE};
use crate::error::{IllegalMove, Result, SgfError};
use crate::node::Node;
use crate::property::{Color, Point, Property, PropertyId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    stones: HashMap<Point, Color>,
    black_captures: usize,
    white_captures: usize,
}

/// What happened when a stone was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Enemy stones removed by the placement
    pub captures: usize,
    /// The placed stone's own group was removed for lack of liberties
    pub suicide: bool,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Result<Self> {
        let valid = MIN_BOARD_SIZE..=MAX_COORDINATE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(SgfError::InvalidBoardSize { width, height });
        }
        Ok(Self {
            width,
            height,
            stones: HashMap::new(),
            black_captures: 0,
            white_captures: 0,
        })
    }

    pub fn square(size: u8) -> Result<Self> {
        Self::new(size, size)
    }

    /// Replay `path` from the root onto an empty board.
    ///
    /// The board takes its size from the first node's size property, falling
    /// back to `default_size` when there is none.
    pub fn from_path<'a, I>(path: I, default_size: u8) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut path = path.into_iter().peekable();
        let mut board = match path.peek().and_then(|root| root.get(&PropertyId::Size)) {
            Some(Property::Size { width, height }) => Board::new(*width, *height)?,
            _ => Board::square(default_size)?,
        };
        for node in path {
            board.apply(node)?;
        }
        Ok(board)
    }

    /// Apply the setup and move properties of one node.
    ///
    /// Cleared points are removed first, then added stones are placed, then
    /// the move is played.
    pub fn apply(&mut self, node: &Node) -> Result<()> {
        if let Some(points) = node.setup_points(&PropertyId::AddEmpty) {
            for &point in points {
                self.clear(point)?;
            }
        }
        for color in [Color::Black, Color::White] {
            if let Some(points) = node.setup_points(&PropertyId::for_stones(color)) {
                for &point in points {
                    self.set_stone(color, point)?;
                }
            }
        }
        if let Some((color, Some(point))) = node.played_move() {
            self.place_stone(color, point)?;
        }
        Ok(())
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        (1..=self.width).contains(&point.x) && (1..=self.height).contains(&point.y)
    }

    pub fn get(&self, point: Point) -> Option<Color> {
        self.stones.get(&point).copied()
    }

    pub fn is_empty_at(&self, point: Point) -> bool {
        !self.stones.contains_key(&point)
    }

    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.stones.iter().map(|(p, c)| (*p, *c))
    }

    pub fn stone_count(&self) -> usize {
        self.stones.len()
    }

    /// Stones captured by `color` so far.
    pub fn captures(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    /// Whether both boards hold exactly the same stones, ignoring captures.
    pub fn same_stones(&self, other: &Board) -> bool {
        self.stones == other.stones
    }

    fn check_bounds(&self, point: Point) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(IllegalMove::OutsideBoard.into())
        }
    }

    /// Put a stone down without any capture handling.
    pub fn set_stone(&mut self, color: Color, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        self.stones.insert(point, color);
        Ok(())
    }

    /// Empty a point.
    pub fn clear(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        self.stones.remove(&point);
        Ok(())
    }

    /// Place a stone and resolve captures.
    ///
    /// Adjacent enemy groups left without liberties are removed first and
    /// credited to `color`. Only then is the placed stone's own group checked;
    /// if it has no liberties it is removed and credited to the opponent.
    pub fn place_stone(&mut self, color: Color, point: Point) -> Result<MoveResult> {
        self.check_bounds(point)?;
        self.stones.insert(point, color);

        let opp = color.opponent();
        let mut captures = 0;
        for n in point.neighbors(self.width, self.height) {
            if self.get(n) == Some(opp) && self.liberties(n) == 0 {
                captures += self.remove_group(n);
            }
        }
        if captures > 0 {
            trace!("{color} at {point} captures {captures}");
            *self.captures_mut(color) += captures;
        }

        let mut suicide = false;
        if self.liberties(point) == 0 {
            let lost = self.remove_group(point);
            trace!("{color} at {point} is suicide, losing {lost}");
            *self.captures_mut(opp) += lost;
            suicide = true;
        }
        Ok(MoveResult { captures, suicide })
    }

    fn captures_mut(&mut self, color: Color) -> &mut usize {
        match color {
            Color::Black => &mut self.black_captures,
            Color::White => &mut self.white_captures,
        }
    }

    fn remove_group(&mut self, start: Point) -> usize {
        let group = self.group(start);
        for p in &group {
            self.stones.remove(p);
        }
        group.len()
    }

    /// All stones connected to `start` through same-colored orthogonal
    /// neighbours. Empty if `start` is empty.
    pub fn group(&self, start: Point) -> Vec<Point> {
        let Some(color) = self.get(start) else {
            return Vec::new();
        };
        let mut stack = vec![start];
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        while let Some(pt) = stack.pop() {
            if !visited.insert(pt) {
                continue;
            }
            out.push(pt);
            for n in pt.neighbors(self.width, self.height) {
                if !visited.contains(&n) && self.get(n) == Some(color) {
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Number of distinct empty points adjacent to the group at `start`.
    pub fn liberties(&self, start: Point) -> usize {
        let mut liberties = HashSet::new();
        for pt in self.group(start) {
            for n in pt.neighbors(self.width, self.height) {
                if self.is_empty_at(n) {
                    liberties.insert(n);
                }
            }
        }
        liberties.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_SIZE,
            height: DEFAULT_BOARD_SIZE,
            stones: HashMap::new(),
            black_captures: 0,
            white_captures: 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.height {
            for x in 1..=self.width {
                let ch = match self.get(Point { x, y }) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
