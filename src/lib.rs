//! SGF-Editor: a persistent editor for branching Go game records.
//!
//! A game record is a tree of nodes. This crate lets a caller walk through
//! it (forward, backward, into and between variations), play moves and
//! setup actions that never discard an existing line of play, and ask the
//! rules engine whether a stone placement is legal.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and rule constants
//! - [`error`] - Rule violations and malformed input
//! - [`movement`] - Outcome of a navigation step
//! - [`stack`] - Persistent stack shared by the zippers
//! - [`list_zipper`] - Cursor over a sequence
//! - [`tree_zipper`] - Cursor over an ordered tree
//! - [`property`] - Typed node properties, colors and points
//! - [`node`] - Property sets and setup merging
//! - [`game_tree`] - Sequences of nodes with variations
//! - [`board`] - Board reconstruction, captures and suicide
//! - [`coord`] - Human-readable coordinates
//! - [`config`] - Editor configuration
//! - [`editor`] - Navigation, editing and legality checks
//! - [`playout`] - Random legal-move playouts
//!
//! ## Example
//!
//! ```
//! use sgf_editor::editor::GameTreeEditor;
//! use sgf_editor::game_tree::GameTree;
//! use sgf_editor::node::Node;
//! use sgf_editor::property::{Color, Point, Property};
//!
//! let root = Node::new().with(Property::square(9));
//! let editor = GameTreeEditor::new(GameTree::new(root));
//!
//! // Play two moves, take one back and try something else.
//! let editor = editor.place_stone(Color::Black, Point::new(3, 3)?)?;
//! let editor = editor.place_stone(Color::White, Point::new(7, 7)?)?;
//! let editor = editor.previous_node().stay();
//! let editor = editor.place_stone(Color::White, Point::new(5, 5)?)?;
//!
//! // Both white replies are kept; the newest comes first.
//! let record = editor.commit();
//! assert_eq!(record.children().len(), 2);
//! # Ok::<(), sgf_editor::error::SgfError>(())
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod coord;
pub mod editor;
pub mod error;
pub mod game_tree;
pub mod list_zipper;
pub mod movement;
pub mod node;
pub mod playout;
pub mod property;
pub mod stack;
pub mod tree_zipper;
