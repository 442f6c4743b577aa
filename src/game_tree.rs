//! Game trees: a main-line sequence of nodes plus the variations that branch
//! from its last node.

use std::rc::Rc;

use crate::error::{Result, SgfError};
use crate::node::Node;
use crate::tree_zipper::Unzip;

/// A non-empty sequence of nodes followed by child game trees.
///
/// Both parts are shared between clones; rebuilding a tree with new children
/// reuses the sequence and every untouched child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameTree {
    sequence: Rc<Vec<Node>>,
    children: Rc<Vec<GameTree>>,
}

impl GameTree {
    /// A tree holding a single node and no variations.
    pub fn new(node: Node) -> Self {
        GameTree {
            sequence: Rc::new(vec![node]),
            children: Rc::new(Vec::new()),
        }
    }

    pub fn from_parts(sequence: Vec<Node>, children: Vec<GameTree>) -> Result<Self> {
        if sequence.is_empty() {
            return Err(SgfError::EmptySequence);
        }
        Ok(GameTree {
            sequence: Rc::new(sequence),
            children: Rc::new(children),
        })
    }

    pub fn builder(root: Node) -> GameTreeBuilder {
        GameTreeBuilder {
            sequence: vec![root],
            children: Vec::new(),
        }
    }

    pub fn sequence(&self) -> &[Node] {
        &self.sequence
    }

    pub fn children(&self) -> &[GameTree] {
        &self.children
    }

    pub fn first_node(&self) -> &Node {
        &self.sequence[0]
    }

    /// A tree from parts already known to be valid.
    pub(crate) fn from_nodes(sequence: Vec<Node>, children: Vec<GameTree>) -> Self {
        debug_assert!(!sequence.is_empty());
        GameTree {
            sequence: Rc::new(sequence),
            children: Rc::new(children),
        }
    }

    /// The same children under a new, non-empty sequence.
    pub(crate) fn with_sequence(&self, sequence: Vec<Node>) -> Self {
        debug_assert!(!sequence.is_empty());
        GameTree {
            sequence: Rc::new(sequence),
            children: Rc::clone(&self.children),
        }
    }

    /// Total number of nodes in this tree and all its variations.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            count += tree.sequence.len();
            pending.extend(tree.children.iter());
        }
        count
    }

    /// Nodes of the left-most line: this sequence, then the first variation's,
    /// and so on down.
    pub fn main_line(&self) -> Vec<&Node> {
        let mut line = Vec::new();
        let mut tree = Some(self);
        while let Some(current) = tree {
            line.extend(current.sequence.iter());
            tree = current.children.first();
        }
        line
    }
}

impl Unzip for GameTree {
    fn unzip(&self) -> Vec<Self> {
        self.children.as_ref().clone()
    }

    fn zip(&self, children: Vec<Self>) -> Self {
        GameTree {
            sequence: Rc::clone(&self.sequence),
            children: Rc::new(children),
        }
    }
}

/// Assembles a [`GameTree`] node by node.
#[derive(Debug, Clone)]
pub struct GameTreeBuilder {
    sequence: Vec<Node>,
    children: Vec<GameTree>,
}

impl GameTreeBuilder {
    /// Append a node to the main-line sequence.
    pub fn node(mut self, node: Node) -> Self {
        self.sequence.push(node);
        self
    }

    /// Add a variation after the last node of the sequence.
    pub fn variation(mut self, tree: GameTree) -> Self {
        self.children.push(tree);
        self
    }

    pub fn build(self) -> GameTree {
        GameTree {
            sequence: Rc::new(self.sequence),
            children: Rc::new(self.children),
        }
    }
}

// Unlink nested variations iteratively so very deep records drop safely.
impl Drop for GameTree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some(children) = Rc::get_mut(&mut self.children) {
            pending.append(children);
        }
        while let Some(mut tree) = pending.pop() {
            if let Some(children) = Rc::get_mut(&mut tree.children) {
                pending.append(children);
            }
        }
    }
}
