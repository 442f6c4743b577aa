//! Cursor over an ordered tree.
//!
//! The zipper does not know the shape of the tree it walks. A node type opts
//! in through [`Unzip`], which splits a node into its ordered children and
//! rebuilds a node from an updated child list. Moving down or sideways is
//! O(1); moving up rebuilds one parent from its children.

use crate::movement::Movement;
use crate::stack::Stack;

/// Decompose a node into its children and recompose it from new ones.
pub trait Unzip: Sized {
    /// Ordered children of this node.
    fn unzip(&self) -> Vec<Self>;

    /// This node with its children replaced.
    fn zip(&self, children: Vec<Self>) -> Self;
}

/// What is left of a parent once the cursor descends into one of its children.
#[derive(Clone, Debug)]
struct Crumb<T> {
    left: Stack<T>,
    parent: T,
    right: Stack<T>,
}

#[derive(Clone, Debug)]
pub struct TreeZipper<T> {
    left: Stack<T>,
    focus: T,
    right: Stack<T>,
    crumbs: Stack<Crumb<T>>,
}

impl<T: Unzip + Clone> TreeZipper<T> {
    pub fn new(root: T) -> Self {
        TreeZipper {
            left: Stack::new(),
            focus: root,
            right: Stack::new(),
            crumbs: Stack::new(),
        }
    }

    pub fn focus(&self) -> &T {
        &self.focus
    }

    /// The same position with the focused subtree replaced.
    pub fn with_focus(&self, focus: T) -> Self {
        TreeZipper {
            left: self.left.clone(),
            focus,
            right: self.right.clone(),
            crumbs: self.crumbs.clone(),
        }
    }

    /// Number of ancestors above the focus.
    pub fn depth(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_root(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn has_left(&self) -> bool {
        !self.left.is_empty()
    }

    pub fn has_right(&self) -> bool {
        !self.right.is_empty()
    }

    /// Zero-based position of the focus among its siblings.
    pub fn sibling_index(&self) -> usize {
        self.left.len()
    }

    /// Ancestors of the focus as they were when the cursor descended,
    /// innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &T> {
        self.crumbs.iter().map(|crumb| &crumb.parent)
    }

    pub fn step_down_into_first_child(&self) -> Movement<Self> {
        let mut children = self.focus.unzip().into_iter();
        let Some(first) = children.next() else {
            return Movement::failure(self.clone());
        };
        let rest: Vec<T> = children.collect();
        Movement::success(
            TreeZipper {
                left: Stack::new(),
                focus: first,
                right: Stack::from_front(rest),
                crumbs: self.crumbs.push(self.crumb()),
            },
            self.clone(),
        )
    }

    pub fn step_right(&self) -> Movement<Self> {
        match self.right.pop() {
            Some((next, right)) => Movement::success(
                TreeZipper {
                    left: self.left.push(self.focus.clone()),
                    focus: next,
                    right,
                    crumbs: self.crumbs.clone(),
                },
                self.clone(),
            ),
            None => Movement::failure(self.clone()),
        }
    }

    pub fn step_left(&self) -> Movement<Self> {
        match self.left.pop() {
            Some((prev, left)) => Movement::success(
                TreeZipper {
                    left,
                    focus: prev,
                    right: self.right.push(self.focus.clone()),
                    crumbs: self.crumbs.clone(),
                },
                self.clone(),
            ),
            None => Movement::failure(self.clone()),
        }
    }

    /// Rewrap the focus and its siblings into the parent and focus it.
    pub fn step_up(&self) -> Movement<Self> {
        let Some((crumb, crumbs)) = self.crumbs.pop() else {
            return Movement::failure(self.clone());
        };
        let parent = crumb.parent.zip(self.siblings());
        Movement::success(
            TreeZipper {
                left: crumb.left,
                focus: parent,
                right: crumb.right,
                crumbs,
            },
            self.clone(),
        )
    }

    pub fn to_root(&self) -> Movement<Self> {
        Movement::repeat(self.clone(), TreeZipper::step_up)
    }

    /// Insert `forest` as the first children of the focus and focus the
    /// first inserted tree. Fails on an empty forest.
    pub fn insert_siblings_down_left(&self, forest: Vec<T>) -> Movement<Self> {
        let mut forest = forest.into_iter();
        let Some(first) = forest.next() else {
            return Movement::failure(self.clone());
        };
        let mut right: Vec<T> = forest.collect();
        right.extend(self.focus.unzip());
        Movement::success(
            TreeZipper {
                left: Stack::new(),
                focus: first,
                right: Stack::from_front(right),
                crumbs: self.crumbs.push(self.crumb()),
            },
            self.clone(),
        )
    }

    /// Insert `forest` as the last children of the focus and focus the
    /// first inserted tree. Fails on an empty forest.
    pub fn insert_siblings_down_right(&self, forest: Vec<T>) -> Movement<Self> {
        let mut forest = forest.into_iter();
        let Some(first) = forest.next() else {
            return Movement::failure(self.clone());
        };
        let left = self
            .focus
            .unzip()
            .into_iter()
            .fold(Stack::new(), |acc, child| acc.push(child));
        let right: Vec<T> = forest.collect();
        Movement::success(
            TreeZipper {
                left,
                focus: first,
                right: Stack::from_front(right),
                crumbs: self.crumbs.push(self.crumb()),
            },
            self.clone(),
        )
    }

    /// Make the focus, and every ancestor on the way up, the first child of
    /// its parent. The cursor stays on the same subtree.
    pub fn promote(&self) -> Self {
        let (left, right) = promote_level(&self.left, &self.right);
        let crumbs = self
            .crumbs
            .iter()
            .map(|crumb| {
                let (left, right) = promote_level(&crumb.left, &crumb.right);
                Crumb {
                    left,
                    parent: crumb.parent.clone(),
                    right,
                }
            })
            .collect::<Vec<_>>();
        TreeZipper {
            left,
            focus: self.focus.clone(),
            right,
            crumbs: Stack::from_front(crumbs),
        }
    }

    /// Rebuild the whole tree.
    pub fn commit(&self) -> T {
        self.to_root().stay().focus
    }

    fn crumb(&self) -> Crumb<T> {
        Crumb {
            left: self.left.clone(),
            parent: self.focus.clone(),
            right: self.right.clone(),
        }
    }

    fn siblings(&self) -> Vec<T> {
        let mut out = self.left.to_vec_bottom_up();
        out.push(self.focus.clone());
        out.extend(self.right.iter().cloned());
        out
    }
}

// Moves every left sibling over to the right side, keeping their order, so
// the focus becomes the first child.
fn promote_level<T: Clone>(left: &Stack<T>, right: &Stack<T>) -> (Stack<T>, Stack<T>) {
    let right = left.iter().cloned().fold(right.clone(), |acc, v| acc.push(v));
    (Stack::new(), right)
}
