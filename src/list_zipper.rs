//! Cursor over a non-empty sequence.
//!
//! The zipper splits the sequence into a focused element, the elements to its
//! left (nearest first) and the elements to its right (nearest first).
//! Stepping and inserting next to the focus are O(1); [`ListZipper::commit`]
//! rebuilds the whole sequence.

use crate::movement::Movement;
use crate::stack::Stack;

#[derive(Clone, Debug)]
pub struct ListZipper<T> {
    left: Stack<T>,
    focus: T,
    right: Stack<T>,
}

impl<T: Clone> ListZipper<T> {
    /// A zipper over a single element.
    pub fn new(focus: T) -> Self {
        ListZipper {
            left: Stack::new(),
            focus,
            right: Stack::new(),
        }
    }

    /// Focus `focus`, with `rest` following it in order.
    pub fn starting_at(focus: T, rest: Vec<T>) -> Self {
        ListZipper {
            left: Stack::new(),
            focus,
            right: Stack::from_front(rest),
        }
    }

    /// Focus `focus`, with `init` preceding it in order.
    pub fn ending_at(init: Vec<T>, focus: T) -> Self {
        ListZipper {
            left: init.into_iter().fold(Stack::new(), |acc, v| acc.push(v)),
            focus,
            right: Stack::new(),
        }
    }

    /// Focus the first element, or `None` for an empty sequence.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        let mut items = items.into_iter();
        let focus = items.next()?;
        Some(Self::starting_at(focus, items.collect()))
    }

    /// Focus the last element, or `None` for an empty sequence.
    pub fn at_end(mut items: Vec<T>) -> Option<Self> {
        let focus = items.pop()?;
        Some(Self::ending_at(items, focus))
    }

    pub fn focus(&self) -> &T {
        &self.focus
    }

    /// The same position with the focused element replaced.
    pub fn with_focus(&self, focus: T) -> Self {
        ListZipper {
            left: self.left.clone(),
            focus,
            right: self.right.clone(),
        }
    }

    pub fn has_left(&self) -> bool {
        !self.left.is_empty()
    }

    pub fn has_right(&self) -> bool {
        !self.right.is_empty()
    }

    /// Zero-based index of the focus.
    pub fn index(&self) -> usize {
        self.left.len()
    }

    pub fn len(&self) -> usize {
        self.left.len() + 1 + self.right.len()
    }

    /// Elements left of the focus, nearest first.
    pub fn left(&self) -> impl Iterator<Item = &T> {
        self.left.iter()
    }

    /// Elements right of the focus, nearest first.
    pub fn right(&self) -> impl Iterator<Item = &T> {
        self.right.iter()
    }

    pub fn peek_right(&self) -> Option<&T> {
        self.right.peek()
    }

    pub fn step_right(&self) -> Movement<Self> {
        match self.right.pop() {
            Some((next, right)) => Movement::success(
                ListZipper {
                    left: self.left.push(self.focus.clone()),
                    focus: next,
                    right,
                },
                self.clone(),
            ),
            None => Movement::failure(self.clone()),
        }
    }

    pub fn step_left(&self) -> Movement<Self> {
        match self.left.pop() {
            Some((prev, left)) => Movement::success(
                ListZipper {
                    left,
                    focus: prev,
                    right: self.right.push(self.focus.clone()),
                },
                self.clone(),
            ),
            None => Movement::failure(self.clone()),
        }
    }

    pub fn step_to_start(&self) -> Movement<Self> {
        Movement::repeat(self.clone(), ListZipper::step_left)
    }

    pub fn step_to_end(&self) -> Movement<Self> {
        Movement::repeat(self.clone(), ListZipper::step_right)
    }

    /// Insert `value` directly right of the focus. The focus does not move.
    pub fn insert_right(&self, value: T) -> Self {
        ListZipper {
            left: self.left.clone(),
            focus: self.focus.clone(),
            right: self.right.push(value),
        }
    }

    /// Insert `value` directly left of the focus. The focus does not move.
    pub fn insert_left(&self, value: T) -> Self {
        ListZipper {
            left: self.left.push(value),
            focus: self.focus.clone(),
            right: self.right.clone(),
        }
    }

    /// Cut off everything right of the focus, returning the kept zipper and
    /// the removed elements in order.
    pub fn truncate_right(&self) -> (Self, Vec<T>) {
        let removed = self.right.iter().cloned().collect();
        (
            ListZipper {
                left: self.left.clone(),
                focus: self.focus.clone(),
                right: Stack::new(),
            },
            removed,
        )
    }

    /// The full sequence: left side reversed, the focus, then the right side.
    pub fn commit(&self) -> Vec<T> {
        let mut out = self.left.to_vec_bottom_up();
        out.reserve(1 + self.right.len());
        out.push(self.focus.clone());
        out.extend(self.right.iter().cloned());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zipper() -> ListZipper<i32> {
        ListZipper::from_vec(vec![1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_from_vec_and_at_end() {
        assert!(ListZipper::<i32>::from_vec(vec![]).is_none());
        assert!(ListZipper::<i32>::at_end(vec![]).is_none());
        let z = ListZipper::at_end(vec![1, 2, 3]).unwrap();
        assert_eq!(*z.focus(), 3);
        assert_eq!(z.index(), 2);
        assert_eq!(z.commit(), vec![1, 2, 3]);
    }

    #[test]
    fn test_steps() {
        let z = zipper().step_right().stay().step_right().stay();
        assert_eq!(*z.focus(), 3);
        assert_eq!(z.left().copied().collect::<Vec<_>>(), vec![2, 1]);
        let back = z.step_left().stay();
        assert_eq!(*back.focus(), 2);
    }

    #[test]
    fn test_steps_fail_at_ends() {
        let z = zipper();
        let m = z.step_left();
        assert!(m.is_failure());
        assert_eq!(*m.origin().focus(), 1);
        let end = z.step_to_end().stay();
        assert_eq!(*end.focus(), 4);
        assert!(end.step_right().is_failure());
    }

    #[test]
    fn test_commit_after_navigation() {
        let z = zipper()
            .step_right()
            .stay()
            .step_right()
            .stay()
            .step_left()
            .stay()
            .step_to_end()
            .stay();
        assert_eq!(z.commit(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_inserts() {
        let z = zipper().step_right().stay();
        assert_eq!(z.insert_right(9).commit(), vec![1, 2, 9, 3, 4]);
        assert_eq!(z.insert_left(9).commit(), vec![1, 9, 2, 3, 4]);
        assert_eq!(z.commit(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_truncate_right() {
        let z = zipper().step_right().stay();
        let (kept, removed) = z.truncate_right();
        assert_eq!(kept.commit(), vec![1, 2]);
        assert_eq!(removed, vec![3, 4]);
    }
}
