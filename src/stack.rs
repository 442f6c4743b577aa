//! Persistent singly-linked stack.
//!
//! Cloning a stack shares every cell with the original; pushing onto a clone
//! never disturbs the other copy. Both zippers keep their left and right
//! context in these stacks, so a step or an insert is O(1).

use std::rc::Rc;

struct Cell<T> {
    head: T,
    tail: Option<Rc<Cell<T>>>,
}

pub struct Stack<T> {
    top: Option<Rc<Cell<T>>>,
    len: usize,
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            top: self.top.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|cell| &cell.head)
    }

    /// A new stack with `value` on top of this one.
    pub fn push(&self, value: T) -> Self {
        Stack {
            top: Some(Rc::new(Cell {
                head: value,
                tail: self.top.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// This stack without its top element.
    pub fn pull(&self) -> Option<Self> {
        self.top.as_ref().map(|cell| Stack {
            top: cell.tail.clone(),
            len: self.len - 1,
        })
    }

    /// Iterate from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T: Clone> Stack<T> {
    /// Top element and the rest of the stack.
    pub fn pop(&self) -> Option<(T, Self)> {
        let cell = self.top.as_ref()?;
        Some((
            cell.head.clone(),
            Stack {
                top: cell.tail.clone(),
                len: self.len - 1,
            },
        ))
    }

    /// The same elements in the opposite order.
    pub fn reversed(&self) -> Self {
        self.iter().cloned().fold(Stack::new(), |acc, v| acc.push(v))
    }

    /// Elements from the bottom up.
    pub fn to_vec_bottom_up(&self) -> Vec<T> {
        let mut out: Vec<T> = self.iter().cloned().collect();
        out.reverse();
        out
    }
}

impl<T> Stack<T> {
    /// Build a stack whose top is the first element yielded.
    pub fn from_front<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Stack::new(), |acc, v| acc.push(v))
    }
}

// Unlink iteratively so that dropping a long uniquely-owned stack cannot
// exhaust the call stack.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(cell) = next {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.tail.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.tail.as_deref();
            &cell.head
        })
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_shares_tail() {
        let base = Stack::new().push(1).push(2);
        let a = base.push(3);
        let b = base.push(4);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![4, 2, 1]);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_pop_and_pull() {
        let s = Stack::from_front(vec![1, 2, 3]);
        let (top, rest) = s.pop().unwrap();
        assert_eq!(top, 1);
        assert_eq!(rest.peek(), Some(&2));
        assert_eq!(rest.pull().unwrap().len(), 1);
        assert!(Stack::<i32>::new().pop().is_none());
    }

    #[test]
    fn test_reversed() {
        let s = Stack::from_front(vec![1, 2, 3]);
        assert_eq!(s.reversed().to_vec_bottom_up(), vec![1, 2, 3]);
        assert_eq!(s.to_vec_bottom_up(), vec![3, 2, 1]);
    }

    #[test]
    fn test_long_stack_drops() {
        let mut s = Stack::new();
        for i in 0..200_000 {
            s = s.push(i);
        }
        assert_eq!(s.len(), 200_000);
        drop(s);
    }
}
