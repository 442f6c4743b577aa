//! Outcome of a navigation step.
//!
//! Every cursor movement either lands somewhere new or fails in place. Both
//! variants carry the `origin`, the value the movement started from, so a
//! chain of steps can always fall back to where it began.

/// Result of moving a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Movement<T> {
    /// The move succeeded; `value` is the new state.
    Success { value: T, origin: T },
    /// The move was impossible; `origin` is unchanged.
    Failure { origin: T },
}

impl<T> Movement<T> {
    pub fn success(value: T, origin: T) -> Self {
        Movement::Success { value, origin }
    }

    pub fn failure(origin: T) -> Self {
        Movement::Failure { origin }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Movement::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The state this movement started from.
    pub fn origin(&self) -> &T {
        match self {
            Movement::Success { origin, .. } | Movement::Failure { origin } => origin,
        }
    }

    /// The new state, if the movement succeeded.
    pub fn value(self) -> Option<T> {
        match self {
            Movement::Success { value, .. } => Some(value),
            Movement::Failure { .. } => None,
        }
    }

    /// The new state on success, the origin on failure.
    pub fn stay(self) -> T {
        match self {
            Movement::Success { value, .. } => value,
            Movement::Failure { origin } => origin,
        }
    }

    /// `Ok(value)` on success, `Err(origin)` on failure.
    pub fn into_result(self) -> Result<T, T> {
        match self {
            Movement::Success { value, .. } => Ok(value),
            Movement::Failure { origin } => Err(origin),
        }
    }

    /// Chain a further step onto a successful movement.
    ///
    /// The chained movement keeps the first origin, so a failure anywhere in
    /// the chain falls back to where the whole chain started.
    pub fn and_then<F>(self, step: F) -> Self
    where
        F: FnOnce(T) -> Movement<T>,
    {
        match self {
            Movement::Success { value, origin } => match step(value) {
                Movement::Success { value, .. } => Movement::Success { value, origin },
                Movement::Failure { .. } => Movement::Failure { origin },
            },
            failure => failure,
        }
    }

    /// Try an alternate step from the origin when this movement failed.
    pub fn or_else<F>(self, alternate: F) -> Self
    where
        F: FnOnce(T) -> Movement<T>,
    {
        match self {
            Movement::Failure { origin } => alternate(origin),
            success => success,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Movement<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Movement::Success { value, origin } => Movement::Success {
                value: f(value),
                origin: f(origin),
            },
            Movement::Failure { origin } => Movement::Failure { origin: f(origin) },
        }
    }
}

impl<T: Clone> Movement<T> {
    /// Apply `step` until it fails.
    ///
    /// Succeeds if at least one step succeeded; the value is wherever the last
    /// successful step landed.
    pub fn repeat<F>(start: T, mut step: F) -> Self
    where
        F: FnMut(&T) -> Movement<T>,
    {
        let mut current = match step(&start) {
            Movement::Success { value, .. } => value,
            Movement::Failure { .. } => return Movement::failure(start),
        };
        while let Movement::Success { value, .. } = step(&current) {
            current = value;
        }
        Movement::success(current, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc_below(limit: i32) -> impl Fn(i32) -> Movement<i32> {
        move |n| {
            if n < limit {
                Movement::success(n + 1, n)
            } else {
                Movement::failure(n)
            }
        }
    }

    #[test]
    fn test_and_then_keeps_first_origin() {
        let step = inc_below(5);
        let m = step(1).and_then(&step).and_then(&step);
        assert_eq!(m, Movement::success(4, 1));
    }

    #[test]
    fn test_and_then_failure_rebases_origin() {
        let step = inc_below(2);
        let m = step(1).and_then(&step);
        assert_eq!(m, Movement::failure(1));
    }

    #[test]
    fn test_or_else_falls_back() {
        let m = inc_below(0)(3).or_else(|n| Movement::success(n * 10, n));
        assert_eq!(m.stay(), 30);
    }

    #[test]
    fn test_stay_and_value() {
        assert_eq!(Movement::failure(7).stay(), 7);
        assert_eq!(Movement::<i32>::failure(7).value(), None);
        assert_eq!(Movement::success(8, 7).value(), Some(8));
        assert_eq!(Movement::success(8, 7).into_result(), Ok(8));
        assert_eq!(Movement::failure(7).into_result(), Err(7));
    }

    #[test]
    fn test_repeat() {
        let step = inc_below(10);
        assert_eq!(Movement::repeat(3, |n| step(*n)), Movement::success(10, 3));
        assert_eq!(Movement::repeat(10, |n| step(*n)), Movement::failure(10));
    }
}
