//! Guard predicates over machine input.
//!
//! A guard decides whether its transition fires for a given input value.
//! Guards are evaluated synchronously, in registration order, and only until
//! the first one accepts.

/// Predicate over an input value that controls a transition.
///
/// # Example
///
/// ```rust
/// use cursor_fsm::core::Guard;
///
/// let is_even = Guard::new(|n: &u32| n % 2 == 0);
///
/// assert!(is_even.check(&4));
/// assert!(!is_even.check(&7));
/// ```
pub struct Guard<I> {
    predicate: Box<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I> Guard<I> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be thread-safe (Send + Sync) so machines can be
    /// moved to, or shared between, threads.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts every input.
    pub fn always() -> Self {
        Guard::new(|_| true)
    }

    /// Check whether the guard accepts `input`.
    pub fn check(&self, input: &I) -> bool {
        (self.predicate)(input)
    }
}

impl<I: 'static> Guard<I> {
    /// Guard accepting exactly the inputs equal to `expected`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cursor_fsm::core::Guard;
    ///
    /// let on_two = Guard::equals(2);
    ///
    /// assert!(on_two.check(&2));
    /// assert!(!on_two.check(&3));
    /// ```
    pub fn equals(expected: I) -> Self
    where
        I: PartialEq + Send + Sync,
    {
        Guard::new(move |input| *input == expected)
    }

    /// Accepts when both guards accept. `other` is skipped when `self` rejects.
    pub fn and(self, other: Self) -> Self {
        Guard::new(move |input| self.check(input) && other.check(input))
    }

    /// Accepts when either guard accepts. `other` is skipped when `self` accepts.
    pub fn or(self, other: Self) -> Self {
        Guard::new(move |input| self.check(input) || other.check(input))
    }
}

impl<I: 'static> std::ops::Not for Guard<I> {
    type Output = Guard<I>;

    fn not(self) -> Self::Output {
        Guard::new(move |input| !self.check(input))
    }
}
