//! Recursive function adapter
//!
//! Closures cannot name themselves, so a recursive closure receives "itself"
//! as an explicit first argument instead:
//!
//! ```
//! use fnkit_core::recursion::recursive_function;
//!
//! let factorial = recursive_function(|this: &dyn Fn(u64) -> u64, n: u64| {
//!     if n <= 1 { 1 } else { n * this(n - 1) }
//! });
//! assert_eq!(factorial(5), 120);
//! ```
//!
//! The adapter adds no error handling. An operation that never reaches its
//! terminal case exhausts the stack.

/// Invoke `op` on `input`, passing the adapted function as the continuation
pub fn apply_recursive<I, O, F>(op: &F, input: I) -> O
where
    F: Fn(&dyn Fn(I) -> O, I) -> O,
{
    op(&|value: I| -> O { apply_recursive(op, value) }, input)
}

/// Turn a binary `(self, input)` operation into a unary function
pub fn recursive_function<I, O, F>(op: F) -> impl Fn(I) -> O
where
    F: Fn(&dyn Fn(I) -> O, I) -> O,
{
    move |input| apply_recursive(&op, input)
}
