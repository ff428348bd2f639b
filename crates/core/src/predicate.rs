//! Predicate factories and combinators

/// Curried prefix test: `starts_with("S")` yields a predicate over names
///
/// The returned predicate owns its prefix, so it can outlive the argument.
pub fn starts_with(prefix: impl Into<String>) -> impl Fn(&str) -> bool {
    let prefix = prefix.into();
    move |name| name.starts_with(prefix.as_str())
}

/// Logical negation of a predicate
pub fn not<T: ?Sized, P>(p: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !p(value)
}

/// Both predicates hold (short-circuits on the first)
pub fn and<T: ?Sized, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| p(value) && q(value)
}

/// Either predicate holds (short-circuits on the first)
pub fn or<T: ?Sized, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| p(value) || q(value)
}
