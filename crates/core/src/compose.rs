//! Function composition
//!
//! Two directions are provided:
//!
//! - [`compose`] / [`compose_all`]: mathematical order, `compose(f, g)(x) = f(g(x))`
//! - [`and_then`] / [`pipeline`]: data-flow order, `and_then(f, g)(x) = g(f(x))`
//!
//! Both folds are seeded with [`identity`], so an empty list yields the
//! identity transformation and a single function is returned unchanged in
//! behavior.

/// Boxed unary transformation over a single type
pub type Transform<T> = Box<dyn Fn(T) -> T>;

/// The identity transformation
pub fn identity<T>() -> impl Fn(T) -> T {
    |value| value
}

/// `compose(f, g)(x) = f(g(x))`: `g` runs first
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| f(g(value))
}

/// `and_then(f, g)(x) = g(f(x))`: `f` runs first
pub fn and_then<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| g(f(value))
}

/// Fold transformations with [`compose`]
///
/// The last transformation in `fns` is applied first.
pub fn compose_all<T: 'static>(fns: impl IntoIterator<Item = Transform<T>>) -> Transform<T> {
    let seed: Transform<T> = Box::new(identity::<T>());
    fns.into_iter()
        .fold(seed, |acc, next| -> Transform<T> { Box::new(compose(acc, next)) })
}

/// Fold transformations with [`and_then`]
///
/// Transformations are applied in list order.
pub fn pipeline<T: 'static>(fns: impl IntoIterator<Item = Transform<T>>) -> Transform<T> {
    let seed: Transform<T> = Box::new(identity::<T>());
    fns.into_iter()
        .fold(seed, |acc, next| -> Transform<T> { Box::new(and_then(acc, next)) })
}
