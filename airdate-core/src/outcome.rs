//! Success/failure outcomes shared by both parsing modes.
//!
//! Silent mode uses `Option<T>` (a failure is just absence) and diagnostic
//! mode uses `Result<T, ParseError>`. The [`Outcome`] trait lets the fallback
//! and accumulation rules be written once for both.

/// A two-variant value: success carrying `Value`, or failure carrying `Failure`.
pub trait Outcome: Sized {
    type Value;
    type Failure;

    fn success(value: Self::Value) -> Self;
    fn failure(failure: Self::Failure) -> Self;
    fn is_success(&self) -> bool;
    fn into_result(self) -> Result<Self::Value, Self::Failure>;
}

impl<T> Outcome for Option<T> {
    type Value = T;
    type Failure = ();

    fn success(value: T) -> Self {
        Some(value)
    }

    fn failure(_: ()) -> Self {
        None
    }

    fn is_success(&self) -> bool {
        self.is_some()
    }

    fn into_result(self) -> Result<T, ()> {
        self.ok_or(())
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Value = T;
    type Failure = E;

    fn success(value: T) -> Self {
        Ok(value)
    }

    fn failure(failure: E) -> Self {
        Err(failure)
    }

    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn into_result(self) -> Result<T, E> {
        self
    }
}

/// Try `primary`, falling back to `secondary` only if it failed.
///
/// `secondary` is not evaluated when `primary` succeeds. When both fail, the
/// secondary's failure is returned as-is. Chaining several calls gives
/// first-success-wins.
///
/// ```
/// use airdate_core::or_else;
///
/// let hit: Option<i32> = or_else(Some(1), || unreachable!());
/// assert_eq!(hit, Some(1));
///
/// let miss: Result<i32, &str> = or_else(Err("first"), || Err("second"));
/// assert_eq!(miss, Err("second"));
/// ```
pub fn or_else<O, F>(primary: O, secondary: F) -> O
where
    O: Outcome,
    F: FnOnce() -> O,
{
    if primary.is_success() {
        primary
    } else {
        secondary()
    }
}

/// Fold one more outcome into an accumulated sequence.
///
/// Both successful: `next`'s value is appended. Otherwise the accumulator's
/// failure wins if it already failed, else `next`'s failure is taken. Once the
/// accumulator has failed it stays failed.
pub fn combine<A, N>(acc: A, next: N) -> A
where
    N: Outcome,
    A: Outcome<Value = Vec<N::Value>, Failure = N::Failure>,
{
    match acc.into_result() {
        Err(failure) => A::failure(failure),
        Ok(mut items) => match next.into_result() {
            Ok(item) => {
                items.push(item);
                A::success(items)
            }
            Err(failure) => A::failure(failure),
        },
    }
}
