//! Absent-input policy
//!
//! Slices cannot be null in Rust; callers holding `Option<&[T]>` decide what
//! two missing buffers mean by picking an [`AbsentPolicy`].

/// What `None` vs `None` compares as. A single missing side is always unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentPolicy {
    /// Any absent input makes the comparison unequal, including two absent inputs
    #[default]
    NeverEqual,
    /// Two absent inputs are equal; one absent input is not
    BothAbsentEqual,
}

impl AbsentPolicy {
    /// Result for `(None, None)`
    pub const fn both_absent(self) -> bool {
        matches!(self, Self::BothAbsentEqual)
    }
}

/// Apply `compare` to two optional buffers under `policy`
#[inline]
pub fn eq_optional<T>(
    a: Option<&[T]>,
    b: Option<&[T]>,
    policy: AbsentPolicy,
    compare: fn(&[T], &[T]) -> bool,
) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (None, None) => policy.both_absent(),
        _ => false,
    }
}
