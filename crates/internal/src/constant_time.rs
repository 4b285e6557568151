//! Constant-time comparisons

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Runs in time
/// independent of the contents (the lengths are not secret).
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice` (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}
