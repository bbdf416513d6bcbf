//! Weighted mediants of rational numbers

use crate::errors::ContFracError;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumRef, RefNum};

/// The left weighted mediant `(k*a + c) / (k*b + d)` of `a/b` and `c/d`.
///
/// For `r < s` the result lies strictly between the two, and growing the
/// weight `k` pulls it toward `r`. The weight must be at least 1.
pub fn left_mediant<T>(r: &Ratio<T>, s: &Ratio<T>, k: &T) -> Result<Ratio<T>, ContFracError>
where
    T: Integer + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    if k < &T::one() {
        return Err(ContFracError::InvalidArgument("mediant weight must be positive"));
    }
    let numer = k * r.numer() + s.numer();
    let denom = k * r.denom() + s.denom();
    Ok(Ratio::new(numer, denom))
}

/// The right weighted mediant `(a + k*c) / (b + k*d)` of `a/b` and `c/d`.
///
/// The mirror image of [left_mediant], growing `k` pulls the result toward
/// `s`. The weight must be at least 1.
pub fn right_mediant<T>(r: &Ratio<T>, s: &Ratio<T>, k: &T) -> Result<Ratio<T>, ContFracError>
where
    T: Integer + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    if k < &T::one() {
        return Err(ContFracError::InvalidArgument("mediant weight must be positive"));
    }
    let numer = k * s.numer() + r.numer();
    let denom = k * s.denom() + r.denom();
    Ok(Ratio::new(numer, denom))
}
