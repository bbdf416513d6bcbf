//! Coprime pairs and the Farey sequence

use super::ksrm::{KsrmTree, Search};
use crate::errors::ContFracError;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumRef, RefNum};

/// Iterator of all coprime pairs `(a, b)` with `1 <= b <= a <= n`, in the
/// tree search order of [KsrmTree::search].
#[derive(Debug, Clone)]
pub struct CoprimePairs<T>(Search<T>);

impl<T: Integer + NumRef + Clone> Iterator for CoprimePairs<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        self.0.next()
    }
}

/// Enumerates the coprime pairs `(a, b)` with `1 <= b <= a <= n`.
///
/// `n` must be at least 1, otherwise [ContFracError::InvalidArgument] is
/// returned.
pub fn coprime_pairs<T>(n: T) -> Result<CoprimePairs<T>, ContFracError>
where
    T: Integer + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    Ok(CoprimePairs(KsrmTree::search(n)?))
}

/// Ascending iterator of a Farey sequence, yielding reduced fractions in
/// `[0, 1]`.
#[derive(Debug, Clone)]
pub struct FareySequence<T> {
    fractions: std::vec::IntoIter<Ratio<T>>,
}

impl<T> Iterator for FareySequence<T> {
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Ratio<T>> {
        self.fractions.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fractions.size_hint()
    }
}

impl<T> ExactSizeIterator for FareySequence<T> {}

/// The Farey sequence of order `n`: every reduced fraction in `[0, 1]` with
/// denominator at most `n`, in ascending order.
///
/// The sequence is materialized up front from the coprime pairs with first
/// coordinate at most `n`, so it holds `1 + phi(1) + ... + phi(n)` entries.
/// `n` must be at least 1, otherwise [ContFracError::InvalidArgument] is
/// returned.
pub fn farey_sequence<T>(n: T) -> Result<FareySequence<T>, ContFracError>
where
    T: Integer + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    let mut fractions: Vec<Ratio<T>> = vec![Ratio::new_raw(T::zero(), T::one())];
    for (a, b) in KsrmTree::search(n)? {
        // the pair is coprime, so the fraction is already reduced
        fractions.push(Ratio::new_raw(b, a));
    }
    fractions.sort_unstable();
    Ok(FareySequence {
        fractions: fractions.into_iter(),
    })
}
