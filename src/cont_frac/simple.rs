//! The continued fraction value type for exact rational arithmetic

use super::block::Block;
use super::elements::{fold_elements, parse_ratio, ratio_of_float, validate_elements, Elements};
use super::{mediant, ContFracBase};
use crate::errors::ContFracError;
use core::str::FromStr;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, NumRef, One, Pow, RefNum, Signed, ToPrimitive, Zero};
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An exact rational number bundled with its simple continued fraction
/// expansion `a0 + 1/(a1 + 1/(a2 + ...))`, where `a0` is any integer and
/// `a1, a2, ...` are positive integers.
///
/// The value itself is a reduced [Ratio] and never changes after
/// construction. The element sequence and the Khinchin mean are computed on
/// first access and cached for the lifetime of the value; every arithmetic
/// operation returns a fresh value with empty caches. Equality, ordering and
/// hashing go by the rational value only.
///
/// The caches live in [OnceCell], so the type is not `Sync`.
#[derive(Clone, Debug)]
pub struct ContinuedFraction<T> {
    value: Ratio<T>,
    elements: OnceCell<Vec<T>>,
    khinchin: OnceCell<Option<f64>>,
}

impl<T> ContinuedFraction<T> {
    /// The numerator of the reduced value, carrying the sign.
    #[inline]
    pub fn numer(&self) -> &T {
        self.value.numer()
    }

    /// The denominator of the reduced value, always positive.
    #[inline]
    pub fn denom(&self) -> &T {
        self.value.denom()
    }

    #[inline]
    pub fn as_ratio(&self) -> &Ratio<T> {
        &self.value
    }

    #[inline]
    pub fn into_ratio(self) -> Ratio<T> {
        self.value
    }
}

impl<T: Integer + Clone> ContinuedFraction<T> {
    /// Create a continued fraction from a numerator and a denominator.
    ///
    /// The fraction does not have to be reduced. A zero denominator is
    /// reported as [ContFracError::DivisionByZero] before any reduction
    /// happens.
    pub fn new(numer: T, denom: T) -> Result<Self, ContFracError> {
        if denom.is_zero() {
            return Err(ContFracError::DivisionByZero);
        }
        Ok(Self::from(Ratio::new(numer, denom)))
    }

    /// Convert a finite float exactly, through the shortest decimal
    /// representation that round trips.
    ///
    /// Returns [ContFracError::InvalidArgument] when the float is not
    /// finite or when its exact decimal value does not fit in `T`.
    pub fn from_float(x: f64) -> Result<Self, ContFracError>
    where
        T: FromStr,
    {
        Ok(Self::from(ratio_of_float(x)?))
    }

    /// The elements of the expansion, in the canonical shorter form.
    ///
    /// Computed by Euclid's algorithm on first access and cached. The
    /// sequence has at least one element and never ends with 1 unless it is
    /// the single element expansion of 1 itself.
    pub fn elements(&self) -> &[T] {
        self.elements
            .get_or_init(|| Elements::from(self.value.clone()).collect())
    }

    /// The order of the expansion, one less than its number of elements.
    #[inline]
    pub fn order(&self) -> usize {
        self.elements().len() - 1
    }

    /// Whether the value is an integer, i.e. the expansion has order 0.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }
}

/// Iterator of the convergents of a [ContinuedFraction], from the order-0
/// prefix up to the full value.
///
/// The convergents are built by the recurrence `p_k = a_k*p_(k-1) + p_(k-2)`
/// with checked arithmetic, so the iterator ends early instead of wrapping
/// when a convergent overflows a fixed width integer type.
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    elements: std::slice::Iter<'a, T>,
    block: Block<T>,
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul> Iterator for Convergents<'a, T> {
    type Item = ContinuedFraction<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.elements.next()?;
        match self.block.checked_rmove(a) {
            Some((p, q)) => {
                self.block.update(p.clone(), q.clone());
                // neighbouring convergents differ by a unit determinant, so
                // the pair is coprime and the denominator stays positive
                Some(ContinuedFraction::from(Ratio::new_raw(p, q)))
            }
            None => {
                // an overflow ends the sequence for good
                self.elements = Default::default();
                None
            }
        }
    }
}

/// Iterator of the remainders of a [ContinuedFraction]: the values of the
/// element suffixes starting at index 0, 1, ... up to the order.
#[derive(Debug, Clone)]
pub struct Remainders<'a, T> {
    elements: &'a [T],
    k: usize,
}

impl<'a, T: Integer + NumRef + Clone> Iterator for Remainders<'a, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = ContinuedFraction<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.elements.len() {
            return None;
        }
        let value = fold_elements(&self.elements[self.k..]);
        self.k += 1;
        Some(ContinuedFraction::from(value))
    }
}

impl<T: ContFracBase> ContinuedFraction<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Create a continued fraction from its elements.
    ///
    /// The sequence must be non-empty and every element after the first must
    /// be positive, otherwise [ContFracError::InvalidElements] is returned.
    /// A sequence ending with 1 is accepted but not cached as given: the
    /// value re-derives its canonical shorter expansion on demand, so
    /// [ContinuedFraction::elements] output is always canonical.
    pub fn from_elements(elements: Vec<T>) -> Result<Self, ContFracError> {
        validate_elements(&elements)?;
        let value = fold_elements(&elements);
        let canonical = elements.len() == 1 || !matches!(elements.last(), Some(e) if e.is_one());
        Ok(ContinuedFraction {
            value,
            elements: if canonical {
                OnceCell::from(elements)
            } else {
                OnceCell::new()
            },
            khinchin: OnceCell::new(),
        })
    }

    /// The `k`-th convergent, the value of the element prefix of order `k`.
    ///
    /// `k` must lie in `0..=order`, otherwise
    /// [ContFracError::IndexOutOfRange] is returned. The convergent at the
    /// full order equals the value itself.
    pub fn convergent(&self, k: usize) -> Result<Self, ContFracError> {
        let elements = self.elements();
        if k >= elements.len() {
            return Err(ContFracError::IndexOutOfRange {
                index: k,
                order: elements.len() - 1,
            });
        }
        Ok(Self::from(fold_elements(&elements[..=k])))
    }

    /// Returns an iterator of the convergents, one per order in `0..=order`.
    pub fn convergents(&self) -> Convergents<'_, T> {
        Convergents {
            elements: self.elements().iter(),
            block: Block::identity(),
        }
    }

    /// The `k`-th remainder, the value of the element suffix starting at
    /// index `k`. The remainder at 0 is the value itself.
    ///
    /// `k` must lie in `0..=order`, otherwise
    /// [ContFracError::IndexOutOfRange] is returned.
    pub fn remainder(&self, k: usize) -> Result<Self, ContFracError> {
        let elements = self.elements();
        if k >= elements.len() {
            return Err(ContFracError::IndexOutOfRange {
                index: k,
                order: elements.len() - 1,
            });
        }
        Ok(Self::from(fold_elements(&elements[k..])))
    }

    /// Returns an iterator of the remainders, one per index in `0..=order`.
    pub fn remainders(&self) -> Remainders<'_, T> {
        Remainders {
            elements: self.elements(),
            k: 0,
        }
    }

    /// The value of the expansion extended by the given positive elements.
    ///
    /// An appended element that is zero or negative is reported as
    /// [ContFracError::InvalidElements]. An empty tail returns an equal
    /// value. The extended sequence may end with 1; the result then simply
    /// has a shorter canonical expansion.
    pub fn extend(&self, tail: &[T]) -> Result<Self, ContFracError> {
        if tail.iter().any(|e| e <= &T::zero()) {
            return Err(ContFracError::InvalidElements);
        }
        let mut elements = self.elements().to_vec();
        elements.extend_from_slice(tail);
        Ok(Self::from(fold_elements(&elements)))
    }

    /// The value of the expansion with a matching trailing segment removed.
    ///
    /// The given tail must equal the end of the canonical element sequence
    /// and must leave at least one element, otherwise
    /// [ContFracError::InvalidArgument] is returned.
    pub fn truncate(&self, tail: &[T]) -> Result<Self, ContFracError> {
        let elements = self.elements();
        if tail.len() >= elements.len() {
            return Err(ContFracError::InvalidArgument(
                "truncation must leave at least one element",
            ));
        }
        let split = elements.len() - tail.len();
        if &elements[split..] != tail {
            return Err(ContFracError::InvalidArgument(
                "trailing elements do not match the expansion",
            ));
        }
        Ok(Self::from(fold_elements(&elements[..split])))
    }

    /// The left weighted mediant `(k*a + c) / (k*b + d)` of `self = a/b` and
    /// `other = c/d`. The weight must be at least 1.
    pub fn left_mediant(&self, other: &Self, k: &T) -> Result<Self, ContFracError> {
        Ok(Self::from(mediant::left_mediant(
            &self.value,
            &other.value,
            k,
        )?))
    }

    /// The right weighted mediant `(a + k*c) / (b + k*d)` of `self = a/b`
    /// and `other = c/d`. The weight must be at least 1.
    pub fn right_mediant(&self, other: &Self, k: &T) -> Result<Self, ContFracError> {
        Ok(Self::from(mediant::right_mediant(
            &self.value,
            &other.value,
            k,
        )?))
    }

    /// The absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from(self.value.abs())
    }

    /// The reciprocal.
    ///
    /// # Panics
    /// If the value is zero.
    #[inline]
    pub fn recip(&self) -> Self {
        Self::from(self.value.recip())
    }

    /// Rounds towards minus infinity.
    #[inline]
    pub fn floor(&self) -> Self {
        Self::from(self.value.floor())
    }

    /// Rounds towards plus infinity.
    #[inline]
    pub fn ceil(&self) -> Self {
        Self::from(self.value.ceil())
    }

    /// Rounds towards zero.
    #[inline]
    pub fn trunc(&self) -> Self {
        Self::from(self.value.trunc())
    }

    /// The fractional part, such that `trunc + fract` equals the value.
    #[inline]
    pub fn fract(&self) -> Self {
        Self::from(self.value.fract())
    }

    /// Floor division: the largest integer not above the exact quotient.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn div_floor(&self, rhs: &Self) -> Self {
        Self::from((&self.value / &rhs.value).floor())
    }
}

impl<T: ContFracBase + ToPrimitive> ContinuedFraction<T> {
    /// The Khinchin mean: the geometric mean of the elements after the
    /// first, computed once and cached.
    ///
    /// Returns `None` when the order is 0 (an integer has no tail to
    /// average). When the order is 1 the single tail element is converted
    /// directly instead of going through logarithms.
    pub fn khinchin_mean(&self) -> Option<f64> {
        *self.khinchin.get_or_init(|| {
            let tail = &self.elements()[1..];
            match tail.len() {
                0 => None,
                1 => Some(tail[0].to_f64().unwrap_or(f64::INFINITY)),
                k => {
                    let ln_sum: f64 = tail
                        .iter()
                        .map(|a| a.to_f64().unwrap_or(f64::INFINITY).ln())
                        .sum();
                    Some((ln_sum / k as f64).exp())
                }
            }
        })
    }

    /// The nearest `f64` to the value, as the rounded quotient of the
    /// numerator and the denominator.
    pub fn to_f64(&self) -> Option<f64> {
        let numer = self.value.numer().to_f64()?;
        let denom = self.value.denom().to_f64()?;
        Some(numer / denom)
    }
}

impl<T: ContFracBase + Pow<u32, Output = T>> ContinuedFraction<T> {
    /// Raises the value to the power of an integer exponent.
    ///
    /// # Panics
    /// If the value is zero and the exponent is negative.
    #[inline]
    pub fn pow(&self, exp: i32) -> Self {
        Self::from(self.value.clone().pow(exp))
    }
}

impl<T: ContFracBase + Pow<u32, Output = T>> Pow<i32> for ContinuedFraction<T> {
    type Output = Self;

    #[inline]
    fn pow(self, exp: i32) -> Self {
        Self::from(self.value.pow(exp))
    }
}

impl<T: Integer + Clone + fmt::Display> fmt::Display for ContinuedFraction<T> {
    /// Writes the bracket notation, e.g. `[3; 4, 12, 4]` for 649/200.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements();
        write!(f, "[{}", &elements[0])?;
        let mut tail = elements[1..].iter();
        if let Some(first) = tail.next() {
            write!(f, "; {}", first)?;
            for e in tail {
                write!(f, ", {}", e)?;
            }
        }
        write!(f, "]")
    }
}

impl<T> From<Ratio<T>> for ContinuedFraction<T> {
    /// Wrap an already reduced rational. The expansion is derived lazily.
    fn from(value: Ratio<T>) -> Self {
        ContinuedFraction {
            value,
            elements: OnceCell::new(),
            khinchin: OnceCell::new(),
        }
    }
}

impl<T: Integer + Clone> From<T> for ContinuedFraction<T> {
    fn from(t: T) -> Self {
        Self::from(Ratio::from(t))
    }
}

impl<T: ContFracBase + FromStr> FromStr for ContinuedFraction<T> {
    type Err = ContFracError;

    /// Parse a rational literal: an integer like `"-3"`, a fraction like
    /// `"22/7"`, or a decimal with an optional exponent like `"3.245"`.
    fn from_str(s: &str) -> Result<Self, ContFracError> {
        Ok(Self::from(parse_ratio(s)?))
    }
}

// comparisons and hashing go by the rational value; the caches never
// participate
impl<T: Integer + Clone> PartialEq for ContinuedFraction<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Integer + Clone> Eq for ContinuedFraction<T> {}

impl<T: Integer + Clone> PartialOrd for ContinuedFraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integer + Clone> Ord for ContinuedFraction<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Integer + Clone + Hash> Hash for ContinuedFraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T: ContFracBase> Neg for ContinuedFraction<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from(-self.value)
    }
}

// The rational arithmetic is delegated to `num-rational`; every result is
// wrapped back into a fresh value with empty caches. Division and remainder
// by zero panic exactly where `Ratio` panics.
macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        impl<T: ContFracBase> $imp<ContinuedFraction<T>> for ContinuedFraction<T> {
            type Output = ContinuedFraction<T>;

            #[inline]
            fn $method(self, rhs: ContinuedFraction<T>) -> ContinuedFraction<T> {
                ContinuedFraction::from(self.value.$method(rhs.value))
            }
        }

        impl<T: ContFracBase> $imp<Ratio<T>> for ContinuedFraction<T> {
            type Output = ContinuedFraction<T>;

            #[inline]
            fn $method(self, rhs: Ratio<T>) -> ContinuedFraction<T> {
                ContinuedFraction::from(self.value.$method(rhs))
            }
        }

        impl<T: ContFracBase> $imp<T> for ContinuedFraction<T> {
            type Output = ContinuedFraction<T>;

            #[inline]
            fn $method(self, rhs: T) -> ContinuedFraction<T> {
                ContinuedFraction::from(self.value.$method(rhs))
            }
        }
    };
}

arith_impl!(impl Add, add);
arith_impl!(impl Sub, sub);
arith_impl!(impl Mul, mul);
arith_impl!(impl Div, div);
arith_impl!(impl Rem, rem);

impl<T: ContFracBase> Zero for ContinuedFraction<T> {
    #[inline]
    fn zero() -> Self {
        Self::from(Ratio::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<T: ContFracBase> One for ContinuedFraction<T> {
    #[inline]
    fn one() -> Self {
        Self::from(Ratio::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.value.is_one()
    }
}
