//! Conversion between rational numbers and continued fraction element sequences

use super::block::Block;
use crate::errors::ContFracError;
use core::str::FromStr;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumRef, RefNum, Signed};
use std::mem;

/// Iterator over the elements of the continued fraction expansion of a
/// rational number, produced by Euclid's algorithm with floor division.
///
/// The first element can be any integer, every later element is positive.
/// The produced sequence is the canonical shorter form, it never ends with 1
/// unless it is the single element expansion of 1 itself.
#[derive(Debug, Clone)]
pub struct Elements<T> {
    numer: T,
    denom: T,
}

impl<T: Integer> Iterator for Elements<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.denom.is_zero() {
            return None;
        }
        let (quo, rem) = self.numer.div_mod_floor(&self.denom);
        self.numer = mem::replace(&mut self.denom, rem);
        Some(quo)
    }
}

impl<T: Integer> From<Ratio<T>> for Elements<T> {
    /// Decompose an already reduced rational. A [Ratio] keeps its denominator
    /// positive, so no sign normalization is needed.
    fn from(r: Ratio<T>) -> Self {
        let (numer, denom) = r.into();
        Elements { numer, denom }
    }
}

/// The continued fraction expansion of `numer / denom`.
///
/// The fraction does not have to be reduced, a negative sign may sit on
/// either side. Floor division puts the whole sign into the first element,
/// e.g. `-649/200` expands to `[-4; 1, 3, 12, 4]`.
pub fn elements_of_rational<T: Integer + Signed>(
    numer: T,
    denom: T,
) -> Result<Elements<T>, ContFracError> {
    if denom.is_zero() {
        return Err(ContFracError::DivisionByZero);
    }
    if denom.is_negative() {
        Ok(Elements {
            numer: -numer,
            denom: -denom,
        })
    } else {
        Ok(Elements { numer, denom })
    }
}

/// The continued fraction expansion of a float, read through the shortest
/// decimal representation that round trips, converted exactly.
///
/// Returns [ContFracError::InvalidArgument] when the float is not finite or
/// when the exact decimal value does not fit in `T`.
pub fn elements_of_float<T: Clone + Integer + FromStr>(
    x: f64,
) -> Result<Elements<T>, ContFracError> {
    Ok(Elements::from(ratio_of_float(x)?))
}

pub(crate) fn ratio_of_float<T: Clone + Integer + FromStr>(
    x: f64,
) -> Result<Ratio<T>, ContFracError> {
    if !x.is_finite() {
        return Err(ContFracError::InvalidArgument("float must be finite"));
    }
    parse_ratio(&format!("{}", x))
}

/// Parse a rational literal: an integer like `"-3"`, a fraction like
/// `"22/7"`, or a decimal with an optional exponent like `"3.245"` or
/// `"-1.5e3"`.
///
/// A literal zero denominator is reported as
/// [ContFracError::DivisionByZero], any other malformed input as
/// [ContFracError::InvalidArgument].
pub fn parse_ratio<T: Clone + Integer + FromStr>(s: &str) -> Result<Ratio<T>, ContFracError> {
    let malformed = || ContFracError::InvalidArgument("malformed rational literal");

    if let Some(pos) = s.find('/') {
        let numer = T::from_str(&s[..pos]).map_err(|_| malformed())?;
        let denom = T::from_str(&s[pos + 1..]).map_err(|_| malformed())?;
        if denom.is_zero() {
            return Err(ContFracError::DivisionByZero);
        }
        return Ok(Ratio::new(numer, denom));
    }

    // split off the exponent, then fold the fractional digits into the mantissa
    let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
        Some(pos) => {
            let exponent: i64 = s[pos + 1..].parse().map_err(|_| malformed())?;
            (&s[..pos], exponent)
        }
        None => (s, 0),
    };
    let (digits, scale) = match mantissa.find('.') {
        Some(pos) => {
            let frac = &mantissa[pos + 1..];
            if frac.is_empty() {
                return Err(malformed());
            }
            (format!("{}{}", &mantissa[..pos], frac), frac.len() as i64)
        }
        None => (mantissa.to_string(), 0),
    };

    let shift = exponent - scale;
    if shift >= 0 {
        let mut digits = digits;
        digits.extend(std::iter::repeat('0').take(shift as usize));
        let numer = T::from_str(&digits).map_err(|_| malformed())?;
        Ok(Ratio::from(numer))
    } else {
        let numer = T::from_str(&digits).map_err(|_| malformed())?;
        let mut power = String::from("1");
        power.extend(std::iter::repeat('0').take(-shift as usize));
        let denom = T::from_str(&power).map_err(|_| malformed())?;
        Ok(Ratio::new(numer, denom))
    }
}

/// The rational value of an element sequence, the exact inverse of
/// [elements_of_rational] on canonical sequences.
///
/// The sequence must be non-empty and every element after the first must be
/// positive. A sequence ending with 1 is accepted, its value simply has a
/// shorter canonical expansion.
pub fn rational_from_elements<T: Integer + NumRef + Clone>(
    elements: &[T],
) -> Result<Ratio<T>, ContFracError>
where
    for<'r> &'r T: RefNum<T>,
{
    validate_elements(elements)?;
    Ok(fold_elements(elements))
}

/// The `k`-th convergent of an element sequence, the value of its prefix
/// `elements[..=k]`.
pub fn convergent<T: Integer + NumRef + Clone>(
    k: usize,
    elements: &[T],
) -> Result<Ratio<T>, ContFracError>
where
    for<'r> &'r T: RefNum<T>,
{
    validate_elements(elements)?;
    if k >= elements.len() {
        return Err(ContFracError::IndexOutOfRange {
            index: k,
            order: elements.len() - 1,
        });
    }
    Ok(fold_elements(&elements[..=k]))
}

pub(crate) fn validate_elements<T: Integer>(elements: &[T]) -> Result<(), ContFracError> {
    if elements.is_empty() || elements[1..].iter().any(|e| e <= &T::zero()) {
        return Err(ContFracError::InvalidElements);
    }
    Ok(())
}

// Runs the convergent recurrence over the whole sequence. The caller must
// have validated that the slice is non-empty.
pub(crate) fn fold_elements<T: Integer + NumRef + Clone>(elements: &[T]) -> Ratio<T>
where
    for<'r> &'r T: RefNum<T>,
{
    let mut block = Block::identity();
    let mut pair = block.rmove(&elements[0]);
    for a in &elements[1..] {
        block.update(pair.0.clone(), pair.1.clone());
        pair = block.rmove(a);
    }
    // neighbouring convergents differ by a unit determinant, so the final
    // pair is already in lowest terms with a positive denominator
    Ratio::new_raw(pair.0, pair.1)
}
