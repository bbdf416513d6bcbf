//! Data structures and algorithms for simple continued fractions
//! of exact rational numbers
//!
//! The expansion of a rational is handled on two levels
//! 1. [Elements][Elements] and the free functions around it decompose a rational
//!    into its element sequence and compose raw element sequences back
//! 2. [ContinuedFraction][ContinuedFraction] bundles a rational value with its
//!    cached expansion and supports arithmetic, convergents, remainders and
//!    weighted mediants
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//! - <http://www.numbertheory.org/php/cfrac.html>
//! - A. Ya. Khinchin, "Continued Fractions", Dover reprint, 1997
//!

use num_integer::Integer;
use num_traits::{NumRef, Signed};

mod block;
mod elements;
mod mediant;
mod simple;

pub use elements::*;
pub use mediant::*;
pub use simple::*;

/// A helper trait to define valid types that can be used for ContinuedFraction
pub trait ContFracBase: Integer + NumRef + Clone + Signed {}
impl<T: Integer + NumRef + Clone + Signed> ContFracBase for T {}
