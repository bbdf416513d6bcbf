//! `num-contfrac` extends the `num` packages with exact rational arithmetic
//! through simple continued fractions, and with enumerations of coprime
//! pairs and Farey sequences.

pub mod cont_frac;
mod errors;
pub mod sequences;

pub use cont_frac::{
    elements_of_float, elements_of_rational, rational_from_elements, ContFracBase,
    ContinuedFraction, Elements,
};
pub use errors::ContFracError;
pub use sequences::{coprime_pairs, farey_sequence, CoprimePairs, FareySequence, KsrmTree};

/// A continued fraction over arbitrary precision integers.
#[cfg(feature = "num-bigint")]
pub type BigContinuedFraction = ContinuedFraction<num_bigint::BigInt>;
