//! Enumerations of coprime pairs and Farey fractions built on the
//! ternary coprime tree
//!
//! # References:
//! - A. R. Kanga, "The family tree of Pythagorean triples", Bulletin of the
//!   Institute of Mathematics and its Applications 26, 1990
//! - R. Saunders and T. Randall, "The family tree of the Pythagorean
//!   triplets revisited", Mathematical Gazette 78, 1994
//! - D. W. Mitchell, "An alternative characterisation of all primitive
//!   Pythagorean triples", Mathematical Gazette 85, 2001
//! - <https://en.wikipedia.org/wiki/Farey_sequence>
//!

mod farey;
mod ksrm;

pub use farey::*;
pub use ksrm::*;
