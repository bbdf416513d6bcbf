use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, NumRef, One, RefNum, Zero};
use std::mem::swap;

/// A block on the magic table holding the last two convergents of a continued
/// fraction. The method is described in
/// <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block seeding the recurrence `p_k = a_k * p_(k-1) + p_(k-2)`
    pub fn identity() -> Self {
        Block {
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }
}

impl<T: Integer + NumRef> Block<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// the convergent reached by consuming one more element
    pub fn rmove(&self, a: &T) -> (T, T) {
        let p = a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;
        (p, q)
    }
}

impl<T: Integer + CheckedAdd + CheckedMul> Block<T> {
    /// same as [Block::rmove], returning None when the convergent overflows
    pub fn checked_rmove(&self, a: &T) -> Option<(T, T)> {
        let p = a
            .checked_mul(&self.pm1)
            .and_then(|v| v.checked_add(&self.pm2))?;
        let q = a
            .checked_mul(&self.qm1)
            .and_then(|v| v.checked_add(&self.qm2))?;
        Some((p, q))
    }
}
