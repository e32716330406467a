//! Fixed-length vectors over Z_p: element-wise ring operations, reductions,
//! and the circulant product. A vector is the same flat buffer a
//! [`ZpPoly`](super::ZpPoly) owns, without the degree semantics; the two
//! convert into each other by moving the storage.

use super::scalar::Zp;
use crate::encoding;
use crate::error::ParseError;
use std::fmt;

/// A fixed-length vector of Z_p residues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZpVec {
    c: Vec<Zp>,
}

/// Dot product of two equal-length slices: Hadamard product, then sum.
///
/// Free-standing so matrix rows, which are borrowed slices, can use it
/// without copying.
pub fn dot(x: &[Zp], y: &[Zp], p: u64) -> Zp {
    x.iter()
        .zip(y)
        .fold(Zp::zero(), |acc, (&a, &b)| acc.add(a.mul(b, p), p))
}

impl ZpVec {
    /// A zero-filled vector of length `n`.
    pub fn new(n: usize) -> Self {
        ZpVec {
            c: vec![Zp::zero(); n],
        }
    }

    pub fn from_elems(c: Vec<Zp>) -> Self {
        ZpVec { c }
    }

    pub fn from_ints(c: &[u64]) -> Self {
        ZpVec::from_elems(c.iter().map(|&v| Zp::new(v)).collect())
    }

    pub fn into_elems(self) -> Vec<Zp> {
        self.c
    }

    pub fn len(&self) -> usize {
        self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }

    pub fn as_slice(&self) -> &[Zp] {
        &self.c
    }

    pub fn as_mut_slice(&mut self) -> &mut [Zp] {
        &mut self.c
    }

    /// Grows (zero-filling) or shrinks to length `n`.
    pub fn resize(&mut self, n: usize) {
        self.c.resize(n, Zp::zero());
    }

    pub fn add(mut self, y: &ZpVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.add(*b, p);
        }

        self
    }

    pub fn neg(mut self, p: u64) -> Self {
        for a in &mut self.c {
            *a = a.neg(p);
        }

        self
    }

    pub fn sub(mut self, y: &ZpVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.sub(*b, p);
        }

        self
    }

    /// Scales every element by `a`.
    pub fn smul(mut self, a: Zp, p: u64) -> Self {
        for c in &mut self.c {
            *c = c.mul(a, p);
        }

        self
    }

    /// Hadamard (element-wise) product.
    pub fn hmul(mut self, y: &ZpVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(*b, p);
        }

        self
    }

    /// Inverts every element; non-invertible entries degrade to zero per
    /// [`Zp::inv`].
    pub fn inv(mut self, p: u64) -> Self {
        for a in &mut self.c {
            *a = a.inv(p);
        }

        self
    }

    /// Divides every element by the scalar `a`.
    pub fn sdiv(self, a: Zp, p: u64) -> Self {
        self.smul(a.inv(p), p)
    }

    /// Hadamard (element-wise) division.
    pub fn hdiv(mut self, y: &ZpVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(b.inv(p), p);
        }

        self
    }

    pub fn sum(&self, p: u64) -> Zp {
        self.c.iter().fold(Zp::zero(), |acc, &a| acc.add(a, p))
    }

    pub fn prod(&self, p: u64) -> Zp {
        self.c.iter().fold(Zp::one(), |acc, &a| acc.mul(a, p))
    }

    /// Dot product: Hadamard product, then sum.
    pub fn dot(&self, y: &ZpVec, p: u64) -> Zp {
        dot(&self.c, &y.c, p)
    }

    /// Circulant convolution with the mask `m`: output index `i` accumulates
    /// `m[(j - i) mod n] * self[j]` over all `j`.
    pub fn circmul(&self, m: &ZpVec, p: u64) -> Self {
        let n = self.len() as u64;
        let mut y = ZpVec::new(self.len());

        for i in 0..self.len() {
            for j in 0..self.len() {
                let k = Zp::new(j as u64).sub(Zp::new(i as u64), n).as_int() as usize;

                y.c[i] = y.c[i].add(m.c[k].mul(self.c[j], p), p);
            }
        }

        y
    }

    /// Reverses the element order in place.
    pub fn reverse(mut self) -> Self {
        self.c.reverse();

        self
    }

    /// Parses a bracketed list such as `"[1, 2, 3]"`, kept in input order.
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(ZpVec::from_ints(&encoding::parse_int_list(s)?))
    }
}

impl fmt::Display for ZpVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (i, c) in self.c.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }

        write!(f, "]")
    }
}
