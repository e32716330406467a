//! Fixed-length vectors over F_{p^k}. Every element owns its backing store;
//! cloning a vector deep-copies all of them.

use super::element::Fq;
use crate::encoding;
use crate::error::ParseError;
use crate::zp::ZpPoly;
use std::fmt;
use std::mem;

/// A fixed-length vector of F_{p^k} elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FqVec {
    c: Vec<Fq>,
}

/// Dot product of two equal-length slices: element-wise multiplication in the
/// field (needs `r`), then summation (does not).
pub fn dot(x: &[Fq], y: &[Fq], r: &ZpPoly, p: u64) -> Fq {
    x.iter()
        .zip(y)
        .fold(Fq::zero(), |acc, (a, b)| acc.add(&a.mul(b, r, p), p))
}

impl FqVec {
    /// A zero-filled vector of length `n`.
    pub fn new(n: usize) -> Self {
        FqVec {
            c: vec![Fq::zero(); n],
        }
    }

    pub fn from_elems(c: Vec<Fq>) -> Self {
        FqVec { c }
    }

    /// Deep-copies a slice of elements into a fresh vector.
    pub fn from_slice(c: &[Fq]) -> Self {
        FqVec { c: c.to_vec() }
    }

    pub fn into_elems(self) -> Vec<Fq> {
        self.c
    }

    pub fn len(&self) -> usize {
        self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }

    pub fn as_slice(&self) -> &[Fq] {
        &self.c
    }

    pub fn as_mut_slice(&mut self) -> &mut [Fq] {
        &mut self.c
    }

    pub fn add(mut self, y: &FqVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = mem::take(a).add(b, p);
        }

        self
    }

    pub fn neg(mut self, p: u64) -> Self {
        for a in &mut self.c {
            *a = mem::take(a).neg(p);
        }

        self
    }

    pub fn sub(mut self, y: &FqVec, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = mem::take(a).sub(b, p);
        }

        self
    }

    /// Scales every element by `a` in the field.
    pub fn smul(mut self, a: &Fq, r: &ZpPoly, p: u64) -> Self {
        for c in &mut self.c {
            *c = c.mul(a, r, p);
        }

        self
    }

    /// Hadamard (element-wise) field product.
    pub fn hmul(mut self, y: &FqVec, r: &ZpPoly, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(b, r, p);
        }

        self
    }

    /// Inverts every element; zero entries stay zero per [`Fq::inv`].
    pub fn inv(mut self, r: &ZpPoly, p: u64) -> Self {
        for a in &mut self.c {
            *a = a.inv(r, p);
        }

        self
    }

    /// Divides every element by the scalar `a`.
    pub fn sdiv(self, a: &Fq, r: &ZpPoly, p: u64) -> Self {
        let a_inv = a.inv(r, p);

        self.smul(&a_inv, r, p)
    }

    /// Hadamard (element-wise) field division.
    pub fn hdiv(mut self, y: &FqVec, r: &ZpPoly, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.div(b, r, p);
        }

        self
    }

    pub fn sum(&self, p: u64) -> Fq {
        self.c
            .iter()
            .fold(Fq::zero(), |acc, a| acc.add(a, p))
    }

    pub fn prod(&self, r: &ZpPoly, p: u64) -> Fq {
        self.c.iter().fold(Fq::one(), |acc, a| acc.mul(a, r, p))
    }

    /// Dot product: element-wise multiply, then sum.
    pub fn dot(&self, y: &FqVec, r: &ZpPoly, p: u64) -> Fq {
        dot(&self.c, &y.c, r, p)
    }

    /// Reverses the element order in place.
    pub fn reverse(mut self) -> Self {
        self.c.reverse();

        self
    }

    /// Parses a nested literal such as `"[[1, 0]; [1, 1]]"`, kept in input
    /// order. Each inner bracketed list is a descending digit list for one
    /// element.
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        let elems = encoding::parse_nested_list(s)?;

        Ok(FqVec::from_elems(
            elems
                .into_iter()
                .map(|digits| {
                    let mut v = digits;
                    v.reverse();
                    Fq::from_poly(if v.is_empty() {
                        ZpPoly::zero()
                    } else {
                        ZpPoly::from_ints(&v)
                    })
                })
                .collect(),
        ))
    }
}

impl fmt::Display for FqVec {
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
