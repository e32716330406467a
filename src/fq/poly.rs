//! Polynomials with coefficients in F_{p^k}.
//!
//! The same dense, ascending-degree representation as
//! [`ZpPoly`](crate::zp::ZpPoly), one level up: every coefficient is an
//! [`Fq`] owning its own backing store. Multiplicative operations take the
//! field's reduction polynomial `r` alongside `p`.

use super::element::Fq;
use super::pow64;
use crate::error::{NoIrreduciblePolynomialFound, ParseError};
use crate::zp::ZpPoly;
use std::fmt;
use std::mem;

const FIND_IRRED_MAX_TRIALS: u64 = 1 << 24;

/// A dense polynomial over F_{p^k}, lowest degree first.
#[derive(Clone, Debug)]
pub struct FqPoly {
    c: Vec<Fq>,
}

impl FqPoly {
    /// Allocates a zero-filled polynomial with capacity for degree `deg`.
    pub fn with_degree(deg: usize) -> Self {
        FqPoly {
            c: vec![Fq::zero(); deg + 1],
        }
    }

    pub fn zero() -> Self {
        FqPoly::with_degree(0)
    }

    pub fn one() -> Self {
        let mut x = FqPoly::with_degree(0);

        x.c[0] = Fq::one();

        x
    }

    pub fn from_coeffs(c: Vec<Fq>) -> Self {
        assert!(!c.is_empty(), "a polynomial has at least one coefficient");

        FqPoly { c }
    }

    /// Takes ownership of a vector's element storage, reading it as
    /// ascending-degree coefficients.
    pub fn from_vec(x: super::FqVec) -> Self {
        let c = x.into_elems();

        FqPoly::from_coeffs(if c.is_empty() { vec![Fq::zero()] } else { c })
    }

    /// Moves the coefficient storage out as a vector.
    pub fn into_vec(self) -> super::FqVec {
        super::FqVec::from_elems(self.c)
    }

    pub fn maxdeg(&self) -> usize {
        self.c.len() - 1
    }

    pub fn deg(&self) -> usize {
        self.c.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    pub fn mindeg(&self) -> Option<usize> {
        self.c.iter().position(|c| !c.is_zero())
    }

    pub fn coeffs(&self) -> &[Fq] {
        &self.c
    }

    pub fn coeffs_mut(&mut self) -> &mut [Fq] {
        &mut self.c
    }

    /// Grows (zero-filling) or shrinks the storage to capacity `deg`,
    /// releasing dropped coefficients' backing stores.
    pub fn resize(&mut self, deg: usize) {
        self.c.resize(deg + 1, Fq::zero());
    }

    pub fn is_zero(&self) -> bool {
        self.c.iter().all(|c| c.is_zero())
    }

    pub fn is_one(&self) -> bool {
        self.c[0].is_one() && self.c[1..].iter().all(|c| c.is_zero())
    }

    /// Adds `y` in place, growing the storage to `y`'s degree first.
    pub fn add(mut self, y: &FqPoly, p: u64) -> Self {
        let d_y = y.deg();

        if self.maxdeg() < d_y {
            self.resize(d_y);
        }

        for i in 0..=d_y {
            let a = mem::take(&mut self.c[i]);
            self.c[i] = a.add(&y.c[i], p);
        }

        self
    }

    pub fn neg(mut self, p: u64) -> Self {
        for c in &mut self.c {
            *c = mem::take(c).neg(p);
        }

        self
    }

    pub fn sub(mut self, y: &FqPoly, p: u64) -> Self {
        if self.c.len() < y.c.len() {
            self.resize(y.maxdeg());
        }

        for i in 0..y.c.len() {
            let a = mem::take(&mut self.c[i]);
            self.c[i] = a.sub(&y.c[i], p);
        }

        self
    }

    /// Schoolbook convolution into a fresh polynomial of degree
    /// `deg(self) + deg(y)`, each coefficient product computed in F_{p^k}.
    pub fn mul(&self, y: &FqPoly, r: &ZpPoly, p: u64) -> Self {
        let d_x = self.deg();
        let d_y = y.deg();
        let mut z = FqPoly::with_degree(d_x + d_y);

        for i in 0..=d_x {
            for j in 0..=d_y {
                let t = self.c[i].mul(&y.c[j], r, p);
                let acc = mem::take(&mut z.c[i + j]);

                z.c[i + j] = acc.add(&t, p);
            }
        }

        z
    }

    /// Reduces `self` modulo `y` in place by schoolbook long division over
    /// F_{p^k}.
    pub fn rem(mut self, y: &FqPoly, r: &ZpPoly, p: u64) -> Self {
        let d_x = self.deg();
        let d_y = y.deg();

        for i in (d_y..=d_x).rev() {
            let c = self.c[i].div(&y.c[d_y], r, p);

            for j in 0..=d_y {
                let t = y.c[d_y - j].mul(&c, r, p);
                let a = mem::take(&mut self.c[i - j]);

                self.c[i - j] = a.sub(&t, p);
            }
        }

        self
    }

    /// Evaluates at `a` by Horner's rule over the full storage.
    pub fn eval(&self, a: &Fq, r: &ZpPoly, p: u64) -> Fq {
        let d = self.maxdeg();
        let mut y = self.c[d].clone();

        for i in 1..=d {
            y = y.mul(a, r, p).add(&self.c[d - i], p);
        }

        y
    }

    /// Root-existence test over the points `from_int(0..p^deg(self))`.
    ///
    /// As with [`ZpPoly::is_irred`], this is the exact accept/reject
    /// behavior downstream search relies on; do not substitute a stronger
    /// test.
    pub fn is_irred(&self, r: &ZpPoly, p: u64) -> bool {
        let q = pow64(p, self.deg() as u64);

        for i in 0..q {
            let a = Fq::from_int(i, p);

            if self.eval(&a, r, p).is_zero() {
                return false;
            }
        }

        true
    }

    /// Searches for a degree-`k` polynomial over F_{p^k} passing
    /// [`FqPoly::is_irred`]: leading and constant coefficients fixed to 1,
    /// interior coefficients sampled uniformly.
    pub fn find_irred(
        r: &ZpPoly,
        p: u64,
        k: usize,
    ) -> Result<FqPoly, NoIrreduciblePolynomialFound> {
        // k >= 2
        let mut x = FqPoly::with_degree(k);

        x.c[0] = Fq::one(); // constant term must be non-zero
        x.c[k] = Fq::one(); // enforce degree k

        for _ in 0..FIND_IRRED_MAX_TRIALS {
            for i in 1..k {
                x.c[i] = Fq::rand(r, p);
            }

            if x.is_irred(r, p) {
                return Ok(x);
            }
        }

        Err(NoIrreduciblePolynomialFound {
            p,
            k,
            attempts: FIND_IRRED_MAX_TRIALS,
        })
    }

    /// Parses a nested literal such as `"[[1, 0]; [1, 1]]"` in descending
    /// degree order, reversed into ascending storage order.
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(FqPoly::from_vec(super::FqVec::from_str(s)?.reverse()))
    }
}

/// Equality on the trimmed representation.
impl PartialEq for FqPoly {
    fn eq(&self, other: &Self) -> bool {
        let d = self.deg();

        if d != other.deg() {
            return false;
        }

        self.c[..=d] == other.c[..=d]
    }
}

impl Eq for FqPoly {}

impl Default for FqPoly {
    fn default() -> Self {
        FqPoly::zero()
    }
}

impl fmt::Display for FqPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for i in (1..=self.maxdeg()).rev() {
            if self.c[i].is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if !self.c[i].is_one() {
                write!(f, "({})", self.c[i])?;
            }

            write!(f, "x")?;
            if i > 1 {
                write!(f, "^{}", i)?;
            }
        }

        if first {
            write!(f, "({})", self.c[0])?;
        } else if !self.c[0].is_zero() {
            write!(f, " + ({})", self.c[0])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // F_4 = F_2[x]/(a^2 + a + 1)
    fn gf4() -> ZpPoly {
        ZpPoly::from_ints(&[1, 1, 1])
    }

    fn fqpoly(ints: &[u64], p: u64) -> FqPoly {
        FqPoly::from_coeffs(ints.iter().map(|&v| Fq::from_int(v, p)).collect())
    }

    #[test]
    fn test_add_grows() {
        let p = 2;
        // (1 + x) + (x^2) over GF(4) coefficients
        let x = fqpoly(&[1, 1], p).add(&fqpoly(&[0, 0, 1], p), p);

        assert_eq!(x, fqpoly(&[1, 1, 1], p));
    }

    #[test]
    fn test_degrees() {
        let p = 2;
        let x = fqpoly(&[0, 2, 0, 0], p);

        assert_eq!(x.maxdeg(), 3);
        assert_eq!(x.deg(), 1);
        assert_eq!(x.mindeg(), Some(1));
        assert_eq!(FqPoly::zero().mindeg(), None);
    }

    #[test]
    fn test_mul_gf4() {
        let r = gf4();
        let p = 2;
        // (a + x)(a + x) = a^2 + 2ax + x^2 = (a+1) + x^2 in characteristic 2
        let x = fqpoly(&[2, 1], p);
        let z = x.mul(&x, &r, p);

        assert_eq!(z, fqpoly(&[3, 0, 1], p));
    }

    #[test]
    fn test_rotation_by_x_mod_x4_plus_1() {
        let r = gf4();
        let p = 2;
        // multiplying [a, b, c, d] by x and reducing mod x^4 + 1 rotates the
        // coefficients to [d, a, b, c] in characteristic 2
        let row = fqpoly(&[1, 2, 3, 0], p);
        let shift = fqpoly(&[0, 1], p);
        let ring = fqpoly(&[1, 0, 0, 0, 1], p);

        let rotated = row.mul(&shift, &r, p).rem(&ring, &r, p);

        assert_eq!(rotated, fqpoly(&[0, 1, 2, 3], p));
    }

    #[test]
    fn test_rem_degree_drops() {
        let r = gf4();
        let p = 2;
        let x = fqpoly(&[1, 0, 0, 0, 1], p); // x^4 + 1
        let y = fqpoly(&[1, 1], p); // x + 1

        let rem = x.rem(&y, &r, p);

        assert!(rem.deg() < 1 || rem.is_zero());
        // (x^4 + 1) evaluated at 1 is 0 in characteristic 2, so x + 1
        // divides it exactly.
        assert!(rem.is_zero());
    }

    #[test]
    fn test_eval() {
        let r = gf4();
        let p = 2;
        // P(x) = a + x^2; P(a) = a + a^2 = 1
        let x = fqpoly(&[2, 0, 1], p);

        assert!(x.eval(&Fq::from_int(2, p), &r, p).is_one());
    }

    #[test]
    fn test_is_irred() {
        let r = gf4();
        let p = 2;

        // x^2 + x + a has no root in GF(4): 0 -> a, 1 -> a, a -> a^2+a+a =
        // a^2 = a+1, a+1 -> (a+1)^2+(a+1)+a = a+a+1+a = a+1... all nonzero
        let good = fqpoly(&[2, 1, 1], p);
        assert!(good.is_irred(&r, p));

        // x^2 + x has roots 0 and 1
        let bad = fqpoly(&[0, 1, 1], p);
        assert!(!bad.is_irred(&r, p));
    }

    #[test]
    fn test_find_irred() {
        let r = gf4();
        let p = 2;
        let x = FqPoly::find_irred(&r, p, 2).unwrap();

        assert_eq!(x.deg(), 2);
        assert!(x.coeffs()[2].is_one());
        assert!(!x.coeffs()[0].is_zero());
        assert!(x.is_irred(&r, p));
    }

    #[test]
    fn test_from_str_nested() {
        let p = 2;
        // descending: [a+1; 1] is (a+1)x + 1
        let x = FqPoly::from_str("[[1, 1]; [1]]").unwrap();

        assert_eq!(x, fqpoly(&[1, 3], p));
    }

    #[test]
    fn test_display() {
        let p = 2;
        let x = fqpoly(&[3, 0, 1], p);

        assert_eq!(x.to_string(), "x^2 + (x + 1)");
    }
}
