//! Polynomials with coefficients in Z_p.
//!
//! Coefficients are stored from lowest to highest degree:
//! `[a0, a1, a2]` is `a0 + a1*x + a2*x^2`. Storage is never compacted
//! automatically, so three degree notions coexist:
//!
//! - `maxdeg`: the allocated capacity, i.e. coefficient count minus one;
//! - `deg`: the highest index holding a nonzero coefficient;
//! - `mindeg`: the lowest index holding a nonzero coefficient.
//!
//! As with [`Zp`](crate::zp::Zp), the prime is a per-call parameter, never
//! stored on the value.

use super::scalar::Zp;
use super::vec::ZpVec;
use crate::error::{NoIrreduciblePolynomialFound, ParseError};
use std::fmt;

/// Retry cap for the irreducibility rejection sampling in
/// [`ZpPoly::find_irred`]. Implementation-defined safety net; generous enough
/// to never trigger for a valid prime power.
const FIND_IRRED_MAX_TRIALS: u64 = 1 << 24;

/// A dense polynomial over Z_p, lowest degree first.
#[derive(Clone, Debug)]
pub struct ZpPoly {
    c: Vec<Zp>,
}

impl ZpPoly {
    /// Allocates a zero-filled polynomial with capacity for degree `deg`.
    pub fn with_degree(deg: usize) -> Self {
        ZpPoly {
            c: vec![Zp::zero(); deg + 1],
        }
    }

    /// The zero polynomial, one digit wide.
    pub fn zero() -> Self {
        ZpPoly::with_degree(0)
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        let mut x = ZpPoly::with_degree(0);

        x.c[0] = Zp::one();

        x
    }

    /// Builds a polynomial from ascending-degree coefficients.
    pub fn from_coeffs(c: Vec<Zp>) -> Self {
        assert!(!c.is_empty(), "a polynomial has at least one coefficient");

        ZpPoly { c }
    }

    /// Builds a polynomial from ascending-degree integer coefficients.
    pub fn from_ints(c: &[u64]) -> Self {
        ZpPoly::from_coeffs(c.iter().map(|&v| Zp::new(v)).collect())
    }

    /// Takes ownership of a vector's storage, reading it as ascending-degree
    /// coefficients. The inverse of [`ZpPoly::into_vec`].
    pub fn from_vec(x: ZpVec) -> Self {
        let c = x.into_elems();

        ZpPoly::from_coeffs(if c.is_empty() { vec![Zp::zero()] } else { c })
    }

    /// Moves the coefficient storage out as a vector.
    pub fn into_vec(self) -> ZpVec {
        ZpVec::from_elems(self.c)
    }

    /// Clones the coefficient storage into a fresh vector.
    pub fn to_vec(&self) -> ZpVec {
        self.clone().into_vec()
    }

    /// The storage capacity in degree terms: coefficient count minus one.
    pub fn maxdeg(&self) -> usize {
        self.c.len() - 1
    }

    /// The highest index holding a nonzero coefficient; 0 for the zero
    /// polynomial.
    pub fn deg(&self) -> usize {
        self.c.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    /// The lowest index holding a nonzero coefficient, or `None` for the zero
    /// polynomial.
    pub fn mindeg(&self) -> Option<usize> {
        self.c.iter().position(|c| !c.is_zero())
    }

    /// Ascending-degree coefficients, full storage.
    pub fn coeffs(&self) -> &[Zp] {
        &self.c
    }

    pub fn coeffs_mut(&mut self) -> &mut [Zp] {
        &mut self.c
    }

    /// Grows (zero-filling) or shrinks the storage to capacity `deg`.
    pub fn resize(&mut self, deg: usize) {
        self.c.resize(deg + 1, Zp::zero());
    }

    pub fn is_zero(&self) -> bool {
        self.c.iter().all(|c| c.is_zero())
    }

    pub fn is_one(&self) -> bool {
        self.c[0].as_int() == 1 && self.c[1..].iter().all(|c| c.is_zero())
    }

    /// Adds `y` in place, growing the storage to `y`'s degree first so the
    /// sum is never truncated.
    pub fn add(mut self, y: &ZpPoly, p: u64) -> Self {
        let d_y = y.deg();

        if self.maxdeg() < d_y {
            self.resize(d_y);
        }

        for i in 0..=d_y {
            self.c[i] = self.c[i].add(y.c[i], p);
        }

        self
    }

    /// Negates every coefficient in place.
    pub fn neg(mut self, p: u64) -> Self {
        for c in &mut self.c {
            *c = c.neg(p);
        }

        self
    }

    /// Subtracts `y` in place, growing the storage to `y`'s first.
    pub fn sub(mut self, y: &ZpPoly, p: u64) -> Self {
        if self.c.len() < y.c.len() {
            self.resize(y.maxdeg());
        }

        for i in 0..y.c.len() {
            self.c[i] = self.c[i].sub(y.c[i], p);
        }

        self
    }

    /// Schoolbook convolution into a fresh polynomial of degree
    /// `deg(self) + deg(y)`.
    pub fn mul(&self, y: &ZpPoly, p: u64) -> Self {
        let d_x = self.deg();
        let d_y = y.deg();
        let mut z = ZpPoly::with_degree(d_x + d_y);

        for i in 0..=d_x {
            for j in 0..=d_y {
                z.c[i + j] = z.c[i + j].add(self.c[i].mul(y.c[j], p), p);
            }
        }

        z
    }

    /// Reduces `self` modulo `y` in place by schoolbook long division,
    /// dividing by `y`'s leading coefficient at each step.
    ///
    /// That coefficient must be invertible mod `p`; otherwise the per-step
    /// division degrades to zero (see [`Zp::div`]) and the result is
    /// meaningless.
    pub fn rem(mut self, y: &ZpPoly, p: u64) -> Self {
        let d_x = self.deg();
        let d_y = y.deg();

        for i in (d_y..=d_x).rev() {
            let c = self.c[i].div(y.c[d_y], p);

            for j in 0..=d_y {
                self.c[i - j] = self.c[i - j].sub(y.c[d_y - j].mul(c, p), p);
            }
        }

        self
    }

    /// Evaluates at `a` by Horner's rule over the full storage.
    pub fn eval(&self, a: Zp, p: u64) -> Zp {
        let d = self.maxdeg();
        let mut r = self.c[d];

        for i in 1..=d {
            r = r.mul(a, p).add(self.c[d - i], p);
        }

        r
    }

    /// Root-existence test: true iff the polynomial has no root in Z_p.
    ///
    /// This is the irreducibility proxy the field-extension search relies on.
    /// It enumerates all of Z_p (cost O(p·deg)), and for degree > 1 the
    /// root-free property is necessary but not sufficient for irreducibility
    /// in general. Downstream code depends on this exact accept/reject
    /// behavior; do not substitute a stronger test.
    pub fn is_irred(&self, p: u64) -> bool {
        for i in 0..p {
            if self.eval(Zp::new(i), p).is_zero() {
                return false;
            }
        }

        true
    }

    /// Searches for a degree-`k` polynomial passing [`ZpPoly::is_irred`] by
    /// rejection sampling: leading and constant coefficients are fixed to 1,
    /// interior coefficients are drawn uniformly until the test accepts.
    ///
    /// Fails with [`NoIrreduciblePolynomialFound`] only once a hard iteration
    /// cap is exceeded.
    pub fn find_irred(p: u64, k: usize) -> Result<ZpPoly, NoIrreduciblePolynomialFound> {
        // k >= 2
        let mut r = ZpPoly::with_degree(k);

        r.c[0] = Zp::one(); // constant term must be non-zero
        r.c[k] = Zp::one(); // enforce degree k

        for _ in 0..FIND_IRRED_MAX_TRIALS {
            for i in 1..k {
                r.c[i] = Zp::rand(p);
            }

            if r.is_irred(p) {
                return Ok(r);
            }
        }

        Err(NoIrreduciblePolynomialFound {
            p,
            k,
            attempts: FIND_IRRED_MAX_TRIALS,
        })
    }

    /// Encodes the coefficients as a base-`p` positional integer, lowest
    /// digit first: a bijection between polynomials of degree < k and
    /// integers in `[0, p^k)`.
    pub fn to_int(&self, p: u64) -> u64 {
        let mut y = 0u64;
        let d = self.maxdeg();

        for i in 0..=d {
            y = y.wrapping_mul(p).wrapping_add(self.c[d - i].as_int());
        }

        y
    }

    /// Decodes a base-`p` positional integer into a polynomial, lowest digit
    /// first. The inverse of [`ZpPoly::to_int`].
    pub fn from_int(mut x: u64, p: u64) -> Self {
        let mut d = 0;
        let mut t = x / p;

        while t != 0 {
            d += 1;
            t /= p;
        }

        let mut y = ZpPoly::with_degree(d);
        let mut i = 0;

        while x != 0 {
            y.c[i] = Zp::new(x % p);
            x /= p;
            i += 1;
        }

        y
    }

    /// Parses a bracketed coefficient list in descending degree order,
    /// e.g. `"[1, 2, 3]"` is `x^2 + 2x + 3`. The input is reversed into the
    /// ascending storage order.
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(ZpPoly::from_vec(ZpVec::from_str(s)?.reverse()))
    }
}

/// Equality on the trimmed representation: trailing zero coefficients are
/// ignored.
impl PartialEq for ZpPoly {
    fn eq(&self, other: &Self) -> bool {
        let d = self.deg();

        if d != other.deg() {
            return false;
        }

        self.c[..=d] == other.c[..=d]
    }
}

impl Eq for ZpPoly {}

impl Default for ZpPoly {
    fn default() -> Self {
        ZpPoly::zero()
    }
}

impl fmt::Display for ZpPoly {
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

            if self.c[i].as_int() != 1 {
                write!(f, "{}", self.c[i])?;
            }

            write!(f, "x")?;
            if i > 1 {
                write!(f, "^{}", i)?;
            }
        }

        if first {
            write!(f, "{}", self.c[0])?;
        } else if !self.c[0].is_zero() {
            write!(f, " + {}", self.c[0])?;
        }

        Ok(())
    }
}
