//! Elements of the extension field F_{p^k}.

use super::pow64;
use crate::error::ParseError;
use crate::zp::{ZpPoly, ZpVec};
use rand::Rng;
use std::fmt;

/// An element of F_{p^k}: one owned polynomial over Z_p of degree < k.
///
/// The field itself is named per call by the reduction polynomial `r` and the
/// prime `p`. Equality compares the trimmed polynomial representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fq {
    v: ZpPoly,
}

impl Fq {
    /// A zero element with storage for `dig` base-p digits.
    pub fn with_digits(dig: usize) -> Self {
        Fq {
            v: ZpPoly::with_degree(dig - 1),
        }
    }

    pub fn zero() -> Self {
        Fq { v: ZpPoly::zero() }
    }

    pub fn one() -> Self {
        Fq { v: ZpPoly::one() }
    }

    /// The digit count of the backing polynomial (its storage size).
    pub fn digits(&self) -> usize {
        self.v.coeffs().len()
    }

    /// Wraps a polynomial as a field element, taking ownership of its
    /// storage.
    pub fn from_poly(v: ZpPoly) -> Self {
        Fq { v }
    }

    /// Moves the backing polynomial out.
    pub fn into_poly(self) -> ZpPoly {
        self.v
    }

    /// Borrows the backing polynomial.
    pub fn poly(&self) -> &ZpPoly {
        &self.v
    }

    /// Reads a vector's storage as the digits of a field element.
    pub fn from_vec(x: ZpVec) -> Self {
        Fq {
            v: ZpPoly::from_vec(x),
        }
    }

    /// Moves the digit storage out as a vector.
    pub fn into_vec(self) -> ZpVec {
        self.v.into_vec()
    }

    pub fn is_zero(&self) -> bool {
        self.v.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.v.is_one()
    }

    /// Field addition: the underlying polynomial addition, no reduction
    /// needed since the degree stays below k.
    pub fn add(self, y: &Fq, p: u64) -> Self {
        Fq {
            v: self.v.add(&y.v, p),
        }
    }

    pub fn neg(self, p: u64) -> Self {
        Fq { v: self.v.neg(p) }
    }

    pub fn sub(self, y: &Fq, p: u64) -> Self {
        Fq {
            v: self.v.sub(&y.v, p),
        }
    }

    /// Field multiplication: polynomial product reduced modulo `r`.
    pub fn mul(&self, y: &Fq, r: &ZpPoly, p: u64) -> Self {
        Fq {
            v: self.v.mul(&y.v, p).rem(r, p),
        }
    }

    /// Computes `self^n` by square-and-multiply over the field
    /// multiplication.
    pub fn pow(&self, mut n: u64, r: &ZpPoly, p: u64) -> Self {
        let mut x = self.clone();
        let mut z = Fq::one();

        while n != 0 {
            if n & 1 == 1 {
                z = z.mul(&x, r, p);
            }

            x = x.mul(&x, r, p);
            n >>= 1;
        }

        z
    }

    /// Multiplicative inverse by Fermat over the group order:
    /// `self^(p^k - 2)` where k = deg(r).
    ///
    /// The zero element powers to zero, so non-invertible input degrades to
    /// the additive identity; callers check for zero when they need a true
    /// inverse.
    pub fn inv(&self, r: &ZpPoly, p: u64) -> Self {
        self.pow(pow64(p, r.deg() as u64) - 2, r, p)
    }

    pub fn div(&self, y: &Fq, r: &ZpPoly, p: u64) -> Self {
        self.mul(&y.inv(r, p), r, p)
    }

    /// Samples a uniform element of F_{p^k} as an integer in `[0, p^k)`
    /// decoded through [`Fq::from_int`].
    pub fn rand(r: &ZpPoly, p: u64) -> Self {
        let q = pow64(p, r.deg() as u64);

        Fq::from_int(rand::rng().random_range(0..q), p)
    }

    /// Base-p positional encoding of the digits, lowest digit first.
    pub fn to_int(&self, p: u64) -> u64 {
        self.v.to_int(p)
    }

    pub fn from_int(x: u64, p: u64) -> Self {
        Fq {
            v: ZpPoly::from_int(x, p),
        }
    }

    /// Parses a bracketed digit list in descending order, like
    /// [`ZpPoly::from_str`].
    pub fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(Fq {
            v: ZpPoly::from_str(s)?,
        })
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // F_4 = F_2[x]/(x^2 + x + 1), elements 0, 1, a, a+1
    fn gf4() -> ZpPoly {
        ZpPoly::from_ints(&[1, 1, 1])
    }

    // The AES field F_2[x]/(x^8 + x^4 + x^3 + x + 1)
    fn aes_field() -> ZpPoly {
        ZpPoly::from_ints(&[1, 1, 0, 1, 1, 0, 0, 0, 1])
    }

    #[test]
    fn test_add_is_xor_in_char_2() {
        let p = 2;
        let a = Fq::from_int(0b1100, p);
        let b = Fq::from_int(0b1010, p);

        assert_eq!(a.add(&b, p).to_int(p), 0b0110);
    }

    #[test]
    fn test_gf4_multiplication_table() {
        let r = gf4();
        let p = 2;
        let a = Fq::from_int(2, p); // a
        let b = Fq::from_int(3, p); // a + 1

        // a * a = a^2 = a + 1
        assert_eq!(a.mul(&a, &r, p).to_int(p), 3);
        // a * (a + 1) = a^2 + a = 1
        assert_eq!(a.mul(&b, &r, p).to_int(p), 1);
        // (a + 1)^2 = a^2 + 1 = a
        assert_eq!(b.mul(&b, &r, p).to_int(p), 2);
    }

    #[test]
    fn test_inv_gf4() {
        let r = gf4();
        let p = 2;

        for x in 1..4u64 {
            let a = Fq::from_int(x, p);
            let y = a.inv(&r, p);

            assert!(a.mul(&y, &r, p).is_one());
        }

        assert!(Fq::zero().inv(&r, p).is_zero());
    }

    #[test]
    fn test_aes_field_known_inverse() {
        let r = aes_field();
        let p = 2;

        // the inverse of 0x53 in the AES field is 0xca
        let x = Fq::from_int(0x53, p);
        assert_eq!(x.inv(&r, p).to_int(p), 0xca);
        assert!(x.mul(&x.inv(&r, p), &r, p).is_one());
    }

    #[test]
    fn test_pow_lagrange() {
        let r = aes_field();
        let p = 2;

        // x^(q-1) = 1 for nonzero x
        for x in [1u64, 2, 3, 0x53, 0xff] {
            assert!(Fq::from_int(x, p).pow(255, &r, p).is_one());
        }

        // x^0 = 1
        assert!(Fq::from_int(7, p).pow(0, &r, p).is_one());
    }

    #[test]
    fn test_div() {
        let r = gf4();
        let p = 2;
        let a = Fq::from_int(2, p);
        let b = Fq::from_int(3, p);

        // (a / b) * b = a
        let q = a.div(&b, &r, p);
        assert_eq!(q.mul(&b, &r, p), a);
    }

    #[test]
    fn test_int_round_trip_base_3() {
        let p = 3;

        for x in 0..27u64 {
            assert_eq!(Fq::from_int(x, p).to_int(p), x);
        }
    }

    #[test]
    fn test_digit_storage() {
        let x = Fq::with_digits(8);

        assert_eq!(x.digits(), 8);
        assert!(x.is_zero());

        // from_int trims to the digits actually needed
        assert_eq!(Fq::from_int(0b101, 2).digits(), 3);
    }

    #[test]
    fn test_rand_in_range() {
        let r = gf4();
        let p = 2;

        for _ in 0..50 {
            assert!(Fq::rand(&r, p).to_int(p) < 4);
        }
    }

    #[test]
    fn test_from_str() {
        // "[1, 0]" is the element a (descending digit order)
        let x = Fq::from_str("[1, 0]").unwrap();

        assert_eq!(x.to_int(2), 2);
    }
}
