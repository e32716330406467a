//! Dense row-major matrices over F_{p^k}: the AES state and round-key shape.

use super::element::Fq;
use super::vec::{self, FqVec};
use crate::zp::ZpPoly;
use std::fmt;
use std::mem;

/// A `rows x cols` matrix of F_{p^k} elements, row-major. Cloning
/// deep-copies every element's backing store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FqMat {
    c: Vec<Fq>,
    rows: usize,
    cols: usize,
}

impl FqMat {
    /// A zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        FqMat {
            c: vec![Fq::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from row-major integer encodings of the elements.
    pub fn from_ints(rows: usize, cols: usize, entries: &[u64], p: u64) -> Self {
        assert_eq!(entries.len(), rows * cols);

        FqMat {
            c: entries.iter().map(|&v| Fq::from_int(v, p)).collect(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> &Fq {
        &self.c[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, v: Fq) {
        self.c[i * self.cols + j] = v;
    }

    /// Row `i` as a borrowed slice into the matrix storage.
    pub fn row(&self, i: usize) -> &[Fq] {
        &self.c[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [Fq] {
        &mut self.c[i * self.cols..(i + 1) * self.cols]
    }

    /// Transposes in place by mirroring the lower triangle, then swapping the
    /// row/col counts. Square matrices only.
    pub fn transpose(mut self) -> Self {
        assert_eq!(self.rows, self.cols, "in-place transpose needs a square matrix");

        for i in 0..self.rows {
            for j in 0..i {
                self.c.swap(i * self.cols + j, j * self.cols + i);
            }
        }

        std::mem::swap(&mut self.rows, &mut self.cols);

        self
    }

    pub fn add(mut self, y: &FqMat, p: u64) -> Self {
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

    pub fn sub(mut self, y: &FqMat, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = mem::take(a).sub(b, p);
        }

        self
    }

    /// Scales every entry by `a` in the field.
    pub fn smul(mut self, a: &Fq, r: &ZpPoly, p: u64) -> Self {
        for c in &mut self.c {
            *c = c.mul(a, r, p);
        }

        self
    }

    /// Hadamard (entry-wise) field product.
    pub fn hmul(mut self, y: &FqMat, r: &ZpPoly, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(b, r, p);
        }

        self
    }

    /// Matrix product: transpose `y`, then fill each entry with a row dot
    /// product computed in F_{p^k}.
    pub fn mul(&self, y: &FqMat, r: &ZpPoly, p: u64) -> Self {
        let t = y.clone().transpose();
        let mut z = FqMat::new(self.rows, t.rows);

        for i in 0..z.rows {
            for j in 0..z.cols {
                z.c[i * z.cols + j] = vec::dot(self.row(i), t.row(j), r, p);
            }
        }

        z
    }

    /// Matrix-vector product.
    pub fn vmul(&self, y: &FqVec, r: &ZpPoly, p: u64) -> FqVec {
        let mut z = FqVec::new(self.rows);

        for i in 0..self.rows {
            z.as_mut_slice()[i] = vec::dot(self.row(i), y.as_slice(), r, p);
        }

        z
    }

    /// Inverts every entry; zero entries stay zero.
    pub fn hinv(mut self, r: &ZpPoly, p: u64) -> Self {
        for a in &mut self.c {
            *a = a.inv(r, p);
        }

        self
    }

    /// Divides every entry by the scalar `a`.
    pub fn sdiv(self, a: &Fq, r: &ZpPoly, p: u64) -> Self {
        let t = a.inv(r, p);

        self.smul(&t, r, p)
    }

    /// Hadamard (entry-wise) field division.
    pub fn hdiv(mut self, y: &FqMat, r: &ZpPoly, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.div(b, r, p);
        }

        self
    }

    /// Multiplies by the element-wise inverse of `y`.
    pub fn vdiv(&self, y: &FqVec, r: &ZpPoly, p: u64) -> FqVec {
        self.vmul(&y.clone().inv(r, p), r, p)
    }
}

impl fmt::Display for FqMat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            writeln!(f, "]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf4() -> ZpPoly {
        ZpPoly::from_ints(&[1, 1, 1])
    }

    #[test]
    fn test_transpose_involution() {
        let p = 2;
        let m = FqMat::from_ints(2, 2, &[0, 1, 2, 3], p);

        assert_eq!(m.clone().transpose().transpose(), m);
        assert_eq!(m.clone().transpose().get(0, 1).to_int(p), 2);
    }

    #[test]
    fn test_add_is_xor() {
        let p = 2;
        let a = FqMat::from_ints(2, 2, &[1, 2, 3, 0], p);
        let b = FqMat::from_ints(2, 2, &[1, 1, 1, 1], p);

        assert_eq!(a.add(&b, p), FqMat::from_ints(2, 2, &[0, 3, 2, 1], p));
    }

    #[test]
    fn test_mul_identity() {
        let r = gf4();
        let p = 2;
        let a = FqMat::from_ints(2, 2, &[2, 3, 1, 2], p);
        let id = FqMat::from_ints(2, 2, &[1, 0, 0, 1], p);

        assert_eq!(a.mul(&id, &r, p), a);
        assert_eq!(id.mul(&a, &r, p), a);
    }

    #[test]
    fn test_mul_known() {
        let r = gf4();
        let p = 2;
        // [[a, 0], [0, a]] squared = [[a+1, 0], [0, a+1]]
        let a = FqMat::from_ints(2, 2, &[2, 0, 0, 2], p);

        assert_eq!(a.mul(&a, &r, p), FqMat::from_ints(2, 2, &[3, 0, 0, 3], p));
    }

    #[test]
    fn test_vmul() {
        let r = gf4();
        let p = 2;
        let a = FqMat::from_ints(2, 2, &[1, 2, 3, 1], p);
        let x = FqVec::from_elems(vec![Fq::from_int(1, p), Fq::from_int(1, p)]);

        // rows: 1 + a = 3, (a+1) + 1 = a = 2
        let y = a.vmul(&x, &r, p);
        assert_eq!(y.as_slice()[0].to_int(p), 3);
        assert_eq!(y.as_slice()[1].to_int(p), 2);
    }

    #[test]
    fn test_hinv() {
        let r = gf4();
        let p = 2;
        let a = FqMat::from_ints(2, 2, &[0, 1, 2, 3], p);

        assert_eq!(a.hinv(&r, p), FqMat::from_ints(2, 2, &[0, 1, 3, 2], p));
    }
}
