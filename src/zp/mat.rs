//! Dense row-major matrices over Z_p. Rows materialize as borrowed slices
//! into the matrix storage, so row-level operations never allocate.

use super::scalar::Zp;
use super::vec::{self, ZpVec};
use std::fmt;

/// A `rows x cols` matrix of Z_p residues, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZpMat {
    c: Vec<Zp>,
    rows: usize,
    cols: usize,
}

impl ZpMat {
    /// A zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        ZpMat {
            c: vec![Zp::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from row-major entries.
    pub fn from_ints(rows: usize, cols: usize, entries: &[u64]) -> Self {
        assert_eq!(entries.len(), rows * cols);

        ZpMat {
            c: entries.iter().map(|&v| Zp::new(v)).collect(),
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

    pub fn get(&self, i: usize, j: usize) -> Zp {
        self.c[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, v: Zp) {
        self.c[i * self.cols + j] = v;
    }

    /// Row `i` as a borrowed slice into the matrix storage.
    pub fn row(&self, i: usize) -> &[Zp] {
        &self.c[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [Zp] {
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

    pub fn add(mut self, y: &ZpMat, p: u64) -> Self {
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

    pub fn sub(mut self, y: &ZpMat, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.sub(*b, p);
        }

        self
    }

    /// Scales every entry by `a`.
    pub fn smul(mut self, a: Zp, p: u64) -> Self {
        for c in &mut self.c {
            *c = c.mul(a, p);
        }

        self
    }

    /// Hadamard (entry-wise) product.
    pub fn hmul(mut self, y: &ZpMat, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(*b, p);
        }

        self
    }

    /// Matrix product: transpose `y`, then fill each entry with a row dot
    /// product.
    pub fn mul(&self, y: &ZpMat, p: u64) -> Self {
        let t = y.clone().transpose();
        let mut z = ZpMat::new(self.rows, t.rows);

        for i in 0..z.rows {
            for j in 0..z.cols {
                z.c[i * z.cols + j] = vec::dot(self.row(i), t.row(j), p);
            }
        }

        z
    }

    /// Matrix-vector product.
    pub fn vmul(&self, y: &ZpVec, p: u64) -> ZpVec {
        let mut z = ZpVec::new(self.rows);

        for i in 0..self.rows {
            z.as_mut_slice()[i] = vec::dot(self.row(i), y.as_slice(), p);
        }

        z
    }

    /// Inverts every entry; non-invertible entries degrade to zero.
    pub fn hinv(mut self, p: u64) -> Self {
        for a in &mut self.c {
            *a = a.inv(p);
        }

        self
    }

    /// Divides every entry by the scalar `a`.
    pub fn sdiv(self, a: Zp, p: u64) -> Self {
        self.smul(a.inv(p), p)
    }

    /// Hadamard (entry-wise) division.
    pub fn hdiv(mut self, y: &ZpMat, p: u64) -> Self {
        for (a, b) in self.c.iter_mut().zip(&y.c) {
            *a = a.mul(b.inv(p), p);
        }

        self
    }

    /// Multiplies by the element-wise inverse of `y`.
    pub fn vdiv(&self, y: &ZpVec, p: u64) -> ZpVec {
        self.vmul(&y.clone().inv(p), p)
    }
}

impl fmt::Display for ZpMat {
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

    #[test]
    fn test_transpose_involution() {
        let m = ZpMat::from_ints(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(m.clone().transpose().transpose(), m);
        assert_eq!(m.clone().transpose().get(0, 1), Zp::new(4));
    }

    #[test]
    fn test_mul() {
        let p = 5;
        let a = ZpMat::from_ints(2, 2, &[1, 2, 3, 4]);
        let b = ZpMat::from_ints(2, 2, &[0, 1, 1, 0]);

        // swapping columns of a
        assert_eq!(a.mul(&b, p), ZpMat::from_ints(2, 2, &[2, 1, 4, 3]));
    }

    #[test]
    fn test_mul_known_product() {
        let p = 7;
        let a = ZpMat::from_ints(2, 2, &[1, 2, 3, 4]);

        // a * a = [[7, 10], [15, 22]] ≡ [[0, 3], [1, 1]] (mod 7)
        assert_eq!(a.mul(&a, p), ZpMat::from_ints(2, 2, &[0, 3, 1, 1]));
    }

    #[test]
    fn test_vmul() {
        let p = 7;
        let a = ZpMat::from_ints(2, 3, &[1, 2, 3, 4, 5, 6]);
        let x = ZpVec::from_ints(&[1, 1, 1]);

        // row sums: 6 and 15 ≡ 1 (mod 7)
        assert_eq!(a.vmul(&x, p), ZpVec::from_ints(&[6, 1]));
    }

    #[test]
    fn test_elementwise() {
        let p = 5;
        let a = ZpMat::from_ints(2, 2, &[1, 2, 3, 4]);
        let b = ZpMat::from_ints(2, 2, &[4, 3, 2, 1]);

        assert_eq!(a.clone().add(&b, p), ZpMat::from_ints(2, 2, &[0, 0, 0, 0]));
        assert_eq!(a.clone().hmul(&b, p), ZpMat::from_ints(2, 2, &[4, 1, 1, 4]));
        assert_eq!(a.clone().neg(p), ZpMat::from_ints(2, 2, &[4, 3, 2, 1]));
    }

    #[test]
    fn test_hinv() {
        let p = 5;
        let a = ZpMat::from_ints(2, 2, &[1, 2, 3, 0]);

        // 2^(-1) = 3, 3^(-1) = 2, 0 degrades to 0
        assert_eq!(a.hinv(p), ZpMat::from_ints(2, 2, &[1, 3, 2, 0]));
    }
}
