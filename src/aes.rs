//! AES-128 assembled from field operations over GF(2^8).
//!
//! Nothing here is a table lookup: the S-box is a field inversion followed by
//! an affine transform in the polynomial ring mod `x^8 + 1`, ShiftRows and
//! MixColumns are multiplications in the ring of GF(2^8)-polynomials mod
//! `x^4 + 1`, and the key schedule reuses the same rotation trick. The state
//! is a 4x4 [`FqMat`] filled through a column-major transpose of the 16-byte
//! block.
//!
//! Round-by-round state is emitted at `trace` level through the `log` facade.

use crate::encoding::hex_string;
use crate::fq::{Fq, FqMat, FqPoly, FqVec};
use crate::zp::ZpPoly;
use log::trace;
use once_cell::sync::Lazy;
use std::mem;

pub const AES_BLOCK_SIZE: usize = 16;

const AES_P: u64 = 2; // prime field characteristic
const AES_ROWS: usize = 4; // block rows
const AES_COLS: usize = 4; // block columns
const AES_ROUNDS: u64 = 10; // rounds for the 128-bit key size
const AES_ALPHA: u64 = 0b10; // round-constant base, the element x

// The field modulus: x^8 + x^4 + x^3 + x + 1 (over Z_2[x]).
static AES_R: Lazy<ZpPoly> = Lazy::new(|| ZpPoly::from_ints(&[1, 1, 0, 1, 1, 0, 0, 0, 1]));

// S-box affine slope: x^4 + x^3 + x^2 + x + 1 (over Z_2[x]).
static SBOX_SLOPE: Lazy<ZpPoly> = Lazy::new(|| ZpPoly::from_ints(&[1, 1, 1, 1, 1]));

// S-box affine ring modulus: x^8 + 1. Deliberately not the field modulus;
// the affine step acts on the additive group of bytes, not in the field.
static SBOX_RING: Lazy<ZpPoly> = Lazy::new(|| ZpPoly::from_ints(&[1, 0, 0, 0, 0, 0, 0, 0, 1]));

// S-box affine intercept: a^6 + a^5 + a + 1, i.e. 0x63.
static SBOX_OFFSET: Lazy<Fq> = Lazy::new(|| Fq::from_int(0x63, AES_P));

// Rotation ring modulus for rows/columns: x^4 + 1 (over GF(2^8)[x]).
static ROT_RING: Lazy<FqPoly> = Lazy::new(|| {
    FqPoly::from_coeffs(vec![
        Fq::one(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::one(),
    ])
});

// Rotation step: the polynomial x (over GF(2^8)[x]).
static SHIFT_POLY: Lazy<FqPoly> = Lazy::new(|| FqPoly::from_coeffs(vec![Fq::zero(), Fq::one()]));

// MixColumns polynomial: (a+1)x^3 + x^2 + x + a (over GF(2^8)[x]).
static MIX_POLY: Lazy<FqPoly> = Lazy::new(|| {
    FqPoly::from_coeffs(vec![
        Fq::from_int(0b10, AES_P),
        Fq::one(),
        Fq::one(),
        Fq::from_int(0b11, AES_P),
    ])
});

/// Maps a 16-byte block into the 4x4 state: byte `(i, j)` lands in cell
/// `(j, i)` as a field element.
pub fn from_bytes(data: &[u8; AES_BLOCK_SIZE]) -> FqMat {
    let mut x = FqMat::new(AES_ROWS, AES_COLS);

    for i in 0..AES_ROWS {
        for j in 0..AES_COLS {
            x.set(j, i, Fq::from_int(u64::from(data[i * AES_COLS + j]), AES_P));
        }
    }

    x
}

/// Maps the 4x4 state back to a 16-byte block, undoing the transpose of
/// [`from_bytes`].
pub fn to_bytes(x: &FqMat) -> [u8; AES_BLOCK_SIZE] {
    let mut data = [0u8; AES_BLOCK_SIZE];

    for i in 0..AES_ROWS {
        for j in 0..AES_COLS {
            data[i * AES_COLS + j] = x.get(j, i).to_int(AES_P) as u8;
        }
    }

    data
}

/// XORs the round key into the state (field addition per cell).
pub fn add_round_key(blk: FqMat, rk: &FqMat) -> FqMat {
    blk.add(rk, AES_P)
}

/// The AES S-box as algebra: invert in the field, multiply by the affine
/// slope reduced mod `x^8 + 1`, add the intercept.
pub fn sbox(x: Fq) -> Fq {
    let v = x.inv(&AES_R, AES_P).into_poly();
    let v = v.mul(&SBOX_SLOPE, AES_P).rem(&SBOX_RING, AES_P);

    Fq::from_poly(v).add(&SBOX_OFFSET, AES_P)
}

/// Applies [`sbox`] to every cell.
pub fn sub_bytes(mut blk: FqMat) -> FqMat {
    for i in 0..AES_ROWS {
        for c in blk.row_mut(i) {
            *c = sbox(mem::take(c));
        }
    }

    blk
}

/// Rotates row `i` left by `i` positions, realized as `4 - i` multiplications
/// by `x` in the polynomial ring mod `x^4 + 1`.
pub fn shift_rows(mut blk: FqMat) -> FqMat {
    for i in 0..AES_ROWS {
        let mut t = FqPoly::from_vec(FqVec::from_slice(blk.row(i)));

        for _ in 0..AES_ROWS - i {
            t = t.mul(&SHIFT_POLY, &AES_R, AES_P).rem(&ROT_RING, &AES_R, AES_P);
        }

        t.resize(AES_COLS - 1);

        for (j, c) in t.into_vec().into_elems().into_iter().enumerate() {
            blk.set(i, j, c);
        }
    }

    blk
}

/// Multiplies each column, read as a degree-3 GF(2^8)-polynomial, by the
/// fixed MixColumns polynomial mod `x^4 + 1`. Columns become rows for the
/// duration via transposition.
pub fn mix_columns(blk: FqMat) -> FqMat {
    let mut blk = blk.transpose();

    for i in 0..AES_COLS {
        let mut t = FqPoly::from_vec(FqVec::from_slice(blk.row(i)));

        t = t.mul(&MIX_POLY, &AES_R, AES_P).rem(&ROT_RING, &AES_R, AES_P);
        t.resize(AES_ROWS - 1);

        for (j, c) in t.into_vec().into_elems().into_iter().enumerate() {
            blk.set(i, j, c);
        }
    }

    blk.transpose()
}

/// Derives the next round key in place: rotate the last column with the
/// `x^4 + 1` trick, S-box it, add the round constant `alpha^round` to its
/// first entry, fold it into column 0, then ripple each column into the
/// next.
pub fn schedule(key: FqMat, round: u64) -> FqMat {
    let mut key = key.transpose();

    let mut t = FqPoly::from_vec(FqVec::from_slice(key.row(AES_ROWS - 1)));

    for _ in 1..AES_ROWS {
        t = t.mul(&SHIFT_POLY, &AES_R, AES_P).rem(&ROT_RING, &AES_R, AES_P);
    }
    t.resize(AES_ROWS - 1);

    for c in t.coeffs_mut() {
        *c = sbox(mem::take(c));
    }

    // round constant: alpha^round
    let rc = Fq::from_int(AES_ALPHA, AES_P).pow(round, &AES_R, AES_P);
    let c0 = mem::take(&mut t.coeffs_mut()[0]);
    t.coeffs_mut()[0] = c0.add(&rc, AES_P);

    for (j, c) in t.into_vec().into_elems().into_iter().enumerate() {
        let cur = mem::take(&mut key.row_mut(0)[j]);
        key.row_mut(0)[j] = cur.add(&c, AES_P);
    }

    for i in 1..AES_COLS {
        for j in 0..AES_ROWS {
            let prev = key.get(i - 1, j).clone();
            let cur = key.get(i, j).clone().add(&prev, AES_P);

            key.set(i, j, cur);
        }
    }

    key.transpose()
}

/// Encrypts one 16-byte block under a 16-byte key.
///
/// AddRoundKey with the raw key, nine full rounds of SubBytes, ShiftRows,
/// MixColumns and AddRoundKey, then a final round without MixColumns. The
/// round keys are derived incrementally, one [`schedule`] call per round.
pub fn encrypt_block(key: &[u8; AES_BLOCK_SIZE], msg: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let mut key = from_bytes(key);
    let mut blk = from_bytes(msg);

    trace!("key_in: {}", hex_string(&to_bytes(&key)));
    trace!("blk_in: {}", hex_string(&to_bytes(&blk)));

    blk = add_round_key(blk, &key);
    trace!("round 0 ak: {}", hex_string(&to_bytes(&blk)));

    for round in 0..AES_ROUNDS - 1 {
        key = schedule(key, round);
        trace!("key{}: {}", round + 1, hex_string(&to_bytes(&key)));

        blk = sub_bytes(blk);
        trace!("round {} sb: {}", round + 1, hex_string(&to_bytes(&blk)));

        blk = shift_rows(blk);
        trace!("round {} sr: {}", round + 1, hex_string(&to_bytes(&blk)));

        blk = mix_columns(blk);
        trace!("round {} mc: {}", round + 1, hex_string(&to_bytes(&blk)));

        blk = add_round_key(blk, &key);
        trace!("round {} ak: {}", round + 1, hex_string(&to_bytes(&blk)));
    }

    key = schedule(key, AES_ROUNDS - 1);
    trace!("key{}: {}", AES_ROUNDS, hex_string(&to_bytes(&key)));

    blk = sub_bytes(blk);
    blk = shift_rows(blk);
    blk = add_round_key(blk, &key);
    trace!("cip: {}", hex_string(&to_bytes(&blk)));

    to_bytes(&blk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::hex_load;

    fn block(hex: &str) -> [u8; AES_BLOCK_SIZE] {
        let mut b = [0u8; AES_BLOCK_SIZE];

        hex_load(&mut b, hex);

        b
    }

    #[test]
    fn test_sbox_spot_values() {
        assert_eq!(sbox(Fq::from_int(0x00, 2)).to_int(2), 0x63);
        assert_eq!(sbox(Fq::from_int(0x53, 2)).to_int(2), 0xed);
        assert_eq!(sbox(Fq::from_int(0x01, 2)).to_int(2), 0x7c);
    }

    #[test]
    fn test_byte_mapping_round_trip() {
        let data = block("000102030405060708090a0b0c0d0e0f");
        let m = from_bytes(&data);

        // cell (j, i) holds byte (i, j)
        assert_eq!(m.get(1, 0).to_int(2), 0x01);
        assert_eq!(m.get(0, 1).to_int(2), 0x04);
        assert_eq!(to_bytes(&m), data);
    }

    #[test]
    fn test_shift_rows_rotates_left_by_row_index() {
        let data = block("000102030405060708090a0b0c0d0e0f");
        let out = to_bytes(&shift_rows(from_bytes(&data)));

        // FIPS-197: row i of the state rotates left by i; through the
        // column-major mapping that permutes the flat block like this.
        assert_eq!(out, block("00050a0f04090e03080d02070c01060b"));
    }

    #[test]
    fn test_mix_columns_known_column() {
        // FIPS-197 MixColumns sample: db 13 53 45 -> 8e 4d a1 bc
        let data = block("db135345db135345db135345db135345");
        let out = to_bytes(&mix_columns(from_bytes(&data)));

        assert_eq!(&out[..4], &block("8e4da1bc8e4da1bc8e4da1bc8e4da1bc")[..4]);
    }

    #[test]
    fn test_schedule_first_round_key() {
        // FIPS-197 key expansion for the appendix key: w[4..8] =
        // a0fafe17 88542cb1 23a33939 2a6c7605
        let key = from_bytes(&block("2b7e151628aed2a6abf7158809cf4f3c"));
        let rk1 = to_bytes(&schedule(key, 0));

        assert_eq!(rk1, block("a0fafe1788542cb123a339392a6c7605"));
    }

    #[test]
    fn test_round_constants() {
        let p = 2;
        let alpha = Fq::from_int(AES_ALPHA, p);

        // rcon values 01, 02, 04, ..., 80, 1b, 36
        let expected = [0x01u64, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

        for (round, want) in expected.iter().enumerate() {
            assert_eq!(alpha.pow(round as u64, &AES_R, p).to_int(p), *want);
        }
    }

    #[test]
    fn test_encrypt_fips_vector() {
        let key = block("2b7e151628aed2a6abf7158809cf4f3c");
        let msg = block("6bc1bee22e409f96e93d7e117393172a");

        assert_eq!(encrypt_block(&key, &msg), block("3ad77bb40d7a3660a89ecaf32466ef97"));
    }
}
