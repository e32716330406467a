//! # gfkit - Finite Field Arithmetic and an Algebraic AES-128
//!
//! A from-scratch algebra toolkit for finite fields: integers modulo a prime
//! (Z_p), the polynomial extension field on top of it (F_q = F_p[x] modulo an
//! irreducible), and vector/matrix containers over both - used to construct
//! the AES-128 block cipher entirely from field operations rather than table
//! lookups.
//!
//! ## Features
//!
//! - **Scalar arithmetic (Z_p)**: overflow-safe modular arithmetic for any
//!   prime up to the full 64-bit range
//! - **Polynomials, vectors, matrices over Z_p**: ring/module operations,
//!   schoolbook remainder reduction, Monte-Carlo irreducibility search
//! - **Extension fields (F_p^k)**: field arithmetic parameterized by an
//!   explicit reduction polynomial, never stored on the element
//! - **Containers over F_q**: the same polynomial/vector/matrix API one
//!   level up
//! - **AES-128**: S-box, ShiftRows, MixColumns and key schedule expressed as
//!   algebra over GF(2^8)
//!
//! ## Quick Start
//!
//! ```rust
//! use gfkit::{Zp, ZpPoly, Fq};
//!
//! // Arithmetic in Z_17
//! let a = Zp::new(5);
//! let b = Zp::new(12);
//! assert_eq!(a.add(b, 17).as_int(), 0);
//! assert_eq!(a.mul(a.inv(17), 17).as_int(), 1);
//!
//! // GF(2^8) with the AES reduction polynomial
//! let r = ZpPoly::from_ints(&[1, 1, 0, 1, 1, 0, 0, 0, 1]);
//! let x = Fq::from_int(0x53, 2);
//! assert_eq!(x.inv(&r, 2).to_int(2), 0xca);
//!
//! // One AES-128 block, straight from the field operations
//! let key = [0u8; 16];
//! let msg = [0u8; 16];
//! let cip = gfkit::aes::encrypt_block(&key, &msg);
//! assert_eq!(cip[0], 0x66);
//! ```
//!
//! ## Module Overview
//!
//! - [`zp`] - the base field Z_p: scalars, polynomials, vectors, matrices
//! - [`fq`] - the extension field F_p^k and its containers
//! - [`aes`] - AES-128 assembled from GF(2^8) operations
//! - [`encoding`] - hex block codec and bracketed coefficient literals
//! - [`serialization`] - JSON records for polynomials, elements and blocks
//! - [`error`] - parse and search error types
//!
//! Every operation takes its modulus (`p`, and for F_q the reduction
//! polynomial `r`) as an explicit parameter. No element remembers its field,
//! so the same value can be reused under different moduli.

pub mod aes;
pub mod encoding;
pub mod error;
pub mod fq;
pub mod serialization;
pub mod zp;

// Re-export the core types for convenience
pub use error::{NoIrreduciblePolynomialFound, ParseError};
pub use fq::{Fq, FqMat, FqPoly, FqVec};
pub use zp::{Zp, ZpMat, ZpPoly, ZpVec};

pub use encoding::{hex_load, hex_string};
pub use serialization::{SerializableAesBlock, SerializableFq, SerializableZpPoly};
