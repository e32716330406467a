//! The base field Z_p and its containers.
//!
//! Everything here is parameterized by a runtime prime `p` passed to each
//! operation; no value stores its modulus.

pub mod mat;
pub mod poly;
pub mod scalar;
pub mod vec;

pub use mat::ZpMat;
pub use poly::ZpPoly;
pub use scalar::Zp;
pub use vec::ZpVec;
