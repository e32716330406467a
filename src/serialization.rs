//! Serialization and deserialization for interoperability.
//!
//! JSON records for polynomials, field elements and AES blocks, so values
//! can cross process boundaries or be stored alongside their parameters.
//! The modulus travels with the record; the in-memory types themselves never
//! carry it.

use crate::fq::Fq;
use crate::zp::ZpPoly;
use serde::{Deserialize, Serialize};

/// Serializable form of a polynomial over Z_p, ascending-degree
/// coefficients plus the modulus they are reduced by.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SerializableZpPoly {
    pub modulus: u64,
    pub coefficients: Vec<u64>,
}

impl SerializableZpPoly {
    pub fn from_poly(poly: &ZpPoly, modulus: u64) -> Self {
        SerializableZpPoly {
            modulus,
            coefficients: poly.coeffs().iter().map(|c| c.as_int()).collect(),
        }
    }

    pub fn to_poly(&self) -> ZpPoly {
        if self.coefficients.is_empty() {
            return ZpPoly::zero();
        }

        ZpPoly::from_ints(&self.coefficients)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {}", e))
    }
}

/// Serializable form of an F_{p^k} element: its base-p digits and the prime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SerializableFq {
    pub modulus: u64,
    pub digits: Vec<u64>,
}

impl SerializableFq {
    pub fn from_element(x: &Fq, modulus: u64) -> Self {
        SerializableFq {
            modulus,
            digits: x.poly().coeffs().iter().map(|c| c.as_int()).collect(),
        }
    }

    pub fn to_element(&self) -> Fq {
        if self.digits.is_empty() {
            return Fq::zero();
        }

        Fq::from_poly(ZpPoly::from_ints(&self.digits))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {}", e))
    }
}

/// Serializable form of a 16-byte AES block, hex-encoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SerializableAesBlock {
    pub bytes: String,
}

impl SerializableAesBlock {
    pub fn from_block(block: &[u8; crate::aes::AES_BLOCK_SIZE]) -> Self {
        SerializableAesBlock {
            bytes: hex::encode(block),
        }
    }

    pub fn to_block(&self) -> Result<[u8; crate::aes::AES_BLOCK_SIZE], String> {
        let raw = hex::decode(&self.bytes).map_err(|e| format!("Hex decode error: {}", e))?;

        raw.try_into()
            .map_err(|_| "AES block must be exactly 16 bytes".to_string())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_json_round_trip() {
        let poly = ZpPoly::from_ints(&[3, 0, 2, 4]);
        let record = SerializableZpPoly::from_poly(&poly, 5);

        let json = record.to_json().unwrap();
        let back = SerializableZpPoly::from_json(&json).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.to_poly(), poly);
    }

    #[test]
    fn test_fq_json_round_trip() {
        let x = Fq::from_int(0x53, 2);
        let record = SerializableFq::from_element(&x, 2);

        let back = SerializableFq::from_json(&record.to_json().unwrap()).unwrap();

        assert_eq!(back.to_element(), x);
    }

    #[test]
    fn test_block_round_trip() {
        let block = [0x2b; 16];
        let record = SerializableAesBlock::from_block(&block);

        assert_eq!(record.to_block().unwrap(), block);

        let bad = SerializableAesBlock {
            bytes: "2b7e".to_string(),
        };
        assert!(bad.to_block().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(SerializableZpPoly::from_json("{not json").is_err());
    }
}
