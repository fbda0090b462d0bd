use crate::curve::{pairing, G1Point, G2Point, GtPoint, G1_BYTES, G2_BYTES};
use crate::errors::Error;
use crate::hashing::{hash_to_g1, hash_to_g2};
use crate::traits::SerializableToBytes;

/// Serialized length of a parameter set.
pub(crate) const PARAMS_BYTES: usize = G1_BYTES + G2_BYTES;

/// An object containing shared scheme parameters: the two group
/// generators and their cached pairing `z = e(g, h)`.
///
/// Construction is deterministic in the seeds, so unrelated parties can
/// agree on a parameter set without a handshake. A parameter set is
/// immutable once built; concurrent reads need no locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub(crate) g: G1Point,
    pub(crate) h: G2Point,
    pub(crate) z: GtPoint,
}

impl Parameters {
    /// Derives generators from the seeds via hash-to-curve and caches
    /// the pairing product used by every encryption.
    pub fn from_seeds(seed_g: &[u8], seed_h: &[u8]) -> Result<Self, Error> {
        let g = hash_to_g1(seed_g)?;
        let h = hash_to_g2(seed_h)?;
        let z = pairing(&g, &h);
        Ok(Self { g, h, z })
    }
}

impl SerializableToBytes for Parameters {
    fn to_bytes(&self) -> Vec<u8> {
        // `z` is derived, not transmitted.
        let mut bytes = self.g.to_bytes();
        bytes.extend(self.h.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != PARAMS_BYTES {
            return Err(Error::Framing("parameter encoding has the wrong length"));
        }
        let g = G1Point::from_bytes(&bytes[..G1_BYTES])?;
        let h = G2Point::from_bytes(&bytes[G1_BYTES..])?;
        // Recomputing keeps the cached pairing consistent with the
        // generators by construction.
        let z = pairing(&g, &h);
        Ok(Self { g, h, z })
    }
}

#[cfg(test)]
mod tests {

    use super::Parameters;
    use crate::traits::SerializableToBytes;

    #[test]
    fn independent_setups_agree() {
        let p1 = Parameters::from_seeds(b"abc", b"abc").unwrap();
        let p2 = Parameters::from_seeds(b"abc", b"abc").unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn different_seeds_differ() {
        let p1 = Parameters::from_seeds(b"abc", b"abc").unwrap();
        let p2 = Parameters::from_seeds(b"abd", b"abc").unwrap();
        let p3 = Parameters::from_seeds(b"abc", b"abd").unwrap();
        assert_ne!(p1, p2);
        assert_ne!(p1, p3);
    }

    #[test]
    fn wire_roundtrip() {
        let p = Parameters::from_seeds(b"abc", b"abc").unwrap();
        let back = Parameters::from_bytes(&p.to_bytes()).unwrap();
        assert_eq!(p, back);
    }
}
