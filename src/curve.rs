//! This module is an adapter to the pairing backend.
//! All arkworks-specific logic is isolated here behind newtypes,
//! so the rest of the crate only sees scalars, the three groups,
//! and the pairing map.

use core::ops::{Add, Mul, Sub};

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::{BigInteger, Field, PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::OsRng;
use zeroize::Zeroize;

use crate::errors::Error;

/// Canonical encoded length of a scalar field element.
pub(crate) const SCALAR_BYTES: usize = 32;
/// Canonical compressed length of a G1 element.
pub(crate) const G1_BYTES: usize = 48;
/// Canonical compressed length of a G2 element.
pub(crate) const G2_BYTES: usize = 96;
/// Canonical length of a target group element (Fq12 does not compress).
pub(crate) const GT_BYTES: usize = 576;

fn to_canonical_bytes(value: &impl CanonicalSerialize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    // Writing into a Vec cannot fail.
    value
        .serialize_compressed(&mut bytes)
        .expect("serialization into a Vec succeeds");
    bytes
}

/// An element of the scalar field Fr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Scalar(Fr);

impl Scalar {
    /// Generates a uniform nonzero scalar from the system CSPRNG.
    /// Resamples on the negligible chance of drawing zero.
    pub fn random_nonzero() -> Self {
        loop {
            let candidate = Fr::rand(&mut OsRng);
            if !candidate.is_zero() {
                break Self(candidate);
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse; `None` for the zero scalar.
    pub fn invert(&self) -> Option<Self> {
        self.0.inverse().map(Self)
    }

    /// Reduces a digest output into the field.
    pub fn from_digest_bytes(bytes: &[u8]) -> Self {
        Self(Fr::from_be_bytes_mod_order(bytes))
    }

    /// Interprets bytes as a big-endian integer, rejecting values that
    /// do not lie strictly below the field order.
    pub fn from_be_bytes_strict(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > SCALAR_BYTES {
            return None;
        }
        let reduced = Fr::from_be_bytes_mod_order(bytes);
        let mut padded = [0u8; SCALAR_BYTES];
        padded[SCALAR_BYTES - bytes.len()..].copy_from_slice(bytes);
        // Reduction is the identity exactly when the integer is below the order.
        if reduced.into_bigint().to_bytes_be() == padded {
            Some(Self(reduced))
        } else {
            None
        }
    }

    /// Fixed-width big-endian form of the scalar integer.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_BYTES] {
        let mut out = [0u8; SCALAR_BYTES];
        out.copy_from_slice(&self.0.into_bigint().to_bytes_be());
        out
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        to_canonical_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SCALAR_BYTES {
            return Err(Error::Framing("scalar encoding has the wrong length"));
        }
        Ok(Self(Fr::deserialize_compressed(bytes)?))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        // Wipe the limbs of the backend representation.
        (self.0).0 .0.zeroize();
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar(self.0 + other.0)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar(self.0 - other.0)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

/// An element of G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct G1Point(pub(crate) G1Projective);

impl G1Point {
    pub fn to_bytes(&self) -> Vec<u8> {
        to_canonical_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G1_BYTES {
            return Err(Error::Framing("G1 encoding has the wrong length"));
        }
        Ok(Self(G1Projective::deserialize_compressed(bytes)?))
    }
}

impl Mul<&Scalar> for &G1Point {
    type Output = G1Point;

    fn mul(self, scalar: &Scalar) -> G1Point {
        G1Point(self.0 * scalar.0)
    }
}

/// An element of G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct G2Point(pub(crate) G2Projective);

impl G2Point {
    pub fn to_bytes(&self) -> Vec<u8> {
        to_canonical_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G2_BYTES {
            return Err(Error::Framing("G2 encoding has the wrong length"));
        }
        Ok(Self(G2Projective::deserialize_compressed(bytes)?))
    }
}

impl Mul<&Scalar> for &G2Point {
    type Output = G2Point;

    fn mul(self, scalar: &Scalar) -> G2Point {
        G2Point(self.0 * scalar.0)
    }
}

/// An element of the target group GT. The protocol writes it
/// multiplicatively; the backend implements it additively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GtPoint(pub(crate) PairingOutput<Bls12_381>);

impl GtPoint {
    pub fn to_bytes(&self) -> Vec<u8> {
        to_canonical_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != GT_BYTES {
            return Err(Error::Framing("GT encoding has the wrong length"));
        }
        Ok(Self(PairingOutput::<Bls12_381>::deserialize_compressed(
            bytes,
        )?))
    }
}

impl Mul<&Scalar> for &GtPoint {
    type Output = GtPoint;

    /// Exponentiation of the target group element.
    fn mul(self, scalar: &Scalar) -> GtPoint {
        GtPoint(self.0 * scalar.0)
    }
}

/// The bilinear map `e: G1 x G2 -> GT`.
pub(crate) fn pairing(p: &G1Point, q: &G2Point) -> GtPoint {
    GtPoint(Bls12_381::pairing(p.0, q.0))
}
