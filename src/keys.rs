use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve::{G1Point, G2Point, Scalar, G1_BYTES, G2_BYTES};
use crate::errors::Error;
use crate::params::Parameters;
use crate::traits::SerializableToBytes;

/// A secret key, held by a delegator or a delegatee.
///
/// Always a nonzero scalar: decryption and re-key generation invert it.
#[derive(Clone)] // No Debug derivation, to avoid exposing the key accidentally.
pub struct SecretKey(Scalar);

impl SecretKey {
    /// Generates a secret key using the system CSPRNG.
    /// Resamples on the negligible chance of drawing zero.
    pub fn random() -> Self {
        Self(Scalar::random_nonzero())
    }

    pub(crate) fn secret_scalar(&self) -> &Scalar {
        &self.0
    }

    /// Multiplicative inverse of the secret scalar.
    pub(crate) fn invert(&self) -> Result<Scalar, Error> {
        self.0.invert().ok_or(Error::ZeroSecretKey)
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize()
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl SerializableToBytes for SecretKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let scalar = Scalar::from_bytes(bytes)?;
        if scalar.is_zero() {
            return Err(Error::ZeroSecretKey);
        }
        Ok(Self(scalar))
    }
}

/// A delegator's public key, `g^sk` in G1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelegatorPublicKey(pub(crate) G1Point);

impl DelegatorPublicKey {
    /// Creates a public key over the G1 generator of `params`.
    pub fn from_secret_key(params: &Parameters, secret_key: &SecretKey) -> Self {
        Self(&params.g * secret_key.secret_scalar())
    }
}

impl SerializableToBytes for DelegatorPublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G1_BYTES {
            return Err(Error::Framing("delegator key has the wrong length"));
        }
        Ok(Self(G1Point::from_bytes(bytes)?))
    }
}

/// A delegatee's public key, `h^sk` in G2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelegateePublicKey(pub(crate) G2Point);

impl DelegateePublicKey {
    /// Creates a public key over the G2 generator of `params`.
    pub fn from_secret_key(params: &Parameters, secret_key: &SecretKey) -> Self {
        Self(&params.h * secret_key.secret_scalar())
    }
}

impl SerializableToBytes for DelegateePublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G2_BYTES {
            return Err(Error::Framing("delegatee key has the wrong length"));
        }
        Ok(Self(G2Point::from_bytes(bytes)?))
    }
}
