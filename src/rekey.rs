use crate::curve::{G2Point, G2_BYTES};
use crate::errors::Error;
use crate::keys::{DelegateePublicKey, SecretKey};
use crate::params::{Parameters, PARAMS_BYTES};
use crate::traits::SerializableToBytes;

/// A re-encryption key, `pk_B^(1/sk_A)` in G2.
///
/// Bound to one ordered (delegator, delegatee) pair and reusable across
/// any number of that delegator's ciphertexts. Handing it to a proxy is
/// a standing grant: there is no revocation mechanism, and a proxy
/// colluding with the delegatee can decrypt everything the re-key
/// covers.
#[derive(Clone, Debug, PartialEq)]
pub struct ReKey {
    pub(crate) params: Parameters,
    pub(crate) point: G2Point,
}

impl ReKey {
    /// Computed by the delegator alone from its secret key and the
    /// delegatee's public key; no delegatee interaction is needed.
    pub fn new(
        params: &Parameters,
        delegator_sk: &SecretKey,
        delegatee_pk: &DelegateePublicKey,
    ) -> Result<Self, Error> {
        let inverse = delegator_sk.invert()?;
        Ok(Self {
            params: params.clone(),
            point: &delegatee_pk.0 * &inverse,
        })
    }
}

impl SerializableToBytes for ReKey {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.params.to_bytes();
        bytes.extend(self.point.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != PARAMS_BYTES + G2_BYTES {
            return Err(Error::Framing("re-key encoding has the wrong length"));
        }
        Ok(Self {
            params: Parameters::from_bytes(&bytes[..PARAMS_BYTES])?,
            point: G2Point::from_bytes(&bytes[PARAMS_BYTES..])?,
        })
    }
}
