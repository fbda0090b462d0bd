//! Ciphertext shapes and the core protocol algebra.
//!
//! A ciphertext is either *direct* (`c1` in G1, decryptable by the
//! delegator) or *transformed* (`c1` moved to GT by the proxy,
//! decryptable by the delegatee). The two shapes are distinct types, so
//! calling the wrong decryption or transforming twice is impossible at
//! compile time; the tagged [`Ciphertext`] enum re-checks the state at
//! run time for values that arrive over the wire.

use crate::curve::{pairing, G1Point, GtPoint, Scalar, G1_BYTES, GT_BYTES, SCALAR_BYTES};
use crate::errors::Error;
use crate::hashing::ScalarDigest;
use crate::keys::{DelegatorPublicKey, SecretKey};
use crate::message::Message;
use crate::params::{Parameters, PARAMS_BYTES};
use crate::rekey::ReKey;
use crate::traits::SerializableToBytes;

fn mask_for(shared: &GtPoint) -> Scalar {
    ScalarDigest::new().chain_gt(shared).finalize()
}

/// A ciphertext under the delegator's own key, not yet transformed.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectCiphertext {
    pub(crate) params: Parameters,
    pub(crate) c1: G1Point,
    pub(crate) c2: Scalar,
}

impl DirectCiphertext {
    pub(crate) const SERIALIZED_BYTES: usize = PARAMS_BYTES + G1_BYTES + SCALAR_BYTES;

    /// `c1 = pk^k`, `c2 = m + H(z^k)` for a fresh random `k`.
    pub(crate) fn encrypt(
        params: &Parameters,
        pk: &DelegatorPublicKey,
        message: &Message,
    ) -> Self {
        // Fresh per call: two encryptions of one message must differ.
        let k = Scalar::random_nonzero();
        let c1 = &pk.0 * &k;
        let mask = mask_for(&(&params.z * &k));
        let c2 = message.scalar() + &mask;
        Self {
            params: params.clone(),
            c1,
            c2,
        }
    }

    /// Unblinds via `e(c1, h)^(1/sk) = z^k`.
    ///
    /// A valid but mismatched `sk` produces a well-formed garbage
    /// message, not an error.
    pub(crate) fn decrypt(&self, params: &Parameters, sk: &SecretKey) -> Result<Message, Error> {
        self.check_params(params)?;
        let shared = pairing(&self.c1, &params.h);
        let unblinded = &shared * &sk.invert()?;
        Ok(Message::from_scalar(&self.c2 - &mask_for(&unblinded)))
    }

    /// Proxy-side transformation: one pairing, no secret key.
    ///
    /// `e(g^(sk_A k), pk_B^(1/sk_A)) = z^(sk_B k)`, so the result is
    /// exactly what the delegatee's key can unblind.
    pub(crate) fn reencrypt(&self, rekey: &ReKey) -> Result<TransformedCiphertext, Error> {
        if self.params != rekey.params {
            return Err(Error::IncompatibleGroupElement(
                "re-key belongs to a different parameter set",
            ));
        }
        Ok(TransformedCiphertext {
            params: self.params.clone(),
            c1: pairing(&self.c1, &rekey.point),
            c2: self.c2,
        })
    }

    fn check_params(&self, params: &Parameters) -> Result<(), Error> {
        if self.params != *params {
            return Err(Error::IncompatibleGroupElement(
                "ciphertext belongs to a different parameter set",
            ));
        }
        Ok(())
    }
}

impl SerializableToBytes for DirectCiphertext {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.params.to_bytes();
        bytes.extend(self.c1.to_bytes());
        bytes.extend(self.c2.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::SERIALIZED_BYTES {
            return Err(Error::Framing(
                "direct ciphertext encoding has the wrong length",
            ));
        }
        Ok(Self {
            params: Parameters::from_bytes(&bytes[..PARAMS_BYTES])?,
            c1: G1Point::from_bytes(&bytes[PARAMS_BYTES..PARAMS_BYTES + G1_BYTES])?,
            c2: Scalar::from_bytes(&bytes[PARAMS_BYTES + G1_BYTES..])?,
        })
    }
}

/// A ciphertext transformed by the proxy for one delegatee.
///
/// Terminal apart from delegatee decryption: the scheme is single-hop
/// and there is no path back to a direct ciphertext.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedCiphertext {
    pub(crate) params: Parameters,
    pub(crate) c1: GtPoint,
    pub(crate) c2: Scalar,
}

impl TransformedCiphertext {
    pub(crate) const SERIALIZED_BYTES: usize = PARAMS_BYTES + GT_BYTES + SCALAR_BYTES;

    /// Unblinds via `c1^(1/sk_B) = z^k`. Same mismatch caveat as the
    /// direct decryption.
    pub(crate) fn decrypt(&self, params: &Parameters, sk: &SecretKey) -> Result<Message, Error> {
        if self.params != *params {
            return Err(Error::IncompatibleGroupElement(
                "ciphertext belongs to a different parameter set",
            ));
        }
        let unblinded = &self.c1 * &sk.invert()?;
        Ok(Message::from_scalar(&self.c2 - &mask_for(&unblinded)))
    }
}

impl SerializableToBytes for TransformedCiphertext {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.params.to_bytes();
        bytes.extend(self.c1.to_bytes());
        bytes.extend(self.c2.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::SERIALIZED_BYTES {
            return Err(Error::Framing(
                "transformed ciphertext encoding has the wrong length",
            ));
        }
        Ok(Self {
            params: Parameters::from_bytes(&bytes[..PARAMS_BYTES])?,
            c1: GtPoint::from_bytes(&bytes[PARAMS_BYTES..PARAMS_BYTES + GT_BYTES])?,
            c2: Scalar::from_bytes(&bytes[PARAMS_BYTES + GT_BYTES..])?,
        })
    }
}

const TAG_DIRECT: u8 = 0;
const TAG_TRANSFORMED: u8 = 1;

/// Tagged wire form covering both ciphertext shapes.
///
/// Useful where ciphertexts of unknown state arrive over the wire,
/// typically at the proxy.
#[derive(Clone, Debug, PartialEq)]
pub enum Ciphertext {
    /// Not yet transformed; decryptable by the delegator.
    Direct(DirectCiphertext),
    /// Transformed by the proxy; decryptable by the delegatee.
    Transformed(TransformedCiphertext),
}

impl Ciphertext {
    /// Applies a re-key, rejecting a second hop.
    pub fn reencrypt(&self, rekey: &ReKey) -> Result<Ciphertext, Error> {
        match self {
            Self::Direct(ciphertext) => ciphertext.reencrypt(rekey).map(Self::Transformed),
            Self::Transformed(_) => Err(Error::AlreadyTransformed),
        }
    }
}

impl SerializableToBytes for Ciphertext {
    fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Direct(ciphertext) => {
                let mut bytes = vec![TAG_DIRECT];
                bytes.extend(ciphertext.to_bytes());
                bytes
            }
            Self::Transformed(ciphertext) => {
                let mut bytes = vec![TAG_TRANSFORMED];
                bytes.extend(ciphertext.to_bytes());
                bytes
            }
        }
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.split_first() {
            Some((&TAG_DIRECT, rest)) => DirectCiphertext::from_bytes(rest).map(Self::Direct),
            Some((&TAG_TRANSFORMED, rest)) => {
                TransformedCiphertext::from_bytes(rest).map(Self::Transformed)
            }
            Some(_) => Err(Error::Framing("unknown ciphertext state tag")),
            None => Err(Error::Framing("empty ciphertext encoding")),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::{Ciphertext, DirectCiphertext};
    use crate::errors::Error;
    use crate::keys::{DelegateePublicKey, DelegatorPublicKey, SecretKey};
    use crate::message::Message;
    use crate::params::Parameters;
    use crate::rekey::ReKey;
    use crate::traits::SerializableToBytes;

    fn fixture() -> (Parameters, SecretKey, DelegatorPublicKey) {
        let params = Parameters::from_seeds(b"abc", b"abc").unwrap();
        let sk = SecretKey::random();
        let pk = DelegatorPublicKey::from_secret_key(&params, &sk);
        (params, sk, pk)
    }

    #[test]
    fn encryption_is_randomized() {
        let (params, _sk, pk) = fixture();
        let message = Message::from_bytes(b"12345").unwrap();

        let ct1 = DirectCiphertext::encrypt(&params, &pk, &message);
        let ct2 = DirectCiphertext::encrypt(&params, &pk, &message);
        assert_ne!(ct1.c1, ct2.c1);
        assert_ne!(ct1.c2, ct2.c2);
    }

    #[test]
    fn second_hop_is_rejected() {
        let (params, sk_a, pk_a) = fixture();
        let sk_b = SecretKey::random();
        let pk_b = DelegateePublicKey::from_secret_key(&params, &sk_b);
        let rekey = ReKey::new(&params, &sk_a, &pk_b).unwrap();

        let message = Message::from_bytes(b"12345").unwrap();
        let wire = Ciphertext::Direct(DirectCiphertext::encrypt(&params, &pk_a, &message));

        let transformed = wire.reencrypt(&rekey).unwrap();
        assert!(matches!(
            transformed.reencrypt(&rekey),
            Err(Error::AlreadyTransformed)
        ));
    }

    #[test]
    fn foreign_parameter_set_is_rejected() {
        let (params, sk, pk) = fixture();
        let foreign = Parameters::from_seeds(b"xyz", b"xyz").unwrap();

        let message = Message::from_bytes(b"12345").unwrap();
        let ciphertext = DirectCiphertext::encrypt(&params, &pk, &message);

        assert!(matches!(
            ciphertext.decrypt(&foreign, &sk),
            Err(Error::IncompatibleGroupElement(_))
        ));

        let foreign_pk_b = DelegateePublicKey::from_secret_key(&foreign, &SecretKey::random());
        let foreign_rekey = ReKey::new(&foreign, &sk, &foreign_pk_b).unwrap();
        assert!(matches!(
            ciphertext.reencrypt(&foreign_rekey),
            Err(Error::IncompatibleGroupElement(_))
        ));
    }

    #[test]
    fn tagged_wire_roundtrip() {
        let (params, sk_a, pk_a) = fixture();
        let sk_b = SecretKey::random();
        let pk_b = DelegateePublicKey::from_secret_key(&params, &sk_b);
        let rekey = ReKey::new(&params, &sk_a, &pk_b).unwrap();

        let message = Message::from_bytes(b"12345").unwrap();
        let direct = Ciphertext::Direct(DirectCiphertext::encrypt(&params, &pk_a, &message));
        let back = Ciphertext::from_bytes(&direct.to_bytes()).unwrap();
        assert_eq!(direct, back);

        let transformed = direct.reencrypt(&rekey).unwrap();
        let back = Ciphertext::from_bytes(&transformed.to_bytes()).unwrap();
        assert_eq!(transformed, back);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            Ciphertext::from_bytes(&[7u8, 0, 0]),
            Err(Error::Framing(_))
        ));
        assert!(matches!(
            Ciphertext::from_bytes(&[]),
            Err(Error::Framing(_))
        ));
    }
}
