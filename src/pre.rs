//! The high-level functional re-encryption API and the hybrid envelope.

use crate::ciphertext::{DirectCiphertext, TransformedCiphertext};
use crate::curve::Scalar;
use crate::dem::Dem;
use crate::errors::Error;
use crate::keys::{DelegatorPublicKey, SecretKey};
use crate::message::Message;
use crate::params::Parameters;
use crate::rekey::ReKey;
use crate::traits::SerializableToBytes;

/// Encrypts a scalar-encoded message under the delegator's public key.
pub fn encrypt(
    params: &Parameters,
    pk: &DelegatorPublicKey,
    message: &Message,
) -> DirectCiphertext {
    DirectCiphertext::encrypt(params, pk, message)
}

/// Decrypts a direct ciphertext with the delegator's own secret key.
///
/// A valid but mismatched secret key yields a well-formed garbage
/// message rather than an error; the protocol carries no integrity
/// check at this level.
pub fn decrypt_original(
    params: &Parameters,
    ciphertext: &DirectCiphertext,
    sk: &SecretKey,
) -> Result<Message, Error> {
    ciphertext.decrypt(params, sk)
}

/// Proxy-side transformation of a direct ciphertext for the delegatee
/// named by `rekey`. Costs one pairing and touches no secret key or
/// plaintext.
pub fn reencrypt(
    ciphertext: &DirectCiphertext,
    rekey: &ReKey,
) -> Result<TransformedCiphertext, Error> {
    ciphertext.reencrypt(rekey)
}

/// Decrypts a transformed ciphertext with the delegatee's secret key.
/// Same mismatch caveat as [`decrypt_original`].
pub fn decrypt_reencrypted(
    params: &Parameters,
    ciphertext: &TransformedCiphertext,
    sk: &SecretKey,
) -> Result<Message, Error> {
    ciphertext.decrypt(params, sk)
}

/// An arbitrary-length payload sealed under a PRE-wrapped content key.
///
/// The content key is a field element whose canonical byte form seeds
/// the payload cipher; the payload carries its own nonce and
/// authentication tag.
#[derive(Clone, Debug, PartialEq)]
pub struct SealedEnvelope {
    pub(crate) wrapped_key: DirectCiphertext,
    pub(crate) payload: Box<[u8]>,
}

/// A sealed envelope whose wrapped key the proxy has transformed for
/// one delegatee. The payload bytes are untouched by the transform.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedEnvelope {
    pub(crate) wrapped_key: TransformedCiphertext,
    pub(crate) payload: Box<[u8]>,
}

/// Seals `plaintext` under a fresh content key wrapped for `pk`.
///
/// The content key is sampled directly as a nonzero field element, so a
/// freshly generated key always encodes below the field order;
/// [`Error::EncodingOverflow`] is reserved for caller-supplied message
/// bytes.
pub fn seal(
    params: &Parameters,
    pk: &DelegatorPublicKey,
    plaintext: &[u8],
) -> Result<SealedEnvelope, Error> {
    let content_key = Scalar::random_nonzero();
    let dem = Dem::new(&content_key.to_be_bytes());
    let wrapped_key = DirectCiphertext::encrypt(params, pk, &Message::from_scalar(content_key));
    let payload = dem.encrypt(plaintext)?;
    Ok(SealedEnvelope {
        wrapped_key,
        payload,
    })
}

impl SealedEnvelope {
    /// Opens the envelope with the delegator's own secret key.
    ///
    /// A mismatched key surfaces as [`Error::PayloadDecryption`]: the
    /// recovered content key is garbage and the payload cipher fails to
    /// authenticate.
    pub fn open(&self, params: &Parameters, sk: &SecretKey) -> Result<Box<[u8]>, Error> {
        let content_key = self.wrapped_key.decrypt(params, sk)?;
        Dem::new(&content_key.scalar().to_be_bytes()).decrypt(&self.payload)
    }

    /// Proxy-side transformation of the wrapped key; the sealed payload
    /// is passed through unchanged.
    pub fn reencrypt(&self, rekey: &ReKey) -> Result<TransformedEnvelope, Error> {
        Ok(TransformedEnvelope {
            wrapped_key: self.wrapped_key.reencrypt(rekey)?,
            payload: self.payload.clone(),
        })
    }
}

impl TransformedEnvelope {
    /// Opens the envelope with the delegatee's secret key. Same
    /// mismatch behavior as [`SealedEnvelope::open`].
    pub fn open(&self, params: &Parameters, sk: &SecretKey) -> Result<Box<[u8]>, Error> {
        let content_key = self.wrapped_key.decrypt(params, sk)?;
        Dem::new(&content_key.scalar().to_be_bytes()).decrypt(&self.payload)
    }
}

fn envelope_to_bytes(wrapped_key: Vec<u8>, payload: &[u8]) -> Vec<u8> {
    let mut bytes = wrapped_key;
    bytes.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn split_envelope(bytes: &[u8], key_size: usize) -> Result<(&[u8], &[u8]), Error> {
    if bytes.len() < key_size + 4 {
        return Err(Error::Framing("envelope encoding is too short"));
    }
    let (key_bytes, rest) = bytes.split_at(key_size);
    let declared =
        u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
    let payload = &rest[4..];
    if payload.len() != declared {
        return Err(Error::Framing("envelope payload length mismatch"));
    }
    Ok((key_bytes, payload))
}

impl SerializableToBytes for SealedEnvelope {
    fn to_bytes(&self) -> Vec<u8> {
        envelope_to_bytes(self.wrapped_key.to_bytes(), &self.payload)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (key_bytes, payload) = split_envelope(bytes, DirectCiphertext::SERIALIZED_BYTES)?;
        Ok(Self {
            wrapped_key: DirectCiphertext::from_bytes(key_bytes)?,
            payload: payload.into(),
        })
    }
}

impl SerializableToBytes for TransformedEnvelope {
    fn to_bytes(&self) -> Vec<u8> {
        envelope_to_bytes(self.wrapped_key.to_bytes(), &self.payload)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (key_bytes, payload) = split_envelope(bytes, TransformedCiphertext::SERIALIZED_BYTES)?;
        Ok(Self {
            wrapped_key: TransformedCiphertext::from_bytes(key_bytes)?,
            payload: payload.into(),
        })
    }
}

#[cfg(test)]
mod tests {

    use super::{
        decrypt_original, decrypt_reencrypted, encrypt, reencrypt, seal, SealedEnvelope,
        TransformedEnvelope,
    };
    use crate::errors::Error;
    use crate::keys::{DelegateePublicKey, DelegatorPublicKey, SecretKey};
    use crate::message::Message;
    use crate::params::Parameters;
    use crate::rekey::ReKey;
    use crate::traits::SerializableToBytes;

    struct Actors {
        params: Parameters,
        sk_a: SecretKey,
        pk_a: DelegatorPublicKey,
        sk_b: SecretKey,
        rekey: ReKey,
    }

    fn actors() -> Actors {
        let params = Parameters::from_seeds(b"abc", b"abc").unwrap();
        let sk_a = SecretKey::random();
        let pk_a = DelegatorPublicKey::from_secret_key(&params, &sk_a);
        let sk_b = SecretKey::random();
        let pk_b = DelegateePublicKey::from_secret_key(&params, &sk_b);
        let rekey = ReKey::new(&params, &sk_a, &pk_b).unwrap();
        Actors {
            params,
            sk_a,
            pk_a,
            sk_b,
            rekey,
        }
    }

    #[test]
    fn roundtrip_original() {
        let a = actors();
        let message = Message::from_bytes(b"12345").unwrap();

        let ciphertext = encrypt(&a.params, &a.pk_a, &message);
        let decrypted = decrypt_original(&a.params, &ciphertext, &a.sk_a).unwrap();
        assert_eq!(decrypted.to_bytes(), b"12345");
    }

    #[test]
    fn roundtrip_delegated() {
        let a = actors();
        let message = Message::from_bytes(b"12345").unwrap();

        let ciphertext = encrypt(&a.params, &a.pk_a, &message);
        let transformed = reencrypt(&ciphertext, &a.rekey).unwrap();
        let decrypted = decrypt_reencrypted(&a.params, &transformed, &a.sk_b).unwrap();
        assert_eq!(decrypted.to_bytes(), b"12345");

        // Both decryption paths agree.
        let direct = decrypt_original(&a.params, &ciphertext, &a.sk_a).unwrap();
        assert_eq!(direct, decrypted);
    }

    #[test]
    fn mismatched_key_yields_garbage_not_an_error() {
        let a = actors();
        let message = Message::from_bytes(b"12345").unwrap();

        let ciphertext = encrypt(&a.params, &a.pk_a, &message);
        let wrong = decrypt_original(&a.params, &ciphertext, &SecretKey::random()).unwrap();
        assert_ne!(wrong, message);
    }

    #[test]
    fn sealed_envelope_both_paths() {
        let a = actors();

        let envelope = seal(&a.params, &a.pk_a, b"This is test").unwrap();
        let direct = envelope.open(&a.params, &a.sk_a).unwrap();
        assert_eq!(&*direct, b"This is test");

        let transformed = envelope.reencrypt(&a.rekey).unwrap();
        let delegated = transformed.open(&a.params, &a.sk_b).unwrap();
        assert_eq!(direct, delegated);
    }

    #[test]
    fn envelope_with_wrong_key_fails_authentication() {
        let a = actors();

        let envelope = seal(&a.params, &a.pk_a, b"This is test").unwrap();
        assert!(matches!(
            envelope.open(&a.params, &SecretKey::random()),
            Err(Error::PayloadDecryption)
        ));

        // The delegator's key does not open the transformed envelope either.
        let transformed = envelope.reencrypt(&a.rekey).unwrap();
        assert!(matches!(
            transformed.open(&a.params, &a.sk_a),
            Err(Error::PayloadDecryption)
        ));
    }

    #[test]
    fn tampered_payload_fails_authentication() {
        let a = actors();

        let mut envelope = seal(&a.params, &a.pk_a, b"This is test").unwrap();
        let last = envelope.payload.len() - 1;
        envelope.payload[last] ^= 1;
        assert!(matches!(
            envelope.open(&a.params, &a.sk_a),
            Err(Error::PayloadDecryption)
        ));
    }

    #[test]
    fn envelope_wire_roundtrip() {
        let a = actors();

        let envelope = seal(&a.params, &a.pk_a, b"This is test").unwrap();
        let back = SealedEnvelope::from_bytes(&envelope.to_bytes()).unwrap();
        assert_eq!(envelope, back);
        assert_eq!(&*back.open(&a.params, &a.sk_a).unwrap(), b"This is test");

        let transformed = envelope.reencrypt(&a.rekey).unwrap();
        let back = TransformedEnvelope::from_bytes(&transformed.to_bytes()).unwrap();
        assert_eq!(transformed, back);
    }

    #[test]
    fn empty_payload_seals() {
        let a = actors();
        let envelope = seal(&a.params, &a.pk_a, b"").unwrap();
        assert!(envelope.open(&a.params, &a.sk_a).unwrap().is_empty());
    }
}
