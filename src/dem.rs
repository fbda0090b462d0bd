//! The symmetric half of the hybrid envelope: an HKDF-keyed
//! XChaCha20-Poly1305 cipher with the nonce prepended to its output.
//!
//! An authenticated mode is deliberate: the re-encryption protocol
//! itself cannot detect a mismatched key, so the AEAD tag is what turns
//! silent garbage into a decryption failure at the envelope layer.

use chacha20poly1305::aead::generic_array::typenum::Unsigned;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use hkdf::Hkdf;
use rand_core::{OsRng, RngCore};
use sha2::Sha256;

use crate::errors::Error;

type NonceSize = <XChaCha20Poly1305 as AeadCore>::NonceSize;

fn kdf(key_seed: &[u8]) -> Key {
    let hk = Hkdf::<Sha256>::new(None, key_seed);
    let mut okm = Key::default();
    // Only fails if the requested output is too long for the hash,
    // which is known at compile time.
    hk.expand(b"PAIRING_PRE_PAYLOAD_KEY", &mut okm)
        .expect("HKDF output length is valid");
    okm
}

pub(crate) struct Dem {
    cipher: XChaCha20Poly1305,
}

impl Dem {
    pub fn new(key_seed: &[u8]) -> Self {
        let key = kdf(key_seed);
        Self {
            cipher: XChaCha20Poly1305::new(&key),
        }
    }

    /// Encrypts under a fresh random nonce, prepending the nonce.
    pub fn encrypt(&self, data: &[u8]) -> Result<Box<[u8]>, Error> {
        let mut nonce = XNonce::default();
        OsRng.fill_bytes(nonce.as_mut_slice());
        let enc_data = self
            .cipher
            .encrypt(&nonce, data)
            .map_err(|_| Error::PayloadEncryption)?;

        let mut result = nonce.to_vec();
        result.extend(enc_data);
        Ok(result.into_boxed_slice())
    }

    /// Splits off the nonce and decrypts, authenticating the payload.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Box<[u8]>, Error> {
        let nonce_size = NonceSize::to_usize();
        if ciphertext.len() < nonce_size {
            return Err(Error::PayloadDecryption);
        }
        let nonce = XNonce::from_slice(&ciphertext[..nonce_size]);
        self.cipher
            .decrypt(nonce, &ciphertext[nonce_size..])
            .map(|plaintext| plaintext.into_boxed_slice())
            .map_err(|_| Error::PayloadDecryption)
    }
}

#[cfg(test)]
mod tests {

    use super::Dem;
    use crate::errors::Error;

    #[test]
    fn roundtrip() {
        let dem = Dem::new(b"some key seed");
        let ciphertext = dem.encrypt(b"This is test").unwrap();
        let plaintext = dem.decrypt(&ciphertext).unwrap();
        assert_eq!(&*plaintext, b"This is test");
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let dem = Dem::new(b"some key seed");
        let ciphertext = dem.encrypt(b"This is test").unwrap();

        let other = Dem::new(b"another key seed");
        assert!(matches!(
            other.decrypt(&ciphertext),
            Err(Error::PayloadDecryption)
        ));
    }

    #[test]
    fn truncated_input_fails() {
        let dem = Dem::new(b"some key seed");
        assert!(matches!(
            dem.decrypt(b"short"),
            Err(Error::PayloadDecryption)
        ));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let dem = Dem::new(b"some key seed");
        let mut ciphertext = dem.encrypt(b"This is test").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 1;
        assert!(matches!(
            dem.decrypt(&ciphertext),
            Err(Error::PayloadDecryption)
        ));
    }
}
