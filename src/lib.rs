//! `pairing-pre` is a unidirectional, single-hop proxy re-encryption
//! (PRE) scheme over bilinear pairings on BLS12-381, with a hybrid
//! envelope for arbitrary-length payloads.
//!
//! A delegator encrypts under its own public key and stores the result
//! with an untrusted proxy. To grant access, the delegator computes a
//! re-encryption key for a chosen delegatee; the proxy applies it with
//! a single pairing, transforming the ciphertext so that only the
//! delegatee's secret key can open it. The proxy never sees a plaintext
//! or a secret key, and a transformed ciphertext cannot be transformed
//! again.
//!
//! Delegator keys live in G1, delegatee keys in G2. A direct ciphertext
//! is `(pk^k, m + H(z^k))` with `z = e(g, h)`; re-encryption moves the
//! first component into the target group via
//! `e(g^(sk_A k), pk_B^(1/sk_A)) = z^(sk_B k)`.
//!
//! # Security notes
//!
//! Confidentiality rests on an extended Decisional Bilinear
//! Diffie-Hellman assumption over BLS12-381. A re-key is a standing,
//! irrevocable grant, and a proxy colluding with its delegatee can open
//! every ciphertext the re-key covers. The bare scalar-level protocol
//! has no integrity check: decrypting with a mismatched key returns
//! well-formed garbage. The hybrid envelope closes that gap for
//! payloads with an authenticated cipher, so a key mismatch or tampered
//! payload fails instead of decrypting to noise.
//!
//! # Usage
//!
//! ```
//! use pairing_pre::*;
//!
//! # fn main() -> Result<(), Error> {
//! // Shared parameters, derived deterministically from seeds so that
//! // unrelated parties can agree on them without a handshake.
//! let params = Parameters::from_seeds(b"abc", b"abc")?;
//!
//! // Key generation. Alice (the delegator) keys against G1,
//! // Bob (the delegatee) against G2.
//! let alice_sk = SecretKey::random();
//! let alice_pk = DelegatorPublicKey::from_secret_key(&params, &alice_sk);
//! let bob_sk = SecretKey::random();
//! let bob_pk = DelegateePublicKey::from_secret_key(&params, &bob_sk);
//!
//! // Alice seals a payload for herself and stores it with the proxy.
//! // She can open it again at any time.
//! let envelope = seal(&params, &alice_pk, b"peace at dawn")?;
//! let plaintext_alice = envelope.open(&params, &alice_sk)?;
//! assert_eq!(&plaintext_alice as &[u8], b"peace at dawn");
//!
//! // Alice authorizes Bob by handing the proxy a re-encryption key.
//! let rekey = ReKey::new(&params, &alice_sk, &bob_pk)?;
//!
//! // The proxy transforms the envelope without seeing any secret.
//! let transformed = envelope.reencrypt(&rekey)?;
//!
//! // Bob opens the transformed envelope with his own secret key.
//! let plaintext_bob = transformed.open(&params, &bob_sk)?;
//! assert_eq!(&plaintext_bob as &[u8], b"peace at dawn");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod ciphertext;
mod curve;
mod dem;
mod errors;
mod hashing;
mod keys;
mod message;
mod params;
mod pre;
mod rekey;
mod traits;

pub use ciphertext::{Ciphertext, DirectCiphertext, TransformedCiphertext};
pub use errors::Error;
pub use keys::{DelegateePublicKey, DelegatorPublicKey, SecretKey};
pub use message::Message;
pub use params::Parameters;
pub use pre::{
    decrypt_original, decrypt_reencrypted, encrypt, reencrypt, seal, SealedEnvelope,
    TransformedEnvelope,
};
pub use rekey::ReKey;
pub use traits::SerializableToBytes;
