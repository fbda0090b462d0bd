use thiserror::Error;

/// Errors surfaced by the re-encryption protocol and the envelope layer.
///
/// Decrypting with a valid but mismatched secret key is intentionally
/// absent: the protocol carries no integrity check, so a mismatch
/// yields a well-formed garbage message at the scalar level, and an
/// authentication failure only once the envelope layer is involved.
#[derive(Debug, Error)]
pub enum Error {
    /// Hash-to-curve could not map a setup seed onto the curve.
    /// Fatal for the parameter set; retry with different seeds.
    #[error("parameter setup failed: {0}")]
    InvalidParameter(&'static str),

    /// A sampled or supplied secret key is the additive identity
    /// and cannot be inverted.
    #[error("secret key is the zero scalar")]
    ZeroSecretKey,

    /// Message bytes do not encode to an integer below the field order.
    #[error("{0}-byte message does not fit below the scalar field order")]
    EncodingOverflow(usize),

    /// A ciphertext or re-key belongs to a different parameter set
    /// than the operation expects. Checked before any pairing runs.
    #[error("incompatible group element: {0}")]
    IncompatibleGroupElement(&'static str),

    /// Re-encryption was attempted on an already transformed
    /// ciphertext; the scheme is single-hop.
    #[error("ciphertext is already transformed")]
    AlreadyTransformed,

    /// The payload cipher failed to encrypt.
    #[error("payload encryption failed")]
    PayloadEncryption,

    /// The payload cipher failed to authenticate or decrypt.
    #[error("payload decryption failed")]
    PayloadDecryption,

    /// A serialized group or field element could not be parsed.
    #[error("malformed element encoding: {0}")]
    Deserialization(ark_serialize::SerializationError),

    /// A serialized buffer has the wrong length or an unknown tag.
    #[error("malformed encoding: {0}")]
    Framing(&'static str),
}

impl From<ark_serialize::SerializationError> for Error {
    fn from(err: ark_serialize::SerializationError) -> Self {
        Self::Deserialization(err)
    }
}
