use crate::curve::Scalar;
use crate::errors::Error;

/// A plaintext encoded as an element of the scalar field.
///
/// The byte form is read as a big-endian integer, which must lie
/// strictly below the field order; this bounds the longest message
/// (or wrapped symmetric key) a given curve can carry directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message(pub(crate) Scalar);

impl Message {
    /// Encodes bytes as a field element.
    ///
    /// Fails with [`Error::EncodingOverflow`] when the integer value
    /// does not fit below the field order, before any group operation
    /// is attempted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Scalar::from_be_bytes_strict(bytes)
            .map(Self)
            .ok_or(Error::EncodingOverflow(bytes.len()))
    }

    /// Minimal big-endian encoding of the message integer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let full = self.0.to_be_bytes();
        let start = full.iter().position(|b| *b != 0).unwrap_or(full.len());
        full[start..].to_vec()
    }

    pub(crate) fn from_scalar(scalar: Scalar) -> Self {
        Self(scalar)
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.0
    }
}
