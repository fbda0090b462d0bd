use crate::errors::Error;

/// Canonical binary serialization for protocol values.
///
/// Layouts are fixed-offset concatenations of the backend's compressed
/// encodings; variable-length fields are length-prefixed. Parsing
/// validates on-curve and subgroup membership, so a value that came
/// through `from_bytes` can safely reach a pairing.
pub trait SerializableToBytes: Sized {
    /// Serializes into the canonical byte form.
    fn to_bytes(&self) -> Vec<u8>;

    /// Parses the canonical byte form.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>;
}
