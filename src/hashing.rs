//! Deterministic hashing into the curve groups and the scalar field.

use ark_bls12_381::{g1, g2, G1Projective, G2Projective};
use ark_ec::hashing::curve_maps::wb::WBMap;
use ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher;
use ark_ec::hashing::HashToCurve;
use ark_ec::AffineRepr;
use ark_ff::field_hashers::DefaultFieldHasher;
use sha2::{Digest, Sha256};

use crate::curve::{G1Point, G2Point, GtPoint, Scalar};
use crate::errors::Error;

const G1_DOMAIN: &[u8] = b"PAIRING_PRE_BLS12381G1_XMD:SHA-256_SSWU_RO_";
const G2_DOMAIN: &[u8] = b"PAIRING_PRE_BLS12381G2_XMD:SHA-256_SSWU_RO_";

type G1Hasher = MapToCurveBasedHasher<G1Projective, DefaultFieldHasher<Sha256>, WBMap<g1::Config>>;
type G2Hasher = MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256>, WBMap<g2::Config>>;

/// Maps a seed onto G1 with an unknown discrete log.
pub(crate) fn hash_to_g1(seed: &[u8]) -> Result<G1Point, Error> {
    let hasher =
        G1Hasher::new(G1_DOMAIN).map_err(|_| Error::InvalidParameter("G1 hasher setup failed"))?;
    let point = hasher
        .hash(seed)
        .map_err(|_| Error::InvalidParameter("seed does not map onto G1"))?;
    Ok(G1Point(point.into_group()))
}

/// Maps a seed onto G2 with an unknown discrete log.
pub(crate) fn hash_to_g2(seed: &[u8]) -> Result<G2Point, Error> {
    let hasher =
        G2Hasher::new(G2_DOMAIN).map_err(|_| Error::InvalidParameter("G2 hasher setup failed"))?;
    let point = hasher
        .hash(seed)
        .map_err(|_| Error::InvalidParameter("seed does not map onto G2"))?;
    Ok(G2Point(point.into_group()))
}

pub(crate) struct ScalarDigest(Sha256);

impl ScalarDigest {
    pub fn new() -> Self {
        Self(Sha256::new()).chain_bytes(b"PAIRING_PRE_HASH_TO_FR")
    }

    pub fn chain_bytes(self, bytes: &[u8]) -> Self {
        Self(self.0.chain_update(bytes))
    }

    pub fn chain_gt(self, point: &GtPoint) -> Self {
        let bytes = point.to_bytes();
        self.chain_bytes(&bytes)
    }

    pub fn finalize(self) -> Scalar {
        Scalar::from_digest_bytes(&self.0.finalize())
    }
}
