//! Proof verifier seam.
//!
//! The cryptographic check is an external collaborator: anything that can
//! answer "is this proof valid for this key" implements [`ProofVerifier`].

use async_trait::async_trait;
use serde::{Serialize, Serializer};

use crate::error::Result;

/// Inputs handed to a proof verifier.
///
/// Serializes to JSON with every field hex-encoded.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VerifyRequest<'a> {
    /// Serialized proof
    #[serde(serialize_with = "as_hex")]
    pub proof: &'a [u8],

    /// Verifier-side public inputs
    #[serde(serialize_with = "as_hex")]
    pub public_inputs: &'a [u8],

    /// Verification key
    #[serde(serialize_with = "as_hex")]
    pub verification_key: &'a [u8],
}

fn as_hex<S>(bytes: &&[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

/// Something that can decide whether a proof is valid.
#[async_trait]
pub trait ProofVerifier: Send + Sync {
    /// Returns the validity signal for `request`.
    ///
    /// `Ok(false)` means the proof was checked and rejected. `Err` means no
    /// verdict could be produced.
    async fn verify(&self, request: &VerifyRequest<'_>) -> Result<bool>;
}

#[async_trait]
impl<V: ProofVerifier + ?Sized> ProofVerifier for &V {
    async fn verify(&self, request: &VerifyRequest<'_>) -> Result<bool> {
        (**self).verify(request).await
    }
}

#[async_trait]
impl<V: ProofVerifier + ?Sized> ProofVerifier for Box<V> {
    async fn verify(&self, request: &VerifyRequest<'_>) -> Result<bool> {
        (**self).verify(request).await
    }
}

/// Adapter returned by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnVerifier<F>(F);

/// Wraps a synchronous closure as a [`ProofVerifier`].
///
/// # Example
///
/// ```rust
/// use hyle_verifier::backend::{from_fn, ProofVerifier, VerifyRequest};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let verifier = from_fn(|request: &VerifyRequest<'_>| Ok(!request.proof.is_empty()));
/// let request = VerifyRequest { proof: &[1], public_inputs: &[], verification_key: &[] };
/// assert!(verifier.verify(&request).await.unwrap());
/// # }
/// ```
pub fn from_fn<F>(f: F) -> FnVerifier<F>
where
    F: Fn(&VerifyRequest<'_>) -> Result<bool> + Send + Sync,
{
    FnVerifier(f)
}

#[async_trait]
impl<F> ProofVerifier for FnVerifier<F>
where
    F: Fn(&VerifyRequest<'_>) -> Result<bool> + Send + Sync,
{
    async fn verify(&self, request: &VerifyRequest<'_>) -> Result<bool> {
        (self.0)(request)
    }
}
