//! Proof file framing.
//!
//! A proof file bundles three segments:
//!
//! ```text
//! u32 LE proof_len | proof | u32 LE public_inputs_len | public_inputs | output text
//! ```
//!
//! `proof` and `public_inputs` are opaque to this crate and handed to the
//! proof verifier. The output text runs to the end of the file and holds the
//! printed output vector decoded by [`HyleOutput`](crate::HyleOutput).

use crate::error::EnvelopeError;
use crate::tokens::tokenize;

const LEN_PREFIX: usize = 4;

/// Parsed proof file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofEnvelope {
    /// Serialized proof, opaque
    pub proof: Vec<u8>,
    /// Verifier-side public inputs, opaque
    pub public_inputs: Vec<u8>,
    /// Printed public-output vector
    pub output: String,
}

/// Bounds-checked reader over the raw file bytes.
struct EnvelopeReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> EnvelopeReader<'a> {
    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn read_exact(&mut self, len: usize, section: &'static str) -> Result<&'a [u8], EnvelopeError> {
        if len > self.remaining() {
            return Err(EnvelopeError::Truncated {
                section,
                needed: len,
                available: self.remaining(),
            });
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    fn read_prefixed(&mut self, section: &'static str) -> Result<&'a [u8], EnvelopeError> {
        let mut prefix = [0u8; LEN_PREFIX];
        prefix.copy_from_slice(self.read_exact(LEN_PREFIX, section)?);
        let len = u32::from_le_bytes(prefix) as usize;
        self.read_exact(len, section)
    }

    fn rest(self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}

impl ProofEnvelope {
    /// Create an envelope from its three segments.
    pub fn new(proof: Vec<u8>, public_inputs: Vec<u8>, output: impl Into<String>) -> Self {
        Self {
            proof,
            public_inputs,
            output: output.into(),
        }
    }

    /// Parse a proof file.
    ///
    /// # Errors
    ///
    /// `EnvelopeError::Truncated` if a length prefix points past the end of
    /// the input, `EnvelopeError::InvalidUtf8` if the output segment is not
    /// text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        let mut reader = EnvelopeReader { bytes, offset: 0 };
        let proof = reader.read_prefixed("proof")?.to_vec();
        let public_inputs = reader.read_prefixed("public inputs")?.to_vec();
        let output = std::str::from_utf8(reader.rest())?.to_string();

        Ok(Self {
            proof,
            public_inputs,
            output,
        })
    }

    /// Serialize into the proof file layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        let mut out = Vec::with_capacity(
            2 * LEN_PREFIX + self.proof.len() + self.public_inputs.len() + self.output.len(),
        );
        write_prefixed(&mut out, &self.proof, "proof")?;
        write_prefixed(&mut out, &self.public_inputs, "public inputs")?;
        out.extend_from_slice(self.output.as_bytes());
        Ok(out)
    }

    /// Tokens of the output segment.
    pub fn output_tokens(&self) -> Vec<&str> {
        tokenize(&self.output)
    }
}

fn write_prefixed(
    out: &mut Vec<u8>,
    bytes: &[u8],
    section: &'static str,
) -> Result<(), EnvelopeError> {
    let len = u32::try_from(bytes.len()).map_err(|_| EnvelopeError::SectionTooLarge {
        section,
        len: bytes.len(),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(bytes);
    Ok(())
}
