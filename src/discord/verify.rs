//! Request signature verification.

use crate::error::DiscordError;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Checks `X-Signature-Ed25519` against the application's public key.
///
/// The signed message is the `X-Signature-Timestamp` header value followed by
/// the raw request body.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Parse the hex `verify_key` of the application.
    pub fn from_hex(key_hex: &str) -> Result<Self, DiscordError> {
        let bytes = hex::decode(key_hex).map_err(|e| DiscordError::InvalidKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DiscordError::InvalidKey(format!("expected 32 bytes, got {}", bytes.len())))?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|e| DiscordError::InvalidKey(e.to_string()))?;
        Ok(Self { key })
    }

    /// `true` only for a well-formed signature over `timestamp ‖ body`.
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        let Ok(raw) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&raw) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);
        self.key.verify(&message, &signature).is_ok()
    }
}
