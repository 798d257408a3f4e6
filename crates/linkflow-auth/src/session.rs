//! Session credential minting.

use sha2::{Digest, Sha256};

/// Mint an opaque session credential for a uid.
///
/// Hex-encoded SHA-256 over the server secret, the uid, and the issue
/// timestamp. The credential is a bearer handle, not a structured token;
/// validation is out of scope here, the frontend exchanges it with the
/// session backend.
pub fn mint_session_token(secret: &str, uid: &str, issued_at_millis: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b"\x00");
    hasher.update(uid.as_bytes());
    hasher.update(b"\x00");
    hasher.update(issued_at_millis.to_be_bytes());
    hex::encode(hasher.finalize())
}
