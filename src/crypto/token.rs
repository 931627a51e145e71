use rand::RngCore;
use rand::rngs::OsRng;
use base64::{Engine as _, engine::general_purpose};

/// The entropy of a session token in bytes.
const SESSION_TOKEN_SIZE: usize = 32;

/// Mints a fresh opaque session token.
///
/// The token is the bearer half of the (session id, token) credential, so it
/// comes straight from the operating system CSPRNG; no request data is mixed
/// in.
pub fn mint_session_token() -> String {
    let mut token = [0u8; SESSION_TOKEN_SIZE];
    OsRng.fill_bytes(&mut token);

    general_purpose::URL_SAFE_NO_PAD.encode(token)
}
