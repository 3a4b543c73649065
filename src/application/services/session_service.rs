//! Signed author session cookies.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::AuthorId;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Session lifetime in seconds (30 days).
const SESSION_MAX_AGE: u64 = 60 * 60 * 24 * 30;

/// Issues and verifies the `session` cookie identifying the current author.
///
/// The cookie value is `<author>.<signature>` where the signature is the
/// base64url HMAC-SHA256 of the author id under the configured secret.
pub struct SessionService {
    signing_secret: String,
    secure_cookies: bool,
}

impl SessionService {
    pub fn new(signing_secret: String, secure_cookies: bool) -> Self {
        Self {
            signing_secret,
            secure_cookies,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts keys of any length")
    }

    /// Signed cookie value for `author`.
    pub fn sign(&self, author: &AuthorId) -> String {
        let mut mac = self.mac();
        mac.update(author.as_str().as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{}.{}", author.as_str(), signature)
    }

    /// Returns the author of a signed cookie value, or `None` if the value is
    /// malformed or the signature does not match.
    pub fn verify(&self, value: &str) -> Option<AuthorId> {
        let (author, signature) = value.rsplit_once('.')?;
        let author = AuthorId::parse(author).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(author.as_str().as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(author)
    }

    /// `Set-Cookie` value establishing a session for `author`.
    pub fn session_cookie(&self, author: &AuthorId) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE}{}",
            self.sign(author),
            self.secure_suffix()
        )
    }

    /// `Set-Cookie` value ending the session.
    pub fn clear_cookie(&self) -> String {
        format!(
            "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
            self.secure_suffix()
        )
    }

    /// Whether cookies issued for this deployment carry `Secure`.
    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }

    fn secure_suffix(&self) -> &'static str {
        if self.secure_cookies { "; Secure" } else { "" }
    }
}
