//! Request signing for the iFirma API.
//!
//! Every request carries an `Authentication` header of the form
//! `IAPIS user=<username>, hmac-sha1=<mac>`, where the MAC is the
//! lowercase-hex HMAC-SHA1 of `url + username + key_name + body`, keyed
//! with the hex-decoded API key. Invoice endpoints use the key named
//! `"faktura"`.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::ClientError;

/// Header name the MAC is sent under.
pub const AUTH_HEADER: &str = "Authentication";

/// Key name covering the invoice endpoints.
pub const INVOICES_KEY_NAME: &str = "faktura";

/// Computes the `Authentication` header for outgoing requests.
///
/// Decorates requests immediately before dispatch; holds no connection
/// state of its own.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    username: String,
    key: Vec<u8>,
    key_name: &'static str,
}

impl RequestSigner {
    /// Build a signer from a hex-encoded API key.
    pub fn new(
        username: impl Into<String>,
        hex_key: &str,
        key_name: &'static str,
    ) -> Result<Self, ClientError> {
        let key = hex::decode(hex_key.trim())
            .map_err(|e| ClientError::Config(format!("invalid API key (expected hex): {e}")))?;
        Ok(Self {
            username: username.into(),
            key,
            key_name,
        })
    }

    /// The `Authentication` header value for one request.
    ///
    /// `url` is the full request URL, `body` the exact serialized request
    /// body (empty string for body-less requests) — the same bytes that go
    /// on the wire.
    pub fn authentication_header(&self, url: &str, body: &str) -> String {
        let message = format!("{url}{}{}{body}", self.username, self.key_name);
        format!(
            "IAPIS user={}, hmac-sha1={}",
            self.username,
            hmac_sha1_hex(&self.key, message.as_bytes())
        )
    }
}

/// Lowercase-hex HMAC-SHA1 digest of `message` under `key`.
fn hmac_sha1_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 2202 HMAC-SHA1 test vectors.

    #[test]
    fn rfc2202_case_1() {
        let key = [0x0bu8; 20];
        assert_eq!(
            hmac_sha1_hex(&key, b"Hi There"),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
    }

    #[test]
    fn rfc2202_case_2() {
        assert_eq!(
            hmac_sha1_hex(b"Jefe", b"what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn header_format() {
        let signer = RequestSigner::new("acme", "0b0b0b0b", INVOICES_KEY_NAME).unwrap();
        let header = signer.authentication_header("https://www.ifirma.pl/iapi/fakturakraj.json", "");
        assert!(header.starts_with("IAPIS user=acme, hmac-sha1="));
        let mac = header.rsplit('=').next().unwrap();
        assert_eq!(mac.len(), 40);
        assert!(mac.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_covers_the_body() {
        let signer = RequestSigner::new("acme", "0b0b0b0b", INVOICES_KEY_NAME).unwrap();
        let url = "https://www.ifirma.pl/iapi/fakturakraj.json";
        assert_ne!(
            signer.authentication_header(url, ""),
            signer.authentication_header(url, "{\"Numer\":1}")
        );
    }

    #[test]
    fn rejects_non_hex_key() {
        assert!(matches!(
            RequestSigner::new("acme", "not-hex!", INVOICES_KEY_NAME),
            Err(ClientError::Config(_))
        ));
    }
}
