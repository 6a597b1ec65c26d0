//! Hash functions used to compute `oauth_signature` and `oauth_body_hash`.

use oriole_core::hash::{base64_hmac_sha1, base64_hmac_sha256, base64_sha1, base64_sha256};

/// HashFunction turns a string and the signing key into a digest string.
///
/// For signatures the input is the signature base string; for body hashes it
/// is the serialized request body. Any `Fn(&str, &str) -> String` that is
/// `Send + Sync` can be used directly.
///
/// ```
/// use oriole_oauth1::HashFunction;
///
/// let upper = |base: &str, _key: &str| base.to_uppercase();
/// assert_eq!(upper.hash("abc", "key"), "ABC");
/// ```
pub trait HashFunction: Send + Sync + 'static {
    /// Compute the digest of `input` keyed by `key`.
    fn hash(&self, input: &str, key: &str) -> String;
}

impl<F> HashFunction for F
where
    F: Fn(&str, &str) -> String + Send + Sync + 'static,
{
    fn hash(&self, input: &str, key: &str) -> String {
        self(input, key)
    }
}

/// `PLAINTEXT`: the signature is the signing key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl HashFunction for Plaintext {
    fn hash(&self, _input: &str, key: &str) -> String {
        key.to_string()
    }
}

/// `HMAC-SHA1` with a base64 encoded digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha1;

impl HashFunction for HmacSha1 {
    fn hash(&self, input: &str, key: &str) -> String {
        base64_hmac_sha1(key.as_bytes(), input.as_bytes())
    }
}

/// `HMAC-SHA256` with a base64 encoded digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256;

impl HashFunction for HmacSha256 {
    fn hash(&self, input: &str, key: &str) -> String {
        base64_hmac_sha256(key.as_bytes(), input.as_bytes())
    }
}

/// Unkeyed base64 SHA1 digest, as defined by the OAuth body hash extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1BodyHash;

impl HashFunction for Sha1BodyHash {
    fn hash(&self, input: &str, _key: &str) -> String {
        base64_sha1(input.as_bytes())
    }
}

/// Unkeyed base64 SHA256 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256BodyHash;

impl HashFunction for Sha256BodyHash {
    fn hash(&self, input: &str, _key: &str) -> String {
        base64_sha256(input.as_bytes())
    }
}
