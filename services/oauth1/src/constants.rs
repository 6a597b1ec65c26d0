use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signature methods.
pub const PLAINTEXT: &str = "PLAINTEXT";
pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const HMAC_SHA256: &str = "HMAC-SHA256";

// Defaults.
pub const DEFAULT_NONCE_LENGTH: usize = 32;
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_PARAMETER_SEPARATOR: &str = ", ";

// Protocol parameter names.
pub const OAUTH_PREFIX: &str = "oauth_";
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_BODY_HASH: &str = "oauth_body_hash";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";

// Env values used by `Config::from_env`.
pub const ORIOLE_OAUTH_CONSUMER_KEY: &str = "ORIOLE_OAUTH_CONSUMER_KEY";
pub const ORIOLE_OAUTH_CONSUMER_SECRET: &str = "ORIOLE_OAUTH_CONSUMER_SECRET";
pub const ORIOLE_OAUTH_ACCESS_TOKEN: &str = "ORIOLE_OAUTH_ACCESS_TOKEN";
pub const ORIOLE_OAUTH_ACCESS_TOKEN_SECRET: &str = "ORIOLE_OAUTH_ACCESS_TOKEN_SECRET";
pub const ORIOLE_OAUTH_SIGNATURE_METHOD: &str = "ORIOLE_OAUTH_SIGNATURE_METHOD";
pub const ORIOLE_OAUTH_REALM: &str = "ORIOLE_OAUTH_REALM";
pub const ORIOLE_OAUTH_VERSION: &str = "ORIOLE_OAUTH_VERSION";
pub const ORIOLE_OAUTH_NONCE_LENGTH: &str = "ORIOLE_OAUTH_NONCE_LENGTH";
pub const ORIOLE_OAUTH_LAST_AMPERSAND: &str = "ORIOLE_OAUTH_LAST_AMPERSAND";
pub const ORIOLE_BEARER_TOKEN: &str = "ORIOLE_BEARER_TOKEN";

/// AsciiSet for [OAuth percent encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `!`, `*`, `'`, `(` and `)` are encoded as well, unlike plain uri component encoding.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
