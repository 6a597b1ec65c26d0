use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode a key or value the way OAuth 1.0a requires.
///
/// Only `A-Z a-z 0-9 - . _ ~` are left as is; every other UTF-8 byte
/// becomes `%XX` with uppercase hex digits.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}
