//! OAuth 1.0a signer for the oriole REST client.
//!
//! ## Example
//!
//! ```
//! use oriole_core::RequestDescriptor;
//! use oriole_oauth1::{Config, Signer, TokenPair};
//!
//! # fn main() -> oriole_core::Result<()> {
//! let signer = Signer::new(Config::new().with_consumer("ck", "cs").hmac_sha1())?;
//!
//! let req = RequestDescriptor::new("GET", "https://shop.test/rest/V1/products?searchCriteria=carrot");
//! let signed = signer.authorize(&req, &TokenPair::new("tk", "ts"))?;
//! let header = signer.to_header(&signed);
//! assert!(header.as_str().starts_with("OAuth oauth_consumer_key=\"ck\""));
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::{Consumer, TokenPair};

mod encode;
pub use encode::percent_encode;

mod hash_function;
pub use hash_function::{HashFunction, HmacSha1, HmacSha256, Plaintext, Sha1BodyHash, Sha256BodyHash};

mod header;
pub use header::AuthorizationHeader;

mod parameters;
pub use parameters::{parameter_string, OAuthParameters, SignedAuthorization};

mod signer;
pub use signer::Signer;

mod sign_request;
pub use sign_request::RequestSigner;

pub mod constants;
