use anyhow::Result;
use http::header::AUTHORIZATION;
use oriole_core::{Context, OsEnv};
use oriole_oauth1::{Config, RequestSigner};

fn main() -> Result<()> {
    env_logger::init();

    // Credentials come from ORIOLE_OAUTH_* or ORIOLE_BEARER_TOKEN.
    let ctx = Context::new().with_env(OsEnv);
    let mut config = Config::new().hmac_sha1().from_env(&ctx)?;

    if config.consumer_key.is_none() && config.bearer_token.is_none() {
        println!("No credentials found in env, using demo credentials for example");
        config = config
            .with_consumer("demo_consumer_key", "demo_consumer_secret")
            .with_access_token("demo_access_token", "demo_access_token_secret");
    }

    let signer = RequestSigner::from_config(config)?;

    let req = http::Request::get("https://shop.test/rest/V1/products?searchCriteria=carrot")
        .body(())?;
    let (mut parts, _body) = req.into_parts();

    match signer.sign(&mut parts, None, false) {
        Ok(()) => {
            println!("Request signed successfully!");
            println!(
                "Authorization header: {:?}",
                parts.headers.get(AUTHORIZATION)
            );
        }
        Err(e) => eprintln!("Failed to sign request: {e}"),
    }

    Ok(())
}
