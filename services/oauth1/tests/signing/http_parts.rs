use super::{hmac_sha1_signer, init_signing_test};
use anyhow::Result;
use http::header::AUTHORIZATION;
use oriole_core::{RequestData, RequestDescriptor};
use oriole_oauth1::{Config, RequestSigner, TokenPair};
use pretty_assertions::assert_eq;

#[test]
fn test_sign_parts_with_oauth1() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::oauth1(hmac_sha1_signer("ck", "cs"), TokenPair::new("tk", "ts"));
    let (mut parts, _) =
        http::Request::get("https://shop.test/rest/V1/products?searchCriteria=carrot")
            .body(())?
            .into_parts();
    signer.sign(&mut parts, None, false)?;

    let value = parts
        .headers
        .get(AUTHORIZATION)
        .expect("authorization header must be set");
    let value = value.to_str()?;
    assert!(value.starts_with("OAuth oauth_consumer_key=\"ck\", oauth_nonce=\""));
    assert!(value.contains(r#"oauth_signature_method="HMAC-SHA1""#));
    assert!(value.contains(r#"oauth_token="tk""#));
    assert!(!value.contains("searchCriteria"));
    Ok(())
}

#[test]
fn test_sign_parts_matches_descriptor() -> Result<()> {
    init_signing_test();

    let (parts, _) = http::Request::post("https://shop.test/rest/V1/orders?x=1")
        .body(())?
        .into_parts();
    let desc = RequestDescriptor::from_parts(&parts)?;

    assert_eq!(desc.method, "POST");
    assert_eq!(desc.base_url(), "https://shop.test/rest/V1/orders");
    assert_eq!(
        desc.query_pairs(),
        vec![("x".to_string(), "1".to_string())]
    );
    Ok(())
}

#[test]
fn test_sign_parts_with_body_hash() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::oauth1(hmac_sha1_signer("ck", "cs"), TokenPair::new("tk", "ts"));
    let (mut parts, _) = http::Request::post("https://shop.test/rest/V1/products")
        .body(())?
        .into_parts();
    let data = RequestData::from(serde_json::json!({"product": {"sku": "A"}}));
    signer.sign(&mut parts, Some(&data), true)?;

    let value = parts
        .headers
        .get(AUTHORIZATION)
        .expect("authorization header must be set");
    assert!(value.to_str()?.contains("oauth_body_hash="));
    assert!(value.is_sensitive());
    Ok(())
}

#[test]
fn test_sign_parts_replaces_existing_header() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::from_config(Config::new().with_bearer_token("abc"))?;
    let (mut parts, _) = http::Request::get("https://shop.test/rest/V1/products")
        .header(AUTHORIZATION, "Bearer stale")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, None, false)?;

    let values: Vec<_> = parts.headers.get_all(AUTHORIZATION).iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].to_str()?, "Bearer abc");
    Ok(())
}

#[test]
fn test_sign_parts_requires_absolute_uri() -> Result<()> {
    init_signing_test();

    let signer = RequestSigner::bearer("abc");
    let (mut parts, _) = http::Request::get("/rest/V1/products")
        .body(())?
        .into_parts();
    let err = signer.sign(&mut parts, None, false).unwrap_err();

    assert_eq!(err.kind(), oriole_core::ErrorKind::RequestInvalid);
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}
