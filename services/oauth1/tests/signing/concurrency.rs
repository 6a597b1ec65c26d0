use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use super::{hmac_sha1_signer, init_signing_test};
use anyhow::Result;
use oriole_core::RequestDescriptor;
use oriole_oauth1::TokenPair;

#[test]
fn test_shared_signer_across_threads() -> Result<()> {
    init_signing_test();

    let signer = Arc::new(hmac_sha1_signer("ck", "cs"));
    let token = TokenPair::new("tk", "ts");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let signer = signer.clone();
            let token = token.clone();
            thread::spawn(move || {
                let req = RequestDescriptor::new(
                    "GET",
                    format!("https://shop.test/rest/V1/products/{i}"),
                );
                (0..250)
                    .map(|_| {
                        signer
                            .authorize(&req, &token)
                            .map(|signed| signed.parameters.nonce)
                    })
                    .collect::<oriole_core::Result<Vec<_>>>()
            })
        })
        .collect();

    let mut nonces = HashSet::new();
    for handle in handles {
        let batch = handle.join().expect("signing thread must not panic")?;
        nonces.extend(batch);
    }
    assert_eq!(nonces.len(), 8 * 250);
    Ok(())
}

#[test]
fn test_same_inputs_same_signature_across_threads() -> Result<()> {
    init_signing_test();

    let signer = Arc::new(hmac_sha1_signer("ck", "cs"));
    let req = Arc::new(RequestDescriptor::new(
        "GET",
        "https://shop.test/rest/V1/products?searchCriteria=carrot",
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let signer = signer.clone();
            let req = req.clone();
            thread::spawn(move || {
                signer
                    .authorize_with(&req, &TokenPair::new("tk", "ts"), "fixed", 1700000000)
                    .map(|signed| signed.signature)
            })
        })
        .collect();

    let signatures = handles
        .into_iter()
        .map(|h| h.join().expect("signing thread must not panic"))
        .collect::<oriole_core::Result<HashSet<_>>>()?;
    assert_eq!(signatures.len(), 1);
    Ok(())
}
