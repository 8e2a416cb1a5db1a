//! Live API tests
//!
//! Run with:
//! ```bash
//! CLOUDVALID_API_KEY=xxx CLOUDVALID_TEST_DOMAIN=example.com \
//!     cargo test -p cloudvalid-client --test live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use cloudvalid_client::{
    CreateDnsConfigurationLinkRequest, DnsConfigurationApi, PropagationRecordStatus,
};
use common::{live_client, live_domain};

#[tokio::test]
#[ignore]
async fn test_live_link_lifecycle() {
    skip_if_no_credentials!("CLOUDVALID_API_KEY", "CLOUDVALID_TEST_DOMAIN");

    let client = live_client().expect("failed to build client");
    let domain = live_domain().expect("CLOUDVALID_TEST_DOMAIN not set");

    // 1. Create
    let request = CreateDnsConfigurationLinkRequest::new(&domain).with_use_case("mx");
    let link = require_ok!(
        client.create_dns_configuration_link(&request).await,
        "create_dns_configuration_link failed"
    );
    assert!(!link.id.is_empty(), "link id should not be empty");
    assert_eq!(link.domain, domain);
    println!("✓ created link {} -> {}", link.id, link.public_url);

    // 2. Hosted page
    let page = require_ok!(
        client.get_hosted_page(&link.id).await,
        "get_hosted_page failed"
    );
    assert_eq!(page.id, link.id);
    println!("✓ hosted page: {} record(s)", page.records.len());

    // 3. Propagation status
    let statuses = require_ok!(
        client.get_propagation_status(&link.id).await,
        "get_propagation_status failed"
    );
    println!(
        "✓ propagation status: {} record(s), {} pending",
        statuses.len(),
        PropagationRecordStatus::pending(&statuses).count()
    );

    // 4. Cancel
    let cancelled = require_ok!(
        client.cancel_dns_configuration_link(&link.id).await,
        "cancel_dns_configuration_link failed"
    );
    println!("✓ cancelled link, status: {}", cancelled.status);
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_link_is_rejected() {
    skip_if_no_credentials!("CLOUDVALID_API_KEY");

    let client = live_client().expect("failed to build client");
    let result = client.get_hosted_page("does-not-exist").await;

    let err = result.expect_err("unknown link id should fail");
    assert!(err.status().is_some(), "expected a status error, got {err:?}");
    println!("✓ unknown link rejected: {err}");
}
