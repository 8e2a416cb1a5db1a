//! Shared test helpers and fixtures

#![allow(dead_code)]

use std::env;

use cloudvalid_client::{ClientConfig, CloudValidClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk_test_123";

/// Skip a test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at a mock server.
pub fn mock_client(server: &MockServer) -> CloudValidClient {
    let config = ClientConfig::new(TEST_API_KEY).with_base_url(&server.uri());
    CloudValidClient::with_config(config).expect("failed to build client")
}

/// Client for the real API, if `CLOUDVALID_API_KEY` is set.
pub fn live_client() -> Option<CloudValidClient> {
    CloudValidClient::from_env().ok()
}

/// Domain used by the live tests.
pub fn live_domain() -> Option<String> {
    env::var("CLOUDVALID_TEST_DOMAIN").ok()
}

// ============ Fixtures ============

pub fn link_body() -> Value {
    json!({
        "result": {
            "id": "abc123",
            "domain": "example.com",
            "variables": {"selector": "s1"},
            "use_cases": ["mx", "dmarc"],
            "created_at": "2024-03-01T10:00:00Z",
            "dns_provider_guess": {
                "name": "Cloudflare",
                "url": "https://www.cloudflare.com",
                "logo": "https://cdn.cloudvalid.com/logos/cloudflare.png",
                "target_url": "https://dash.cloudflare.com"
            },
            "dns_provider_domain": "ns.cloudflare.com",
            "cancelled_at": null,
            "finished_at": null,
            "public_url": "https://app.cloudvalid.com/dns/abc123",
            "public_url_latest": "https://app.cloudvalid.com/dns/latest/abc123"
        }
    })
}

pub fn hosted_page_body() -> Value {
    json!({
        "result": {
            "id": "abc123",
            "service_name": "Acme Mail",
            "redirect_url": "https://acme.example/done",
            "domain": "example.com",
            "finished_at": "2024-03-02T08:30:00Z",
            "domain_connect_url_new_window": "https://dc.example/new",
            "domain_connect_url_same_window": "https://dc.example/same",
            "dns_provider_domain": "ns.cloudflare.com",
            "public_url": "https://app.cloudvalid.com/dns/abc123",
            "public_url_latest": "https://app.cloudvalid.com/dns/latest/abc123",
            "use_cases": ["mx"],
            "dns_provider_guess": {
                "name": "Cloudflare",
                "url": "https://www.cloudflare.com",
                "logo": "https://cdn.cloudvalid.com/logos/cloudflare.png",
                "target_url": "https://dash.cloudflare.com"
            },
            "client": {
                "name": "Acme",
                "brand_primary_color": "#112233",
                "brand_secondary_color": "#445566",
                "brand_logo": "https://acme.example/logo.png"
            },
            "records": [
                {
                    "use_case": "mx",
                    "type": "MX",
                    "host": "@",
                    "content": "mx1.acme.example",
                    "remove_existing_records": ["mx.old.example"],
                    "propagated": true,
                    "consider_existing_dmarc_valid": false
                },
                {
                    "use_case": "dmarc",
                    "type": "TXT",
                    "host": "_dmarc",
                    "content": "v=DMARC1; p=none",
                    "remove_existing_records": [],
                    "propagated": false,
                    "consider_existing_dmarc_valid": true
                }
            ]
        }
    })
}

pub fn propagation_body() -> Value {
    json!({
        "result": [
            {
                "use_case": "mx",
                "type": "MX",
                "host": "@",
                "content": "mx1.acme.example",
                "remove_existing_records": [],
                "message": "Record found",
                "suggestion": "",
                "consider_existing_dmarc_valid": false,
                "propagated": true
            },
            {
                "use_case": "dmarc",
                "type": "TXT",
                "host": "_dmarc",
                "content": "v=DMARC1; p=none",
                "remove_existing_records": ["v=DMARC1; p=reject"],
                "message": "Record not found",
                "suggestion": "Add a TXT record at _dmarc",
                "consider_existing_dmarc_valid": true,
                "propagated": false
            }
        ]
    })
}

pub fn cancelled_body() -> Value {
    json!({
        "id": "abc123",
        "user_email": "owner@acme.example",
        "domain": "example.com",
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T11:00:00Z",
        "cancelled_at": "2024-03-01T11:00:00Z",
        "deleted_at": null,
        "public_url": "https://app.cloudvalid.com/dns/abc123",
        "public_url_latest": "https://app.cloudvalid.com/dns/latest/abc123",
        "last_propagation_check_at": "2024-03-01T10:55:00Z",
        "last_propagation_check_status": "pending",
        "propagation_checks_count": 7,
        "status": "cancelled",
        "dns_provider_domain": "ns.cloudflare.com",
        "dns_provider_guess": {
            "name": "Cloudflare",
            "url": "https://www.cloudflare.com",
            "logo": "https://cdn.cloudvalid.com/logos/cloudflare.png",
            "target_url": "https://dash.cloudflare.com"
        },
        "records": [
            {
                "use_case": "mx",
                "type": "MX",
                "host": "@",
                "content": "mx1.acme.example",
                "remove_existing_records": [],
                "propagated": false,
                "consider_existing_dmarc_valid": false
            }
        ],
        "templates": [
            {
                "id": "tpl_1",
                "template_name": "acme-mx",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": null,
                "use_case": "mx",
                "use_case_display": "Mail (MX)",
                "records": [
                    {
                        "type": "MX",
                        "host": "@",
                        "content": "mx1.%domain%",
                        "priority": "10",
                        "removeExisting": true,
                        "considerExistingDmarcValid": false,
                        "errors": []
                    }
                ],
                "variables": ["domain"]
            }
        ]
    })
}
