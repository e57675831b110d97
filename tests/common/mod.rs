#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use data_product_exchange_sdk::dph::{Client, Config};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const DATA_PRODUCT_ID: &str = "b38df608-d34b-4d58-8136-ed25e6c6684e";
pub const CATALOG_ID: &str = "d29c42eb-7100-4b7a-8257-c196dbcca1cd";
pub const DRAFT_ID: &str = "2b0bf220-079c-11ee-be56-0242ac120002";
pub const RELEASE_ID: &str = "18bdbde1-918e-4ecf-aa23-6727bf319e14";
pub const TOKEN: &str = "eyJraWQiOiIyMDI0MDYwNTA4MzQiLCJhbGciOiJSUzI1NiJ9";

pub const BASE: &str = "/data_product_exchange/v1";

#[must_use]
pub fn path(suffix: &str) -> String {
    format!("{BASE}{suffix}")
}

pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().bearer_token(TOKEN).build();
    Ok(Client::new(&server.base_url(), config)?)
}

#[must_use]
pub fn data_product_summary(id: &str) -> Value {
    json!({
        "id": id,
        "release": {"id": RELEASE_ID},
        "container": {"id": CATALOG_ID, "type": "catalog"}
    })
}

#[must_use]
pub fn version_summary(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "version": "1.0.0",
        "state": state,
        "data_product": {"id": DATA_PRODUCT_ID, "release": {"id": RELEASE_ID}},
        "name": "Sales by region",
        "description": "Quarterly revenue by region",
        "tags": ["sales"],
        "types": ["data"],
        "asset": {
            "id": "2b0bf220-079c-11ee-be56-0242ac120002",
            "container": {"id": CATALOG_ID, "type": "catalog"}
        }
    })
}

#[must_use]
pub fn version(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "version": "1.0.0",
        "state": state,
        "data_product": {"id": DATA_PRODUCT_ID},
        "name": "Sales by region",
        "description": "Quarterly revenue by region",
        "tags": ["sales"],
        "use_cases": [{"id": "uc-1", "name": "Forecasting"}],
        "types": ["data"],
        "contract_terms": [{
            "id": "ct-1",
            "asset": {"id": "asset-1", "container": {"id": CATALOG_ID}},
            "documents": [{
                "id": "doc-1",
                "name": "Terms of use",
                "type": "terms_and_conditions",
                "url": "https://example.com/terms"
            }]
        }],
        "is_restricted": false,
        "asset": {
            "id": "2b0bf220-079c-11ee-be56-0242ac120002",
            "name": "Sales by region",
            "container": {"id": CATALOG_ID, "type": "catalog"}
        },
        "published_by": "IBMid-1234",
        "published_at": "2024-06-20T14:45:00Z",
        "created_by": "IBMid-1234",
        "created_at": "2024-06-01T09:00:00Z"
    })
}

/// A listing body. `next` is the continuation token, `None` for the last page.
#[must_use]
pub fn collection(key: &str, items: Vec<Value>, next: Option<&str>) -> Value {
    let mut body = json!({
        "limit": 2,
        "first": {"href": format!("https://api.example.com{BASE}/data_products?limit=2")},
    });
    body[key] = Value::Array(items);
    if let Some(start) = next {
        body["next"] = json!({
            "href": format!("https://api.example.com{BASE}/data_products?limit=2&start={start}"),
            "start": start
        });
    }
    body
}

#[must_use]
pub fn error_body(code: &str, message: &str) -> Value {
    json!({
        "errors": [{
            "code": code,
            "message": message,
            "more_info": "https://cloud.ibm.com/apidocs/data-product-exchange"
        }],
        "trace": "9fd3e7b0-7aa2-4e1c-a3b7-2f8c1c3d4e5f",
        "status_code": 400
    })
}
