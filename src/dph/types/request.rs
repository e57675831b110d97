//! Request types for the Data Product Exchange API.
//!
//! Path parameters are marked `#[serde(skip_serializing)]` and are substituted into the URL by
//! the client; the remaining fields become the query string or the JSON body.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::{
    AssetPrototype, BoundedIntError, ContractTerms, DataProductIdentity, DataProductVersionState,
    JsonPatchOperation, UseCase, validate_limit,
};
use crate::pagination::PageRequest;

/// Query for `GET /data_products`.
///
/// ```
/// use data_product_exchange_sdk::dph::types::request::DataProductsRequest;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = DataProductsRequest::builder().limit(25)?.build();
/// # Ok(())
/// # }
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductsRequest {
    /// Page size (1-200, server default: 200).
    #[builder(with = |v: u32| -> Result<_, BoundedIntError> { validate_limit(v) })]
    pub limit: Option<u32>,
    /// Continuation token of a previous page.
    #[builder(into)]
    pub start: Option<String>,
}

impl PageRequest for DataProductsRequest {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Shape shared by drafts at creation time, both standalone and inside a new data product.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductVersionPrototype {
    pub asset: AssetPrototype,
    /// Semantic version, assigned by the service when omitted.
    #[builder(into)]
    pub version: Option<String>,
    pub state: Option<DataProductVersionState>,
    /// Required when creating a draft of an existing data product.
    pub data_product: Option<DataProductIdentity>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub use_cases: Vec<UseCase>,
    /// Delivery types, e.g. `data` or `code`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub contract_terms: Vec<ContractTerms>,
    pub is_restricted: Option<bool>,
}

/// Body of `POST /data_products`. The service currently accepts exactly one initial draft.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CreateDataProductRequest {
    pub drafts: Vec<DataProductVersionPrototype>,
}

#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
}

/// Query for `GET /data_products/{data_product_id}/drafts`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductDraftsRequest {
    /// Data product whose drafts to list. `-` lists drafts across all data products.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    /// Only drafts in this catalog.
    #[serde(rename = "asset.container.id")]
    #[builder(into)]
    pub asset_container_id: Option<String>,
    /// Only drafts with this version.
    #[builder(into)]
    pub version: Option<String>,
    #[builder(with = |v: u32| -> Result<_, BoundedIntError> { validate_limit(v) })]
    pub limit: Option<u32>,
    #[builder(into)]
    pub start: Option<String>,
}

impl PageRequest for DataProductDraftsRequest {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Body of `POST /data_products/{data_product_id}/drafts`.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CreateDataProductDraftRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(flatten)]
    pub draft: DataProductVersionPrototype,
}

/// Addresses one draft. Used to get, delete and publish it.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductDraftRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(skip_serializing)]
    #[builder(into)]
    pub draft_id: String,
}

/// `PATCH /data_products/{data_product_id}/drafts/{draft_id}` with a JSON Patch body.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct UpdateDataProductDraftRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(skip_serializing)]
    #[builder(into)]
    pub draft_id: String,
    pub patch: Vec<JsonPatchOperation>,
}

/// Query for `GET /data_products/{data_product_id}/releases`.
///
/// ```
/// use data_product_exchange_sdk::dph::types::request::DataProductReleasesRequest;
/// use data_product_exchange_sdk::dph::types::DataProductVersionState;
/// use data_product_exchange_sdk::ToQueryParams as _;
///
/// let request = DataProductReleasesRequest::builder()
///     .data_product_id("b38df608")
///     .asset_container_id("d29c42eb")
///     .state(vec![DataProductVersionState::Available, DataProductVersionState::Retired])
///     .build();
///
/// assert_eq!(
///     request.query_params(),
///     "?asset.container.id=d29c42eb&state=available%2Cretired"
/// );
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductReleasesRequest {
    /// Data product whose releases to list. `-` lists releases across all data products.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(rename = "asset.container.id")]
    #[builder(into)]
    pub asset_container_id: Option<String>,
    /// Only releases in one of these states, sent comma-separated.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, DataProductVersionState>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub state: Vec<DataProductVersionState>,
    #[builder(into)]
    pub version: Option<String>,
    #[builder(with = |v: u32| -> Result<_, BoundedIntError> { validate_limit(v) })]
    pub limit: Option<u32>,
    #[builder(into)]
    pub start: Option<String>,
}

impl PageRequest for DataProductReleasesRequest {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Addresses one release. Used to get and retire it.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct DataProductReleaseRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(skip_serializing)]
    #[builder(into)]
    pub release_id: String,
}

/// `PATCH /data_products/{data_product_id}/releases/{release_id}` with a JSON Patch body.
/// Only descriptive fields of a release can be changed.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct UpdateDataProductReleaseRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub data_product_id: String,
    #[serde(skip_serializing)]
    #[builder(into)]
    pub release_id: String,
    pub patch: Vec<JsonPatchOperation>,
}
