//! Types for the Data Product Exchange API.
//!
//! - **Common types**: enums and nested structures shared by requests and responses.
//! - **Request types** ([`request`]): builder-pattern structs, one per endpoint.
//! - **Response types** ([`response`]): data products, versions and their collections.
//!
//! ```
//! use data_product_exchange_sdk::dph::types::request::DataProductReleasesRequest;
//! use data_product_exchange_sdk::dph::types::DataProductVersionState;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DataProductReleasesRequest::builder()
//!     .data_product_id("b38df608-d34b-4d58-8136-ed25e6c6684e")
//!     .state(vec![DataProductVersionState::Available])
//!     .limit(100)?
//!     .build();
//! # Ok(())
//! # }
//! ```

use std::error::Error as StdError;
use std::fmt;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::types::Value;

pub mod request;
pub mod response;

/// Largest page size the list endpoints accept.
pub const MAX_LIMIT: u32 = 200;

/// Lifecycle state of a data product version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum DataProductVersionState {
    /// Editable, not visible to consumers.
    Draft,
    /// Published and open for subscription.
    Available,
    /// Withdrawn from the catalog.
    Retired,
    /// Unknown state from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}

/// JSON Patch (RFC 6902) operation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One operation of a JSON Patch document, as accepted by the update endpoints.
///
/// ```
/// use data_product_exchange_sdk::dph::types::{JsonPatchOperation, PatchOp};
/// use serde_json::json;
///
/// let op = JsonPatchOperation::builder()
///     .op(PatchOp::Replace)
///     .path("/description")
///     .value(json!("Quarterly revenue by region"))
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct JsonPatchOperation {
    pub op: PatchOp,
    #[builder(into)]
    pub path: String,
    /// Source location for `move` and `copy`.
    #[builder(into)]
    pub from: Option<String>,
    pub value: Option<Value>,
}

/// The catalog or project holding an asset.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ContainerReference {
    #[builder(into)]
    pub id: String,
    /// Container kind, e.g. `catalog`.
    #[serde(rename = "type")]
    #[builder(into)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ContainerIdentity {
    #[builder(into)]
    pub id: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AssetReference {
    #[builder(into)]
    pub id: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
    pub container: ContainerReference,
}

/// Asset to create a new data product version in.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AssetPrototype {
    #[builder(into)]
    pub id: Option<String>,
    pub container: ContainerIdentity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ReleaseIdentity {
    #[builder(into)]
    pub id: String,
}

/// A data product, optionally pinned to one of its releases.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductIdentity {
    #[builder(into)]
    pub id: String,
    pub release: Option<ReleaseIdentity>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UseCase {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: Option<String>,
    pub container: Option<ContainerIdentity>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ContractTermsDocument {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: String,
    /// `terms_and_conditions` or `sla`.
    #[serde(rename = "type")]
    #[builder(into)]
    pub kind: String,
    #[builder(into)]
    pub url: Option<String>,
    /// Pre-signed URL to upload the attachment, present right after creation.
    #[builder(into)]
    pub upload_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ContractTerms {
    #[builder(into)]
    pub id: Option<String>,
    pub asset: Option<AssetReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub documents: Vec<ContractTermsDocument>,
}

/// Error returned when a bounded request parameter is out of range.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedIntError {
    pub value: u32,
    pub min: u32,
    pub max: u32,
    pub param_name: &'static str,
}

impl BoundedIntError {
    #[must_use]
    pub const fn new(value: u32, min: u32, max: u32, param_name: &'static str) -> Self {
        Self {
            value,
            min,
            max,
            param_name,
        }
    }
}

impl fmt::Display for BoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} (got {})",
            self.param_name, self.min, self.max, self.value
        )
    }
}

impl StdError for BoundedIntError {}

/// Page size check shared by the list requests.
pub(crate) fn validate_limit(value: u32) -> Result<u32, BoundedIntError> {
    if (1..=MAX_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(BoundedIntError::new(value, 1, MAX_LIMIT, "limit"))
    }
}
