#![allow(
    clippy::module_name_repetitions,
    reason = "Response types mirror the API's resource names"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{
    AssetReference, ContainerReference, ContractTerms, DataProductIdentity,
    DataProductVersionState, ReleaseIdentity, UseCase,
};
use crate::pagination::Page;
use crate::types::{DateTime, Map, Utc, Value};

/// Link to the first page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FirstPage {
    #[builder(into)]
    pub href: String,
}

/// Link to the following page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct NextPage {
    #[builder(into)]
    pub href: String,
    /// Opaque continuation token, passed back verbatim as the `start` query parameter.
    #[builder(into)]
    pub start: String,
}

/// Progress of the account initialization (catalog provisioning and sample data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct InitializeStatusResponse {
    /// `not_started`, `in_progress`, `succeeded` or `failed`.
    #[builder(into)]
    pub status: String,
    pub container: Option<ContainerReference>,
    #[builder(into)]
    pub href: Option<String>,
    #[builder(into)]
    pub trace: Option<String>,
    pub last_started_at: Option<DateTime<Utc>>,
    pub last_finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductSummary {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: Option<String>,
    pub release: Option<ReleaseIdentity>,
    pub container: ContainerReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductVersionSummary {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub version: String,
    pub state: DataProductVersionState,
    pub data_product: DataProductIdentity,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub types: Vec<String>,
    pub asset: AssetReference,
}

/// Full view of a draft or a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductVersion {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub version: String,
    pub state: DataProductVersionState,
    pub data_product: DataProductIdentity,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    #[builder(default)]
    pub types: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub contract_terms: Vec<ContractTerms>,
    pub is_restricted: Option<bool>,
    pub asset: AssetReference,
    #[builder(into)]
    pub published_by: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    #[builder(into)]
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Custom properties the service attaches to the version.
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProduct {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: Option<String>,
    pub release: Option<ReleaseIdentity>,
    pub container: ContainerReference,
    pub latest_release: Option<DataProductVersionSummary>,
    #[serde(default)]
    #[builder(default)]
    pub drafts: Vec<DataProductVersionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductCollection {
    pub limit: u32,
    pub first: FirstPage,
    pub next: Option<NextPage>,
    pub total_results: Option<u64>,
    pub data_products: Vec<DataProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductDraftCollection {
    pub limit: u32,
    pub first: FirstPage,
    pub next: Option<NextPage>,
    pub total_results: Option<u64>,
    pub drafts: Vec<DataProductVersionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DataProductReleaseCollection {
    pub limit: u32,
    pub first: FirstPage,
    pub next: Option<NextPage>,
    pub total_results: Option<u64>,
    pub releases: Vec<DataProductVersionSummary>,
}

impl From<DataProductCollection> for Page<DataProductSummary> {
    fn from(collection: DataProductCollection) -> Self {
        Page::new(
            collection.data_products,
            collection.next.map(|next| next.start),
        )
    }
}

impl From<DataProductDraftCollection> for Page<DataProductVersionSummary> {
    fn from(collection: DataProductDraftCollection) -> Self {
        Page::new(collection.drafts, collection.next.map(|next| next.start))
    }
}

impl From<DataProductReleaseCollection> for Page<DataProductVersionSummary> {
    fn from(collection: DataProductReleaseCollection) -> Self {
        Page::new(collection.releases, collection.next.map(|next| next.start))
    }
}
