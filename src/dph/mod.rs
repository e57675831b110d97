//! Data Product Exchange API client and types.
//!
//! The Data Product Exchange API manages data products: a data product is created together with
//! a first draft, drafts are edited with JSON Patch documents and published into releases, and
//! releases are eventually retired.
//!
//! ## Available Endpoints
//!
//! All paths are relative to `/data_product_exchange/v1`.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/configuration/initialize/status` | GET | Account initialization status |
//! | `/data_products` | GET | List data products |
//! | `/data_products` | POST | Create a data product with its first draft |
//! | `/data_products/{id}` | GET | Get a data product |
//! | `/data_products/{id}/drafts` | GET | List drafts |
//! | `/data_products/{id}/drafts` | POST | Create a draft |
//! | `/data_products/{id}/drafts/{draft_id}` | GET, PATCH, DELETE | Get, update, delete a draft |
//! | `/data_products/{id}/drafts/{draft_id}/publish` | POST | Publish a draft |
//! | `/data_products/{id}/releases` | GET | List releases |
//! | `/data_products/{id}/releases/{release_id}` | GET, PATCH | Get, update a release |
//! | `/data_products/{id}/releases/{release_id}/retire` | POST | Retire a release |
//!
//! The three listings are cursor-paginated; [`Client::data_products_pager`],
//! [`Client::drafts_pager`] and [`Client::releases_pager`] walk them with a
//! [`crate::pagination::Pager`].
//!
//! # Example
//!
//! ```no_run
//! use data_product_exchange_sdk::dph::{Client, Config};
//! use data_product_exchange_sdk::dph::types::request::DataProductReleasesRequest;
//! use data_product_exchange_sdk::dph::types::DataProductVersionState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().bearer_token("eyJraWQiOi...").build();
//! let client = Client::new(data_product_exchange_sdk::dph::DEFAULT_HOST, config)?;
//!
//! let request = DataProductReleasesRequest::builder()
//!     .data_product_id("-")
//!     .state(vec![DataProductVersionState::Available])
//!     .build();
//!
//! let releases = client.releases_pager(&request)?.all_remaining().await?;
//! for release in releases {
//!     println!("{} {}", release.name, release.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{
    Client, Config, DEFAULT_HOST, DataProductDrafts, DataProductDraftsPager,
    DataProductReleases, DataProductReleasesPager, DataProducts, DataProductsPager,
};
