use async_trait::async_trait;
use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{self, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use tracing::debug;
use url::Url;

use super::types::JsonPatchOperation;
use super::types::request::{
    CreateDataProductDraftRequest, CreateDataProductRequest, DataProductByIdRequest,
    DataProductDraftRequest, DataProductDraftsRequest, DataProductReleaseRequest,
    DataProductReleasesRequest, DataProductsRequest, UpdateDataProductDraftRequest,
    UpdateDataProductReleaseRequest,
};
use super::types::response::{
    DataProduct, DataProductCollection, DataProductDraftCollection, DataProductReleaseCollection,
    DataProductSummary, DataProductVersion, DataProductVersionSummary, InitializeStatusResponse,
};
use crate::error::Error;
use crate::pagination::{ListOperation, Page, Pager};
use crate::{Result, ToQueryParams as _};

/// Public endpoint of the Data Product Exchange API.
pub const DEFAULT_HOST: &str = "https://api.dataplatform.cloud.ibm.com";

const BASE_PATH: [&str; 2] = ["data_product_exchange", "v1"];

const JSON_PATCH: &str = "application/json-patch+json";

/// Configuration for [`Client`]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Sent as `Authorization: Bearer <token>` with every request. Obtaining and refreshing the
    /// token is up to the caller.
    #[builder(into)]
    bearer_token: Option<SecretString>,
    /// Overrides the default `User-Agent` header.
    #[builder(into)]
    user_agent: Option<String>,
}

/// HTTP client for the Data Product Exchange API.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// ```no_run
/// use data_product_exchange_sdk::dph::{Client, Config};
///
/// // Anonymous client against the public endpoint
/// let client = Client::default();
///
/// // Or with a token and a custom endpoint
/// let config = Config::builder().bearer_token("eyJraWQiOi...").build();
/// let client = Client::new("https://api.eu-de.dataplatform.cloud.ibm.com", config).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    config: Config,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client against `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client fails to build.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!("{host} cannot be used as a base URL")));
        }

        let user_agent = match &config.user_agent {
            Some(agent) => HeaderValue::from_str(agent)?,
            None => HeaderValue::from_static(concat!(
                "data-product-exchange-sdk-rust/",
                env!("CARGO_PKG_VERSION")
            )),
        };

        let mut headers = HeaderMap::new();

        headers.insert(header::USER_AGENT, user_agent);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host,
            config,
            client,
        })
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the status of the account initialization.
    pub async fn initialize_status(&self) -> Result<InitializeStatusResponse> {
        self.get(&["configuration", "initialize", "status"], &())
            .await
    }

    /// Lists one page of data products.
    ///
    /// Use [`Client::data_products_pager`] to walk every page.
    pub async fn list_data_products(
        &self,
        request: &DataProductsRequest,
    ) -> Result<DataProductCollection> {
        self.get(&["data_products"], request).await
    }

    /// Creates a data product together with its first draft.
    ///
    /// ```no_run
    /// use data_product_exchange_sdk::dph::Client;
    /// use data_product_exchange_sdk::dph::types::{AssetPrototype, ContainerIdentity};
    /// use data_product_exchange_sdk::dph::types::request::{
    ///     CreateDataProductRequest, DataProductVersionPrototype,
    /// };
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let draft = DataProductVersionPrototype::builder()
    ///     .name("Sales by region")
    ///     .asset(
    ///         AssetPrototype::builder()
    ///             .container(ContainerIdentity::builder().id("d29c42eb").build())
    ///             .build(),
    ///     )
    ///     .build();
    ///
    /// let product = client
    ///     .create_data_product(&CreateDataProductRequest::builder().drafts(vec![draft]).build())
    ///     .await?;
    /// println!("created {}", product.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_data_product(
        &self,
        request: &CreateDataProductRequest,
    ) -> Result<DataProduct> {
        if request.drafts.is_empty() {
            return Err(Error::validation(
                "a data product must be created with at least one draft",
            ));
        }

        self.send(Method::POST, &["data_products"], Some(request))
            .await
    }

    pub async fn get_data_product(&self, request: &DataProductByIdRequest) -> Result<DataProduct> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;

        self.get(&["data_products", data_product_id], &()).await
    }

    /// Lists one page of drafts of a data product.
    pub async fn list_data_product_drafts(
        &self,
        request: &DataProductDraftsRequest,
    ) -> Result<DataProductDraftCollection> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;

        self.get(&["data_products", data_product_id, "drafts"], request)
            .await
    }

    /// Creates a new draft of an existing data product.
    pub async fn create_data_product_draft(
        &self,
        request: &CreateDataProductDraftRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;

        self.send(
            Method::POST,
            &["data_products", data_product_id, "drafts"],
            Some(request),
        )
        .await
    }

    pub async fn get_data_product_draft(
        &self,
        request: &DataProductDraftRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let draft_id = required("draft_id", &request.draft_id)?;

        self.get(&["data_products", data_product_id, "drafts", draft_id], &())
            .await
    }

    /// Applies a JSON Patch document to a draft.
    pub async fn update_data_product_draft(
        &self,
        request: &UpdateDataProductDraftRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let draft_id = required("draft_id", &request.draft_id)?;

        self.patch(
            &["data_products", data_product_id, "drafts", draft_id],
            &request.patch,
        )
        .await
    }

    /// Deletes a draft. The service answers with `204 No Content`.
    pub async fn delete_data_product_draft(&self, request: &DataProductDraftRequest) -> Result<()> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let draft_id = required("draft_id", &request.draft_id)?;

        let request = self
            .client
            .request(
                Method::DELETE,
                self.endpoint(&["data_products", data_product_id, "drafts", draft_id])?,
            )
            .build()?;

        crate::request_without_body(&self.client, request, self.auth_headers()?).await
    }

    /// Publishes a draft, turning it into an available release.
    pub async fn publish_data_product_draft(
        &self,
        request: &DataProductDraftRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let draft_id = required("draft_id", &request.draft_id)?;

        self.send::<(), _>(
            Method::POST,
            &["data_products", data_product_id, "drafts", draft_id, "publish"],
            None,
        )
        .await
    }

    /// Lists one page of releases of a data product.
    pub async fn list_data_product_releases(
        &self,
        request: &DataProductReleasesRequest,
    ) -> Result<DataProductReleaseCollection> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;

        self.get(&["data_products", data_product_id, "releases"], request)
            .await
    }

    pub async fn get_data_product_release(
        &self,
        request: &DataProductReleaseRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let release_id = required("release_id", &request.release_id)?;

        self.get(
            &["data_products", data_product_id, "releases", release_id],
            &(),
        )
        .await
    }

    /// Applies a JSON Patch document to the descriptive fields of a release.
    pub async fn update_data_product_release(
        &self,
        request: &UpdateDataProductReleaseRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let release_id = required("release_id", &request.release_id)?;

        self.patch(
            &["data_products", data_product_id, "releases", release_id],
            &request.patch,
        )
        .await
    }

    /// Retires a release; it stays readable but can no longer be subscribed to.
    pub async fn retire_data_product_release(
        &self,
        request: &DataProductReleaseRequest,
    ) -> Result<DataProductVersion> {
        let data_product_id = required("data_product_id", &request.data_product_id)?;
        let release_id = required("release_id", &request.release_id)?;

        self.send::<(), _>(
            Method::POST,
            &["data_products", data_product_id, "releases", release_id, "retire"],
            None,
        )
        .await
    }

    /// Returns a [`Pager`] over every data product matching `request`.
    ///
    /// # Errors
    ///
    /// Fails if `request.start` is already set.
    pub fn data_products_pager(&self, request: &DataProductsRequest) -> Result<DataProductsPager<'_>> {
        Pager::new(DataProducts { client: self }, request)
    }

    /// Returns a [`Pager`] over every draft matching `request`.
    ///
    /// # Errors
    ///
    /// Fails if `request.start` is already set or `request.data_product_id` is empty.
    pub fn drafts_pager(
        &self,
        request: &DataProductDraftsRequest,
    ) -> Result<DataProductDraftsPager<'_>> {
        required("data_product_id", &request.data_product_id)?;

        Pager::new(DataProductDrafts { client: self }, request)
    }

    /// Returns a [`Pager`] over every release matching `request`.
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use data_product_exchange_sdk::dph::Client;
    /// use data_product_exchange_sdk::dph::types::request::DataProductReleasesRequest;
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = DataProductReleasesRequest::builder()
    ///     .data_product_id("b38df608-d34b-4d58-8136-ed25e6c6684e")
    ///     .build();
    ///
    /// let stream = client.releases_pager(&request)?.into_stream();
    /// pin!(stream);
    ///
    /// while let Some(release) = stream.next().await {
    ///     println!("{}", release?.version);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if `request.start` is already set or `request.data_product_id` is empty.
    pub fn releases_pager(
        &self,
        request: &DataProductReleasesRequest,
    ) -> Result<DataProductReleasesPager<'_>> {
        required("data_product_id", &request.data_product_id)?;

        Pager::new(DataProductReleases { client: self }, request)
    }

    /// `host` + base path + `segments`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation(format!("{} cannot be used as a base URL", self.host)))?
            .pop_if_empty()
            .extend(BASE_PATH)
            .extend(segments);

        Ok(url)
    }

    fn auth_headers(&self) -> Result<Option<HeaderMap>> {
        let Some(token) = &self.config.bearer_token else {
            return Ok(None);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value);

        Ok(Some(headers))
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
    ) -> Result<Res> {
        let query = req.query_params();
        let request = self
            .client
            .request(Method::GET, format!("{}{query}", self.endpoint(segments)?))
            .build()?;

        self.execute(request).await
    }

    async fn send<Req: Serialize, Res: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Req>,
    ) -> Result<Res> {
        let mut builder = self.client.request(method, self.endpoint(segments)?);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.execute(builder.build()?).await
    }

    async fn patch<Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        patch: &[JsonPatchOperation],
    ) -> Result<Res> {
        if patch.is_empty() {
            return Err(Error::validation("patch document must not be empty"));
        }

        let request = self
            .client
            .request(Method::PATCH, self.endpoint(segments)?)
            .header(header::CONTENT_TYPE, JSON_PATCH)
            .json(patch)
            .build()?;

        self.execute(request).await
    }

    async fn execute<Res: DeserializeOwned>(&self, request: Request) -> Result<Res> {
        crate::request(&self.client, request, self.auth_headers()?).await
    }
}

/// Path identifiers must be non-empty, otherwise the call would silently address the parent
/// collection.
fn required<'value>(name: &str, value: &'value str) -> Result<&'value str> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

/// [`ListOperation`] over `GET /data_products`.
#[derive(Clone, Copy, Debug)]
pub struct DataProducts<'client> {
    client: &'client Client,
}

#[async_trait]
impl ListOperation for DataProducts<'_> {
    type Request = DataProductsRequest;
    type Item = DataProductSummary;

    async fn list(&self, request: &DataProductsRequest) -> Result<Page<DataProductSummary>> {
        #[cfg(feature = "tracing")]
        debug!(start = ?request.start, "listing data products");

        self.client.list_data_products(request).await.map(Page::from)
    }
}

pub type DataProductsPager<'client> = Pager<DataProducts<'client>>;

/// [`ListOperation`] over `GET /data_products/{data_product_id}/drafts`.
#[derive(Clone, Copy, Debug)]
pub struct DataProductDrafts<'client> {
    client: &'client Client,
}

#[async_trait]
impl ListOperation for DataProductDrafts<'_> {
    type Request = DataProductDraftsRequest;
    type Item = DataProductVersionSummary;

    async fn list(
        &self,
        request: &DataProductDraftsRequest,
    ) -> Result<Page<DataProductVersionSummary>> {
        #[cfg(feature = "tracing")]
        debug!(data_product_id = %request.data_product_id, start = ?request.start, "listing drafts");

        self.client
            .list_data_product_drafts(request)
            .await
            .map(Page::from)
    }
}

pub type DataProductDraftsPager<'client> = Pager<DataProductDrafts<'client>>;

/// [`ListOperation`] over `GET /data_products/{data_product_id}/releases`.
#[derive(Clone, Copy, Debug)]
pub struct DataProductReleases<'client> {
    client: &'client Client,
}

#[async_trait]
impl ListOperation for DataProductReleases<'_> {
    type Request = DataProductReleasesRequest;
    type Item = DataProductVersionSummary;

    async fn list(
        &self,
        request: &DataProductReleasesRequest,
    ) -> Result<Page<DataProductVersionSummary>> {
        #[cfg(feature = "tracing")]
        debug!(data_product_id = %request.data_product_id, start = ?request.start, "listing releases");

        self.client
            .list_data_product_releases(request)
            .await
            .map(Page::from)
    }
}

pub type DataProductReleasesPager<'client> = Pager<DataProductReleases<'client>>;
