//! Cursor-based pagination.
//!
//! List endpoints return one bounded page of items plus, when more remain, an opaque `start`
//! token for the following page. [`Pager`] hides that bookkeeping: it owns a private copy of the
//! caller's request, feeds the token of the previous response into the next call, and stops once
//! a response arrives without one.
//!
//! Tokens are never inspected. Only their presence matters, so a page with zero items but a
//! token is a regular, non-terminal page.
//!
//! # Example
//!
//! ```no_run
//! use data_product_exchange_sdk::dph::{Client, types::request::DataProductsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//! let request = DataProductsRequest::builder().limit(50)?.build();
//!
//! let mut pager = client.data_products_pager(&request)?;
//! while pager.has_more() {
//!     for product in pager.next_page().await? {
//!         println!("{}", product.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::Result;
use crate::error::Error;

/// One page of a listing: the items in server order and the token for the page after it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Opaque continuation token. `None` marks the last page.
    pub next: Option<String>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self { items, next }
    }

    /// A page with no continuation token.
    #[must_use]
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}

/// Request options of a paginated list call.
///
/// Besides its filters every list request carries an optional page size and the `start` token.
/// [`Pager`] only ever touches `start`.
pub trait PageRequest: Clone + Send + Sync {
    /// The continuation token this request resumes from, if any.
    fn start(&self) -> Option<&str>;

    fn set_start(&mut self, start: Option<String>);
}

/// A single "list one page" call against some collection.
#[async_trait]
pub trait ListOperation: Send + Sync {
    type Request: PageRequest;
    type Item: Send;

    async fn list(&self, request: &Self::Request) -> Result<Page<Self::Item>>;
}

/// Pull-based traversal of a paginated collection.
///
/// A pager is single-owner: every fetching method takes `&mut self`. It holds no server-side
/// resources and can simply be dropped, also mid-iteration.
pub struct Pager<L: ListOperation> {
    operation: L,
    request: L::Request,
    cursor: Option<String>,
    exhausted: bool,
}

impl<L> fmt::Debug for Pager<L>
where
    L: ListOperation + fmt::Debug,
    L::Request: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("operation", &self.operation)
            .field("request", &self.request)
            .field("cursor", &self.cursor)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<L: ListOperation> Pager<L> {
    /// Creates a pager positioned at the beginning of the collection.
    ///
    /// `request` is cloned; the caller's value is never modified.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if `request` already has a `start`
    /// token, as a pager always begins with the first page.
    pub fn new(operation: L, request: &L::Request) -> Result<Self> {
        if request.start().is_some() {
            return Err(Error::validation(
                "the start token must not be set when creating a pager",
            ));
        }

        Ok(Self {
            operation,
            request: request.clone(),
            cursor: None,
            exhausted: false,
        })
    }

    /// Whether another call to [`Pager::next_page`] can be made. Once `false` it stays `false`.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Fetches the next page.
    ///
    /// The returned items may be empty even though [`Pager::has_more`] is still `true`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Exhausted`] error, without calling the list operation, if
    /// the last page was already returned. Errors of the list operation are returned unchanged and
    /// leave the pager where it was, so the same page can be requested again.
    pub async fn next_page(&mut self) -> Result<Vec<L::Item>> {
        if self.exhausted {
            return Err(Error::exhausted());
        }

        self.request.set_start(self.cursor.clone());
        let page = self.operation.list(&self.request).await?;

        self.exhausted = page.next.is_none();
        self.cursor = page.next;

        #[cfg(feature = "tracing")]
        debug!(
            items = page.items.len(),
            has_more = !self.exhausted,
            "fetched page"
        );

        Ok(page.items)
    }

    /// Fetches every remaining page and concatenates their items in order.
    ///
    /// The whole remainder of the collection is buffered in memory; prefer
    /// [`Pager::into_stream`] for large collections.
    ///
    /// # Errors
    ///
    /// Stops at the first failing page and returns its error. Items gathered before the failure
    /// are dropped.
    pub async fn all_remaining(&mut self) -> Result<Vec<L::Item>> {
        let mut items = Vec::new();

        while self.has_more() {
            items.extend(self.next_page().await?);
        }

        Ok(items)
    }

    /// Turns the pager into a stream of the remaining items, fetching one page at a time as the
    /// stream is polled. The stream ends after yielding the first error.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<L::Item>> {
        try_stream! {
            while self.has_more() {
                for item in self.next_page().await? {
                    yield item;
                }
            }
        }
    }
}
