//! Generic pager over token-paginated list operations
//!
//! A [`Pager`] owns the options template for one list call and the
//! continuation token. Each [`Pager::get_next`] performs exactly one call of
//! the bound [`ListOperation`]; the pager itself never retries.

use super::link::Page;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::Stream;
use std::future::Future;
use std::marker::PhantomData;
use tracing::debug;

/// Options for a paginated list call.
///
/// The pager controls the page token; every other field comes from the
/// caller's template.
pub trait PagedOptions: Clone + Send + Sync {
    /// The page token currently set on these options
    fn page_token(&self) -> Option<&str>;

    /// A copy of these options with the page token replaced
    #[must_use]
    fn for_page(&self, token: Option<String>) -> Self;
}

/// A paginated list call the pager is bound to
#[async_trait]
pub trait ListOperation<O, T>: Send + Sync {
    /// Fetch the page selected by `options`
    async fn list(&self, options: O) -> Result<Page<T>>;
}

#[async_trait]
impl<O, T, F, Fut> ListOperation<O, T> for F
where
    F: Fn(O) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    O: Send + 'static,
    T: Send + 'static,
{
    async fn list(&self, options: O) -> Result<Page<T>> {
        self(options).await
    }
}

/// Position of a pager in its page sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PagerState {
    /// Nothing fetched yet; the next call fetches the first page
    #[default]
    Ready,
    /// The last page carried this continuation token
    HasMore(String),
    /// The last page had no continuation token
    Exhausted,
}

impl PagerState {
    /// Whether another page can be fetched
    pub fn has_next(&self) -> bool {
        !matches!(self, Self::Exhausted)
    }

    /// Token queued for the next fetch
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::HasMore(token) => Some(token),
            _ => None,
        }
    }
}

/// Drives a list operation page by page until the server stops returning a
/// continuation link.
pub struct Pager<O, T, L> {
    list: L,
    options: O,
    state: PagerState,
    pages_fetched: u32,
    items_fetched: u64,
    _item: PhantomData<fn() -> T>,
}

impl<O, T, L> Pager<O, T, L>
where
    O: PagedOptions,
    L: ListOperation<O, T>,
{
    /// Bind a pager to `list` with the given options template.
    ///
    /// The template must not carry a page token.
    pub fn new(list: L, options: O) -> Result<Self> {
        if options.page_token().is_some() {
            return Err(Error::invalid_value(
                "token",
                "the page token is managed by the pager and must not be set",
            ));
        }

        Ok(Self {
            list,
            options,
            state: PagerState::Ready,
            pages_fetched: 0,
            items_fetched: 0,
            _item: PhantomData,
        })
    }

    /// Whether another page can be fetched
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Current pager state
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// The options template
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Number of items fetched so far
    pub fn items_fetched(&self) -> u64 {
        self.items_fetched
    }

    /// Fetch the next page.
    ///
    /// Errors from the list operation or a malformed `next` link leave the
    /// pager state untouched, so the call can be retried. Calling this after
    /// the last page returns [`Error::PagerExhausted`] without issuing a
    /// request.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        let token = match &self.state {
            PagerState::Exhausted => return Err(Error::PagerExhausted),
            PagerState::Ready => None,
            PagerState::HasMore(token) => Some(token.clone()),
        };

        let page = self.list.list(self.options.for_page(token)).await?;
        let next_token = page.next_token()?;

        self.pages_fetched += 1;
        self.items_fetched += page.items.len() as u64;
        debug!(
            page = self.pages_fetched,
            items = page.items.len(),
            has_next = next_token.is_some(),
            "Fetched page"
        );

        self.state = match next_token {
            Some(token) => PagerState::HasMore(token),
            None => PagerState::Exhausted,
        };
        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in page order.
    ///
    /// Stops at the first error; items from pages fetched before it are
    /// discarded.
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while self.has_next() {
            let mut items = self.get_next().await?;
            all.append(&mut items);
        }
        Ok(all)
    }

    /// Turn the pager into a stream of pages.
    ///
    /// The stream ends after the last page, or after yielding the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<T>>> {
        futures::stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((items, pager)))
        })
    }
}

impl<O: std::fmt::Debug, T, L> std::fmt::Debug for Pager<O, T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("pages_fetched", &self.pages_fetched)
            .field("items_fetched", &self.items_fetched)
            .finish_non_exhaustive()
    }
}
