//! Pagination links and continuation token extraction
//!
//! List endpoints return a `next` link whose `href` carries the opaque
//! continuation token in its `token` query parameter.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the continuation token
pub const TOKEN_PARAM: &str = "token";

/// Base used to resolve relative `href` values such as `ibm.com?token=abc`
static PLACEHOLDER_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost/").expect("placeholder base URL is valid"));

/// A hyperlink returned by a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// Absolute or relative URL of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PaginationLink {
    /// Create a link pointing at `href`
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }

    /// Continuation token carried by this link, if any
    pub fn token(&self) -> Result<Option<String>> {
        extract_token(Some(self))
    }
}

/// Extract the continuation token from an optional `next` link.
///
/// Returns `Ok(None)` when there is no link, no `href`, no query string, no
/// `token` parameter, or an empty `token` value. Fails only when `href`
/// cannot be parsed as a URL.
pub fn extract_token(link: Option<&PaginationLink>) -> Result<Option<String>> {
    let Some(href) = link.and_then(|l| l.href.as_deref()) else {
        return Ok(None);
    };
    if href.is_empty() {
        return Ok(None);
    }

    let url = Url::options()
        .base_url(Some(&PLACEHOLDER_BASE))
        .parse(href)
        .map_err(|e| Error::link_parse(href, e))?;

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

/// A list response envelope that carries a `next` link.
///
/// Implemented by each resource collection so the pager can be bound to any
/// list operation.
pub trait PaginatedCollection {
    /// Element type of the collection
    type Item;

    /// Link to the next page, if the server returned one
    fn next_link(&self) -> Option<&PaginationLink>;

    /// Consume the envelope, yielding its items in server order
    fn into_items(self) -> Vec<Self::Item>;

    /// Continuation token for the next page
    fn next_token(&self) -> Result<Option<String>> {
        extract_token(self.next_link())
    }
}

/// One page of results from a bound list operation
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Link to the following page
    pub next: Option<PaginationLink>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next: Option<PaginationLink>) -> Self {
        Self { items, next }
    }

    /// Create a final page (no `next` link)
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Create a page followed by another page at `href`
    pub fn with_next(items: Vec<T>, href: impl Into<String>) -> Self {
        Self {
            items,
            next: Some(PaginationLink::new(href)),
        }
    }

    /// Build a page from a collection envelope
    pub fn from_collection<C>(collection: C) -> Self
    where
        C: PaginatedCollection<Item = T>,
    {
        let next = collection.next_link().cloned();
        Self {
            items: collection.into_items(),
            next,
        }
    }

    /// Continuation token for the next page
    pub fn next_token(&self) -> Result<Option<String>> {
        extract_token(self.next.as_ref())
    }
}
