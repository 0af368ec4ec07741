//! Pagination module
//!
//! Token pagination shared by every list operation of the service.
//!
//! # Overview
//!
//! List endpoints answer with a collection envelope whose `next` link carries
//! an opaque continuation token in its `token` query parameter.
//! [`extract_token`] pulls that token out of the link and [`Pager`] feeds it
//! back into the next call of the bound [`ListOperation`] until a page comes
//! back without one.

mod link;
mod pager;

pub use link::{extract_token, Page, PaginatedCollection, PaginationLink, TOKEN_PARAM};
pub use pager::{ListOperation, PagedOptions, Pager, PagerState};
