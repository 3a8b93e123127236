//! Client for the WaniKani API v2.
//!
//! Collection endpoints return a [`Paginator`] that walks every page lazily; every payload is
//! turned into a [`TypedResource`] by [`factory::convert`] based on its `object` field.

pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod filters;
pub mod models;
pub mod page;
pub mod pagination;
pub mod resource;
pub mod timestamp;
pub mod wanikani;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use error::{Error, FetchError, Result};
pub use page::Page;
pub use pagination::{collect_as, PageFetcher, Paginator};
pub use resource::{Resource, ResourceKind, TypedResource};
pub use wanikani::WaniKaniClient;
