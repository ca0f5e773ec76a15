#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rota/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Data-source registry implementations for the Rota framework.

/// The version of the rota-sources crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod set;

pub use catalog::{
    available_categories, builtin_sources, get_source_info, sources_by_category, SourceCategory,
    SourceInfo,
};
pub use set::SourceSet;
