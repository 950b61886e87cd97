//! # Core models and utilities for cnvrs.
//!
//! `cnvrs-core` holds everything the other cnvrs crates share: the CNV call
//! data model ([`models::GenomicInterval`], [`models::IntervalSet`], ...), the
//! error taxonomy, the TOML-backed [`config::ReconcileConfig`] and a few small
//! reader and formatting helpers.
//!
//! Coordinates are 1-based and closed on both ends, as CNVnator writes them.
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{CnvError, FormatError, Result};
