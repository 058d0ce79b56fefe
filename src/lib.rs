//! Campaign Analytics - read-oriented API over advertising campaigns
//!
//! Campaigns carry flat audience metrics, a set of time periods and a set
//! of physical sites. Data is loaded from three CSV exports by a batch job
//! and served through a paginated, filterable JSON API.
//!
//! # Architecture
//! - `storage`: SeaORM-backed relational store and query layer
//! - `ingest`: CSV reading, normalization, deduplication and bulk replace
//! - `services`: pagination, filters and summary computation
//! - `api`: HTTP routes, response envelopes and middleware
//! - `config`: TOML / env configuration
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging initialization

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
