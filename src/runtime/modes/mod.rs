//! Mode routing
//!
//! - `serve`: HTTP API server (default)
//! - `load`: one-shot CSV ingestion
//! - `config generate`: write a sample configuration file

pub mod config_gen;
pub mod ingest;
pub mod server;

pub use config_gen::run_config_generate;
pub use ingest::run_ingest;
pub use server::run_server;
