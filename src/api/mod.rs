//! Sample Grouper API Server module
//!
//! HTTP surface for uploading a task export and retrieving the grouped result.
//! Run with `sample-grouper-server`.

pub mod handlers;
pub mod server;
pub mod state;

pub use server::{build_router, run_api_server};
