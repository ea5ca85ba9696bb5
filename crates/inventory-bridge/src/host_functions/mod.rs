//! Host function implementations.
//!
//! These modules contain the business logic for each channel method. They
//! are plain functions that take typed inputs and return a typed
//! `MethodResult`. Wiring into a `MethodChannel` and across the WASM ABI is
//! handled in `registration`.

mod app_list;
mod error;

pub(crate) use app_list::*;
pub use error::sanitize_inventory_error;
