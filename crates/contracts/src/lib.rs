//! Shared domain model of the document Q&A client.
//!
//! Everything here is target-independent: the same types are used by the
//! WASM frontend and are unit-tested natively.

pub mod domain;
pub mod system;
