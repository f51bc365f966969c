//! Domain contracts for the LegalAI demo.
//!
//! Everything here is target independent: the frontend compiles it to WASM,
//! the unit tests run it on the host.

pub mod domain;
pub mod shared;
pub mod usecases;
