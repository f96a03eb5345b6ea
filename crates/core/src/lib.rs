//! Functional core for the storefront admin backend.
//!
//! Everything in this crate is either a pure function or a trait describing
//! an external collaborator. Concrete backends live in the `storefront` crate.

pub mod assets;
pub mod cache;
pub mod catalog;
pub mod stats;
pub mod storage;
