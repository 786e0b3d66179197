//! # Posts Core
//!
//! The domain layer of the posts service.
//! This crate contains the record shape, field validation and the CRUD
//! operations, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, StoreError};
pub use service::{DEFAULT_LIST_LIMIT, PostService};
