//! Message module: three-layer architecture (domain, repository, service).
//!
//! Creation and update rules live here, including the author-existence
//! cross-check against the account repository.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::MessageService;
