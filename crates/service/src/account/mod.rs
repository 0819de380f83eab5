//! Account module: three-layer architecture (domain, repository, service).
//!
//! Registration and login business rules live here; persistence stays behind
//! the repository trait.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::AccountService;
