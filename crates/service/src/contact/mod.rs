//! Contact intake: domain (validation), repository (persistence), service (workflow).

pub mod domain;
pub mod errors;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::ContactService;
