//! Service layer: what the site shows where, and what happens to a contact submission.
//! - Query rules (featured subsets, ordering, pagination) sit on top of `models` entities.
//! - Contact intake is split into domain, repository and service like any other workflow.
//! - Handlers in `server` only translate HTTP to these calls.

pub mod errors;
pub mod pagination;
pub mod content;
pub mod search;
pub mod site_settings;
pub mod contact;
pub mod mail;
pub mod admin;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
