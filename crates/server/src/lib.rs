pub mod errors;
pub mod extract;
pub mod flash;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
