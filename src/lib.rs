pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_support;
