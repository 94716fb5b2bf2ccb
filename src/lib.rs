pub mod app_state;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_utils;
