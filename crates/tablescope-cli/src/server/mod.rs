//! JSON API server for dashboard frontends.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
