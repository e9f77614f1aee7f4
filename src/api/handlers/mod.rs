//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod cart;
pub mod health;
pub mod products;
