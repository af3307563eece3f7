//! Two-tier chat platform: an in-memory echo chat service and an API gateway
//! that proxies to it.

pub mod agent;
pub mod config;
pub mod db;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod service;
pub mod telemetry;

pub use routes::{chat_service_router, gateway_router};
