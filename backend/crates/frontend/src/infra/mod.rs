//! Infrastructure Layer

pub mod http_gateway;

pub use http_gateway::HttpAuthGateway;
