//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for both services:
//! - Cryptographic utilities (random tokens, SHA-256, Base64url)
//! - Cookie management
//! - Typed environment configuration
//! - Outbound HTTP client construction and bearer extraction

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod http;
