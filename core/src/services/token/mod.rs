//! Token issuer module for JWT management
//!
//! This module handles:
//! - Access and refresh token pair issuance (HS512)
//! - Access and refresh token verification with expired/invalid classification

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenIssuerConfig;
pub use service::TokenIssuer;
