//! Data models used throughout the application
//!
//! This module contains the JSON-RPC envelope structures used by the HTTP
//! surface of the validation service.

// JSON-RPC protocol data structures
pub mod jsonrpc;
