//! Network Module
//!
//! HTTP transport and the AnkiConnect client.
//!
//! ## Architecture
//! - `Transport` moves request bytes to the service and back
//! - `AnkiClient` turns study operations into actions and decodes replies
//! - One blocking round trip per operation, no retries

mod client;
mod transport;

pub use client::AnkiClient;
pub use transport::{HttpTransport, Transport};
