//! Case status portal access.
//!
//! [`PortalClient::login`] authenticates once and yields a [`PortalSession`],
//! which implements [`StatusPortal`] for per-identifier status page fetches.

mod client;
mod types;

pub use client::{PortalClient, PortalSession};
pub use types::*;
