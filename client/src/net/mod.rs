//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only outbound traffic is the health-check in `api`, sent to the
//! gateway's `/api` prefix and proxied upstream by the server crate.

pub mod api;
