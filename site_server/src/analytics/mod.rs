//! Customer analytics: event aggregation and anonymous session identity.

pub mod aggregate;
pub mod fingerprint;
