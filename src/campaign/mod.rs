//! Campaign lifecycle management.
//!
//! Creation, lookup, owner-scoped update and soft-deletion of crowdfunding
//! campaigns. Completed and cancelled campaigns are frozen, deletion is a
//! status transition, and categorical fields are translated between wire
//! indices and persisted strings by [`codec`]. The module follows hexagonal
//! architecture:
//!
//! - Enum translation tables in [`codec`]
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod ports;
pub mod services;
