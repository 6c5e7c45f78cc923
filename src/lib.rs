//! Campaign service: lifecycle management for crowdfunding campaigns.
//!
//! This crate provides creation, retrieval, owner-scoped mutation and
//! soft-deletion of campaigns behind request/response messages, guarding the
//! campaign status state machine on every write.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`campaign`]: Campaign lifecycle, enum codec and persistence
//! - [`config`]: Database configuration and connection pooling

pub mod campaign;
pub mod config;
