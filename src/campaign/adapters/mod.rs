//! Adapter implementations for campaign lifecycle ports.

pub mod memory;
pub mod postgres;
