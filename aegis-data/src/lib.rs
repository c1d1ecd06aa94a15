//! Repository layer for the Aegis prediction market
//!
//! This crate provides the data-access seam between the application and
//! its backend: the [`MarketRepository`] capability trait, the in-memory
//! implementation that stands in for a remote resource API, and the demo
//! seed catalog.

pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::InMemoryRepository;
pub use repository::MarketRepository;
