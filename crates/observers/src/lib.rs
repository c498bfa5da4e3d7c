//! Reusable observers for zeroin root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — emits a `tracing` event for every solver step
//! - [`ResidualThreshold`] — stops a solver once the residual is small enough
//!
//! [`Observer`]: zeroin_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;
mod threshold;

pub use log::LogObserver;
pub use threshold::ResidualThreshold;
