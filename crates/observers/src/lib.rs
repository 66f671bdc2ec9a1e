//! Reusable observers for Euler integration runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `ivp-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopWhen`] — stops a run once a predicate on the state holds
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: ivp_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_when;

pub use stop_when::StopWhen;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable};
