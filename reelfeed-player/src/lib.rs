//! Headless host for the reelfeed scheduler.
//!
//! Lays out a catalog as a scrollable page of category rows, exposes it to
//! the scheduler through [`surface::SimulatedSurface`] and replays scroll
//! gestures from a [`script::ScrollScript`] through the async feed driver.

pub mod app;
pub mod catalog;
pub mod layout;
pub mod script;
pub mod surface;
