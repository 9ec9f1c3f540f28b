//! # Flight Hours Planner Backend
//!
//! UI-agnostic logic for allocating monthly flight hours to a pilot across a
//! calendar year. The presentation layer (table, sliders, bar chart) applies
//! one edit at a time and re-renders from the derived review this crate
//! produces; nothing here touches a widget, a file, or the network.
//!
//! The backend is synchronous and session-scoped: one allocation plan per
//! session, mutated in place, discarded when the session ends.

pub mod domain;
pub mod io;
