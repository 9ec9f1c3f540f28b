//! # Domain Module
//!
//! Contains all business logic for the flight hours planner.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how yearly flight-hour allocations are modeled and validated.
//! It operates independently of any specific UI framework.
//!
//! ## Module Organization
//!
//! - **models**: The calendar months, plan limits, month records, and the
//!   allocation plan with its derived review
//! - **planner_service**: Session-level orchestration of plan edits
//! - **commands**: Internal command/result types used by the service layer
//!
//! ## Business Rules
//!
//! - Every plan holds exactly twelve month records, in calendar order
//! - High-demand months (January, July, August, December) default to the
//!   per-month maximum; the rest default to the minimum
//! - User-supplied hours are stored as given, never clamped; violations are
//!   reported through review warnings instead of rejected
//! - The annual total is always re-derived from the current records
//! - Exactly one of the three annual-total warnings fires per review

pub mod commands;
pub mod models;
pub mod planner_service;

pub use commands::*;
pub use planner_service::*;
