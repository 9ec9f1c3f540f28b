//! # IO Module
//!
//! The interface layer between the domain and the presentation layer. It
//! holds the mappers that translate domain models into the `shared` DTOs a
//! UI renders, so domain types never leak widget-facing concerns.

pub mod mappers;
