//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate entity constructors and setters into use-case level APIs.
//! - Keep callers decoupled from registry storage details.

pub mod catalog_service;
