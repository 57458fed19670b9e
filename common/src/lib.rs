//! Shared domain model and behaviour for the ECC InterMedia Club app.
//!
//! Everything here is plain Rust so it can be unit-tested natively; the
//! `frontend` crate binds it to browser storage, speech and window events.

pub mod app;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod install;
pub mod model;
pub mod speech;
pub mod store;
pub mod typing;
