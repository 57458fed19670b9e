//! Thin bindings from `common` to browser capabilities.

pub mod events;
pub mod platform;
pub mod speech;
pub mod storage;
pub mod toast;
