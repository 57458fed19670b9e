//! One rendering function per view.

pub mod admin;
pub mod detail;
pub mod home;
pub mod login;
pub mod posts;
