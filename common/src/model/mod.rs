pub mod content;
pub mod credentials;
pub mod view;
