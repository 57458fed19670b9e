pub mod install_prompt;
pub mod school_updates;
