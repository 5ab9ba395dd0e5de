pub mod codes;
pub mod completions;
pub mod config;
pub mod play;
