pub mod build;
pub mod root;
pub mod setup;
