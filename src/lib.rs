pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod runner;
pub mod types;
pub mod version;
