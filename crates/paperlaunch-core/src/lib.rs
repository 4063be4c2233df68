pub mod config;
pub mod logging;

pub mod filename;
pub mod generator;
pub mod launcher;
pub mod opener;
pub mod prompt;
