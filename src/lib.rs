pub mod config;
pub mod errors;
pub mod export;
pub mod generator;
pub mod scoring;
pub mod ui;
pub mod util;
pub mod vocabulary;
