pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod ids;
pub mod item;
pub mod messages;
pub mod render;
pub mod storage;
pub mod utils;
