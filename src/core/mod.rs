pub mod archive;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod log;
pub mod session;
