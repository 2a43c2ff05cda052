pub mod config;
pub mod functions;
pub mod repositories;
pub mod storage;
