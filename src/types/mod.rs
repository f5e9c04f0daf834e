pub mod config;
pub mod input;
pub mod policy;
pub mod result;
