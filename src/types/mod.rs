pub mod config;
pub mod report;
pub mod repository;
pub mod scoring;
