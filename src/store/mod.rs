pub mod client;
pub mod document;
pub mod memory;
pub mod models;
pub mod repository;
