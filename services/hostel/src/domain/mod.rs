pub mod allocation;
pub mod password;
pub mod repository;
pub mod types;
