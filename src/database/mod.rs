pub mod memory;
pub mod opening_repository;
pub mod pool;
