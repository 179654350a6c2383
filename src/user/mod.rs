//! User records and the repositories that load them.

pub mod entity;
pub mod memory_repository;
pub mod mysql_repository;
pub mod repository;

pub use entity::User;
pub use memory_repository::InMemoryUserRepository;
pub use mysql_repository::MySqlUserRepository;
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
