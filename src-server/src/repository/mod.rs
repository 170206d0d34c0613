//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod task_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use task_repo::InMemoryTaskRepository;
