//! Repository Module
//!
//! Persistence for employee documents. Handlers only see the
//! [`EmployeeStore`] trait; [`EmployeeRepository`] implements it on SurrealDB.

pub mod employee;

pub use employee::EmployeeRepository;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::Employee;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee persistence
///
/// Ids are the store's record id strings (`employee:<key>`). A string that
/// does not parse as an employee record id yields [`RepoError::Validation`].
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every employee, in no particular order
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>>;

    /// Insert a new employee; the store assigns its id
    async fn create(&self, employee: Employee) -> RepoResult<Employee>;

    /// Persist every field of an existing employee
    async fn save(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Atomically find and delete; `None` if nothing was there
    async fn remove(&self, id: &str) -> RepoResult<Option<Employee>>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
