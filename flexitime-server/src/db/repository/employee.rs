//! Employee Repository

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, EmployeeStore, RepoError, RepoResult};
use crate::db::EMPLOYEE_TABLE;
use crate::db::models::Employee;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse an API id, rejecting ids of other tables
    fn record_id(id: &str) -> RepoResult<RecordId> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if thing.table() != EMPLOYEE_TABLE {
            return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
        }
        Ok(thing)
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee")
            .await?
            .take(0)?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = Self::record_id(id)?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    email = $email,
                    firstname = $firstname,
                    lastname = $lastname,
                    flexitimeAccrued = $flexitime_accrued,
                    flexitimeUsed = $flexitime_used,
                    balance = $balance,
                    isActive = $is_active
                RETURN AFTER"#,
            )
            .bind(("email", employee.email))
            .bind(("firstname", employee.firstname))
            .bind(("lastname", employee.lastname))
            .bind(("flexitime_accrued", employee.flexitime_accrued))
            .bind(("flexitime_used", employee.flexitime_used))
            .bind(("balance", employee.balance))
            .bind(("is_active", employee.is_active))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let thing = employee
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Cannot save an employee without id".into()))?;
        let id = thing.to_string();

        // UPDATE never creates, so a concurrently deleted record comes back empty
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    email = $email,
                    firstname = $firstname,
                    lastname = $lastname,
                    flexitimeAccrued = $flexitime_accrued,
                    flexitimeUsed = $flexitime_used,
                    balance = $balance,
                    isActive = $is_active
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("email", employee.email.clone()))
            .bind(("firstname", employee.firstname.clone()))
            .bind(("lastname", employee.lastname.clone()))
            .bind(("flexitime_accrued", employee.flexitime_accrued.clone()))
            .bind(("flexitime_used", employee.flexitime_used.clone()))
            .bind(("balance", employee.balance))
            .bind(("is_active", employee.is_active))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    async fn remove(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = Self::record_id(id)?;
        let mut result = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", thing))
            .await?;
        let removed: Option<Employee> = result.take(0)?;
        Ok(removed)
    }
}
