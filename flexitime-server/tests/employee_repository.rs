//! SurrealDB employee repository tests
//!
//! Run: cargo test -p flexitime-server --test employee_repository

mod common;

use chrono::{TimeZone, Utc};

use common::{employee_with_ledgers, memory_repository};
use flexitime_server::db::models::{Employee, Flexitime};
use flexitime_server::{Config, DbService, EmployeeRepository, EmployeeStore, RepoError};

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let repo = memory_repository().await;

    let created = repo
        .create(Employee::new("root@localhost", "Ann", "Other"))
        .await
        .unwrap();

    let id = created.id.clone().expect("store assigns an id");
    assert_eq!(id.table(), "employee");
    assert_eq!(created.email, "root@localhost");
    assert_eq!(created.balance, 0.0);
    assert!(created.is_active);

    let found = repo.find_by_id(&id.to_string()).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.lastname, "Other");
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_the_store() {
    let repo = memory_repository().await;
    repo.create(Employee::new("root@localhost", "Ann", "Other"))
        .await
        .unwrap();

    let err = repo
        .create(Employee::new("root@localhost", "Bob", "Else"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Database(_)));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn ledgers_keep_insertion_order() {
    let repo = memory_repository().await;
    let mut employee = Employee::new("order@localhost", "Or", "Der");
    let notes = ["first", "second", "third"];
    for (day, note) in notes.iter().enumerate() {
        employee.accrue(Flexitime::new(
            Utc.with_ymd_and_hms(2016, 1, 10 - day as u32, 8, 0, 0).unwrap(),
            15 * (day as i64 + 1),
            *note,
        ));
    }

    let created = repo.create(employee).await.unwrap();
    let id = created.id.unwrap().to_string();
    let found = repo.find_by_id(&id).await.unwrap().unwrap();

    let stored: Vec<&str> = found
        .flexitime_accrued
        .iter()
        .map(|f| f.note.as_str())
        .collect();
    assert_eq!(stored, notes);
    assert_eq!(found.flexitime_accrued[2].duration, 45);
    assert!(found.flexitime_used.is_empty());
}

#[tokio::test]
async fn flexitime_round_trips_unchanged() {
    let repo = memory_repository().await;
    let employee = employee_with_ledgers();
    let accrued = employee.flexitime_accrued.clone();
    let used = employee.flexitime_used.clone();

    let created = repo.create(employee).await.unwrap();
    let found = repo
        .find_by_id(&created.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.flexitime_accrued, accrued);
    assert_eq!(found.flexitime_used, used);
}

#[tokio::test]
async fn save_persists_changes() {
    let repo = memory_repository().await;
    let mut employee = repo
        .create(Employee::new("adam@localhost", "Adam", "Adamson"))
        .await
        .unwrap();

    employee.lastname = "Adams".into();
    let saved = repo.save(&employee).await.unwrap();
    assert_eq!(saved.lastname, "Adams");

    let found = repo
        .find_by_id(&employee.id.unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.lastname, "Adams");
    assert_eq!(found.firstname, "Adam");
}

#[tokio::test]
async fn save_requires_an_existing_record() {
    let repo = memory_repository().await;

    let unsaved = Employee::new("new@localhost", "New", "Comer");
    assert!(matches!(
        repo.save(&unsaved).await,
        Err(RepoError::Validation(_))
    ));

    let created = repo.create(unsaved).await.unwrap();
    let id = created.id.clone().unwrap().to_string();
    repo.remove(&id).await.unwrap();

    assert!(matches!(
        repo.save(&created).await,
        Err(RepoError::NotFound(_))
    ));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_returns_the_deleted_record_once() {
    let repo = memory_repository().await;
    let created = repo
        .create(Employee::new("gone@localhost", "Gone", "Soon"))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    let removed = repo.remove(&id).await.unwrap().expect("record existed");
    assert_eq!(removed.email, "gone@localhost");

    assert!(repo.remove(&id).await.unwrap().is_none());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_ids_are_validation_errors() {
    let repo = memory_repository().await;

    for id in ["", "garbage", "role:abc"] {
        assert!(matches!(
            repo.find_by_id(id).await,
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(repo.remove(id).await, Err(RepoError::Validation(_))));
    }
}

#[tokio::test]
async fn rocksdb_engine_stores_employees() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        database_path: tmp.path().join("db").to_string_lossy().into_owned(),
        ..Config::for_tests()
    };
    assert!(!config.is_in_memory());

    let db = DbService::open(&config).await.unwrap();
    let repo = EmployeeRepository::new(db.db);

    repo.create(Employee::new("disk@localhost", "Di", "Sk"))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].email, "disk@localhost");
}
