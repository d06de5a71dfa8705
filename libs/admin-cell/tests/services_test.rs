use std::sync::Arc;

use assert_matches::assert_matches;
use mockall::predicate::eq;

use admin_cell::{Admin, AdminService, UpdateAdminRequest};
use shared_config::KeyStrategy;
use shared_database::{Database, MockRepository};
use shared_models::{EntityId, RepositoryError, Stored, UpdateUserFields};

fn john() -> Admin {
    Admin::new("John", "Doe", "john@x.com", "123", "pw")
}

#[tokio::test]
async fn test_create_admin_returns_input_with_generated_id() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Sequential));

    let stored = service.create_admin(john()).await.unwrap();

    assert_eq!(stored.record, john());
    assert!(!stored.id.is_empty());
    assert_ne!(stored.id.as_i64(), Some(0));
    assert_eq!(stored.record.user.description, None);
}

#[tokio::test]
async fn test_create_admin_with_document_style_keys() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Generated));

    let stored = service.create_admin(john()).await.unwrap();

    assert_eq!(stored.record, john());
    assert!(stored.id.as_i64().is_none());
}

#[tokio::test]
async fn test_create_admin_is_pure_delegation() {
    let mut repository = MockRepository::<Admin>::new();
    repository
        .expect_create()
        .with(eq(john()))
        .times(1)
        .returning(|admin| Ok(Stored::new(EntityId::from(11), admin)));
    // No existence check before the insert.
    repository.expect_find_by_id().never();
    repository.expect_find_all().never();

    let service = AdminService::with_repository(Arc::new(repository));
    let stored = service.create_admin(john()).await.unwrap();

    assert_eq!(stored.id.as_str(), "11");
}

#[tokio::test]
async fn test_duplicate_email_rejection_comes_from_the_store() {
    let mut repository = MockRepository::<Admin>::new();
    let mut calls = 0;
    repository.expect_create().times(2).returning(move |admin| {
        calls += 1;
        if calls == 1 {
            Ok(Stored::new(EntityId::from(1), admin))
        } else {
            Err(RepositoryError::Constraint("admin_email_key".to_string()))
        }
    });

    let service = AdminService::with_repository(Arc::new(repository));

    service.create_admin(john()).await.unwrap();
    let second = service.create_admin(Admin::new("Jane", "Doe", "john@x.com", "456", "pw")).await;

    assert_matches!(second, Err(RepositoryError::Constraint(msg)) if msg == "admin_email_key");
}

#[tokio::test]
async fn test_duplicate_email_rejected_by_memory_store() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Sequential));

    service.create_admin(john()).await.unwrap();
    let second = service.create_admin(Admin::new("Jane", "Doe", "john@x.com", "456", "pw")).await;

    assert_matches!(second, Err(RepositoryError::Constraint(_)));
    assert_eq!(service.list_admins().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_after_create_is_deep_equal() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Sequential));

    let created = service.create_admin(john()).await.unwrap();
    let found = service.get_admin(&created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_delete_then_find_is_not_found() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Generated));

    let created = service.create_admin(john()).await.unwrap();

    assert!(service.delete_admin(&created.id).await.unwrap());
    assert!(service.get_admin(&created.id).await.unwrap().is_none());
    assert!(!service.delete_admin(&created.id).await.unwrap());
}

#[tokio::test]
async fn test_patch_changes_only_given_fields() {
    let service = AdminService::new(&Database::memory(KeyStrategy::Sequential));
    let created = service.create_admin(john()).await.unwrap();

    let changes = UpdateAdminRequest {
        user: UpdateUserFields {
            phone: Some("999".to_string()),
            ..Default::default()
        },
    };
    service.patch_admin(&created.id, changes).await.unwrap().unwrap();

    let found = service.get_admin(&created.id).await.unwrap().unwrap();
    let mut expected = john();
    expected.user.phone = "999".to_string();

    assert_eq!(found.id, created.id);
    assert_eq!(found.record, expected);
}

#[tokio::test]
async fn test_patch_unknown_admin_skips_update() {
    let mut repository = MockRepository::<Admin>::new();
    repository.expect_find_by_id().times(1).returning(|_| Ok(None));
    repository.expect_update().never();

    let service = AdminService::with_repository(Arc::new(repository));
    let result = service
        .patch_admin(&EntityId::from("missing"), UpdateAdminRequest::default())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_backend_failure_is_surfaced_unchanged() {
    let mut repository = MockRepository::<Admin>::new();
    repository
        .expect_find_all()
        .returning(|| Err(RepositoryError::Backend("connection refused".to_string())));

    let service = AdminService::with_repository(Arc::new(repository));

    assert_eq!(
        service.list_admins().await,
        Err(RepositoryError::Backend("connection refused".to_string()))
    );
}
