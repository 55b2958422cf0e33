mod common;

use std::sync::Arc;

use customer_api::domain::entities::{Customer, NewCustomer};
use customer_api::domain::repositories::CustomerRepository;
use customer_api::infrastructure::persistence::SqliteCustomerRepository;

fn new_customer(firstname: &str, lastname: &str, age: i64) -> NewCustomer {
    NewCustomer {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        age,
    }
}

async fn make_repository() -> SqliteCustomerRepository {
    let pool = common::setup_pool().await;
    SqliteCustomerRepository::new(Arc::new(pool))
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let repository = make_repository().await;

    let first = repository
        .create(new_customer("Ada", "Lovelace", 36))
        .await
        .unwrap();
    let second = repository
        .create(new_customer("Grace", "Hopper", 45))
        .await
        .unwrap();

    assert_eq!(first.firstname, "Ada");
    assert_eq!(first.age, 36);
    assert_ne!(first.id, second.id);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repository = make_repository().await;

    let first = repository
        .create(new_customer("Ada", "Lovelace", 36))
        .await
        .unwrap();
    let second = repository
        .create(new_customer("Grace", "Hopper", 45))
        .await
        .unwrap();

    // Remove the row holding the highest id, then insert again.
    assert!(repository.delete_by_id(second.id).await.unwrap());

    let third = repository
        .create(new_customer("Alan", "Turing", 41))
        .await
        .unwrap();

    assert!(third.id > second.id);
    assert_ne!(third.id, first.id);
}

#[tokio::test]
async fn test_get_by_id_absent_is_none() {
    let repository = make_repository().await;

    assert!(repository.get_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_id_returns_stored_row() {
    let repository = make_repository().await;

    let created = repository
        .create(new_customer("Ada", "Lovelace", 36))
        .await
        .unwrap();

    let fetched = repository.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_save_rewrites_the_row() {
    let repository = make_repository().await;

    let created = repository
        .create(new_customer("Ada", "Lovelace", 36))
        .await
        .unwrap();

    let updated = Customer {
        age: 37,
        ..created.clone()
    };
    repository.save(&updated).await.unwrap();

    let fetched = repository.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.age, 37);
    assert_eq!(fetched.firstname, "Ada");
}

#[tokio::test]
async fn test_delete_by_id_reports_row_presence() {
    let repository = make_repository().await;

    let created = repository
        .create(new_customer("Ada", "Lovelace", 36))
        .await
        .unwrap();

    assert!(repository.delete_by_id(created.id).await.unwrap());
    assert!(!repository.delete_by_id(created.id).await.unwrap());
    assert!(repository.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_all_returns_every_row() {
    let repository = make_repository().await;

    for (firstname, lastname, age) in [
        ("Ada", "Lovelace", 36),
        ("Grace", "Hopper", 45),
        ("Alan", "Turing", 41),
    ] {
        repository
            .create(new_customer(firstname, lastname, age))
            .await
            .unwrap();
    }

    let all = repository.get_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|c| c.firstname == "Grace" && c.age == 45));
}
