use serial_test::serial;
use user_registry::{
    RegistrationError, add_user, authenticate_user, create_db, get_user, init_with_url, list_users,
    write_user_list,
};

use crate::common::{init_registry, test_db_url, unique_username};

#[tokio::test]
#[serial]
async fn test_create_db_twice_is_harmless() {
    init_registry().await;

    create_db().await.expect("create_db should succeed");
    create_db().await.expect("Repeated create_db should succeed");
}

#[tokio::test]
#[serial]
async fn test_register_then_authenticate() {
    init_registry().await;
    let username = unique_username("flow");

    assert!(
        add_user(&username, "flow@example.com", "password123")
            .await
            .expect("add_user should succeed"),
        "Fresh username should register"
    );

    assert!(
        authenticate_user(&username, "password123")
            .await
            .expect("authenticate_user should succeed"),
        "Exact credentials should authenticate"
    );
    assert!(
        !authenticate_user(&username, "password12")
            .await
            .expect("authenticate_user should succeed"),
        "Wrong password must not authenticate"
    );
    assert!(
        !authenticate_user(&format!("{username}22"), "password123")
            .await
            .expect("authenticate_user should succeed"),
        "Unknown username must not authenticate"
    );
}

#[tokio::test]
#[serial]
async fn test_duplicate_registration_is_rejected() {
    init_registry().await;
    let username = unique_username("dup");

    assert!(
        add_user(&username, "dup@example.com", "password123")
            .await
            .expect("add_user should succeed")
    );
    assert!(
        !add_user(&username, "dup@example.com", "password123")
            .await
            .expect("Duplicate add_user should not error")
    );

    let matching: Vec<_> = list_users()
        .await
        .expect("list_users should succeed")
        .into_iter()
        .filter(|u| u.username == username)
        .collect();
    assert_eq!(matching.len(), 1, "Exactly one record per username");
}

#[tokio::test]
#[serial]
async fn test_listing_renders_added_users_in_order() {
    init_registry().await;
    let first = unique_username("order-a");
    let second = unique_username("order-b");

    add_user(&first, "a@example.com", "pw")
        .await
        .expect("add_user should succeed");
    add_user(&second, "b@example.com", "pw")
        .await
        .expect("add_user should succeed");

    let users = list_users().await.expect("list_users should succeed");
    let mut out: Vec<u8> = Vec::new();
    write_user_list(&users, &mut out).expect("write_user_list should succeed");
    let output = String::from_utf8(out).expect("Output should be UTF-8");

    let first_line = format!("Login: {first}, Email: a@example.com");
    let second_line = format!("Login: {second}, Email: b@example.com");
    let first_pos = output.find(&first_line).expect("First user should be listed");
    let second_pos = output
        .find(&second_line)
        .expect("Second user should be listed");
    assert!(first_pos < second_pos);
}

#[tokio::test]
#[serial]
async fn test_get_user_reflects_registration() {
    init_registry().await;
    let username = unique_username("lookup");

    assert!(
        get_user(&username)
            .await
            .expect("get_user should succeed")
            .is_none()
    );

    add_user(&username, "lookup@example.com", "pw")
        .await
        .expect("add_user should succeed");

    let user = get_user(&username)
        .await
        .expect("get_user should succeed")
        .expect("User should exist after registration");
    assert_eq!(user.email, "lookup@example.com");
    assert!(user.sequence_number.is_some());
}

#[tokio::test]
#[serial]
async fn test_reinit_with_same_url_succeeds() {
    init_registry().await;

    init_with_url(&test_db_url())
        .await
        .expect("Re-initializing with the same url should succeed");
}

#[tokio::test]
#[serial]
async fn test_init_with_different_url_is_rejected() {
    init_registry().await;

    let result = init_with_url("sqlite:/tmp/some-other-registry.db").await;

    match result {
        Err(RegistrationError::Database(msg)) => {
            assert!(msg.contains("already set"), "Unexpected message: {msg}");
        }
        other => panic!("Expected Database error, got {other:?}"),
    }
}
