use birds_api::datalayer::birds::BirdStore;
use birds_api::errors::errors::ServiceError;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory database, one connection so every query sees the same store
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    BirdStore::init_schema(&pool)
        .await
        .expect("failed to create schema");

    pool
}

#[tokio::test]
async fn test_create_then_get_returns_same_name() {
    let pool = test_pool().await;

    let created = BirdStore::create(&pool, "robin").await.unwrap();
    assert_eq!(created.name, "robin");

    let fetched = BirdStore::get_by_id(&pool, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_are_assigned_and_not_reused() {
    let pool = test_pool().await;

    let first = BirdStore::create(&pool, "wren").await.unwrap();
    let second = BirdStore::create(&pool, "finch").await.unwrap();
    assert_ne!(first.id, second.id);

    // AUTOINCREMENT: a deleted id never comes back
    BirdStore::delete(&pool, second.id).await.unwrap();
    let third = BirdStore::create(&pool, "owl").await.unwrap();
    assert_ne!(third.id, second.id);
}

#[tokio::test]
async fn test_list_returns_all_created() {
    let pool = test_pool().await;

    assert!(BirdStore::list(&pool).await.unwrap().is_empty());

    for name in ["sparrow", "magpie", "heron"] {
        BirdStore::create(&pool, name).await.unwrap();
    }

    let birds = BirdStore::list(&pool).await.unwrap();
    assert_eq!(birds.len(), 3);

    let names: Vec<&str> = birds.iter().map(|b| b.name.as_str()).collect();
    for name in ["sparrow", "magpie", "heron"] {
        assert!(names.contains(&name), "missing {name}");
    }
}

#[tokio::test]
async fn test_get_nonexistent_is_not_found() {
    let pool = test_pool().await;

    let err = BirdStore::get_by_id(&pool, 9999).await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(9999)));
}

#[tokio::test]
async fn test_update_renames_in_place() {
    let pool = test_pool().await;

    let bird = BirdStore::create(&pool, "pigeon").await.unwrap();
    let updated = BirdStore::update_name(&pool, bird.id, "dove").await.unwrap();

    assert_eq!(updated.id, bird.id);
    assert_eq!(updated.name, "dove");

    let fetched = BirdStore::get_by_id(&pool, bird.id).await.unwrap();
    assert_eq!(fetched.name, "dove");
}

#[tokio::test]
async fn test_update_nonexistent_is_not_found() {
    let pool = test_pool().await;

    let err = BirdStore::update_name(&pool, 42, "ghost").await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(42)));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let pool = test_pool().await;

    let bird = BirdStore::create(&pool, "crow").await.unwrap();
    BirdStore::delete(&pool, bird.id).await.unwrap();

    let err = BirdStore::get_by_id(&pool, bird.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(_)));

    let err = BirdStore::delete(&pool, bird.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(_)));
}

#[tokio::test]
async fn test_swap_exchanges_names() {
    let pool = test_pool().await;

    let a = BirdStore::create(&pool, "x").await.unwrap();
    let b = BirdStore::create(&pool, "y").await.unwrap();

    BirdStore::swap_names(&pool, a.id, b.id).await.unwrap();

    assert_eq!(BirdStore::get_by_id(&pool, a.id).await.unwrap().name, "y");
    assert_eq!(BirdStore::get_by_id(&pool, b.id).await.unwrap().name, "x");
}

#[tokio::test]
async fn test_swap_with_missing_id_leaves_existing_bird_untouched() {
    let pool = test_pool().await;

    let a = BirdStore::create(&pool, "x").await.unwrap();

    let err = BirdStore::swap_names(&pool, a.id, 777).await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(777)));

    // transaction dropped without commit, nothing changed
    assert_eq!(BirdStore::get_by_id(&pool, a.id).await.unwrap().name, "x");

    let err = BirdStore::swap_names(&pool, 777, a.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::BirdNotFound(777)));
    assert_eq!(BirdStore::get_by_id(&pool, a.id).await.unwrap().name, "x");
}

/// Documents the known lost-update gap: a writer holding a stale snapshot
/// overwrites a newer name without any conflict detection. If row versioning
/// is ever added this test should start failing.
#[tokio::test]
async fn test_stale_writer_overwrites_newer_name() {
    let pool = test_pool().await;

    let bird = BirdStore::create(&pool, "x").await.unwrap();
    let snapshot = BirdStore::get_by_id(&pool, bird.id).await.unwrap();

    // another writer renames the bird after our snapshot
    BirdStore::update_name(&pool, bird.id, "fresh").await.unwrap();

    // writing based on the stale snapshot still succeeds
    let stale_name = format!("{}-edited", snapshot.name);
    BirdStore::update_name(&pool, bird.id, &stale_name)
        .await
        .unwrap();

    // the intermediate rename is silently lost - last commit wins
    let final_bird = BirdStore::get_by_id(&pool, bird.id).await.unwrap();
    assert_eq!(final_bird.name, "x-edited");
}
