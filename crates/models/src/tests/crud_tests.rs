use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::{db, server};

/// Connect and migrate, or skip when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn server_crud_roundtrip() -> Result<(), anyhow::Error> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    // Create
    let input = server::NewServer {
        name: "crud-test-server".into(),
        city: "Toronto".into(),
        is_online: true,
    };
    let created = server::insert(&db, input.clone()).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.city, input.city);
    assert_eq!(created.is_online, input.is_online);

    // Read
    let found = server::find_by_id(&db, created.id).await?.expect("created server");
    assert_eq!(found, created);

    // Filters are case-insensitive substring matches
    let by_city = server::filter_by_city(&db, "toron").await?;
    assert!(by_city.iter().any(|s| s.id == created.id));
    let by_name = server::search_by_name(&db, "CRUD-TEST").await?;
    assert!(by_name.iter().any(|s| s.id == created.id));

    // Replace all mutable fields in place
    let mut updated = created.clone();
    updated.name = "crud-test-renamed".into();
    updated.is_online = false;
    assert!(server::replace(&db, created.id, &updated).await?);
    let after = server::find_by_id(&db, created.id).await?.expect("still present");
    assert_eq!(after.name, "crud-test-renamed");
    assert!(!after.is_online);

    // Identity mismatch is a no-op
    assert!(!server::replace(&db, created.id + 1, &updated).await?);

    // Delete; second delete reports absence
    assert!(server::remove(&db, created.id).await?);
    assert!(!server::remove(&db, created.id).await?);
    assert!(server::find_by_id(&db, created.id).await?.is_none());

    Ok(())
}
