use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    careerplan_db::health_check(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM goals")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "goals should start empty");
}

/// Re-running migrations on an up-to-date database is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    careerplan_db::run_migrations(&pool).await.unwrap();
    careerplan_db::health_check(&pool).await.unwrap();
}

/// The store snapshot sees the goals table and the newest migration.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_status_after_migrations(pool: PgPool) {
    let status = careerplan_db::store_status(&pool).await.unwrap();
    assert_eq!(status.goal_count, 0);
    assert_eq!(status.schema_version, Some(20260301000002));
}
