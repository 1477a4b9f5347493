use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let data_type = result
                .unwrap_or_else(|| panic!("Table {table} is missing column {col}"))
                .0;
            assert_eq!(
                data_type, "timestamp with time zone",
                "{table}.{col} should be timestamptz"
            );
        }
    }
}

/// Milestones are stored as an ordered text array, not a delimited string.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_milestones_column_is_text_array(pool: PgPool) {
    let (data_type, udt_name): (String, String) = sqlx::query_as(
        "SELECT data_type::text, udt_name::text
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND table_name = 'goals'
           AND column_name = 'milestones'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(data_type, "ARRAY");
    assert_eq!(udt_name, "_text");
}
