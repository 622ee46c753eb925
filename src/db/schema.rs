use crate::db::error::DBError;
use log::debug;
use sqlx::{Connection, SqliteConnection};

// AUTOINCREMENT keeps one counter per table in sqlite_sequence, so ids are never reused.
const STATEMENTS: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS aircraft_types (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS flights (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        destination TEXT NOT NULL,
        type_id INTEGER NOT NULL,
        flight_number INTEGER NOT NULL,
        FOREIGN KEY (type_id) REFERENCES aircraft_types (id)
    )",
];

pub(crate) async fn initialise(conn: &mut SqliteConnection) -> Result<(), DBError> {
    let mut tx = conn.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    debug!("schema initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::initialise;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{Connection, SqliteConnection};

    async fn open(path: &std::path::Path) -> SqliteConnection {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        SqliteConnection::connect_with(&options)
            .await
            .expect("failed to open database")
    }

    async fn schema_objects(conn: &mut SqliteConnection) -> Vec<(String, String)> {
        sqlx::query_as("SELECT type, name FROM sqlite_master ORDER BY type, name")
            .fetch_all(&mut *conn)
            .await
            .expect("failed to read sqlite_master")
    }

    #[tokio::test]
    async fn test_initialise_creates_tables() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut conn = open(&dir.path().join("planes.db")).await;

        initialise(&mut conn).await.expect("initialise failed");

        let names: Vec<String> = schema_objects(&mut conn)
            .await
            .into_iter()
            .filter(|(kind, _)| kind == "table")
            .map(|(_, name)| name)
            .collect();
        assert!(names.contains(&"aircraft_types".to_string()));
        assert!(names.contains(&"flights".to_string()));
    }

    #[tokio::test]
    async fn test_initialise_is_idempotent() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("planes.db");

        let mut conn = open(&path).await;
        initialise(&mut conn).await.expect("first initialise failed");
        let once = schema_objects(&mut conn).await;
        conn.close().await.expect("close failed");

        for _ in 0..3 {
            let mut conn = open(&path).await;
            initialise(&mut conn).await.expect("repeated initialise failed");
            conn.close().await.expect("close failed");
        }

        let mut conn = open(&path).await;
        assert_eq!(schema_objects(&mut conn).await, once);
        let (types, flights): (i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM aircraft_types), (SELECT COUNT(*) FROM flights)",
        )
        .fetch_one(&mut conn)
        .await
        .expect("count failed");
        assert_eq!((types, flights), (0, 0));
    }
}
