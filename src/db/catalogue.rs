use crate::db::error::DBError;
use crate::db::models::{AircraftType, Flight, FlightRecord, InsertFlight, TypeID};
use crate::db::schema;
use log::debug;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::PathBuf;

const SELECT_FLIGHT_RECORDS: &str = "
    SELECT flights.destination, aircraft_types.title AS type_title, flights.flight_number
    FROM flights
    INNER JOIN aircraft_types ON aircraft_types.id = flights.type_id";

#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    pub db_path: PathBuf,
}

/// Flight catalogue stored in a single SQLite file.
///
/// No connection is kept between calls: every operation opens the file,
/// does its work and closes the connection again before returning.
#[derive(Debug, Clone)]
pub struct Catalogue {
    db_path: PathBuf,
}

impl Catalogue {
    pub fn new(config: CatalogueConfig) -> Self {
        let CatalogueConfig { db_path } = config;
        Self { db_path }
    }

    async fn connect(&self) -> Result<SqliteConnection, DBError> {
        let options = SqliteConnectOptions::new()
            .filename(&self.db_path)
            .create_if_missing(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&options)
            .await
            .inspect_err(|e| log::error!("failed to open {}: {e}", self.db_path.display()))?;

        debug!("connected to {}", self.db_path.display());
        Ok(conn)
    }

    async fn close(&self, conn: SqliteConnection) -> Result<(), DBError> {
        conn.close().await?;
        debug!("closed {}", self.db_path.display());
        Ok(())
    }

    pub async fn initialise(&self) -> Result<(), DBError> {
        let mut conn = self.connect().await?;
        let result = schema::initialise(&mut conn).await;
        settle(result, self.close(conn).await)
    }

    pub async fn add_flight(&self, flight: InsertFlight) -> Result<Flight, DBError> {
        let mut conn = self.connect().await?;
        let result = insert_flight(&mut conn, flight).await;
        settle(result, self.close(conn).await)
    }

    pub async fn select_all(&self) -> Result<Vec<FlightRecord>, DBError> {
        let mut conn = self.connect().await?;
        let query = format!("{SELECT_FLIGHT_RECORDS} ORDER BY flights.id");
        let result = sqlx::query_as::<_, FlightRecord>(&query)
            .fetch_all(&mut conn)
            .await
            .map_err(DBError::from);

        let flights = settle(result, self.close(conn).await)?;
        debug!("selected {} flights", flights.len());
        Ok(flights)
    }

    pub async fn select_by_type(&self, type_title: &str) -> Result<Vec<FlightRecord>, DBError> {
        let mut conn = self.connect().await?;
        let query =
            format!("{SELECT_FLIGHT_RECORDS} WHERE aircraft_types.title = ? ORDER BY flights.id");
        let result = sqlx::query_as::<_, FlightRecord>(&query)
            .bind(type_title)
            .fetch_all(&mut conn)
            .await
            .map_err(DBError::from);

        let flights = settle(result, self.close(conn).await)?;
        debug!("selected {} flights of type '{type_title}'", flights.len());
        Ok(flights)
    }

    pub async fn aircraft_types(&self) -> Result<Vec<AircraftType>, DBError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, AircraftType>(
            "SELECT id, title FROM aircraft_types ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await
        .map_err(DBError::from);
        settle(result, self.close(conn).await)
    }
}

// the operation's own error takes precedence over a failed close
fn settle<T>(result: Result<T, DBError>, closed: Result<(), DBError>) -> Result<T, DBError> {
    let value = result?;
    closed?;
    Ok(value)
}

async fn insert_flight(conn: &mut SqliteConnection, flight: InsertFlight) -> Result<Flight, DBError> {
    let InsertFlight {
        destination,
        type_title,
        flight_number,
    } = flight;

    let mut tx = conn.begin().await?;

    // titles are not unique in the schema; the first matching row wins
    let existing: Option<TypeID> =
        sqlx::query_scalar("SELECT id FROM aircraft_types WHERE title = ? ORDER BY id LIMIT 1")
            .bind(&type_title)
            .fetch_optional(&mut *tx)
            .await?;

    let type_id = match existing {
        Some(type_id) => {
            debug!("reusing aircraft type id={} title='{type_title}'", type_id.0);
            type_id
        }
        None => {
            let type_id: TypeID =
                sqlx::query_scalar("INSERT INTO aircraft_types (title) VALUES (?) RETURNING id")
                    .bind(&type_title)
                    .fetch_one(&mut *tx)
                    .await?;
            debug!("created aircraft type id={} title='{type_title}'", type_id.0);
            type_id
        }
    };

    let inserted = sqlx::query_as::<_, Flight>(
        "INSERT INTO flights (destination, type_id, flight_number) VALUES (?, ?, ?)
        RETURNING id, destination, type_id, flight_number",
    )
    .bind(destination)
    .bind(type_id)
    .bind(flight_number)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    debug!(
        "inserted flight id={} destination='{}' number={} type_id={}",
        inserted.id.0, inserted.destination, inserted.flight_number, inserted.type_id.0
    );
    Ok(inserted)
}
