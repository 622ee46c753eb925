use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct TypeID(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct FlightID(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AircraftType {
    pub id: TypeID,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Flight {
    pub id: FlightID,
    pub destination: String,
    pub type_id: TypeID,
    pub flight_number: i64,
}

#[derive(Debug, Clone)]
pub struct InsertFlight {
    pub destination: String,
    pub type_title: String,
    pub flight_number: i64,
}

/// A flight joined with the title of its aircraft type.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FlightRecord {
    pub destination: String,
    pub type_title: String,
    pub flight_number: i64,
}
