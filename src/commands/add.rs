use crate::db::Catalogue;
use crate::db::models::InsertFlight;
use crate::utils::errors::InternalError;

pub async fn add(
    catalogue: &Catalogue,
    destination: String,
    type_title: String,
    flight_number: i64,
) -> Result<(), InternalError> {
    let start_time = tokio::time::Instant::now();

    let flight = catalogue
        .add_flight(InsertFlight {
            destination,
            type_title,
            flight_number,
        })
        .await?;

    let duration = start_time.elapsed();
    log::info!(
        "added flight {} to {} in {duration:.2?}",
        flight.flight_number,
        flight.destination
    );

    Ok(())
}
