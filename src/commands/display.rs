use crate::db::Catalogue;
use crate::output::Output;
use crate::output::table::display_flights;
use crate::utils::errors::InternalError;

pub async fn display(catalogue: &Catalogue, output: &Output) -> Result<(), InternalError> {
    let flights = catalogue.select_all().await?;
    display_flights(output, &flights)?;
    Ok(())
}
