use crate::db::Catalogue;
use crate::output::Output;
use crate::output::table::display_flights;
use crate::utils::errors::InternalError;

pub async fn select(
    catalogue: &Catalogue,
    type_title: String,
    output: &Output,
) -> Result<(), InternalError> {
    let flights = catalogue.select_by_type(&type_title).await?;
    display_flights(output, &flights)?;
    Ok(())
}
