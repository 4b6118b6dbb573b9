//! Spot catalog operations for the Planner.

use super::Planner;
use crate::{
    display::Spots,
    error::Result,
    models::SpotDetail,
    params::{CreateSpot, Id},
};

impl Planner {
    /// Adds a spot to the catalog.
    pub async fn create_spot(&self, params: &CreateSpot) -> Result<SpotDetail> {
        params.validate()?;

        let name = params.name.trim().to_string();
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);
        let address = params.address.clone();
        let image_urls = params.image_urls.clone();
        let rating = params.rating;

        self.with_database(move |db| {
            db.create_spot(
                &name,
                category.as_deref(),
                address.as_deref(),
                image_urls,
                rating,
            )
        })
        .await
    }

    /// Retrieves a spot by its ID.
    pub async fn get_spot(&self, params: &Id) -> Result<Option<SpotDetail>> {
        let spot_id = params.id;
        self.with_database(move |db| db.get_spot(spot_id)).await
    }

    /// Lists every spot in the catalog.
    pub async fn list_spots(&self) -> Result<Spots> {
        let spots = self.with_database(|db| db.list_spots()).await?;
        Ok(Spots(spots))
    }
}
