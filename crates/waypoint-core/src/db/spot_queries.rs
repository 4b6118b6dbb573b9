//! Spot catalog operations and batch lookup.

use jiff::Timestamp;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use super::utils::{id_column, json_column, to_json};
use crate::{
    error::{DatabaseResultExt, Result},
    models::SpotDetail,
};

const INSERT_SPOT_SQL: &str = "INSERT INTO spots (name, category, address, image_urls, rating, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_SPOT_SQL: &str =
    "SELECT id, name, category, address, image_urls, rating FROM spots WHERE id = ?1";
const SELECT_SPOTS_SQL: &str =
    "SELECT id, name, category, address, image_urls, rating FROM spots ORDER BY id";

impl super::Database {
    fn build_spot_from_row(row: &Row) -> rusqlite::Result<SpotDetail> {
        Ok(SpotDetail {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            address: row.get(3)?,
            image_urls: json_column(row, 4)?,
            rating: row.get(5)?,
        })
    }

    /// Adds a spot to the catalog.
    pub fn create_spot(
        &mut self,
        name: &str,
        category: Option<&str>,
        address: Option<&str>,
        image_urls: Vec<String>,
        rating: Option<f64>,
    ) -> Result<SpotDetail> {
        let images = to_json(&image_urls)?;
        let now = Timestamp::now().to_string();

        self.connection
            .execute(
                INSERT_SPOT_SQL,
                params![name, category, address, &images, rating, &now],
            )
            .db_context("Failed to insert spot")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(SpotDetail {
            id,
            name: name.into(),
            category: category.map(String::from),
            address: address.map(String::from),
            image_urls,
            rating,
        })
    }

    /// Retrieves a spot by its ID.
    pub fn get_spot(&self, id: u64) -> Result<Option<SpotDetail>> {
        self.connection
            .query_row(SELECT_SPOT_SQL, params![id as i64], Self::build_spot_from_row)
            .optional()
            .db_context("Failed to query spot")
    }

    /// Lists every spot in the catalog by ID.
    pub fn list_spots(&self) -> Result<Vec<SpotDetail>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SPOTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::build_spot_from_row)
            .db_context("Failed to query spots")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch spots")?;

        Ok(rows)
    }

    /// Looks up the spots with the given IDs.
    ///
    /// Rows come back in ID order, not in the order of `ids`, and IDs with no
    /// spot are skipped.
    pub fn lookup_spots(&self, ids: &[u64]) -> Result<Vec<SpotDetail>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT id, name, category, address, image_urls, rating FROM spots WHERE id IN ({}) ORDER BY id",
            Self::placeholders(ids.len())
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params_from_iter(ids.iter().map(|id| *id as i64)),
                Self::build_spot_from_row,
            )
            .db_context("Failed to look up spots")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch spots")?;

        Ok(rows)
    }
}
