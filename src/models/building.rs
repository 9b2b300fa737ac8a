use diesel::prelude::*;
use serde::Serialize;

use crate::models::apartment::Apartment;

#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = crate::db::schema::buildings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BuildingRow {
    pub id: i32,
    pub name: String,
}

/// A building with its apartments lazily attached: listing calls leave the
/// vector empty, a single-building fetch carries the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub apartments: Vec<Apartment>,
}

impl BuildingRow {
    pub fn into_building(self, apartments: Vec<Apartment>) -> Building {
        Building {
            id: self.id,
            name: self.name,
            apartments,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::buildings)]
pub struct NewBuilding<'a> {
    pub name: &'a str,
}
