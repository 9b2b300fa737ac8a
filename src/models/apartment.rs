use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One apartment row. The bed/bath/sq_ft/price columns are stored as the
/// text the user typed; validation guarantees they read as whole numbers but
/// the stored value is not normalized.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = crate::db::schema::apartments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Apartment {
    pub id: i32,
    pub name: String,
    pub bed: String,
    pub bath: String,
    pub sq_ft: String,
    pub price: String,
    pub building_id: i32,
}

/// The five describing fields of an apartment, in the order they are
/// validated: name first, then the four numeric-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApartmentFeatures {
    pub name: String,
    pub bed: String,
    pub bath: String,
    pub sq_ft: String,
    pub price: String,
}

impl ApartmentFeatures {
    pub fn fields(&self) -> [&str; 5] {
        [&self.name, &self.bed, &self.bath, &self.sq_ft, &self.price]
    }

    /// Request fields arrive untrimmed; the boundary trims once, before
    /// validation ever sees them.
    pub fn trimmed(self) -> Self {
        ApartmentFeatures {
            name: self.name.trim().to_string(),
            bed: self.bed.trim().to_string(),
            bath: self.bath.trim().to_string(),
            sq_ft: self.sq_ft.trim().to_string(),
            price: self.price.trim().to_string(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::apartments)]
pub struct NewApartment<'a> {
    pub name: &'a str,
    pub bed: &'a str,
    pub bath: &'a str,
    pub sq_ft: &'a str,
    pub price: &'a str,
    pub building_id: i32,
}

impl<'a> NewApartment<'a> {
    pub fn from_features(building_id: i32, features: &'a ApartmentFeatures) -> Self {
        NewApartment {
            name: &features.name,
            bed: &features.bed,
            bath: &features.bath,
            sq_ft: &features.sq_ft,
            price: &features.price,
            building_id,
        }
    }
}
