use std::sync::Arc;

use crate::config::Config;
use crate::db;
use crate::error::Error;
use crate::models::apartment::{Apartment, ApartmentFeatures};
use crate::validation;

pub fn view(
    config: &Arc<Config>,
    building_id: i32,
    apartment_id: i32,
) -> Result<Apartment, Error> {
    let conn = &mut db::establish_connection(config)?;
    db::apartment::get(conn, building_id, apartment_id)
}

pub fn list(
    config: &Arc<Config>,
    building_id: i32,
    page: i64,
) -> Result<Vec<Apartment>, Error> {
    let conn = &mut db::establish_connection(config)?;
    db::apartment::list(conn, building_id, page)
}

pub fn create(
    config: &Arc<Config>,
    building_id: i32,
    features: &ApartmentFeatures,
) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    // The parent building must exist before anything is inserted under it.
    db::building::get(conn, building_id)?;
    let existing = db::apartment::names_in_building(conn, building_id)?;
    validation::validate_new_apartment(features, &existing)?;
    db::apartment::create(conn, building_id, features)
}

pub fn remove(
    config: &Arc<Config>,
    building_id: i32,
    apartment_id: i32,
) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    db::apartment::delete(conn, building_id, apartment_id)
}

pub fn update(
    config: &Arc<Config>,
    building_id: i32,
    apartment_id: i32,
    features: &ApartmentFeatures,
) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    validation::validate_apartment_features(features)?;
    db::apartment::update_features(conn, building_id, apartment_id, features)
}
