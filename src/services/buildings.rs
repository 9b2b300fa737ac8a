use std::sync::Arc;

use crate::config::Config;
use crate::db;
use crate::error::Error;
use crate::models::building::Building;
use crate::validation;

pub fn view(config: &Arc<Config>, building_id: i32) -> Result<Building, Error> {
    let conn = &mut db::establish_connection(config)?;
    db::building::get(conn, building_id)
}

pub fn list(config: &Arc<Config>, page: i64) -> Result<Vec<Building>, Error> {
    let conn = &mut db::establish_connection(config)?;
    db::building::list(conn, page)
}

pub fn create(config: &Arc<Config>, name: &str) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    let existing = db::building::names(conn)?;
    validation::validate_building_name(name, &existing)?;
    db::building::create(conn, name)
}

pub fn rename(config: &Arc<Config>, building_id: i32, new_name: &str) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    let existing = db::building::names(conn)?;
    validation::validate_building_name(new_name, &existing)?;
    db::building::rename(conn, building_id, new_name)
}

pub fn remove(config: &Arc<Config>, building_id: i32) -> Result<(), Error> {
    let conn = &mut db::establish_connection(config)?;
    db::building::delete(conn, building_id)
}
