use diesel::debug_query;
use diesel::pg::Pg;
use diesel::prelude::*;
use log::info;

use super::schema::{apartments, buildings};
use crate::error::Error;
use crate::models::building::{Building, BuildingRow, NewBuilding};
use crate::pagination::{clamp_page, offset_for, BUILDINGS_PER_PAGE};

/// Fetches one building and attaches its first page of apartments. Callers
/// wanting a later apartment page go through `apartment::list` directly.
pub fn get(conn: &mut PgConnection, building_id: i32) -> Result<Building, Error> {
    let query = buildings::table
        .filter(buildings::id.eq(building_id))
        .select(BuildingRow::as_select());
    info!("{}", debug_query::<Pg, _>(&query));

    match query.first::<BuildingRow>(conn).optional()? {
        Some(row) => {
            let units = super::apartment::list(conn, building_id, 0)?;
            Ok(row.into_building(units))
        }
        None => Err(Error::NotFound),
    }
}

/// One page of buildings ordered by name ascending. Apartment lists come
/// back empty; they are attached per building when a caller needs them.
pub fn list(conn: &mut PgConnection, page: i64) -> Result<Vec<Building>, Error> {
    let query = buildings::table
        .order(buildings::name.asc())
        .limit(BUILDINGS_PER_PAGE)
        .offset(offset_for(clamp_page(page), BUILDINGS_PER_PAGE))
        .select(BuildingRow::as_select());
    info!("{}", debug_query::<Pg, _>(&query));

    let rows = query.load::<BuildingRow>(conn)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_building(Vec::new()))
        .collect())
}

/// Every building name, for the application-level uniqueness check.
pub fn names(conn: &mut PgConnection) -> Result<Vec<String>, Error> {
    let query = buildings::table.select(buildings::name);
    info!("{}", debug_query::<Pg, _>(&query));

    Ok(query.load(conn)?)
}

pub fn create(conn: &mut PgConnection, name: &str) -> Result<(), Error> {
    let query = diesel::insert_into(buildings::table).values(NewBuilding { name });
    info!("{}", debug_query::<Pg, _>(&query));

    query.execute(conn)?;
    Ok(())
}

/// Silent no-op when no row matches the id.
pub fn rename(conn: &mut PgConnection, building_id: i32, new_name: &str) -> Result<(), Error> {
    let query = diesel::update(buildings::table.filter(buildings::id.eq(building_id)))
        .set(buildings::name.eq(new_name));
    info!("{}", debug_query::<Pg, _>(&query));

    query.execute(conn)?;
    Ok(())
}

/// Cascade delete: the building's apartments go first, then the building
/// row, inside one transaction so neither half is ever visible alone.
pub fn delete(conn: &mut PgConnection, building_id: i32) -> Result<(), Error> {
    conn.transaction::<_, Error, _>(|conn| {
        let unit_query =
            diesel::delete(apartments::table.filter(apartments::building_id.eq(building_id)));
        info!("{}", debug_query::<Pg, _>(&unit_query));
        unit_query.execute(conn)?;

        let building_query =
            diesel::delete(buildings::table.filter(buildings::id.eq(building_id)));
        info!("{}", debug_query::<Pg, _>(&building_query));
        building_query.execute(conn)?;

        Ok(())
    })
}
