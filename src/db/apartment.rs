use diesel::debug_query;
use diesel::pg::Pg;
use diesel::prelude::*;
use log::info;

use super::schema::apartments;
use crate::error::Error;
use crate::models::apartment::{Apartment, ApartmentFeatures, NewApartment};
use crate::pagination::{clamp_page, offset_for, APARTMENTS_PER_PAGE};

pub fn get(
    conn: &mut PgConnection,
    building_id: i32,
    apartment_id: i32,
) -> Result<Apartment, Error> {
    let query = apartments::table
        .filter(apartments::id.eq(apartment_id))
        .filter(apartments::building_id.eq(building_id))
        .select(Apartment::as_select());
    info!("{}", debug_query::<Pg, _>(&query));

    query.first::<Apartment>(conn).optional()?.ok_or(Error::NotFound)
}

/// One page of a building's apartments ordered by name ascending.
pub fn list(
    conn: &mut PgConnection,
    building_id: i32,
    page: i64,
) -> Result<Vec<Apartment>, Error> {
    let query = apartments::table
        .filter(apartments::building_id.eq(building_id))
        .order(apartments::name.asc())
        .limit(APARTMENTS_PER_PAGE)
        .offset(offset_for(clamp_page(page), APARTMENTS_PER_PAGE))
        .select(Apartment::as_select());
    info!("{}", debug_query::<Pg, _>(&query));

    Ok(query.load::<Apartment>(conn)?)
}

/// Names of every apartment in the building, for the per-building
/// uniqueness check.
pub fn names_in_building(
    conn: &mut PgConnection,
    building_id: i32,
) -> Result<Vec<String>, Error> {
    let query = apartments::table
        .filter(apartments::building_id.eq(building_id))
        .select(apartments::name);
    info!("{}", debug_query::<Pg, _>(&query));

    Ok(query.load(conn)?)
}

pub fn create(
    conn: &mut PgConnection,
    building_id: i32,
    features: &ApartmentFeatures,
) -> Result<(), Error> {
    let query = diesel::insert_into(apartments::table)
        .values(NewApartment::from_features(building_id, features));
    info!("{}", debug_query::<Pg, _>(&query));

    query.execute(conn)?;
    Ok(())
}

/// Deleting an already-deleted apartment is a no-op, not an error.
pub fn delete(
    conn: &mut PgConnection,
    building_id: i32,
    apartment_id: i32,
) -> Result<(), Error> {
    let query = diesel::delete(
        apartments::table
            .filter(apartments::building_id.eq(building_id))
            .filter(apartments::id.eq(apartment_id)),
    );
    info!("{}", debug_query::<Pg, _>(&query));

    query.execute(conn)?;
    Ok(())
}

/// Full five-column replace; silent no-op when no row matches.
pub fn update_features(
    conn: &mut PgConnection,
    building_id: i32,
    apartment_id: i32,
    features: &ApartmentFeatures,
) -> Result<(), Error> {
    let query = diesel::update(
        apartments::table
            .filter(apartments::building_id.eq(building_id))
            .filter(apartments::id.eq(apartment_id)),
    )
    .set((
        apartments::name.eq(&features.name),
        apartments::bed.eq(&features.bed),
        apartments::bath.eq(&features.bath),
        apartments::sq_ft.eq(&features.sq_ft),
        apartments::price.eq(&features.price),
    ));
    info!("{}", debug_query::<Pg, _>(&query));

    query.execute(conn)?;
    Ok(())
}
