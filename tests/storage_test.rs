//! Gateway tests against a live Postgres. They run inside a test
//! transaction so nothing they create survives, and they are ignored by
//! default; run them with `cargo test -- --ignored` and a DATABASE_URL
//! pointing at a database with the buildings/apartments tables.

#[cfg(test)]
mod storage_gateway {
    use diesel::prelude::*;
    use rental_manager::db::schema::buildings;
    use rental_manager::db::{apartment, building};
    use rental_manager::error::Error;
    use rental_manager::models::apartment::ApartmentFeatures;
    use rental_manager::models::building::BuildingRow;
    use rental_manager::validation::validate_building_name;

    fn connect() -> PgConnection {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let mut conn = PgConnection::establish(&url).expect("failed to connect");
        conn.begin_test_transaction()
            .expect("failed to open test transaction");
        conn
    }

    fn features(name: &str) -> ApartmentFeatures {
        ApartmentFeatures {
            name: name.to_string(),
            bed: "2".to_string(),
            bath: "1".to_string(),
            sq_ft: "750".to_string(),
            price: "$1,200".to_string(),
        }
    }

    fn building_id_by_name(conn: &mut PgConnection, name: &str) -> i32 {
        buildings::table
            .filter(buildings::name.eq(name))
            .select(BuildingRow::as_select())
            .first::<BuildingRow>(conn)
            .expect("building should exist")
            .id
    }

    #[test]
    #[ignore]
    fn listing_is_ordered_by_name_ascending() {
        let conn = &mut connect();
        for name in ["Cedar Lofts", "Aspen Heights", "Birch Tower"] {
            building::create(conn, name).unwrap();
        }

        let page = building::list(conn, 0).unwrap();
        let names: Vec<&str> = page.iter().map(|b| b.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(page.len() <= 5);
        assert!(page.iter().all(|b| b.apartments.is_empty()));
    }

    #[test]
    #[ignore]
    fn pages_do_not_overlap_and_leave_no_gap() {
        let conn = &mut connect();
        for i in 0..7 {
            building::create(conn, &format!("Paging Test {i}")).unwrap();
        }

        let first = building::list(conn, 0).unwrap();
        let second = building::list(conn, 1).unwrap();
        assert_eq!(first.len(), 5);
        assert!(!second.is_empty());
        assert!(first
            .iter()
            .all(|b| second.iter().all(|other| other.id != b.id)));

        // No gap: the last name of page 0 sorts before the first of page 1.
        assert!(first.last().unwrap().name <= second.first().unwrap().name);
    }

    #[test]
    #[ignore]
    fn negative_page_is_clamped_to_page_zero() {
        let conn = &mut connect();
        building::create(conn, "Clamp Test").unwrap();

        let clamped = building::list(conn, -5).unwrap();
        let zero = building::list(conn, 0).unwrap();
        assert_eq!(clamped, zero);
    }

    #[test]
    #[ignore]
    fn get_attaches_first_page_of_apartments() {
        let conn = &mut connect();
        building::create(conn, "Attach Test").unwrap();
        let id = building_id_by_name(conn, "Attach Test");
        for i in 0..6 {
            apartment::create(conn, id, &features(&format!("Unit {i}"))).unwrap();
        }

        let found = building::get(conn, id).unwrap();
        assert_eq!(found.apartments.len(), 5);
        let names: Vec<&str> = found.apartments.iter().map(|a| a.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    #[ignore]
    fn get_unknown_building_is_not_found() {
        let conn = &mut connect();
        assert!(matches!(
            building::get(conn, i32::MAX),
            Err(Error::NotFound)
        ));
    }

    #[test]
    #[ignore]
    fn rename_of_absent_building_is_a_noop() {
        let conn = &mut connect();
        assert!(building::rename(conn, i32::MAX, "Ghost").is_ok());
    }

    #[test]
    #[ignore]
    fn deleting_a_building_cascades_to_its_apartments() {
        let conn = &mut connect();
        building::create(conn, "Cascade Test").unwrap();
        let id = building_id_by_name(conn, "Cascade Test");
        apartment::create(conn, id, &features("Unit A")).unwrap();
        apartment::create(conn, id, &features("Unit B")).unwrap();
        let unit_ids: Vec<i32> = apartment::list(conn, id, 0)
            .unwrap()
            .iter()
            .map(|a| a.id)
            .collect();

        building::delete(conn, id).unwrap();

        assert!(matches!(building::get(conn, id), Err(Error::NotFound)));
        for unit_id in unit_ids {
            assert!(matches!(
                apartment::get(conn, id, unit_id),
                Err(Error::NotFound)
            ));
        }
    }

    #[test]
    #[ignore]
    fn deleting_an_apartment_twice_is_safe() {
        let conn = &mut connect();
        building::create(conn, "Idempotence Test").unwrap();
        let id = building_id_by_name(conn, "Idempotence Test");
        apartment::create(conn, id, &features("Unit A")).unwrap();
        let unit = apartment::list(conn, id, 0).unwrap().remove(0);

        apartment::delete(conn, id, unit.id).unwrap();
        apartment::delete(conn, id, unit.id).unwrap();
        assert!(matches!(
            apartment::get(conn, id, unit.id),
            Err(Error::NotFound)
        ));
    }

    #[test]
    #[ignore]
    fn update_replaces_all_five_feature_columns() {
        let conn = &mut connect();
        building::create(conn, "Update Test").unwrap();
        let id = building_id_by_name(conn, "Update Test");
        apartment::create(conn, id, &features("Unit A")).unwrap();
        let unit = apartment::list(conn, id, 0).unwrap().remove(0);

        let replacement = ApartmentFeatures {
            name: "Unit A+".to_string(),
            bed: "3".to_string(),
            bath: "2".to_string(),
            sq_ft: "900".to_string(),
            price: "1500".to_string(),
        };
        apartment::update_features(conn, id, unit.id, &replacement).unwrap();

        let updated = apartment::get(conn, id, unit.id).unwrap();
        assert_eq!(updated.name, "Unit A+");
        assert_eq!(updated.bed, "3");
        assert_eq!(updated.bath, "2");
        assert_eq!(updated.sq_ft, "900");
        assert_eq!(updated.price, "1500");
    }

    #[test]
    #[ignore]
    fn duplicate_building_name_is_caught_before_any_insert() {
        let conn = &mut connect();
        building::create(conn, "Uniqueness Test").unwrap();

        let existing = building::names(conn).unwrap();
        assert!(matches!(
            validate_building_name("Uniqueness Test", &existing),
            Err(Error::DuplicateName)
        ));
    }
}
