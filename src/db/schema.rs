diesel::table! {
    apartments (id) {
        id -> Int4,
        name -> Text,
        bed -> Text,
        bath -> Text,
        sq_ft -> Text,
        price -> Text,
        building_id -> Int4,
    }
}

diesel::table! {
    buildings (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::joinable!(apartments -> buildings (building_id));

diesel::allow_tables_to_appear_in_same_query!(apartments, buildings,);
