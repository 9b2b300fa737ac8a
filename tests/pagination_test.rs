#[cfg(test)]
mod page_parameter_handling {
    use rental_manager::error::Error;
    use rental_manager::pagination::{
        clamp_page, offset_for, parse_page, resolve_page, APARTMENTS_PER_PAGE,
        BUILDINGS_PER_PAGE,
    };

    #[test]
    fn missing_parameter_means_page_zero() {
        assert_eq!(parse_page(None).unwrap(), 0);
        assert_eq!(resolve_page(None, BUILDINGS_PER_PAGE).unwrap(), 0);
    }

    #[test]
    fn page_three_of_five_is_offset_fifteen() {
        assert_eq!(resolve_page(Some("3"), 5).unwrap(), 15);
    }

    #[test]
    fn negative_page_is_invalid_at_the_boundary() {
        assert!(matches!(parse_page(Some("-1")), Err(Error::InvalidPage)));
    }

    #[test]
    fn non_numeric_page_is_invalid() {
        assert!(matches!(parse_page(Some("abc")), Err(Error::InvalidPage)));
        assert!(matches!(parse_page(Some("1.5")), Err(Error::InvalidPage)));
    }

    #[test]
    fn padded_page_is_invalid() {
        assert!(matches!(parse_page(Some("07")), Err(Error::InvalidPage)));
        assert!(matches!(parse_page(Some("+2")), Err(Error::InvalidPage)));
    }

    #[test]
    fn storage_clamp_treats_anything_below_one_as_zero() {
        assert_eq!(clamp_page(-3), 0);
        assert_eq!(clamp_page(0), 0);
        assert_eq!(clamp_page(1), 1);
        assert_eq!(clamp_page(7), 7);
    }

    #[test]
    fn maximum_page_value_saturates_instead_of_overflowing() {
        let raw = i64::MAX.to_string();
        let page = parse_page(Some(&raw)).unwrap();
        assert_eq!(page, i64::MAX);
        assert_eq!(offset_for(page, BUILDINGS_PER_PAGE), i64::MAX);
        assert_eq!(resolve_page(Some(&raw), BUILDINGS_PER_PAGE).unwrap(), i64::MAX);
    }

    #[test]
    fn offset_never_goes_negative() {
        assert_eq!(offset_for(-2, BUILDINGS_PER_PAGE), 0);
        assert_eq!(offset_for(0, APARTMENTS_PER_PAGE), 0);
        assert_eq!(offset_for(2, APARTMENTS_PER_PAGE), 10);
    }
}
