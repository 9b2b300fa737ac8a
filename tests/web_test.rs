#[cfg(test)]
mod error_status_mapping {
    use axum::http::StatusCode;
    use rental_manager::error::Error;
    use rental_manager::web::status_for;

    #[test]
    fn absent_records_read_as_not_found() {
        assert_eq!(status_for(&Error::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&Error::InvalidIdentifier), StatusCode::NOT_FOUND);
    }

    #[test]
    fn recoverable_validation_failures_carry_a_message_at_422() {
        for err in [
            Error::InvalidLength,
            Error::NotAWholeNumber,
            Error::DuplicateName,
            Error::InvalidPage,
        ] {
            assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn store_failures_stay_opaque_server_errors() {
        let err = Error::StorageFailure(diesel::result::Error::NotFound);
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
