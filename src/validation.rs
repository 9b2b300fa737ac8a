//! Pure checks that run to completion before the storage gateway is ever
//! called. Each validator reports the first failing field only, in declared
//! order; nothing here touches the store.

use crate::error::Error;
use crate::models::apartment::ApartmentFeatures;

const MIN_FIELD_CHARS: usize = 1;
const MAX_FIELD_CHARS: usize = 100;

fn length_ok(value: &str) -> bool {
    (MIN_FIELD_CHARS..=MAX_FIELD_CHARS).contains(&value.chars().count())
}

/// Whole-number check used for the bed/bath/sq_ft/price fields: strip commas
/// and one leading `$`, then require the remainder to round-trip unchanged
/// through non-negative integer parsing. The round-trip rejects floats,
/// signs, text, and leading zeros ("007" re-renders as "7").
pub fn is_whole_number(value: &str) -> bool {
    let stripped = value.strip_prefix('$').unwrap_or(value).replace(',', "");
    match stripped.parse::<i64>() {
        Ok(n) => n >= 0 && n.to_string() == stripped,
        Err(_) => false,
    }
}

/// Identifier parameters must be the exact decimal rendering of a
/// non-negative integer; anything else never reaches the store.
pub fn parse_id(raw: &str) -> Result<i32, Error> {
    match raw.parse::<i32>() {
        Ok(n) if n >= 0 && n.to_string() == raw => Ok(n),
        _ => Err(Error::InvalidIdentifier),
    }
}

/// Building names are 1-100 characters and globally unique (case-sensitive,
/// exact match).
pub fn validate_building_name(candidate: &str, existing: &[String]) -> Result<(), Error> {
    if !length_ok(candidate) {
        return Err(Error::InvalidLength);
    }
    if existing.iter().any(|name| name == candidate) {
        return Err(Error::DuplicateName);
    }
    Ok(())
}

/// Checks the five feature fields in order. The name field is exempt from
/// the numeric check.
pub fn validate_apartment_features(features: &ApartmentFeatures) -> Result<(), Error> {
    for (index, field) in features.fields().iter().enumerate() {
        if !length_ok(field) {
            return Err(Error::InvalidLength);
        }
        if index > 0 && !is_whole_number(field) {
            return Err(Error::NotAWholeNumber);
        }
    }
    Ok(())
}

/// For inserts: feature-shape errors take precedence over the duplicate-name
/// check against the building's existing apartments.
pub fn validate_new_apartment(
    features: &ApartmentFeatures,
    existing_names: &[String],
) -> Result<(), Error> {
    validate_apartment_features(features)?;
    if existing_names.iter().any(|name| name == &features.name) {
        return Err(Error::DuplicateName);
    }
    Ok(())
}
