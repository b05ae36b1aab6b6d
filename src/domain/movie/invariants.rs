use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// These are the absolute rules that must hold for a Movie to enter the catalog
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_id(movie.id)?;
    validate_movie_name(&movie.movie_name)?;
    Ok(())
}

/// Identifiers are positive; lookups treat anything below 1 as "no id"
fn validate_id(id: i64) -> DomainResult<()> {
    if id < 1 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Title cannot be empty
fn validate_movie_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identifier is positive (>= 1)
/// 2. Identifier is unique across the loaded set (checked at load time,
///    across records, not per record)
/// 3. Title is never empty
/// 4. Genre is an opaque string; "Crime/Drama" is one value, not two
/// 5. Records never change after load
