// src/repositories/movie_repository.rs
//
// Movie data source - parses a JSON array of movie objects into domain records

use crate::domain::{validate_movie, DomainError, Movie};
use crate::error::AppResult;
use std::collections::HashSet;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Read-only source of the full movie set, consumed once at startup.
///
/// Repositories never degrade: a bad document is an error, and falling back
/// to an empty catalog is the service's decision.
#[cfg_attr(test, automock)]
pub trait MovieRepository: Send + Sync {
    fn load_all(&self) -> AppResult<Vec<Movie>>;
}

/// Seed dataset compiled into the binary, so the default catalog resolves at
/// startup without any filesystem layout assumptions.
const BUNDLED_MOVIES: &str = include_str!("../../data/movies.json");

/// Serves the bundled seed dataset.
pub struct BundledMovieRepository;

impl MovieRepository for BundledMovieRepository {
    fn load_all(&self) -> AppResult<Vec<Movie>> {
        parse_movies(BUNDLED_MOVIES)
    }
}

/// Loads the same document shape from an arbitrary path, for hosts that ship
/// their own data file.
pub struct JsonFileMovieRepository {
    path: PathBuf,
}

impl JsonFileMovieRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieRepository for JsonFileMovieRepository {
    fn load_all(&self) -> AppResult<Vec<Movie>> {
        let contents = std::fs::read_to_string(&self.path)?;
        parse_movies(&contents)
    }
}

/// Parses a JSON array of movie objects, in document order.
///
/// Any malformed record, invariant violation, or duplicate id abandons the
/// whole load; the catalog is never built from a partially valid document.
fn parse_movies(json: &str) -> AppResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;

    let mut seen_ids = HashSet::with_capacity(movies.len());
    for movie in &movies {
        validate_movie(movie)?;
        if !seen_ids.insert(movie.id) {
            return Err(DomainError::DuplicateId(movie.id).into());
        }
    }

    Ok(movies)
}
