// src/services/movie_service.rs
//
// The catalog: primary sequence, id index, genre facets, search

use crate::domain::Movie;
use crate::repositories::{BundledMovieRepository, MovieRepository};
use std::collections::{BTreeSet, HashMap};

/// Optional, independently-toggleable search criteria.
///
/// `name` and `genre` are case-insensitive substring patterns (surrounding
/// whitespace ignored); `id` is an exact match. A criterion that is `None`,
/// blank, or a non-positive id is disabled and matches every movie.
#[derive(Debug, Clone, Default)]
pub struct SearchMoviesRequest {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub genre: Option<String>,
}

impl SearchMoviesRequest {
    /// True when at least one criterion is active, so callers can tell a
    /// search apart from a plain listing.
    pub fn has_criteria(&self) -> bool {
        active_pattern(self.name.as_deref()).is_some()
            || active_id(self.id).is_some()
            || active_pattern(self.genre.as_deref()).is_some()
    }
}

/// In-memory movie catalog.
///
/// Built exactly once from a [`MovieRepository`] and immutable afterwards:
/// the primary sequence (load order), the id index, and the genre facet list
/// are all fixed at construction, so every query is a lock-free read and the
/// service can be shared across threads behind an `Arc`.
pub struct MovieService {
    /// Primary sequence, in source document order
    movies: Vec<Movie>,
    /// id -> position in the primary sequence
    by_id: HashMap<i64, usize>,
    /// Distinct genre field values, lexicographically sorted
    genres: Vec<String>,
}

impl MovieService {
    /// Builds the catalog from the given source.
    ///
    /// A failed load never fails construction: the error is logged and the
    /// service comes up with an empty catalog, so the host still starts.
    pub fn new(repository: &dyn MovieRepository) -> Self {
        let movies = match repository.load_all() {
            Ok(movies) => {
                log::info!("Loaded {} movies into the catalog", movies.len());
                movies
            }
            Err(err) => {
                log::error!("Failed to load movies from JSON: {}", err);
                Vec::new()
            }
        };
        Self::from_movies(movies)
    }

    /// Catalog backed by the bundled seed dataset.
    pub fn bundled() -> Self {
        Self::new(&BundledMovieRepository)
    }

    fn from_movies(movies: Vec<Movie>) -> Self {
        let by_id = movies
            .iter()
            .enumerate()
            .map(|(position, movie)| (movie.id, position))
            .collect();

        // Distinct undecomposed genre strings; BTreeSet gives the code-point
        // ordering the facet list is contracted to.
        let genres: Vec<String> = movies
            .iter()
            .map(|movie| movie.genre.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        Self {
            movies,
            by_id,
            genres,
        }
    }

    /// Full primary sequence, in load order. Read-only view.
    pub fn get_all_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Looks up a movie by identifier.
    ///
    /// Absent, non-positive, and unknown ids all resolve to `None`; a miss is
    /// a normal outcome, never an error.
    pub fn get_movie_by_id(&self, id: Option<i64>) -> Option<&Movie> {
        let id = active_id(id)?;
        let movie = self.by_id.get(&id).map(|&position| &self.movies[position]);
        if movie.is_none() {
            log::warn!("Movie with id {} not found", id);
        }
        movie
    }

    /// Returns every movie satisfying ALL active criteria, in load order.
    ///
    /// Disabled criteria match everything, so an all-disabled request returns
    /// the full catalog. An empty result is a normal outcome.
    pub fn search_movies(&self, request: &SearchMoviesRequest) -> Vec<&Movie> {
        let name = active_pattern(request.name.as_deref());
        let id = active_id(request.id);
        let genre = active_pattern(request.genre.as_deref());

        log::info!(
            "Searching movies with name: {:?}, id: {:?}, genre: {:?}",
            request.name,
            request.id,
            request.genre
        );

        let results: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|movie| matches_pattern(&movie.movie_name, name.as_deref()))
            .filter(|movie| id.map_or(true, |id| movie.id == id))
            .filter(|movie| matches_pattern(&movie.genre, genre.as_deref()))
            .collect();

        log::info!(
            "Search matched {} of {} movies",
            results.len(),
            self.movies.len()
        );

        results
    }

    /// Distinct genre field values across the catalog, sorted, no duplicates.
    /// Compound values like "Crime/Drama" are one entry, not two.
    pub fn get_all_genres(&self) -> &[String] {
        &self.genres
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Normalizes a text criterion: trimmed and case-folded, or `None` when the
/// criterion is absent or blank (filter disabled).
fn active_pattern(pattern: Option<&str>) -> Option<String> {
    let trimmed = pattern?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// An id criterion is active only when positive.
fn active_id(id: Option<i64>) -> Option<i64> {
    id.filter(|&id| id >= 1)
}

fn matches_pattern(field: &str, pattern: Option<&str>) -> bool {
    match pattern {
        None => true,
        Some(pattern) => field.to_lowercase().contains(pattern),
    }
}
