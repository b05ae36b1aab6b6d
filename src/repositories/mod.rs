// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data loaders
// - NO query logic (the service owns the index and the filters)
// - NO degradation on failure (the service decides what a bad load means)

pub mod movie_repository;

pub use movie_repository::{BundledMovieRepository, JsonFileMovieRepository, MovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
