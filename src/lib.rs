// src/lib.rs
// MovieHub - In-memory movie catalog and search core
//
// Architecture:
// - Domain-centric: records and their invariants live in domain/
// - Read-only: the catalog is built once at startup and never mutated
// - Explicit: lookup misses and disabled filters are plain values, not errors

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{validate_movie, DomainError, DomainResult, Movie};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{BundledMovieRepository, JsonFileMovieRepository, MovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{MovieService, SearchMoviesRequest};
