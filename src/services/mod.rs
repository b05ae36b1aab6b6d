// src/services/mod.rs
//
// Services Module - Query Layer

pub mod movie_service;


// Re-export all services and their types
pub use movie_service::{MovieService, SearchMoviesRequest};
