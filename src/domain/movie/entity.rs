use serde::{Deserialize, Serialize};

/// A single movie record in the catalog.
///
/// Records are parsed once at startup and never mutated afterwards; every
/// query hands out shared references into the catalog's primary sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Immutable positive identifier, unique across the catalog
    pub id: i64,

    /// Title shown to users; wire name `movieName`
    pub movie_name: String,

    /// Director credit
    pub director: String,

    /// Release year
    pub year: i32,

    /// Genre label. May encode several genres joined by a delimiter
    /// ("Crime/Drama"); the catalog treats it as one opaque string and
    /// never decomposes it.
    pub genre: String,

    /// Short plot summary
    pub description: String,

    /// Runtime in minutes
    pub duration: u32,

    /// Rating on a 0.0-10.0 scale; wire name `imdbRating`
    pub imdb_rating: f64,
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.movie_name, self.year)
    }
}
