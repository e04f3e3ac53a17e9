//! Static movie catalog embedded into the site at build time.

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// One credited cast member of a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub role: String,
}

/// A single movie entry. The `index` is assigned at authoring time and is
/// what the accordion headers and panels key on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub index: usize,
    pub title: String,
    pub year: u16,
    pub director: String,
    /// Synopsis prose, markdown with emphasis allowed.
    pub synopsis: String,
    pub cast: Vec<CastMember>,
}

/// All movies fronted by one lead actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Saga {
    pub actor: String,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub sagas: Vec<Saga>,
}

impl Catalog {
    /// Total number of movie entries across all sagas.
    pub fn entry_count(&self) -> usize {
        self.sagas.iter().map(|saga| saga.movies.len()).sum()
    }
}

const MOVIES_JSON: &str = include_str!("movies.json");

/// Load the catalog from the JSON bundle embedded at build time.
pub fn load() -> Catalog {
    serde_json::from_str(MOVIES_JSON).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sagas() {
        let catalog = load();
        assert_eq!(catalog.sagas.len(), 3);
        let actors: Vec<&str> = catalog
            .sagas
            .iter()
            .map(|saga| saga.actor.as_str())
            .collect();
        assert_eq!(actors, vec!["Tobey Maguire", "Andrew Garfield", "Tom Holland"]);
    }

    #[test]
    fn test_entry_indices_are_contiguous() {
        let catalog = load();
        let indices: Vec<usize> = catalog
            .sagas
            .iter()
            .flat_map(|saga| saga.movies.iter().map(|movie| movie.index))
            .collect();
        let expected: Vec<usize> = (0..catalog.entry_count()).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_entry_count() {
        let catalog = load();
        assert_eq!(catalog.entry_count(), 8);
    }

    #[test]
    fn test_entries_are_complete() {
        let catalog = load();
        for saga in &catalog.sagas {
            assert!(!saga.actor.is_empty());
            assert!(!saga.movies.is_empty());
            for movie in &saga.movies {
                assert!(!movie.title.is_empty());
                assert!(!movie.director.is_empty());
                assert!(!movie.synopsis.is_empty());
                assert!(!movie.cast.is_empty());
            }
        }
    }

    #[test]
    fn test_raimi_trilogy() {
        let catalog = load();
        let maguire = &catalog.sagas[0];
        assert_eq!(maguire.movies.len(), 3);
        for movie in &maguire.movies {
            assert_eq!(movie.director, "Sam Raimi");
        }
        assert_eq!(maguire.movies[0].title, "Spider-Man");
        assert_eq!(maguire.movies[0].year, 2002);
    }

    #[test]
    fn test_release_years_ascend_within_saga() {
        let catalog = load();
        for saga in &catalog.sagas {
            for pair in saga.movies.windows(2) {
                assert!(pair[0].year < pair[1].year);
            }
        }
    }
}
