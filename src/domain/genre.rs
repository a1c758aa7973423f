//! Category tags attached to leaves.
//!
//! The numeric values are catalog genre identifiers and are consumed
//! verbatim by whatever builds catalog queries from a walk result.

/// Integer category identifier carried by leaves.
pub type GenreId = u32;

pub const ADVENTURE: GenreId = 12;
pub const FANTASY: GenreId = 14;
pub const ANIMATION: GenreId = 16;
pub const DRAMA: GenreId = 18;
pub const HORROR: GenreId = 27;
pub const ACTION: GenreId = 28;
pub const COMEDY: GenreId = 35;
pub const HISTORY: GenreId = 36;
pub const WESTERN: GenreId = 37;
pub const THRILLER: GenreId = 53;
pub const CRIME: GenreId = 80;
pub const DOCUMENTARY: GenreId = 99;
pub const SCIENCE_FICTION: GenreId = 878;
pub const MYSTERY: GenreId = 9648;
pub const MUSIC: GenreId = 10402;
pub const ROMANCE: GenreId = 10749;
pub const FAMILY: GenreId = 10751;
pub const WAR: GenreId = 10752;

const NAMES: &[(GenreId, &str)] = &[
    (ADVENTURE, "Adventure"),
    (FANTASY, "Fantasy"),
    (ANIMATION, "Animation"),
    (DRAMA, "Drama"),
    (HORROR, "Horror"),
    (ACTION, "Action"),
    (COMEDY, "Comedy"),
    (HISTORY, "History"),
    (WESTERN, "Western"),
    (THRILLER, "Thriller"),
    (CRIME, "Crime"),
    (DOCUMENTARY, "Documentary"),
    (SCIENCE_FICTION, "Sci-Fi"),
    (MYSTERY, "Mystery"),
    (MUSIC, "Music"),
    (ROMANCE, "Romance"),
    (FAMILY, "Family"),
    (WAR, "War"),
];

/// Human-readable name of a genre, `None` for identifiers outside the table.
pub fn name(id: GenreId) -> Option<&'static str> {
    NAMES.iter().find(|(g, _)| *g == id).map(|(_, n)| *n)
}

/// Like [`name`], falling back to `"Unknown"`.
pub fn label(id: GenreId) -> &'static str {
    name(id).unwrap_or("Unknown")
}

/// Comma-separated labels, e.g. `"Action, Sci-Fi"`.
pub fn labels(ids: &[GenreId]) -> String {
    ids.iter().map(|&id| label(id)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_id_when_naming_then_returns_label() {
        assert_eq!(name(COMEDY), Some("Comedy"));
        assert_eq!(name(SCIENCE_FICTION), Some("Sci-Fi"));
    }

    #[test]
    fn given_unknown_id_when_labelling_then_falls_back() {
        assert_eq!(name(1), None);
        assert_eq!(label(1), "Unknown");
    }

    #[test]
    fn given_tag_list_when_joining_labels_then_preserves_order() {
        assert_eq!(labels(&[ACTION, SCIENCE_FICTION]), "Action, Sci-Fi");
        assert_eq!(labels(&[]), "");
    }
}
