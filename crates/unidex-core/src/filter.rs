//! Filter predicate evaluation for list views.
//!
//! All predicates are ANDed; there is no OR mode. An absent or blank
//! criterion always matches, so the empty filter matches every record.

use crate::models::degree::DegreeLevel;
use crate::models::university::University;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversityFilter {
    /// Case-insensitive substring match against the university name.
    pub search: Option<String>,
    /// Case-insensitive exact match against the location.
    pub location: Option<String>,
    /// Matches universities with at least one program under this level.
    pub degree_level: Option<DegreeLevel>,
}

impl UniversityFilter {
    /// The effective search term: trimmed, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// The effective location term: trimmed, `None` when blank.
    pub fn location_term(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.location_term().is_none()
            && self.degree_level.is_none()
    }

    /// Evaluates the conjunction of all active predicates. Never mutates
    /// and never fails.
    pub fn matches(&self, university: &University) -> bool {
        let search_ok = self
            .search_term()
            .is_none_or(|needle| {
                university
                    .name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            });
        let location_ok = self
            .location_term()
            .is_none_or(|wanted| university.location.to_lowercase() == wanted.to_lowercase());
        let degree_ok = self
            .degree_level
            .is_none_or(|level| !university.programs.get(level).is_empty());

        search_ok && location_ok && degree_ok
    }
}
