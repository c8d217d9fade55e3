//! Read/write-time record repair.
//!
//! [`normalize`] is total and idempotent: it never fails, and applying it
//! twice yields the same record as applying it once. Both store backends
//! run it on every record they read or persist, so legacy or hand-edited
//! records are repaired wherever they enter the system.

use std::collections::HashSet;

use crate::models::degree::DegreeLevel;
use crate::models::university::University;

/// Canonicalizes a possibly-ill-formed record into one satisfying every
/// structural invariant.
///
/// - blank-name programs and scholarships are dropped
/// - a blank `overview` becomes absent
/// - non-finite fee values are repaired (JSON cannot carry them anyway)
/// - `restricted_countries` entries are trimmed, blanks dropped, and exact
///   duplicates removed keeping first-occurrence order
///
/// The total-key invariant on `programs`/`scholarships` needs no runtime
/// repair here: `ByDegree` carries all three levels structurally.
pub fn normalize(mut university: University) -> University {
    for level in DegreeLevel::ALL {
        university
            .programs
            .get_mut(level)
            .retain(|program| !program.name.trim().is_empty());
        university
            .scholarships
            .get_mut(level)
            .retain(|scholarship| !scholarship.name.trim().is_empty());
    }

    university.overview = university.overview.take().and_then(|overview| {
        let trimmed = overview.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    });

    if !university.fees.application.is_finite() {
        university.fees.application = 0.0;
    }
    university
        .fees
        .average_tuition
        .retain(|_, amount| amount.is_finite());

    university.restricted_countries = dedup_countries(university.restricted_countries);

    university
}

/// Trim, drop blanks, and de-duplicate by exact string match, keeping the
/// first occurrence. Dedup is deliberately case-sensitive ("USA" and "usa"
/// are distinct entries), unlike location filtering.
fn dedup_countries(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut countries = Vec::with_capacity(raw.len());
    for country in raw {
        let trimmed = country.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_owned()) {
            countries.push(trimmed.to_owned());
        }
    }
    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::university::{Program, Scholarship, UniversityPatch};

    fn base() -> University {
        UniversityPatch {
            name: Some("Stanford University".into()),
            portal_url: Some("https://apply.example.edu".into()),
            location: Some("USA".into()),
            ..Default::default()
        }
        .into_university("u-1".into())
    }

    #[test]
    fn drops_blank_name_entries() {
        let mut u = base();
        u.programs.bachelor = vec![
            Program {
                name: "  ".into(),
                ..Default::default()
            },
            Program {
                name: "CS".into(),
                duration: "4y".into(),
                delivery: "on-campus".into(),
            },
        ];
        u.scholarships.phd.push(Scholarship::default());

        let u = normalize(u);
        assert_eq!(u.programs.bachelor.len(), 1);
        assert_eq!(u.programs.bachelor[0].name, "CS");
        assert!(u.scholarships.phd.is_empty());
    }

    #[test]
    fn restricted_countries_dedup_is_exact_and_order_preserving() {
        let mut u = base();
        u.restricted_countries = vec![
            "USA".into(),
            " usa ".into(),
            "Iran".into(),
            "".into(),
            "USA".into(),
        ];

        let u = normalize(u);
        assert_eq!(u.restricted_countries, vec!["USA", "usa", "Iran"]);
    }

    #[test]
    fn blank_overview_becomes_absent() {
        let mut u = base();
        u.overview = Some("   ".into());
        assert_eq!(normalize(u).overview, None);

        let mut u = base();
        u.overview = Some("  A research university.  ".into());
        assert_eq!(
            normalize(u).overview.as_deref(),
            Some("A research university.")
        );
    }

    #[test]
    fn repairs_non_finite_fees() {
        let mut u = base();
        u.fees.application = f64::NAN;
        u.fees
            .average_tuition
            .insert(DegreeLevel::Bachelor, f64::INFINITY);
        u.fees.average_tuition.insert(DegreeLevel::Masters, 32000.0);

        let u = normalize(u);
        assert_eq!(u.fees.application, 0.0);
        assert_eq!(u.fees.average_tuition.len(), 1);
        assert_eq!(u.fees.average_tuition[&DegreeLevel::Masters], 32000.0);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut u = base();
        u.overview = Some(" text ".into());
        u.restricted_countries = vec!["USA".into(), "usa".into(), " USA".into(), " ".into()];
        u.programs.masters.push(Program {
            name: " ".into(),
            ..Default::default()
        });
        u.fees.application = f64::NEG_INFINITY;

        let once = normalize(u);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
