//! Pre-submission cleanup of edited form state.
//!
//! The editor binds to [`UniversityForm`], which keeps numeric inputs as
//! raw text the way a form widget delivers them. [`sanitize`] is the pure
//! transform that turns that state into a well-formed [`UniversityPatch`]
//! before it is handed to a store's `create` or `update`. It never talks
//! to the store.

use std::collections::BTreeMap;

use crate::models::degree::DegreeLevel;
use crate::models::university::{ByDegree, Fees, Program, Scholarship, UniversityPatch};

/// Editable in-progress record, with free-text numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversityForm {
    pub name: String,
    pub portal_url: String,
    pub location: String,
    pub overview: String,
    /// Raw text; coerced to a number (default 0) during sanitization.
    pub application_fee: String,
    /// Raw text per level; unparseable entries are dropped.
    pub average_tuition: BTreeMap<DegreeLevel, String>,
    pub programs: ByDegree<Program>,
    pub scholarships: ByDegree<Scholarship>,
    /// Passed through untouched; the normalizer owns dedup.
    pub restricted_countries: Vec<String>,
}

/// Transforms raw form state into a submission-ready patch.
///
/// - the four text fields are trimmed; a blank overview still travels as
///   an (empty) update so it can clear a previous value, and the
///   normalizer turns it into an absent field
/// - program/scholarship entries with a blank name are dropped, the rest
///   have their fields trimmed
/// - `application_fee` falls back to 0 when unparseable
/// - tuition entries survive only when they parse to a finite number
pub fn sanitize(form: &UniversityForm) -> UniversityPatch {
    UniversityPatch {
        id: None,
        name: Some(form.name.trim().to_owned()),
        portal_url: Some(form.portal_url.trim().to_owned()),
        location: Some(form.location.trim().to_owned()),
        overview: Some(form.overview.trim().to_owned()),
        fees: Some(Fees {
            application: parse_amount(&form.application_fee).unwrap_or(0.0),
            average_tuition: form
                .average_tuition
                .iter()
                .filter_map(|(level, raw)| Some((*level, parse_amount(raw)?)))
                .collect(),
        }),
        programs: Some(sanitize_entries(&form.programs, |program| Program {
            name: program.name.trim().to_owned(),
            duration: program.duration.trim().to_owned(),
            delivery: program.delivery.trim().to_owned(),
        })),
        scholarships: Some(sanitize_entries(&form.scholarships, |scholarship| {
            Scholarship {
                name: scholarship.name.trim().to_owned(),
                amount: scholarship.amount.trim().to_owned(),
                eligibility: scholarship.eligibility.trim().to_owned(),
                deadline: scholarship.deadline.trim().to_owned(),
            }
        })),
        restricted_countries: Some(form.restricted_countries.clone()),
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn sanitize_entries<T: Named>(entries: &ByDegree<T>, clean: impl Fn(&T) -> T) -> ByDegree<T> {
    let mut sanitized = ByDegree::default();
    for level in DegreeLevel::ALL {
        *sanitized.get_mut(level) = entries
            .get(level)
            .iter()
            .filter(|entry| !entry.name().trim().is_empty())
            .map(&clean)
            .collect();
    }
    sanitized
}

trait Named {
    fn name(&self) -> &str;
}

impl Named for Program {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Scholarship {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UniversityForm {
        UniversityForm {
            name: "  Stanford University ".into(),
            portal_url: " https://apply.example.edu ".into(),
            location: " USA".into(),
            ..Default::default()
        }
    }

    #[test]
    fn trims_text_fields() {
        let patch = sanitize(&form());
        assert_eq!(patch.name.as_deref(), Some("Stanford University"));
        assert_eq!(
            patch.portal_url.as_deref(),
            Some("https://apply.example.edu")
        );
        assert_eq!(patch.location.as_deref(), Some("USA"));
        assert_eq!(patch.overview.as_deref(), Some(""));
    }

    #[test]
    fn drops_blank_name_programs() {
        let mut f = form();
        f.programs.bachelor = vec![
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

        let programs = sanitize(&f).programs.unwrap();
        assert_eq!(programs.bachelor.len(), 1);
        assert_eq!(programs.bachelor[0].name, "CS");
        assert_eq!(programs.bachelor[0].delivery, "on-campus");
    }

    #[test]
    fn coerces_application_fee_to_number() {
        let mut f = form();
        f.application_fee = " 90 ".into();
        assert_eq!(sanitize(&f).fees.unwrap().application, 90.0);

        f.application_fee = "free".into();
        assert_eq!(sanitize(&f).fees.unwrap().application, 0.0);

        f.application_fee = String::new();
        assert_eq!(sanitize(&f).fees.unwrap().application, 0.0);
    }

    #[test]
    fn keeps_only_numeric_tuition_entries() {
        let mut f = form();
        f.average_tuition.insert(DegreeLevel::Bachelor, "52000".into());
        f.average_tuition.insert(DegreeLevel::Masters, "TBD".into());
        f.average_tuition.insert(DegreeLevel::Phd, "NaN".into());

        let tuition = sanitize(&f).fees.unwrap().average_tuition;
        assert_eq!(tuition.len(), 1);
        assert_eq!(tuition[&DegreeLevel::Bachelor], 52000.0);
    }

    #[test]
    fn restricted_countries_pass_through_unmodified() {
        let mut f = form();
        f.restricted_countries = vec!["USA".into(), " usa ".into(), "".into()];
        // Dedup and trimming are the normalizer's job, not this pipeline's.
        assert_eq!(
            sanitize(&f).restricted_countries.unwrap(),
            vec!["USA", " usa ", ""]
        );
    }
}
