//! University domain model.
//!
//! Wire names are camelCase to match the persisted layout and the remote
//! HTTP contract. `programs` and `scholarships` always carry all three
//! degree-level keys; [`ByDegree`] enforces that structurally, so a record
//! missing a level on the wire deserializes with an empty sequence and
//! always serializes with all three present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{UnidexError, UnidexResult};
use crate::models::degree::DegreeLevel;

/// A program offered under one degree level. No identity beyond its
/// position in the containing list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub name: String,
    pub duration: String,
    pub delivery: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scholarship {
    pub name: String,
    pub amount: String,
    pub eligibility: String,
    pub deadline: String,
}

/// Application fee plus an optionally-partial per-level tuition map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fees {
    pub application: f64,
    pub average_tuition: BTreeMap<DegreeLevel, f64>,
}

/// A total mapping from degree level to an ordered sequence of `T`.
///
/// Each field defaults independently, so partial source records repair to
/// empty sequences during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByDegree<T> {
    pub bachelor: Vec<T>,
    pub masters: Vec<T>,
    pub phd: Vec<T>,
}

impl<T> Default for ByDegree<T> {
    fn default() -> Self {
        Self {
            bachelor: Vec::new(),
            masters: Vec::new(),
            phd: Vec::new(),
        }
    }
}

impl<T> ByDegree<T> {
    pub fn get(&self, level: DegreeLevel) -> &[T] {
        match level {
            DegreeLevel::Bachelor => &self.bachelor,
            DegreeLevel::Masters => &self.masters,
            DegreeLevel::Phd => &self.phd,
        }
    }

    pub fn get_mut(&mut self, level: DegreeLevel) -> &mut Vec<T> {
        match level {
            DegreeLevel::Bachelor => &mut self.bachelor,
            DegreeLevel::Masters => &mut self.masters,
            DegreeLevel::Phd => &mut self.phd,
        }
    }

    /// True when every level is empty.
    pub fn is_empty(&self) -> bool {
        self.bachelor.is_empty() && self.masters.is_empty() && self.phd.is_empty()
    }
}

/// The aggregate root. `id` is assigned by the store on creation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub portal_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub programs: ByDegree<Program>,
    #[serde(default)]
    pub scholarships: ByDegree<Scholarship>,
    #[serde(default)]
    pub restricted_countries: Vec<String>,
}

/// Shallow-merge payload accepted by `create` and `update`.
///
/// Every field is optional; unspecified fields retain their prior values
/// on update. The `id` field is accepted on the wire but always ignored in
/// favor of the store-assigned (create) or path (update) id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UniversityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Fees>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programs: Option<ByDegree<Program>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarships: Option<ByDegree<Scholarship>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_countries: Option<Vec<String>>,
}

impl UniversityPatch {
    /// Checks the fields a new record must carry: non-blank `name`,
    /// `portalUrl` and `location`.
    pub fn validate_for_create(&self) -> UnidexResult<()> {
        let required = [
            ("name", self.name.as_deref()),
            ("portalUrl", self.portal_url.as_deref()),
            ("location", self.location.as_deref()),
        ];
        for (field, value) in required {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => {
                    return Err(UnidexError::Validation {
                        message: format!("required field missing or empty: {field}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Shallow merge onto an existing record. The record's `id` is never
    /// touched, even when the patch carries one.
    pub fn apply_to(self, existing: &mut University) {
        if let Some(name) = self.name {
            existing.name = name;
        }
        if let Some(portal_url) = self.portal_url {
            existing.portal_url = portal_url;
        }
        if let Some(location) = self.location {
            existing.location = location;
        }
        if let Some(overview) = self.overview {
            existing.overview = Some(overview);
        }
        if let Some(fees) = self.fees {
            existing.fees = fees;
        }
        if let Some(programs) = self.programs {
            existing.programs = programs;
        }
        if let Some(scholarships) = self.scholarships {
            existing.scholarships = scholarships;
        }
        if let Some(restricted_countries) = self.restricted_countries {
            existing.restricted_countries = restricted_countries;
        }
    }

    /// Materializes a new record under a store-assigned id. Absent fields
    /// take their defaults; callers validate first.
    pub fn into_university(self, id: String) -> University {
        University {
            id,
            name: self.name.unwrap_or_default(),
            portal_url: self.portal_url.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            overview: self.overview,
            fees: self.fees.unwrap_or_default(),
            programs: self.programs.unwrap_or_default(),
            scholarships: self.scholarships.unwrap_or_default(),
            restricted_countries: self.restricted_countries.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(name: &str, portal_url: &str, location: &str) -> UniversityPatch {
        UniversityPatch {
            name: Some(name.into()),
            portal_url: Some(portal_url.into()),
            location: Some(location.into()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_rejects_missing_portal_url() {
        let mut input = patch("Stanford University", "", "USA");
        input.portal_url = None;
        let err = input.validate_for_create().unwrap_err();
        assert!(err.to_string().contains("portalUrl"));
    }

    #[test]
    fn validate_rejects_whitespace_only_name() {
        let input = patch("   ", "https://apply.example.edu", "USA");
        assert!(input.validate_for_create().is_err());
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let input = patch("Stanford University", "https://apply.example.edu", "USA");
        input.validate_for_create().unwrap();
    }

    #[test]
    fn apply_preserves_id_and_unspecified_fields() {
        let mut existing =
            patch("Stanford University", "https://apply.example.edu", "USA")
                .into_university("u-1".into());
        existing.overview = Some("old text".into());

        let update = UniversityPatch {
            id: Some("attacker-chosen".into()),
            overview: Some("new text".into()),
            ..Default::default()
        };
        update.apply_to(&mut existing);

        assert_eq!(existing.id, "u-1");
        assert_eq!(existing.name, "Stanford University");
        assert_eq!(existing.overview.as_deref(), Some("new text"));
    }

    #[test]
    fn partial_record_deserializes_with_all_degree_keys() {
        let raw = r#"{
            "id": "u-1",
            "name": "MIT",
            "portalUrl": "https://apply.example.edu",
            "location": "USA",
            "programs": { "bachelor": [{ "name": "CS" }] }
        }"#;
        let university: University = serde_json::from_str(raw).unwrap();
        assert_eq!(university.programs.bachelor.len(), 1);
        assert!(university.programs.masters.is_empty());
        assert!(university.programs.phd.is_empty());
        assert!(university.scholarships.is_empty());
    }

    #[test]
    fn serialization_always_emits_all_degree_keys() {
        let university =
            patch("MIT", "https://apply.example.edu", "USA").into_university("u-2".into());
        let json = serde_json::to_value(&university).unwrap();
        for key in ["bachelor", "masters", "phd"] {
            assert!(json["programs"].get(key).is_some(), "missing programs.{key}");
            assert!(
                json["scholarships"].get(key).is_some(),
                "missing scholarships.{key}"
            );
        }
        assert_eq!(json["portalUrl"], "https://apply.example.edu");
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let update = UniversityPatch {
            overview: Some("new text".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["overview"], "new text");
    }
}
