//! Bundled seed dataset.
//!
//! The local store falls back to these records whenever its slot is
//! missing or unreadable. Ids are fixed so reseeding is deterministic.

use unidex_core::models::degree::DegreeLevel;
use unidex_core::models::university::{Fees, Program, Scholarship, University};

/// The fixed dataset used to initialize (and repair) the local slot.
pub fn universities() -> Vec<University> {
    vec![stanford(), mit(), oxford()]
}

fn program(name: &str, duration: &str, delivery: &str) -> Program {
    Program {
        name: name.into(),
        duration: duration.into(),
        delivery: delivery.into(),
    }
}

fn scholarship(name: &str, amount: &str, eligibility: &str, deadline: &str) -> Scholarship {
    Scholarship {
        name: name.into(),
        amount: amount.into(),
        eligibility: eligibility.into(),
        deadline: deadline.into(),
    }
}

fn stanford() -> University {
    let mut u = University {
        id: "6f1c2a84-9d35-4b7e-a1c2-0f4e8b5d9a01".into(),
        name: "Stanford University".into(),
        portal_url: "https://apply.stanford.example.edu".into(),
        location: "USA".into(),
        overview: Some(
            "Private research university in the San Francisco Bay Area, known for \
             engineering and entrepreneurship."
                .into(),
        ),
        fees: Fees {
            application: 90.0,
            ..Default::default()
        },
        ..blank()
    };
    u.fees.average_tuition.insert(DegreeLevel::Bachelor, 56169.0);
    u.fees.average_tuition.insert(DegreeLevel::Masters, 58746.0);
    u.programs.bachelor = vec![
        program("Computer Science", "4 years", "on-campus"),
        program("Economics", "4 years", "on-campus"),
    ];
    u.programs.masters = vec![program("MBA", "2 years", "on-campus")];
    u.programs.phd = vec![program("Electrical Engineering", "5 years", "on-campus")];
    u.scholarships.bachelor = vec![scholarship(
        "Knight-Hennessy Scholars",
        "Full funding",
        "Outstanding academic record",
        "October 9",
    )];
    u
}

fn mit() -> University {
    let mut u = University {
        id: "3b9d6e12-47af-4c03-b8d1-5e2a7c4f8b02".into(),
        name: "MIT".into(),
        portal_url: "https://apply.mit.example.edu".into(),
        location: "USA".into(),
        overview: Some("Research university in Cambridge, Massachusetts.".into()),
        fees: Fees {
            application: 75.0,
            ..Default::default()
        },
        ..blank()
    };
    u.fees.average_tuition.insert(DegreeLevel::Bachelor, 57986.0);
    u.programs.bachelor = vec![program("Mechanical Engineering", "4 years", "on-campus")];
    u.programs.masters = vec![
        program("Data Science", "2 years", "hybrid"),
        program("Supply Chain Management", "10 months", "online"),
    ];
    u.scholarships.masters = vec![scholarship(
        "MIT Merit Fellowship",
        "$20,000",
        "Admitted masters students",
        "January 15",
    )];
    u.restricted_countries = vec!["North Korea".into()];
    u
}

fn oxford() -> University {
    let mut u = University {
        id: "a5e08c37-2f61-4d9b-9c74-1b3f6d0e7c03".into(),
        name: "University of Oxford".into(),
        portal_url: "https://apply.oxford.example.ac.uk".into(),
        location: "United Kingdom".into(),
        overview: Some("Collegiate research university in Oxford, England.".into()),
        fees: Fees {
            application: 80.0,
            ..Default::default()
        },
        ..blank()
    };
    u.fees.average_tuition.insert(DegreeLevel::Phd, 29700.0);
    u.programs.phd = vec![program("DPhil in Computer Science", "4 years", "on-campus")];
    u.scholarships.phd = vec![scholarship(
        "Clarendon Fund",
        "Full tuition and stipend",
        "All admitted graduate students",
        "Course deadline",
    )];
    u
}

fn blank() -> University {
    University {
        id: String::new(),
        name: String::new(),
        portal_url: String::new(),
        location: String::new(),
        overview: None,
        fees: Fees::default(),
        programs: Default::default(),
        scholarships: Default::default(),
        restricted_countries: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unidex_core::normalize::normalize;

    #[test]
    fn seed_records_are_already_normalized() {
        for u in universities() {
            let normalized = normalize(u.clone());
            assert_eq!(normalized, u, "seed record {} needs repair", u.name);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let records = universities();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
