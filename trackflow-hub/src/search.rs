//! Professional search directory
//!
//! Arrangers and engineers are discoverable through an in-memory
//! filter/sort over a fixed directory. Like the room catalog, the data
//! sits behind a trait so the endpoint logic is real while onboarding of
//! professionals is not implemented yet.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use trackflow_common::db::Role;
use uuid::Uuid;

/// A discoverable arranger or engineer
#[derive(Debug, Clone, Serialize)]
pub struct Professional {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub projects: u32,
    pub years_experience: u32,
    pub location: String,
    pub bio: String,
    pub verified: bool,
}

/// Sort orders for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Projects,
    Experience,
    Name,
}

/// Search parameters; every field is optional and absent means "no filter"
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive match against name or any specialty
    pub query: Option<String>,
    pub role: Option<Role>,
    /// Exact specialty match
    pub genre: Option<String>,
    pub sort: SortBy,
}

/// Read-only source of discoverable professionals
pub trait ProfessionalDirectory: Send + Sync {
    /// All professionals in the directory, unfiltered
    fn all(&self) -> Vec<Professional>;

    /// Filtered and sorted view over the directory
    fn search(&self, filter: &SearchFilter) -> Vec<Professional> {
        let mut results: Vec<Professional> = self
            .all()
            .into_iter()
            .filter(|prof| matches(prof, filter))
            .collect();
        results.sort_by(|a, b| compare(a, b, filter.sort));
        results
    }
}

fn matches(prof: &Professional, filter: &SearchFilter) -> bool {
    if let Some(role) = filter.role {
        if prof.role != role {
            return false;
        }
    }
    if let Some(genre) = &filter.genre {
        if !prof.specialties.iter().any(|s| s == genre) {
            return false;
        }
    }
    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        let in_name = prof.name.to_lowercase().contains(&query);
        let in_specialties = prof
            .specialties
            .iter()
            .any(|s| s.to_lowercase().contains(&query));
        if !in_name && !in_specialties {
            return false;
        }
    }
    true
}

/// Rating/projects/experience rank best-first; name is alphabetical
fn compare(a: &Professional, b: &Professional, sort: SortBy) -> Ordering {
    match sort {
        SortBy::Rating => b.rating.total_cmp(&a.rating),
        SortBy::Projects => b.projects.cmp(&a.projects),
        SortBy::Experience => b.years_experience.cmp(&a.years_experience),
        SortBy::Name => a.name.cmp(&b.name),
    }
}

/// In-memory directory over a fixed set of professionals
pub struct SeededProfessionals {
    professionals: Vec<Professional>,
}

impl SeededProfessionals {
    pub fn new(professionals: Vec<Professional>) -> Self {
        Self { professionals }
    }

    /// Deterministic sample directory used until onboarding exists
    pub fn with_sample_data() -> Self {
        let professionals = vec![
            Professional {
                id: Uuid::from_u128(0xF1),
                name: "Ryoko Tanaka".to_string(),
                role: Role::Arranger,
                specialties: vec![
                    "Electronic".to_string(),
                    "Pop".to_string(),
                    "Ambient".to_string(),
                ],
                rating: 4.9,
                projects: 47,
                years_experience: 10,
                location: "Tokyo".to_string(),
                bio: "Arranger focused on electronic music.".to_string(),
                verified: true,
            },
            Professional {
                id: Uuid::from_u128(0xF2),
                name: "Kenta Sato".to_string(),
                role: Role::Engineer,
                specialties: vec![
                    "Hip-Hop".to_string(),
                    "R&B".to_string(),
                    "Jazz".to_string(),
                ],
                rating: 4.8,
                projects: 52,
                years_experience: 8,
                location: "Osaka".to_string(),
                bio: "Mixing and mastering engineer.".to_string(),
                verified: true,
            },
            Professional {
                id: Uuid::from_u128(0xF3),
                name: "Misaki Yamada".to_string(),
                role: Role::Arranger,
                specialties: vec![
                    "Rock".to_string(),
                    "Metal".to_string(),
                    "Alternative".to_string(),
                ],
                rating: 4.7,
                projects: 38,
                years_experience: 5,
                location: "Fukuoka".to_string(),
                bio: "Rock arrangements drawing on years of band work.".to_string(),
                verified: false,
            },
            Professional {
                id: Uuid::from_u128(0xF4),
                name: "Taro Suzuki".to_string(),
                role: Role::Engineer,
                specialties: vec![
                    "Classical".to_string(),
                    "Orchestral".to_string(),
                    "World".to_string(),
                ],
                rating: 4.6,
                projects: 31,
                years_experience: 12,
                location: "Kyoto".to_string(),
                bio: "Orchestral recording and acoustic instruments.".to_string(),
                verified: true,
            },
        ];

        Self::new(professionals)
    }
}

impl ProfessionalDirectory for SeededProfessionals {
    fn all(&self) -> Vec<Professional> {
        self.professionals.clone()
    }
}
