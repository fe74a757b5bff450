//! Read-only snapshot of the records owned by the external data layer.
//!
//! The CRUD API persists these; the matcher only ever reads one consistent
//! snapshot per scoring call, so everything here is plain data with serde
//! derives and no behavior beyond ordering helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The stored resume/profile template. At most one exists per deployment;
/// cardinality is the data layer's business, so the snapshot carries an
/// `Option<Profile>` instead of any singleton state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Freeform links blob (portfolio, GitHub, LinkedIn, ...)
    #[serde(default)]
    pub links: String,
    #[serde(default)]
    pub summary: String,
    /// Freeform skill text; comma-, colon-, and line-delimited formats are
    /// all accepted (see `processing::skills`).
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Freeform comma list
    #[serde(default)]
    pub technologies: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Everything one scoring call reads from the data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// Sort key mirroring profile display order: descending `order`, then
/// descending `start_date`. Ties keep insertion order (stable sort).
pub(crate) fn display_order<T, F>(entries: &[T], key: F) -> Vec<&T>
where
    F: Fn(&T) -> (i32, Option<NaiveDate>),
{
    let mut refs: Vec<&T> = entries.iter().collect();
    refs.sort_by(|a, b| {
        let (ao, ad) = key(a);
        let (bo, bd) = key(b);
        bo.cmp(&ao).then_with(|| bd.cmp(&ad))
    });
    refs
}
