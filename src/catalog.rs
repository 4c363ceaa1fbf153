//! Medication catalog model.
//!
//! A [`Catalog`] is an ordered, immutable list of [`MedicationEntry`] values.
//! Every entry carries the same four fields, so the exported table is always
//! rectangular and its columns follow the struct's declaration order:
//!
//! ```text
//! name,title,description,type
//! ```
//!
//! The built-in list lives in [`builtin`] and is constructed once through
//! [`Catalog::builtin`].

pub mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Column names of the exported table, in order.
pub const HEADER: [&str; 4] = ["name", "title", "description", "type"];

/// How a medication is administered.
///
/// The serialized tag is the camelCase identifier used by the prescription
/// front end (`oral`, `topicOftamologic`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteType {
    Oral,
    Injectable,
    Topic,
    TopicOftamologic,
    TopicOtologic,
    Nasal,
    Inhalational,
}

impl RouteType {
    /// All routes, in the order a prescription groups them.
    pub const ALL: [Self; 7] = [
        Self::Oral,
        Self::Injectable,
        Self::Topic,
        Self::TopicOftamologic,
        Self::TopicOtologic,
        Self::Nasal,
        Self::Inhalational,
    ];

    /// Wire tag written to the `type` column.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Oral => "oral",
            Self::Injectable => "injectable",
            Self::Topic => "topic",
            Self::TopicOftamologic => "topicOftamologic",
            Self::TopicOtologic => "topicOtologic",
            Self::Nasal => "nasal",
            Self::Inhalational => "inhalational",
        }
    }

    /// Display label shown as a section heading on printed prescriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Oral => "oral",
            Self::Injectable => "injetável",
            Self::Topic => "Tópico",
            Self::TopicOftamologic => "Tópico Oftamológico",
            Self::TopicOtologic => "Tópico Otológico",
            Self::Nasal => "Nasal",
            Self::Inhalational => "Inalatório",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.tag() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|r| r.tag()).collect();
                format!("unknown route '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// One medication's catalog data.
///
/// Field order is the column order of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    /// Generic name and strength, e.g. "Dipirona 500mg"
    pub name: String,

    /// Name plus dispensed quantity, e.g. "Dipirona 500mg - 1 cartela"
    pub title: String,

    /// Dosing instructions, possibly empty
    pub description: String,

    #[serde(rename = "type")]
    pub route: RouteType,
}

impl MedicationEntry {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        route: RouteType,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            route,
        }
    }
}

/// A title shared by more than one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCollision {
    pub title: String,
    pub names: Vec<String>,
}

/// Ordered, immutable list of medication entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MedicationEntry>,
}

impl Catalog {
    /// Wrap an existing list. Order is preserved.
    pub fn new(entries: Vec<MedicationEntry>) -> Self {
        Self { entries }
    }

    /// The hand-authored catalog shipped with the program.
    pub fn builtin() -> Self {
        Self::new(builtin::entries())
    }

    pub fn entries(&self) -> &[MedicationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MedicationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with exactly this name.
    pub fn find(&self, name: &str) -> Option<&MedicationEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries of one route, in catalog order.
    pub fn by_route(&self, route: RouteType) -> impl Iterator<Item = &MedicationEntry> + '_ {
        self.entries.iter().filter(move |e| e.route == route)
    }

    /// Entry count for every route in [`RouteType::ALL`] order, zeros included.
    pub fn route_counts(&self) -> Vec<(RouteType, usize)> {
        RouteType::ALL
            .into_iter()
            .map(|route| (route, self.by_route(route).count()))
            .collect()
    }

    /// Titles used by more than one entry, sorted by title.
    ///
    /// Collisions are data as authored; callers report them, nothing here
    /// removes them.
    pub fn title_collisions(&self) -> Vec<TitleCollision> {
        let mut by_title: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            by_title
                .entry(entry.title.as_str())
                .or_default()
                .push(entry.name.clone());
        }

        by_title
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(title, names)| TitleCollision {
                title: title.to_owned(),
                names,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MedicationEntry;
    type IntoIter = std::slice::Iter<'a, MedicationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<MedicationEntry>> for Catalog {
    fn from(entries: Vec<MedicationEntry>) -> Self {
        Self::new(entries)
    }
}
