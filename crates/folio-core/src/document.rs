//! The portfolio content document.
//!
//! The content tree is read-only for the lifetime of a session: built once
//! from the built-in sample or loaded from a JSON file, then shared by
//! reference with the editor view and every content block. Persona
//! filtering and expansion defaults are pure functions over the tree and
//! the current [`Variant`], so views can recompute them whenever the
//! variant changes instead of mutating cached state ad hoc.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::settings::Variant;

/// Tags hidden when the `Teacher` variant is selected.
pub const DEVELOPER_TAGS: &[&str] = &["rust", "typescript", "backend", "devops", "databases"];

/// Tags hidden when the `Developer` variant is selected.
pub const TEACHER_TAGS: &[&str] = &["pedagogy", "curriculum", "assessment", "classroom"];

/// Role-title keywords that mark a work entry as a teaching role.
const TEACHING_TITLES: &[&str] = &["teacher", "instructor", "lecturer", "tutor", "professor"];

/// The tag set hidden under a variant. `Combined` hides nothing.
pub fn hidden_tags(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Teacher => DEVELOPER_TAGS,
        Variant::Developer => TEACHER_TAGS,
        Variant::Combined => &[],
    }
}

/// Whether a tag is visible under the given variant.
pub fn tag_visible(tag: &str, variant: Variant) -> bool {
    !hidden_tags(variant).contains(&tag)
}

/// Whether a role title names a teaching position.
pub fn is_teaching_title(title: &str) -> bool {
    let title = title.to_lowercase();
    TEACHING_TITLES.iter().any(|kw| title.contains(kw))
}

/// Default expand state for work entries, as a pure function of
/// `(entries, variant)`.
///
/// Teaching-titled entries default open under `Teacher`, the rest under
/// `Developer`; everything starts collapsed under `Combined`.
pub fn default_expanded(entries: &[WorkEntry], variant: Variant) -> Vec<bool> {
    match variant {
        Variant::Teacher => entries
            .iter()
            .map(|e| is_teaching_title(&e.title))
            .collect(),
        Variant::Developer => entries
            .iter()
            .map(|e| !is_teaching_title(&e.title))
            .collect(),
        Variant::Combined => vec![false; entries.len()],
    }
}

/// An inclusive date range; `end = None` means the role is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl Period {
    /// A closed range.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// An open-ended range for a current role.
    pub fn since(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Human-readable label, e.g. `Mar 2021 - present`.
    pub fn label(&self) -> String {
        let start = self.start.format("%b %Y");
        match self.end {
            Some(end) => format!("{start} - {}", end.format("%b %Y")),
            None => format!("{start} - present"),
        }
    }
}

/// Header identity and bio shown by the Intro block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Markdown; rendered by the Intro block.
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Self-assessed proficiency for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Familiar,
    Proficient,
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Familiar => "familiar",
            Self::Proficient => "proficient",
            Self::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Skill {
    /// A skill is shown unless every one of its tags is hidden. Untagged
    /// skills are always shown.
    pub fn visible(&self, variant: Variant) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| tag_visible(t, variant))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub organization: String,
    pub period: Period,
    pub full_time: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkEntry {
    /// Whether the entry is relevant to the variant. Irrelevant entries are
    /// de-emphasized by the Work block, not removed.
    pub fn emphasized(&self, variant: Variant) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| tag_visible(t, variant))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: Period,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A labeled external link in the Contact block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

/// The full portfolio body consumed by the editor view (display) and the
/// block host (rendering).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTree {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl ContentTree {
    /// Load a portfolio document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(DocumentError::Io)?;
        serde_json::from_str(&content).map_err(DocumentError::Parse)
    }

    /// Serialize for the `show --json` output.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        sample_document()
    }
}

/// Errors from loading or serializing a portfolio document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading the document file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing document JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing the document to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

// Sample content dates are static and known-valid.
fn ym(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| (*t).to_string()).collect()
}

/// The built-in sample portfolio, used when no `--file` is given.
#[allow(clippy::too_many_lines)]
pub fn sample_document() -> ContentTree {
    ContentTree {
        profile: Profile {
            name: "Rowan Hale".into(),
            headline: "Backend developer and sometime science teacher".into(),
            bio: "I spent six years teaching secondary school physics before \
                  moving into software, and I still think the two jobs have \
                  more in common than either side admits.\n\n\
                  These days I build **backend services in Rust**, with a \
                  side interest in teaching tools. I like systems that are \
                  *explainable*: if I cannot draw it on a whiteboard, it is \
                  not finished.\n\n\
                  - based in Leeds, mostly remote\n\
                  - open to mentoring and guest-teaching\n"
                .into(),
            location: Some("Leeds, UK".into()),
        },
        skills: vec![
            Skill {
                name: "Rust".into(),
                level: SkillLevel::Expert,
                tags: tags(&["rust", "backend"]),
            },
            Skill {
                name: "TypeScript".into(),
                level: SkillLevel::Proficient,
                tags: tags(&["typescript"]),
            },
            Skill {
                name: "PostgreSQL".into(),
                level: SkillLevel::Proficient,
                tags: tags(&["databases", "backend"]),
            },
            Skill {
                name: "CI & infrastructure".into(),
                level: SkillLevel::Proficient,
                tags: tags(&["devops"]),
            },
            Skill {
                name: "Curriculum design".into(),
                level: SkillLevel::Expert,
                tags: tags(&["curriculum", "pedagogy"]),
            },
            Skill {
                name: "Formative assessment".into(),
                level: SkillLevel::Proficient,
                tags: tags(&["assessment", "pedagogy"]),
            },
            Skill {
                name: "Classroom facilitation".into(),
                level: SkillLevel::Expert,
                tags: tags(&["classroom"]),
            },
            Skill {
                name: "Technical writing".into(),
                level: SkillLevel::Proficient,
                tags: Vec::new(),
            },
            Skill {
                name: "Public speaking".into(),
                level: SkillLevel::Familiar,
                tags: Vec::new(),
            },
        ],
        work: vec![
            WorkEntry {
                title: "Senior Backend Developer".into(),
                organization: "Fernwood Labs".into(),
                period: Period::since(ym(2021, 3)),
                full_time: true,
                highlights: vec![
                    "Own the ingestion pipeline for sensor telemetry, \
                     around 40k events/s at peak"
                        .into(),
                    "Led the migration from a Python prototype to a Rust \
                     service, cutting p99 latency by 8x"
                        .into(),
                    "Run the team's incident reviews".into(),
                ],
                tags: tags(&["rust", "backend", "devops"]),
            },
            WorkEntry {
                title: "Software Developer".into(),
                organization: "Brightline Systems".into(),
                period: Period::between(ym(2018, 8), ym(2021, 2)),
                full_time: true,
                highlights: vec![
                    "Built reporting APIs for school management software".into(),
                    "Introduced schema migrations and got the test suite \
                     under ten minutes"
                        .into(),
                ],
                tags: tags(&["typescript", "backend", "databases"]),
            },
            WorkEntry {
                title: "Coding Instructor (evenings)".into(),
                organization: "Northgate Community College".into(),
                period: Period::between(ym(2019, 9), ym(2022, 6)),
                full_time: false,
                highlights: vec![
                    "Designed and taught a two-term intro programming course \
                     for adult learners"
                        .into(),
                    "Wrote all course materials; still in use after my \
                     departure"
                        .into(),
                ],
                tags: tags(&["classroom", "curriculum", "typescript"]),
            },
            WorkEntry {
                title: "Science Teacher".into(),
                organization: "Alder Park School".into(),
                period: Period::between(ym(2012, 8), ym(2018, 7)),
                full_time: true,
                highlights: vec![
                    "Taught physics and general science, years 7-13".into(),
                    "Rebuilt the department's practical assessment scheme".into(),
                    "Ran the after-school robotics club that got me into \
                     programming"
                        .into(),
                ],
                tags: tags(&["classroom", "pedagogy", "assessment"]),
            },
            WorkEntry {
                title: "Curriculum Consultant".into(),
                organization: "Self-employed".into(),
                period: Period::between(ym(2017, 1), ym(2018, 6)),
                full_time: false,
                highlights: vec![
                    "Reviewed KS4 science schemes of work for three schools".into(),
                ],
                tags: tags(&["curriculum", "assessment"]),
            },
        ],
        education: vec![
            EducationEntry {
                degree: "PGCE Secondary Science".into(),
                institution: "University of York".into(),
                period: Period::between(ym(2011, 9), ym(2012, 6)),
                notes: vec!["Placement schools in Leeds and Bradford".into()],
            },
            EducationEntry {
                degree: "BSc Physics".into(),
                institution: "University of Leeds".into(),
                period: Period::between(ym(2008, 9), ym(2011, 6)),
                notes: vec![
                    "First class honours".into(),
                    "Final year project on numerical n-body simulation".into(),
                ],
            },
        ],
        projects: vec![
            Project {
                name: "gradebook".into(),
                summary: "Plain-text gradebook CLI with weighted categories \
                          and CSV import; built for my own marking, now used \
                          by a handful of other teachers"
                    .into(),
                tags: tags(&["rust", "assessment"]),
                link: Some("https://github.com/rowanhale/gradebook".into()),
            },
            Project {
                name: "orbit-sandbox".into(),
                summary: "Browser orbital mechanics sandbox for classroom \
                          demos; drag planets around and watch things go \
                          wrong"
                    .into(),
                tags: tags(&["typescript", "classroom"]),
                link: Some("https://orbit.rowanhale.dev".into()),
            },
            Project {
                name: "quizforge".into(),
                summary: "Question bank generator that shuffles numeric \
                          variants of physics problems".into(),
                tags: tags(&["rust", "curriculum"]),
                link: None,
            },
        ],
        contact: Contact {
            email: "rowan@rowanhale.dev".into(),
            website: Some("https://rowanhale.dev".into()),
            links: vec![
                ContactLink {
                    label: "GitHub".into(),
                    url: "https://github.com/rowanhale".into(),
                },
                ContactLink {
                    label: "Mastodon".into(),
                    url: "https://hachyderm.io/@rowanhale".into(),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_tag_visibility_per_variant() {
        assert!(!tag_visible("rust", Variant::Teacher));
        assert!(tag_visible("rust", Variant::Developer));
        assert!(tag_visible("rust", Variant::Combined));

        assert!(!tag_visible("pedagogy", Variant::Developer));
        assert!(tag_visible("pedagogy", Variant::Teacher));

        // Untracked tags are never hidden.
        assert!(tag_visible("gardening", Variant::Teacher));
        assert!(tag_visible("gardening", Variant::Developer));
    }

    #[test]
    fn test_teaching_title_detection() {
        assert!(is_teaching_title("Science Teacher"));
        assert!(is_teaching_title("Coding Instructor (evenings)"));
        assert!(is_teaching_title("Adjunct Lecturer"));
        assert!(!is_teaching_title("Senior Backend Developer"));
        assert!(!is_teaching_title("Curriculum Consultant"));
    }

    #[test]
    fn test_default_expanded_per_variant() {
        let doc = sample_document();

        let teacher = default_expanded(&doc.work, Variant::Teacher);
        let developer = default_expanded(&doc.work, Variant::Developer);
        let combined = default_expanded(&doc.work, Variant::Combined);

        assert_eq!(teacher.len(), doc.work.len());
        for (entry, expanded) in doc.work.iter().zip(&teacher) {
            assert_eq!(*expanded, is_teaching_title(&entry.title));
        }
        for (t, d) in teacher.iter().zip(&developer) {
            assert_ne!(t, d);
        }
        assert!(combined.iter().all(|e| !e));
    }

    #[test]
    fn test_skill_visibility() {
        let doc = sample_document();
        let rust = doc.skills.iter().find(|s| s.name == "Rust").unwrap();
        assert!(!rust.visible(Variant::Teacher));
        assert!(rust.visible(Variant::Developer));
        assert!(rust.visible(Variant::Combined));

        // Untagged skills survive every variant.
        let writing = doc
            .skills
            .iter()
            .find(|s| s.name == "Technical writing")
            .unwrap();
        assert!(writing.visible(Variant::Teacher));
        assert!(writing.visible(Variant::Developer));
    }

    #[test]
    fn test_work_entry_emphasis() {
        let doc = sample_document();
        let dev_role = &doc.work[0];
        assert!(dev_role.emphasized(Variant::Developer));
        assert!(!dev_role.emphasized(Variant::Teacher));

        // The evening instructor role carries a typescript tag, so it stays
        // emphasized for both personas.
        let instructor = &doc.work[2];
        assert!(instructor.emphasized(Variant::Teacher));
        assert!(instructor.emphasized(Variant::Developer));
    }

    #[test]
    fn test_period_labels() {
        let closed = Period::between(ym(2018, 8), ym(2021, 2));
        assert_eq!(closed.label(), "Aug 2018 - Feb 2021");

        let open = Period::since(ym(2021, 3));
        assert_eq!(open.label(), "Mar 2021 - present");
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = sample_document();
        let json = doc.to_json_pretty().unwrap();
        let parsed: ContentTree = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.profile.name, doc.profile.name);
        assert_eq!(parsed.work.len(), doc.work.len());
        assert_eq!(parsed.work[0].period, doc.work[0].period);
    }

    #[test]
    fn test_load_from_file() {
        let doc = sample_document();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(doc.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = ContentTree::load(file.path()).unwrap();
        assert_eq!(loaded.contact.email, doc.contact.email);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ContentTree::load(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = ContentTree::load(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn test_optional_entry_fields_default() {
        let json = r#"{
            "title": "Volunteer Tutor",
            "organization": "Library",
            "period": {"start": "2020-01-01"},
            "full_time": false
        }"#;
        let entry: WorkEntry = serde_json::from_str(json).unwrap();
        assert!(entry.highlights.is_empty());
        assert!(entry.tags.is_empty());
        assert_eq!(entry.period.end, None);
    }
}
