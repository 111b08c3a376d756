//! Turning Canvas event titles into short agenda labels.
//!
//! Canvas appends the course to every event title in brackets, e.g.
//! `Homework 3 [MATH-2164-001 Calculus II Fall 2024]`. The label keeps just
//! the course code (or a cleaned-up course name when there is none) followed
//! by the assignment text: `MATH-2164-001: Homework 3`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Titles containing any of these are left out of the agenda entirely
pub const EXCLUDED_KEYWORDS: &[&str] = &["PAL", "Training"];

/// Number of leading characters multi-section slugs must share to be merged
const BASE_CODE_LEN: usize = 8;

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("valid bracket pattern"));

// The section is only taken when a separator, a colon or the end of the block
// follows it; that terminator is consumed but is not part of the slug.
static COURSE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<code>[A-Z]{3,4}[- ]\d{4})(?:[- ](?P<section>[A-Z\d]{0,3})(?:[- :]|$))?")
        .expect("valid course code pattern")
});

/// Removed in order from class names that carry no course code
static NOISE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Random IDs
        r"[- ]*[A-Za-z]*\d[A-Za-z\d]{5,}[- ]*",
        // Semester identifiers
        r"[- ]*[A-Z][a-z]+[- ]\d{4}[- ]*",
        // Combined section markers
        r"_Combined",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid noise pattern"))
    .collect()
});

/// Whether an event with this title should be dropped from the agenda
pub fn is_excluded(title: &str) -> bool {
    EXCLUDED_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
}

/// Format a raw event title as `<label>: <assignment>`.
///
/// Titles without any bracketed block are returned unchanged.
pub fn format_event(title: &str) -> String {
    let Some(class_name) = BRACKETED
        .captures_iter(title)
        .filter_map(|caps| caps.get(1))
        .last()
        .map(|m| m.as_str())
    else {
        return title.to_string();
    };

    let assignment = title.replace(&format!("[{}]", class_name), "");
    let assignment = assignment.trim();

    let slugs: Vec<String> = COURSE_CODE
        .captures_iter(class_name)
        .map(|caps| CourseCode::from_captures(&caps).slug())
        .collect();

    let label = if slugs.is_empty() {
        clean_class_name(class_name)
    } else {
        label_from_slugs(&slugs)
    };

    debug!(title, label = %label, "Formatted event title");

    format!("{}: {}", label, assignment)
}

/// A course code found in a class-name block, e.g. `MATH-2164` + `001`
#[derive(Debug, Clone, PartialEq)]
struct CourseCode<'a> {
    code: &'a str,
    section: Option<&'a str>,
}

impl<'a> CourseCode<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        CourseCode {
            code: caps.name("code").map(|m| m.as_str()).unwrap_or_default(),
            section: caps.name("section").map(|m| m.as_str()),
        }
    }

    /// Hyphen-joined form used in labels.
    ///
    /// A separator followed by an empty section still leaves its hyphen.
    fn slug(&self) -> String {
        let code = self.code.replace(' ', "-");
        match self.section {
            Some(section) => format!("{}-{}", code, section),
            None => code,
        }
    }
}

/// Pick the label for the course codes found in one class name.
///
/// Sections of the same course collapse to their shared base code. When the
/// codes belong to different courses the first one wins.
fn label_from_slugs(slugs: &[String]) -> String {
    let first = &slugs[0];
    if slugs.len() == 1 {
        return first.clone();
    }

    let base_code: String = first.chars().take(BASE_CODE_LEN).collect();
    if slugs.iter().all(|slug| slug.starts_with(&base_code)) {
        return base_code.trim_end_matches('-').to_string();
    }

    first.clone()
}

fn clean_class_name(class_name: &str) -> String {
    NOISE_PATTERNS
        .iter()
        .fold(class_name.to_string(), |name, pattern| {
            pattern.replace_all(&name, "").into_owned()
        })
}
