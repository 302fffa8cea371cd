//! Field extractor: prioritized patterns plus name heuristics

use crate::profile::patterns::FieldPatterns;
use crate::profile::CandidateProfile;
use regex::Regex;

/// Lines that look like document headers rather than a person's name.
const NAME_BLACKLIST: &[&str] = &[
    "resume",
    "curriculum vitae",
    "curriculum-vitae",
    "cv",
    "profile",
    "biodata",
    "bio-data",
];

/// How many leading lines are scanned for a candidate name.
const NAME_SCAN_LINES: usize = 10;

pub struct FieldExtractor {
    patterns: FieldPatterns,
    name_regex: Regex,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            patterns: FieldPatterns::new(),
            name_regex: Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][A-Za-z'.-]*){1,3}$")
                .expect("Invalid name regex"),
        }
    }

    /// Extract all profile fields from resume text. Absent fields come back
    /// as `None`; extraction itself never fails.
    pub fn extract(&self, text: &str, filename_hint: &str) -> CandidateProfile {
        CandidateProfile {
            name: self.extract_name(text, filename_hint),
            email: FieldPatterns::first_match(&self.patterns.email, text),
            phone: FieldPatterns::first_match(&self.patterns.phone, text),
            experience_years: FieldPatterns::first_match(&self.patterns.experience, text),
            location: FieldPatterns::first_match(&self.patterns.location, text),
            current_company: FieldPatterns::first_match(&self.patterns.company, text),
            current_ctc: FieldPatterns::first_match(&self.patterns.current_ctc, text),
            expected_ctc: FieldPatterns::first_match(&self.patterns.expected_ctc, text),
        }
    }

    /// Name heuristic: scan the first few lines for a capitalized two-to-four
    /// word sequence that is not a header word, then fall back to the
    /// filename stem.
    fn extract_name(&self, text: &str, filename_hint: &str) -> Option<String> {
        for line in text.lines().take(NAME_SCAN_LINES) {
            // A name often shares the first line with contact details, so
            // check the segment before the first comma as well.
            for segment in [line, line.split(',').next().unwrap_or(line)] {
                let candidate = segment.trim();
                if candidate.is_empty() || candidate.contains('@') {
                    continue;
                }
                if candidate.chars().any(|c| c.is_ascii_digit()) {
                    continue;
                }
                let lower = candidate.to_lowercase();
                if NAME_BLACKLIST.iter().any(|word| lower.contains(word)) {
                    continue;
                }
                if self.name_regex.is_match(candidate) {
                    return Some(candidate.to_string());
                }
            }
        }

        self.name_from_filename(filename_hint)
    }

    fn name_from_filename(&self, filename_hint: &str) -> Option<String> {
        let stem = filename_hint
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(filename_hint);
        let stem = stem.split('.').next().unwrap_or(stem);

        let words: Vec<String> = stem
            .split(['_', '-', ' '])
            .map(|w| w.trim_matches(|c: char| c.is_ascii_digit() || c == '(' || c == ')'))
            .filter(|w| !w.is_empty())
            .filter(|w| {
                let lower = w.to_lowercase();
                !NAME_BLACKLIST.iter().any(|word| lower == *word)
            })
            .map(title_case)
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
