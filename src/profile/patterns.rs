//! Ordered regex pattern lists for each extracted field
//!
//! Patterns are tried in order and the first match wins. Indian phone and
//! compensation conventions come first since that is where most of the
//! resume templates this tool sees originate; generic fallbacks follow.

use regex::Regex;

pub struct FieldPatterns {
    pub email: Vec<Regex>,
    pub phone: Vec<Regex>,
    pub experience: Vec<Regex>,
    pub location: Vec<Regex>,
    pub company: Vec<Regex>,
    pub current_ctc: Vec<Regex>,
    pub expected_ctc: Vec<Regex>,
}

impl Default for FieldPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldPatterns {
    pub fn new() -> Self {
        Self {
            email: compile(&[
                r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
                r"[\w.-]+@[\w.-]+",
            ]),
            phone: compile(&[
                // Indian mobile, optionally with +91 prefix
                r"(?:\+91[\s-]?)?\b[6-9]\d{9}\b",
                // Generic international
                r"\+?\d[\d\s()\-]{8,}\d",
            ]),
            experience: compile(&[
                r"(?i)\b(\d{1,2}(?:\.\d)?)\s*\+?\s*(?:years?|yrs?)(?:\s+of)?\s+(?:\w+\s+)?experience",
                r"(?i)experience\s*[:\-]?\s*(\d{1,2}(?:\.\d)?)\s*\+?\s*(?:years?|yrs?)",
                r"(?i)\b(\d{1,2}(?:\.\d)?)\s*\+?\s*(?:years?|yrs?)\b",
            ]),
            location: compile(&[
                r"(?i)\blocation\s*[:\-]\s*([A-Za-z][A-Za-z .]*(?:,\s*[A-Za-z .]+)?)",
                r"(?i)\bbased\s+(?:in|at)\s+([A-Za-z][A-Za-z .]*)",
                // Common Indian metros seen across the resume templates
                r"(?i)\b(Bengaluru|Bangalore|Mumbai|Pune|Hyderabad|Chennai|Kolkata|Delhi|Noida|Gurgaon|Gurugram|Ahmedabad|Jaipur|Kochi)\b",
            ]),
            company: compile(&[
                r"(?i)current\s+(?:company|employer|organi[sz]ation)\s*[:\-]\s*([A-Za-z0-9][A-Za-z0-9&.\- ]{1,40})",
                r"(?i)(?:currently|presently)\s+(?:working\s+)?(?:at|with)\s+([A-Z][A-Za-z0-9&.\- ]{1,40})",
                r"(?i)(?:working|employed)\s+(?:at|with|in)\s+([A-Z][A-Za-z0-9&.\- ]{1,40})",
            ]),
            current_ctc: compile(&[
                r"(?i)current\s*ctc\s*[:\-]?\s*((?:₹|rs\.?|inr)?\s*[\d,.]+\s*(?:lpa|lakhs?|lacs?|l\b)?)",
                r"(?i)\bctc\s*[:\-]\s*((?:₹|rs\.?|inr)?\s*[\d,.]+\s*(?:lpa|lakhs?|lacs?|l\b)?)",
                r"(?i)current\s+(?:salary|compensation)\s*[:\-]?\s*((?:₹|rs\.?|inr|\$)?\s*[\d,.]+\s*(?:lpa|lakhs?|lacs?|k\b)?)",
            ]),
            expected_ctc: compile(&[
                r"(?i)expected\s*ctc\s*[:\-]?\s*((?:₹|rs\.?|inr)?\s*[\d,.]+\s*(?:lpa|lakhs?|lacs?|l\b)?)",
                r"(?i)expected\s+(?:salary|compensation)\s*[:\-]?\s*((?:₹|rs\.?|inr|\$)?\s*[\d,.]+\s*(?:lpa|lakhs?|lacs?|k\b)?)",
            ]),
        }
    }

    /// Try an ordered pattern list, returning the first capture (or whole
    /// match when the pattern has no capture group).
    pub fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
        for pattern in patterns {
            if let Some(caps) = pattern.captures(text) {
                let matched = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().trim().to_string());
                if let Some(value) = matched {
                    if !value.is_empty() {
                        return Some(value);
                    }
                }
            }
        }
        None
    }
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|s| Regex::new(s).expect("Invalid field pattern"))
        .collect()
}
