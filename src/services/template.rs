use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::domain::models::EventRecord;
use crate::error::GenError;

/// One named extraction rule. Capture group 1 of `pattern` is the field
/// value.
#[derive(Debug)]
pub struct FieldRule {
    pub name: String,
    pub pattern: Regex,
}

/// Ordered field-pattern template, loaded once per run and read-only
/// thereafter.
#[derive(Debug)]
pub struct FieldTemplate {
    rules: Vec<FieldRule>,
}

impl FieldTemplate {
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Parse the line-oriented template dialect: `Value NAME PATTERN`
    /// rules, `#` comments, blank lines.
    pub fn parse(raw: &str) -> Result<Self, GenError> {
        let mut rules: Vec<FieldRule> = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            let line_no = idx + 1;
            let invalid = |reason: String| GenError::TemplateInvalid {
                line: line_no,
                reason,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let rest = trimmed
                .strip_prefix("Value ")
                .ok_or_else(|| invalid("expected `Value NAME PATTERN`".to_string()))?;
            let (name, raw_pattern) = rest
                .trim_start()
                .split_once(char::is_whitespace)
                .ok_or_else(|| invalid("rule has no pattern".to_string()))?;
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(format!("bad field name '{name}'")));
            }
            if rules.iter().any(|r| r.name == name) {
                return Err(GenError::DuplicateField(name.to_string()));
            }
            let pattern = RegexBuilder::new(raw_pattern.trim())
                .multi_line(true)
                .build()
                .map_err(|err| invalid(err.to_string()))?;
            if pattern.captures_len() < 2 {
                return Err(invalid("pattern has no capture group".to_string()));
            }
            rules.push(FieldRule {
                name: name.to_string(),
                pattern,
            });
        }
        if rules.is_empty() {
            return Err(GenError::EmptyTemplate);
        }
        Ok(Self { rules })
    }

    /// Field names in rule order.
    pub fn headers(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Apply every rule to `text` and return one value row aligned with
    /// [`Self::headers`].
    ///
    /// A rule capturing more than once means the page holds more than one
    /// record; no rule capturing at all means it holds none. Both are
    /// fatal. A rule that misses while others hit yields an empty string:
    /// presence is validated per record, not per field.
    pub fn extract(&self, text: &str) -> Result<Vec<String>, GenError> {
        let mut values = Vec::with_capacity(self.rules.len());
        let mut matched = false;
        for rule in &self.rules {
            let mut caps = rule.pattern.captures_iter(text);
            let first = caps.next();
            let extra = caps.count();
            if extra > 0 {
                return Err(GenError::AmbiguousRecord {
                    field: rule.name.clone(),
                    matches: extra + 1,
                });
            }
            match first {
                Some(caps) => {
                    matched = true;
                    let value = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                    // trim_end tolerates CRLF pages.
                    values.push(value.trim_end().to_string());
                }
                None => values.push(String::new()),
            }
        }
        if !matched {
            return Err(GenError::NoRecordMatched);
        }
        Ok(values)
    }
}

/// Zip headers and values into the ordered record.
pub fn record_from_row(headers: &[&str], values: &[String]) -> EventRecord {
    headers
        .iter()
        .zip(values)
        .map(|(h, v)| (h.to_string(), v.clone()))
        .collect()
}
