//! Task entity and its flat-file record encoding.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Field separator in the persisted record format.
pub const FIELD_DELIMITER: char = '|';

/// Task priority.
///
/// `Unknown` carries an unrecognized value from a hand-edited file verbatim
/// so that loading and re-saving never rewrites a record behind the user's
/// back. Manager-driven writes never produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    High,
    Unknown(String),
}

impl Priority {
    /// Parse a priority, accepting only the three known values.
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "normal" => Some(Priority::Normal),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Parse leniently: anything unrecognized coerces to `Normal`.
    pub fn parse_or_normal(s: &str) -> Priority {
        Self::parse(s).unwrap_or(Priority::Normal)
    }

    /// Decode a persisted priority field, keeping unrecognized values as-is.
    fn from_record_field(s: &str) -> Priority {
        Self::parse(s).unwrap_or_else(|| Priority::Unknown(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Unknown(s) => s,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// What to do. Never empty when created through the manager; the raw
    /// record path enforces no such invariant.
    pub description: String,

    /// When the task was created.
    pub created_at: DateTime<Utc>,

    /// Whether the task is done.
    pub completed: bool,

    /// Display hint, no ordering semantics beyond rendering.
    pub priority: Priority,
}

impl Task {
    /// Create a new pending task stamped with the current time.
    pub fn new(description: &str, priority: Priority) -> Self {
        Self {
            description: description.to_string(),
            created_at: Utc::now(),
            completed: false,
            priority,
        }
    }

    /// Encode as one record line (no trailing newline): four fields joined
    /// by the delimiter, with the completed flag in `True`/`False` form.
    pub fn to_record(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.description,
            self.created_at.to_rfc3339(),
            if self.completed { "True" } else { "False" },
            self.priority.as_str(),
            d = FIELD_DELIMITER,
        )
    }

    /// Decode a record line. Never fails: a line with fewer than four fields
    /// is treated as a bare description with every other field defaulted.
    pub fn from_record(line: &str) -> Self {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() < 4 {
            return Self::new(line, Priority::Normal);
        }

        Self {
            description: parts[0].to_string(),
            created_at: parse_timestamp(parts[1]).unwrap_or_else(Utc::now),
            completed: parts[2].eq_ignore_ascii_case("true"),
            priority: Priority::from_record_field(parts[3]),
        }
    }

    /// Human-readable one-line form: completion marker, priority glyph,
    /// description.
    pub fn render(&self) -> String {
        let marker = if self.completed { "[x]" } else { "[ ]" };
        let glyph = match self.priority {
            Priority::High => "🔴 ",
            Priority::Low => "🔵 ",
            _ => "",
        };
        format!("{} {}{}", marker, glyph, self.description)
    }
}

/// Parse an ISO-8601 timestamp field, with or without a UTC offset.
/// An empty or unparseable field yields `None` (callers default to now).
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less timestamps from hand-edited files.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
