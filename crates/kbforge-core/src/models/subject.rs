use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a subject relative to its super-subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectType {
    /// The concept itself ("elephant").
    Primary,
    /// A narrower group of the concept ("baby elephant").
    Subgroup,
    /// A part or property of the concept ("elephant trunk").
    Aspect,
    Other(String),
}

impl SubjectType {
    pub fn as_str(&self) -> &str {
        match self {
            SubjectType::Primary => "primary",
            SubjectType::Subgroup => "subgroup",
            SubjectType::Aspect => "aspect",
            SubjectType::Other(s) => s,
        }
    }

    pub fn is_aspect(&self) -> bool {
        matches!(self, SubjectType::Aspect)
    }
}

impl From<String> for SubjectType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "primary" => SubjectType::Primary,
            "subgroup" => SubjectType::Subgroup,
            "aspect" => SubjectType::Aspect,
            _ => SubjectType::Other(value),
        }
    }
}

impl From<&str> for SubjectType {
    fn from(value: &str) -> Self {
        SubjectType::from(value.to_string())
    }
}

impl From<SubjectType> for String {
    fn from(value: SubjectType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fine-grained subject: one sense of a subject string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectKey {
    pub subject: String,
    pub subject_type: SubjectType,
    pub super_subject: String,
}

impl SubjectKey {
    pub fn new(
        subject: impl Into<String>,
        subject_type: impl Into<SubjectType>,
        super_subject: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            subject_type: subject_type.into(),
            super_subject: super_subject.into(),
        }
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} of {}]", self.subject, self.subject_type, self.super_subject)
    }
}
