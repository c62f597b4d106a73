//! Registry of the CMS fields that charts can be grouped by

use std::fmt;

/// A chart source field and the label strategy that applies to it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceField {
    /// `anpa_category.qcode`, labelled from the `categories` vocabulary
    Category,
    /// `urgency`, labelled from the `urgency` vocabulary
    Urgency,
    /// `genre.qcode`, labelled from the `genre` vocabulary
    Genre,
    /// `task.desk`, labelled from the desk registry
    Desk,
    /// `task.user`, labelled from the user registry
    User,
    /// `state`, labelled from the closed workflow state set
    State,
    /// `source`, a free-text ingest provider; title only
    Source,
    /// Any other field, looked up as a custom vocabulary
    Custom(String),
}

impl SourceField {
    /// Classify a raw field path
    pub fn parse(field: &str) -> Self {
        match field {
            "anpa_category.qcode" => SourceField::Category,
            "urgency" => SourceField::Urgency,
            "genre.qcode" => SourceField::Genre,
            "task.desk" => SourceField::Desk,
            "task.user" => SourceField::User,
            "state" => SourceField::State,
            "source" => SourceField::Source,
            other => SourceField::Custom(other.to_string()),
        }
    }

    /// Raw field path
    pub fn as_field(&self) -> &str {
        match self {
            SourceField::Category => "anpa_category.qcode",
            SourceField::Urgency => "urgency",
            SourceField::Genre => "genre.qcode",
            SourceField::Desk => "task.desk",
            SourceField::User => "task.user",
            SourceField::State => "state",
            SourceField::Source => "source",
            SourceField::Custom(field) => field,
        }
    }

    /// Fixed display title, if this field has one
    pub fn fixed_title(&self) -> Option<&'static str> {
        match self {
            SourceField::Category => Some("Category"),
            SourceField::Urgency => Some("Urgency"),
            SourceField::Genre => Some("Genre"),
            SourceField::Desk => Some("Desk"),
            SourceField::User => Some("User"),
            SourceField::State => Some("State"),
            SourceField::Source => Some("Source"),
            SourceField::Custom(_) => None,
        }
    }

    /// Vocabulary id backing this field, for vocabulary-labelled fields
    pub fn vocabulary_id(&self) -> Option<&str> {
        match self {
            SourceField::Category => Some("categories"),
            SourceField::Urgency => Some("urgency"),
            SourceField::Genre => Some("genre"),
            SourceField::Custom(field) => Some(field.strip_suffix(".qcode").unwrap_or(field)),
            _ => None,
        }
    }

    /// Cache key shared by every field that resolves through the same lookup
    pub fn cache_key(&self) -> String {
        match self {
            SourceField::Desk => "registry:desks".to_string(),
            SourceField::User => "registry:users".to_string(),
            SourceField::State => "enum:state".to_string(),
            SourceField::Source => "text:source".to_string(),
            other => format!("vocabulary:{}", other.vocabulary_id().unwrap_or_default()),
        }
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_field())
    }
}

impl From<&str> for SourceField {
    fn from(field: &str) -> Self {
        SourceField::parse(field)
    }
}
