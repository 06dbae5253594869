use std::fmt;

use chrono::NaiveDate;

use super::excerpt::derive_excerpt;

/// Date format for the article `date` field (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The author-editable fields of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Category,
    Date,
    Excerpt,
    Content,
}

impl ArticleField {
    pub const ALL: [ArticleField; 5] = [
        ArticleField::Title,
        ArticleField::Category,
        ArticleField::Date,
        ArticleField::Excerpt,
        ArticleField::Content,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArticleField::Title => "title",
            ArticleField::Category => "category",
            ArticleField::Date => "date",
            ArticleField::Excerpt => "excerpt",
            ArticleField::Content => "content",
        }
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a save publishes the article or keeps it as a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Draft,
    Publish,
}

impl SaveMode {
    /// Fields that must be non-empty for this mode.
    pub fn required_fields(self) -> &'static [ArticleField] {
        match self {
            SaveMode::Draft => &[ArticleField::Content],
            SaveMode::Publish => &[
                ArticleField::Title,
                ArticleField::Category,
                ArticleField::Date,
                ArticleField::Content,
            ],
        }
    }

    pub fn is_publish(self) -> bool {
        matches!(self, SaveMode::Publish)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ArticleField>),
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

fn join_fields(fields: &[ArticleField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw field values as supplied by the author, with no validation applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleInput {
    pub title: String,
    pub category: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
}

/// Validated, trimmed field values ready to become an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub excerpt: String,
    pub content: String,
}

impl ArticleInput {
    pub fn value(&self, field: ArticleField) -> &str {
        match field {
            ArticleField::Title => &self.title,
            ArticleField::Category => &self.category,
            ArticleField::Date => &self.date,
            ArticleField::Excerpt => &self.excerpt,
            ArticleField::Content => &self.content,
        }
    }

    pub fn set_value(&mut self, field: ArticleField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ArticleField::Title => self.title = value,
            ArticleField::Category => self.category = value,
            ArticleField::Date => self.date = value,
            ArticleField::Excerpt => self.excerpt = value,
            ArticleField::Content => self.content = value,
        }
    }

    /// Validates the input for `mode`.
    ///
    /// Every field is trimmed. All missing required fields are reported
    /// together. A non-empty date must parse as `YYYY-MM-DD`, drafts included.
    /// A blank excerpt is derived from the content.
    pub fn validate(&self, mode: SaveMode) -> Result<ArticleFields, ValidationError> {
        let missing: Vec<ArticleField> = mode
            .required_fields()
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let date = match self.date.trim() {
            "" => None,
            date => Some(
                NaiveDate::parse_from_str(date, DATE_FORMAT)
                    .map_err(|_| ValidationError::InvalidDate(date.to_string()))?,
            ),
        };

        let content = self.content.trim().to_string();
        let excerpt = match self.excerpt.trim() {
            "" => derive_excerpt(&content),
            excerpt => excerpt.to_string(),
        };

        Ok(ArticleFields {
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            date,
            excerpt,
            content,
        })
    }
}
