use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    input::{ArticleFields, ArticleInput},
};

/// Article identifier: milliseconds since the Unix epoch at creation time.
pub type ArticleId = i64;

/// A persisted article.
///
/// Serializes to the JSON shape of the stored collection: camelCase keys, a
/// draft's missing date as `""`, and no `updatedAt` key until the article has
/// been saved a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: ArticleId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default, with = "optional_date")]
    date: Option<NaiveDate>,
    #[serde(default)]
    excerpt: String,
    content: String,
    published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Creates an article from validated fields. `updated_at` stays empty
    /// until the first edit.
    pub fn new(id: ArticleId, fields: ArticleFields, published: bool) -> Self {
        Self {
            id,
            title: fields.title,
            category: fields.category,
            date: fields.date,
            excerpt: fields.excerpt,
            content: fields.content,
            published,
            updated_at: None,
        }
    }

    /// The article shown to a new author before anything has been written.
    pub fn welcome(id: ArticleId, date: NaiveDate) -> Self {
        Self {
            id,
            title: "Welcome to my blog".to_string(),
            category: Category::Tech.name().to_string(),
            date: Some(date),
            excerpt: "Notes on what I learn, what I build, and what I think about along the way. Thanks for stopping by..."
                .to_string(),
            content: WELCOME_CONTENT.to_string(),
            published: true,
            updated_at: None,
        }
    }

    /// Replaces every editable field, keeping the id.
    pub fn apply(&mut self, fields: ArticleFields, published: bool, updated_at: DateTime<Utc>) {
        self.title = fields.title;
        self.category = fields.category;
        self.date = fields.date;
        self.excerpt = fields.excerpt;
        self.content = fields.content;
        self.published = published;
        self.updated_at = Some(updated_at);
    }

    /// The article's fields as raw input, for loading into an editor.
    pub fn to_input(&self) -> ArticleInput {
        ArticleInput {
            title: self.title.clone(),
            category: self.category.clone(),
            date: self
                .date
                .map(|date| date.format(super::input::DATE_FORMAT).to_string())
                .unwrap_or_default(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Display icon for the category, with a fallback for unknown names.
    pub fn icon(&self) -> &'static str {
        Category::icon_for(&self.category)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

const WELCOME_CONTENT: &str = "# Welcome to my blog

This is my personal blog. Here I share:

## Tech
- Things I learn while programming
- Lessons from projects
- Solutions to problems I ran into

## Life
Small moments, and thoughts on growing along the way.

## Notes
Summaries of the important ideas from what I study.

---

Looking forward to hearing from you!";

/// `date` as `YYYY-MM-DD`, with an empty string standing for no date.
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::models::input::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.collect_str(&date.format(DATE_FORMAT)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.trim() {
            "" => Ok(None),
            date => NaiveDate::parse_from_str(date, DATE_FORMAT)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}
