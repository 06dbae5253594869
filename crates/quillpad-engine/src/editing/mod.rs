/*!
 * # Editing Session
 *
 * The glue between an editor UI and the article store.
 *
 * The UI is reached only through [`EditorSurface`]: read a field, write a
 * field, show rendered output. [`EditorSession`] owns the store and the id of
 * the article being edited, and drives every author action:
 *
 * - **submit**: publish the form, then clear it and leave edit mode
 * - **save draft**: save unpublished, staying in edit mode on the saved id
 * - **preview**: render the form without saving
 * - **load for edit**: copy an article into the form
 * - **reset**: clear the form, defaulting the date to today
 * - **delete**: remove an article
 *
 * ## Usage Pattern
 *
 * ```rust
 * use quillpad_engine::editing::{EditorSession, EditorSurface};
 * use quillpad_engine::io::MemoryStore;
 * use quillpad_engine::models::{ArticleField, ArticleInput};
 * use quillpad_engine::store::ArticleStore;
 *
 * #[derive(Default)]
 * struct Form {
 *     input: ArticleInput,
 *     rendered: String,
 * }
 *
 * impl EditorSurface for Form {
 *     fn field(&self, field: ArticleField) -> String {
 *         self.input.value(field).to_string()
 *     }
 *     fn set_field(&mut self, field: ArticleField, value: &str) {
 *         self.input.set_value(field, value);
 *     }
 *     fn set_rendered(&mut self, html: &str) {
 *         self.rendered = html.to_string();
 *     }
 * }
 *
 * let mut session = EditorSession::new(ArticleStore::open(MemoryStore::new()));
 * let mut form = Form::default();
 * form.set_field(ArticleField::Content, "Some *thoughts*");
 *
 * session.preview(&mut form);
 * assert_eq!(form.rendered, "<p>Some <em>thoughts</em></p>");
 *
 * let saved = session.save_draft(&form).unwrap();
 * assert_eq!(session.editing(), Some(saved.id()));
 * ```
 */

use chrono::NaiveDate;

use crate::io::KeyValueStore;
use crate::models::{Article, ArticleField, ArticleId, ArticleInput, DATE_FORMAT, SaveMode};
use crate::parsing::markdown_to_html;
use crate::store::{ArticleStore, Clock, StoreError, SystemClock};

/// Placeholders shown by a preview in place of blank fields.
pub const PREVIEW_TITLE: &str = "Untitled preview";
pub const PREVIEW_CATEGORY: &str = "Uncategorized";
pub const PREVIEW_CONTENT: &str = "No content yet";

/// The editor UI as the session sees it.
pub trait EditorSurface {
    /// Current raw value of a form field.
    fn field(&self, field: ArticleField) -> String;

    fn set_field(&mut self, field: ArticleField, value: &str);

    /// Shows rendered article HTML.
    fn set_rendered(&mut self, html: &str);
}

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(ArticleId),
    Updated(ArticleId),
}

impl SaveOutcome {
    pub fn id(self) -> ArticleId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// An unsaved rendering of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub category: String,
    pub date: String,
    pub html: String,
}

/// A stored article together with its rendered body.
#[derive(Debug)]
pub struct ArticleView<'a> {
    pub article: &'a Article,
    pub html: String,
}

pub struct EditorSession<S, C = SystemClock> {
    store: ArticleStore<S, C>,
    editing: Option<ArticleId>,
}

impl<S: KeyValueStore, C: Clock> EditorSession<S, C> {
    pub fn new(store: ArticleStore<S, C>) -> Self {
        Self {
            store,
            editing: None,
        }
    }

    pub fn store(&self) -> &ArticleStore<S, C> {
        &self.store
    }

    /// Id of the article the form is bound to, if any.
    pub fn editing(&self) -> Option<ArticleId> {
        self.editing
    }

    /// Publishes the form. On success the form is reset and edit mode ends;
    /// on failure both are left as they were.
    pub fn submit(&mut self, surface: &mut impl EditorSurface) -> Result<SaveOutcome, StoreError> {
        let outcome = self.save(surface, SaveMode::Publish)?;
        self.reset(surface);
        Ok(outcome)
    }

    /// Saves the form as a draft and keeps editing the saved article, so a
    /// second save updates it rather than creating another.
    pub fn save_draft(&mut self, surface: &impl EditorSurface) -> Result<SaveOutcome, StoreError> {
        let outcome = self.save(surface, SaveMode::Draft)?;
        self.editing = Some(outcome.id());
        Ok(outcome)
    }

    /// Renders the form without saving anything. Blank fields show
    /// placeholders; a blank date shows today.
    pub fn preview(&self, surface: &mut impl EditorSurface) -> Preview {
        let or = |field: ArticleField, placeholder: &str| {
            let value = surface.field(field).trim().to_string();
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value
            }
        };

        let title = or(ArticleField::Title, PREVIEW_TITLE);
        let category = or(ArticleField::Category, PREVIEW_CATEGORY);
        let date = or(ArticleField::Date, &self.today());
        let html = markdown_to_html(&or(ArticleField::Content, PREVIEW_CONTENT));

        surface.set_rendered(&html);
        Preview {
            title,
            category,
            date,
            html,
        }
    }

    /// Copies article `id` into the form and binds the session to it.
    pub fn load_for_edit(
        &mut self,
        id: ArticleId,
        surface: &mut impl EditorSurface,
    ) -> Result<(), StoreError> {
        let article = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        let input = article.to_input();
        for field in ArticleField::ALL {
            surface.set_field(field, input.value(field));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Clears the form, sets its date to today and leaves edit mode.
    pub fn reset(&mut self, surface: &mut impl EditorSurface) {
        for field in ArticleField::ALL {
            surface.set_field(field, "");
        }
        surface.set_field(ArticleField::Date, &self.today());
        self.editing = None;
    }

    /// Renders a stored article for reading.
    pub fn view(&self, id: ArticleId) -> Option<ArticleView<'_>> {
        self.store.get(id).map(|article| ArticleView {
            article,
            html: markdown_to_html(article.content()),
        })
    }

    /// Deletes article `id`. Deleting the article being edited ends edit
    /// mode so a later save creates a new article.
    pub fn delete(&mut self, id: ArticleId) -> Result<bool, StoreError> {
        let removed = self.store.delete(id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        Ok(removed)
    }

    fn save(&mut self, surface: &impl EditorSurface, mode: SaveMode) -> Result<SaveOutcome, StoreError> {
        let input = read_input(surface);
        match self.editing {
            Some(id) => {
                self.store.update(id, &input, mode)?;
                Ok(SaveOutcome::Updated(id))
            }
            None => {
                let article = self.store.create(&input, mode)?;
                Ok(SaveOutcome::Created(article.id()))
            }
        }
    }

    fn today(&self) -> String {
        format_date(self.store.clock().today())
    }
}

fn read_input(surface: &impl EditorSurface) -> ArticleInput {
    let mut input = ArticleInput::default();
    for field in ArticleField::ALL {
        input.set_value(field, surface.field(field));
    }
    input
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
