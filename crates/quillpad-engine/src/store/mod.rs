//! # Article Store
//!
//! The article collection, owned by one session and persisted as a whole
//! through a [`KeyValueStore`] after every mutation.
//!
//! ## Lifecycle
//!
//! - **Open**: the collection is read in full from [`ARTICLES_KEY`]. Missing,
//!   unreadable or corrupt data never fails the open: it is logged and
//!   replaced by a collection holding a single welcome article.
//! - **Mutate**: `create`, `update` and `delete` change the collection and
//!   then write it back. If the write fails the change is rolled back, so the
//!   collection in memory always matches the last successful write.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use std::collections::HashSet;

use crate::io::{KeyValueStore, StorageError};
use crate::models::{Article, ArticleId, ArticleInput, SaveMode, ValidationError};

/// Key the serialized collection is stored under.
pub const ARTICLES_KEY: &str = "blogArticles";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Article not found: {0}")]
    NotFound(ArticleId),
    #[error("Failed to save articles: {0}")]
    Write(#[source] StorageError),
    #[error("No article id is left above {0}")]
    IdsExhausted(ArticleId),
}

/// One window of the published listing.
#[derive(Debug)]
pub struct PublishedPage<'a> {
    /// Published articles, newest date first.
    pub articles: Vec<&'a Article>,
    /// Number of published articles overall.
    pub total: usize,
}

impl PublishedPage<'_> {
    /// Whether a further page would show more articles.
    pub fn has_more(&self) -> bool {
        self.total > self.articles.len()
    }
}

pub struct ArticleStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    articles: Vec<Article>,
    /// Highest id ever minted or loaded. Never decreases, so a deleted id is
    /// never handed out again.
    last_minted: Option<ArticleId>,
}

impl<S: KeyValueStore> ArticleStore<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ArticleStore<S, C> {
    pub fn open_with_clock(storage: S, clock: C) -> Self {
        let articles = match storage.get(ARTICLES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Article>>(&json) {
                Ok(articles) => dedup_ids(articles),
                Err(e) => {
                    log::warn!("Stored articles are corrupt, starting over: {e}");
                    Self::seed(&clock)
                }
            },
            Ok(None) => {
                log::info!("No stored articles, seeding the welcome article");
                Self::seed(&clock)
            }
            Err(e) => {
                log::warn!("Failed to read stored articles, starting over: {e}");
                Self::seed(&clock)
            }
        };

        let last_minted = articles.iter().map(Article::id).max();
        Self {
            storage,
            clock,
            articles,
            last_minted,
        }
    }

    fn seed(clock: &C) -> Vec<Article> {
        vec![Article::welcome(
            clock.now().timestamp_millis(),
            clock.today(),
        )]
    }

    /// All articles in collection order (most recently created first).
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates `input` and adds it as a new article at the front of the
    /// collection.
    pub fn create(&mut self, input: &ArticleInput, mode: SaveMode) -> Result<&Article, StoreError> {
        let fields = input.validate(mode)?;
        let id = self.mint_id()?;
        self.articles
            .insert(0, Article::new(id, fields, mode.is_publish()));

        if let Err(e) = self.persist() {
            self.articles.remove(0);
            return Err(StoreError::Write(e));
        }

        log::debug!("Created article {id} ({mode:?})");
        Ok(&self.articles[0])
    }

    /// Validates `input` and replaces the fields of article `id` in place.
    pub fn update(
        &mut self,
        id: ArticleId,
        input: &ArticleInput,
        mode: SaveMode,
    ) -> Result<&Article, StoreError> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        let fields = input.validate(mode)?;

        let previous = self.articles[index].clone();
        self.articles[index].apply(fields, mode.is_publish(), self.clock.now());

        if let Err(e) = self.persist() {
            self.articles[index] = previous;
            return Err(StoreError::Write(e));
        }

        log::debug!("Updated article {id} ({mode:?})");
        Ok(&self.articles[index])
    }

    /// Removes article `id`. Returns whether anything was removed; an
    /// unknown id is not an error and writes nothing.
    pub fn delete(&mut self, id: ArticleId) -> Result<bool, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };

        let removed = self.articles.remove(index);
        if let Err(e) = self.persist() {
            self.articles.insert(index, removed);
            return Err(StoreError::Write(e));
        }

        log::debug!("Deleted article {id}");
        Ok(true)
    }

    /// Published articles sorted by date, newest first, limited to the first
    /// `page * page_size` entries. Pages count from 1. Articles sharing a
    /// date keep collection order.
    pub fn list_published(&self, page: usize, page_size: usize) -> PublishedPage<'_> {
        let mut published: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| article.is_published())
            .collect();
        published.sort_by(|a, b| b.date().cmp(&a.date()));

        let total = published.len();
        published.truncate(page.saturating_mul(page_size));

        PublishedPage {
            articles: published,
            total,
        }
    }

    fn index_of(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|article| article.id() == id)
    }

    /// Current time in milliseconds, bumped past every id minted or loaded
    /// so far.
    fn mint_id(&mut self) -> Result<ArticleId, StoreError> {
        let now = self.clock.now().timestamp_millis();
        let id = match self.last_minted {
            Some(last) => last
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted(last))?
                .max(now),
            None => now,
        };
        self.last_minted = Some(id);
        Ok(id)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.articles)?;
        self.storage.set(ARTICLES_KEY, &json).inspect_err(|e| {
            log::error!("Failed to write articles: {e}");
        })
    }
}

/// Keeps the first article for each id.
fn dedup_ids(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    let before = articles.len();
    let articles: Vec<Article> = articles
        .into_iter()
        .filter(|article| seen.insert(article.id()))
        .collect();
    if articles.len() != before {
        log::warn!(
            "Dropped {} stored articles with duplicate ids",
            before - articles.len()
        );
    }
    articles
}
