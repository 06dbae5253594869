use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quillpad_engine::{ArticleId, EditorSession, FileStore, KeyValueStore, store::Clock};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::stdout;

use crate::display_date;

/// Two-pane browser: published articles on the left, the selected article
/// rendered on the right.
struct App<S, C> {
    session: EditorSession<S, C>,
    page: usize,
    page_size: usize,
    article_ids: Vec<ArticleId>,
    has_more: bool,
    list_state: ListState,
    current_content: Vec<String>,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    fn new(session: EditorSession<S, C>, page_size: usize) -> Self {
        let mut app = Self {
            session,
            page: 1,
            page_size,
            article_ids: Vec::new(),
            has_more: false,
            list_state: ListState::default(),
            current_content: Vec::new(),
        };
        app.refresh_listing();

        // Select first article if available
        if !app.article_ids.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn refresh_listing(&mut self) {
        let listing = self.session.store().list_published(self.page, self.page_size);
        self.has_more = listing.has_more();
        self.article_ids = listing.articles.iter().map(|article| article.id()).collect();
    }

    fn load_more(&mut self) {
        if self.has_more {
            self.page += 1;
            self.refresh_listing();
            log::debug!("Showing page {} of published articles", self.page);
        }
    }

    fn next_article(&mut self) {
        if self.article_ids.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.article_ids.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_article(&mut self) {
        if self.article_ids.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.article_ids.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let selected = self
            .list_state
            .selected()
            .and_then(|index| self.article_ids.get(index))
            .and_then(|id| self.session.view(*id));

        self.current_content = match selected {
            Some(view) => {
                let article = view.article;
                let mut lines = vec![
                    article.title().to_string(),
                    format!(
                        "{} | {} [{}]",
                        display_date(article.date()),
                        article.category(),
                        article.icon()
                    ),
                    String::new(),
                ];
                lines.extend(view.html.lines().map(str::to_string));
                lines
            }
            None => Vec::new(),
        };
    }

    fn list_items(&self) -> Vec<ListItem<'static>> {
        self.article_ids
            .iter()
            .filter_map(|id| self.session.store().get(*id))
            .map(|article| {
                let display_text = format!("{}  {}", display_date(article.date()), article.title());
                ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
            })
            .collect()
    }
}

pub fn run(session: EditorSession<FileStore>, page_size: usize) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, page_size);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, C>(terminal: &mut Terminal<B>, app: &mut App<S, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    S: KeyValueStore,
    C: Clock,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                KeyCode::Char('m') => app.load_more(),
                _ => {}
            }
        }
    }
}

fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &mut App<S, C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[0]);

    // Article list panel
    let title = if app.has_more {
        "Articles (m: more)"
    } else {
        "Articles"
    };
    let articles = List::new(app.list_items())
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(articles, chunks[0], &mut app.list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No published articles yet")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("m: Load more"),
    ]);

    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use quillpad_engine::{
        ArticleInput, ArticleStore, MemoryStore, SaveMode,
        store::{ARTICLES_KEY, FixedClock},
    };

    fn app_with(count: usize, page_size: usize) -> App<MemoryStore, FixedClock> {
        let mut storage = MemoryStore::new();
        storage.set(ARTICLES_KEY, "[]").unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut store = ArticleStore::open_with_clock(storage, clock);
        for day in 1..=count {
            let input = ArticleInput {
                title: format!("Day {day}"),
                category: "Life".to_string(),
                date: format!("2024-01-{day:02}"),
                excerpt: String::new(),
                content: format!("Entry for **day {day}**"),
            };
            store.create(&input, SaveMode::Publish).unwrap();
        }
        App::new(EditorSession::new(store), page_size)
    }

    #[test]
    fn test_selects_newest_article() {
        let app = app_with(3, 2);

        assert_eq!(app.article_ids.len(), 2);
        assert!(app.has_more);
        assert_eq!(app.current_content[0], "Day 3");
        assert_eq!(
            app.current_content.last().unwrap(),
            "<p>Entry for <strong>day 3</strong></p>"
        );
    }

    #[test]
    fn test_load_more_extends_listing() {
        let mut app = app_with(3, 2);

        app.load_more();

        assert_eq!(app.article_ids.len(), 3);
        assert!(!app.has_more);
        app.load_more();
        assert_eq!(app.page, 2);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app_with(2, 6);

        app.previous_article();
        assert_eq!(app.list_state.selected(), Some(1));
        app.next_article();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_listing() {
        let mut app = app_with(0, 6);

        app.next_article();

        assert!(app.current_content.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }
}
