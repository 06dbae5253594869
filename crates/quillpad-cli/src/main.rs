mod browse;
mod surface;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use quillpad_config::{Config, DEFAULT_PAGE_SIZE};
use quillpad_engine::{
    ArticleField, ArticleId, ArticleStore, EditorSession, EditorSurface, FileStore, SaveOutcome,
    markdown_to_html,
};
use std::path::{Path, PathBuf};

use surface::ArgsSurface;

#[derive(Parser)]
#[command(name = "quillpad", version, about = "Write, publish and read short articles")]
struct Cli {
    /// Directory holding the article data, overriding the config file
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List published articles, newest first
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one article rendered to HTML
    Show { id: ArticleId },
    /// Render a markup file to HTML on stdout
    Render { file: PathBuf },
    /// Publish a new article, or an existing one with --edit
    Publish(ArticleArgs),
    /// Save a draft, or update one with --edit
    Draft(ArticleArgs),
    /// Render article fields without saving, as the form preview does
    Preview(ArticleArgs),
    /// Delete an article
    Delete { id: ArticleId },
    /// Browse published articles interactively
    Browse,
}

#[derive(Args)]
struct ArticleArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Publication date, YYYY-MM-DD (defaults to today for new articles)
    #[arg(long)]
    date: Option<String>,
    /// Summary; derived from the content when left blank
    #[arg(long)]
    excerpt: Option<String>,
    /// File holding the article body
    #[arg(long, value_name = "FILE")]
    content_file: Option<PathBuf>,
    /// Id of an existing article to edit instead of creating one
    #[arg(long, value_name = "ID")]
    edit: Option<ArticleId>,
}

impl ArticleArgs {
    /// Field values given on the command line, content read from its file.
    fn fields(&self) -> Result<Vec<(ArticleField, String)>> {
        let mut fields = Vec::new();
        let given = [
            (ArticleField::Title, &self.title),
            (ArticleField::Category, &self.category),
            (ArticleField::Date, &self.date),
            (ArticleField::Excerpt, &self.excerpt),
        ];
        for (field, value) in given {
            if let Some(value) = value {
                fields.push((field, value.clone()));
            }
        }
        if let Some(path) = &self.content_file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file {}", path.display()))?;
            fields.push((ArticleField::Content, content));
        }
        Ok(fields)
    }
}

/// Where the data lives and how much to show, from the command line or the
/// config file.
struct Settings {
    data_path: PathBuf,
    page_size: usize,
}

impl Settings {
    fn resolve(data: Option<PathBuf>) -> Result<Self> {
        let config_path = Config::config_path();
        log::info!("Config path: {}", config_path.display());

        let config = Config::load()
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
        let page_size = config
            .as_ref()
            .map_or(DEFAULT_PAGE_SIZE, |config| config.page_size);
        let data_path = match (data, config) {
            (Some(data), _) => data,
            (None, Some(config)) => config.data_path,
            (None, None) => Config::default_data_path(),
        };
        log::info!("Data path: {}", data_path.display());

        Ok(Self {
            data_path,
            page_size,
        })
    }

    fn open_session(&self) -> Result<EditorSession<FileStore>> {
        let storage = FileStore::create(&self.data_path).with_context(|| {
            format!("Data path '{}' is invalid", self.data_path.display())
        })?;
        Ok(EditorSession::new(ArticleStore::open(storage)))
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Rendering a file needs no data directory
    if let Command::Render { file } = &cli.command {
        return render(file);
    }

    let settings = Settings::resolve(cli.data)?;
    let mut session = settings.open_session()?;

    match cli.command {
        Command::List { page } => list(&session, page, settings.page_size),
        Command::Show { id } => show(&session, id),
        Command::Publish(args) => save(&mut session, &args, true),
        Command::Draft(args) => save(&mut session, &args, false),
        Command::Preview(args) => preview(&mut session, &args),
        Command::Delete { id } => {
            if session.delete(id)? {
                println!("Deleted article {id}");
            } else {
                println!("No article with id {id}");
            }
            Ok(())
        }
        Command::Browse => browse::run(session, settings.page_size),
        Command::Render { file } => render(&file),
    }
}

fn render(file: &Path) -> Result<()> {
    let markdown = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    println!("{}", markdown_to_html(&markdown));
    Ok(())
}

fn list(session: &EditorSession<FileStore>, page: usize, page_size: usize) -> Result<()> {
    let listing = session.store().list_published(page, page_size);
    if listing.articles.is_empty() {
        println!("No published articles");
        return Ok(());
    }

    for article in &listing.articles {
        println!(
            "{:>14}  {}  [{}] {}",
            article.id(),
            display_date(article.date()),
            article.category(),
            article.title()
        );
        if !article.excerpt().is_empty() {
            println!("{:>16}{}", "", article.excerpt().replace('\n', " "));
        }
    }
    if listing.has_more() {
        println!(
            "Showing {} of {}; use --page {} for more",
            listing.articles.len(),
            listing.total,
            page + 1
        );
    }
    Ok(())
}

fn show(session: &EditorSession<FileStore>, id: ArticleId) -> Result<()> {
    let Some(view) = session.view(id) else {
        bail!("No article with id {id}");
    };
    let article = view.article;
    println!("{}", article.title());
    println!(
        "{} | {} ({}){}",
        display_date(article.date()),
        article.category(),
        article.icon(),
        if article.is_published() { "" } else { " | draft" }
    );
    println!();
    println!("{}", view.html);
    Ok(())
}

/// A form holding the article being edited, or a fresh one, with the
/// command-line values laid over it.
fn fill_form(session: &mut EditorSession<FileStore>, args: &ArticleArgs) -> Result<ArgsSurface> {
    let mut surface = ArgsSurface::default();
    match args.edit {
        Some(id) => session.load_for_edit(id, &mut surface)?,
        None => session.reset(&mut surface),
    }
    for (field, value) in args.fields()? {
        surface.set_field(field, &value);
    }
    Ok(surface)
}

fn save(session: &mut EditorSession<FileStore>, args: &ArticleArgs, publish: bool) -> Result<()> {
    let mut surface = fill_form(session, args)?;
    let outcome = if publish {
        session.submit(&mut surface)?
    } else {
        session.save_draft(&surface)?
    };

    let verb = match (outcome, publish) {
        (SaveOutcome::Created(_), true) => "Published",
        (SaveOutcome::Updated(_), true) => "Updated and published",
        (SaveOutcome::Created(_), false) => "Saved draft",
        (SaveOutcome::Updated(_), false) => "Updated draft",
    };
    println!("{verb} article {}", outcome.id());
    Ok(())
}

fn preview(session: &mut EditorSession<FileStore>, args: &ArticleArgs) -> Result<()> {
    let mut surface = fill_form(session, args)?;
    let preview = session.preview(&mut surface);
    println!("{}", preview.title);
    println!("{} | {}", preview.date, preview.category);
    println!();
    println!("{}", surface.rendered().unwrap_or_default());
    Ok(())
}

/// Long-form date for display, e.g. "March 10, 2024".
fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "undated".to_string())
}
