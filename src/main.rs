use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hkphub::catalog::{Section, SectionId};
use hkphub::{App, Catalog, Config};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hkphub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file to use instead of the bundled lessons
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Section to open on start (html, css, python, c, cpp, java, os, linux)
    #[arg(long)]
    section: Option<SectionId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List sections with their lesson counts
    List,
    /// Print a section's lessons, or one lesson
    Show {
        /// Section id
        section: SectionId,
        /// Lesson number (1-based)
        lesson: Option<usize>,
    },
}

/// Log to a file in the data directory so the TUI is left alone
fn init_logging() {
    let writer = Config::log_path()
        .ok()
        .and_then(|path| {
            std::fs::create_dir_all(path.parent()?).ok()?;
            std::fs::OpenOptions::new().create(true).append(true).open(path).ok()
        })
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(std::io::sink));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hkphub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
        .init();
}

/// Resolve the catalog: --catalog, then the config file, then the bundled set
fn load_catalog(flag: Option<&Path>, config: &Config) -> Result<Catalog> {
    match flag.or(config.catalog_path.as_deref()) {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("Failed to load catalog from {:?}", path))
        }
        None => Catalog::builtin().context("Bundled catalog is invalid"),
    }
}

fn find_section(catalog: &Catalog, id: SectionId) -> Result<&Section> {
    match catalog.find_section(id) {
        Some(section) => Ok(section),
        None => bail!("Section '{}' is not in the catalog", id),
    }
}

fn print_sections(catalog: &Catalog) {
    for section in catalog.sections() {
        let groups = if section.has_categories() {
            format!("{:>2} groups", section.group_by_category().len())
        } else {
            "ungrouped".to_string()
        };
        println!(
            "{:<8} {:<18} {:>3} lessons  {}",
            section.id.as_str(),
            section.title,
            section.topics.len(),
            groups
        );
    }
}

fn print_index(section: &Section) {
    println!("{} Notes", section.title);
    println!("{}", section.short_desc);
    for group in section.group_by_category() {
        println!();
        println!("{}", group.label);
        for entry in &group.entries {
            println!("  [{:>2}] {}", entry.index + 1, entry.topic.title);
        }
    }
}

fn print_lesson(section: &Section, number: usize) -> Result<()> {
    let Some(topic) = number.checked_sub(1).and_then(|i| section.topic(i)) else {
        bail!(
            "Lesson {} does not exist in '{}' ({} lessons)",
            number,
            section.id,
            section.topics.len()
        );
    };

    match topic.category() {
        Some(category) => println!("{} • Lesson {}", category, number),
        None => println!("Lesson {}", number),
    }
    println!("{}", topic.title);
    println!();
    for paragraph in topic.content.lines() {
        for line in textwrap::wrap(paragraph, 80) {
            println!("{}", line);
        }
    }
    if let Some(snippet) = topic.snippet() {
        println!();
        println!("Practical Example:");
        println!("{}", snippet);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load()?;
    let catalog = load_catalog(cli.catalog.as_deref(), &config)?;

    match cli.command {
        Some(Commands::List) => print_sections(&catalog),
        Some(Commands::Show { section, lesson }) => {
            let section = find_section(&catalog, section)?;
            match lesson {
                Some(number) => print_lesson(section, number)?,
                None => print_index(section),
            }
        }
        None => {
            let mut app = App::new(&config, catalog, cli.section)?;
            app.run()?;
        }
    }

    Ok(())
}
