//! waypost CLI: Render vertical timelines from JSON documents

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use waypost_engine::{ClassNames, Mode, Pending, TimelineDocument};
use waypost_tui::{render_to_string, IconMode, IconSet, Theme, UiConfig};

/// Render vertical timelines in the terminal
#[derive(Parser)]
#[command(name = "waypost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a timeline as text
    Render {
        #[command(flatten)]
        source: Source,

        /// Output width in columns
        #[arg(long, default_value = "60")]
        width: u16,

        /// Glyph set
        #[arg(long, value_enum, default_value_t = Icons::Unicode)]
        icons: Icons,

        /// Draw a border around the timeline
        #[arg(long)]
        border: bool,
    },

    /// Print the resolved class names of every entry
    Classes {
        #[command(flatten)]
        source: Source,

        /// Class prefix
        #[arg(long, default_value = waypost_engine::DEFAULT_PREFIX)]
        prefix: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a timeline in the interactive viewer
    View {
        #[command(flatten)]
        source: Source,

        /// Color theme (mocha, latte, high-contrast)
        #[arg(long)]
        theme: Option<String>,
    },
}

/// Document path plus configuration overrides.
#[derive(Args)]
struct Source {
    /// Timeline document (JSON)
    file: PathBuf,

    /// Layout mode: left, right or alternate (anything else means none)
    #[arg(long)]
    mode: Option<String>,

    /// Reverse the timeline
    #[arg(long)]
    reverse: bool,

    /// Append a pending entry, optionally with text
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pending: Option<String>,

    /// Dot glyph for the pending entry
    #[arg(long)]
    pending_dot: Option<String>,

    /// Right-to-left layout
    #[arg(long)]
    rtl: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Icons {
    Nerd,
    Unicode,
    Ascii,
}

impl From<Icons> for IconMode {
    fn from(value: Icons) -> Self {
        match value {
            Icons::Nerd => IconMode::Nerd,
            Icons::Unicode => IconMode::Unicode,
            Icons::Ascii => IconMode::Ascii,
        }
    }
}

impl Source {
    /// Load the document and apply command-line overrides.
    fn load(&self) -> Result<TimelineDocument, waypost_engine::DocumentError> {
        let mut document = TimelineDocument::load(&self.file)?;
        self.apply(&mut document);
        Ok(document)
    }

    fn apply(&self, document: &mut TimelineDocument) {
        let config = &mut document.config;
        if let Some(mode) = &self.mode {
            config.mode = Mode::parse(mode);
        }
        if self.reverse {
            config.reverse = true;
        }
        if let Some(text) = &self.pending {
            config.pending = if text.is_empty() {
                Pending::On
            } else {
                Pending::Content(text.clone())
            };
        }
        if let Some(dot) = &self.pending_dot {
            config.pending_dot = Some(dot.clone());
        }
        if self.rtl {
            config.rtl = true;
        }
        debug!(config = ?config, "effective timeline configuration");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            source,
            width,
            icons,
            border,
        } => cmd_render(&source, width, icons, border),
        Commands::Classes {
            source,
            prefix,
            json,
        } => cmd_classes(&source, &prefix, json),
        Commands::View { source, theme } => cmd_view(&source, theme.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn cmd_render(source: &Source, width: u16, icons: Icons, border: bool) -> CmdResult {
    let document = source.load()?;
    let layout = document.resolve();
    let output = render_to_string(
        &layout,
        &Theme::default(),
        &IconSet::new(icons.into()),
        width,
        border,
    );
    println!("{output}");
    Ok(())
}

fn cmd_classes(source: &Source, prefix: &str, json: bool) -> CmdResult {
    let document = source.load()?;
    let layout = document.resolve();
    let report = ClassNames::new(prefix).report(&layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.container);
    for entry in &report.entries {
        let content = entry.content.lines().next().unwrap_or_default();
        println!("  [{}] {content}", entry.index);
        println!("      item: {}", entry.item);
        println!("      head: {}", entry.head);
    }
    Ok(())
}

fn cmd_view(source: &Source, theme: Option<&str>) -> CmdResult {
    let document = source.load()?;
    let theme = theme
        .map(|name| Theme::by_name(name).ok_or_else(|| format!("unknown theme: {name}")))
        .transpose()?;
    waypost_tui::run_viewer_tui(document, &UiConfig::from_env(), theme)
}
