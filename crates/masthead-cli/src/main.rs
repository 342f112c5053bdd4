use clap::{Parser, Subcommand};
use masthead_common::telemetry::{self, TelemetryConfig};
use masthead_common::{AuthorRegistry, Config};
use masthead_components::FrameOptions;
use masthead_components::render::{render_author_badge, render_author_list, render_frame_text};
use miette::{IntoDiagnostic, Result};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Masthead - render author bylines and content frames to HTML", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Author data file to use instead of the bundled authors
    /// (falls back to $MASTHEAD_AUTHORS)
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a byline for several authors. Unknown keys are skipped.
    Authors {
        /// Author keys, in display order
        ids: Vec<String>,
    },
    /// Render a single author badge
    Badge {
        /// Author key or first name
        id: String,

        /// Show the first name only
        #[arg(long)]
        hide_last_name: bool,
    },
    /// Render a frame around some text
    Frame {
        /// Text placed inside the frame. Markup is escaped, not rendered.
        content: String,

        /// Add the gradient border shell
        #[arg(long)]
        border: bool,

        /// Let the content span the full width
        #[arg(long)]
        full_width: bool,

        /// Drop the tinted background
        #[arg(long)]
        transparent: bool,

        /// Extra classes for the outer container
        #[arg(long, default_value = "")]
        class: String,
    },
    /// List the authors in the registry
    List,
}

fn main() -> Result<()> {
    init_miette();
    telemetry::init(TelemetryConfig::from_env("masthead-cli"));

    let cli = Cli::parse();
    let config = match cli.registry {
        Some(path) => Config::from_authors_path(Some(path)),
        None => Config::from_env(),
    };
    tracing::debug!(source = ?config.authors, "loading author registry");
    let registry = config.registry()?;

    let stdout = std::io::stdout();
    run(cli.command, &registry, &mut stdout.lock())
}

fn run(command: Commands, registry: &AuthorRegistry, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Authors { ids } => {
            let html = render_author_list(registry, &ids);
            if html.is_empty() {
                tracing::info!("none of the requested authors are in the registry");
            }
            writeln!(out, "{html}").into_diagnostic()?;
        }
        Commands::Badge { id, hide_last_name } => {
            let html = render_author_badge(registry, &id, hide_last_name);
            writeln!(out, "{html}").into_diagnostic()?;
        }
        Commands::Frame {
            content,
            border,
            full_width,
            transparent,
            class,
        } => {
            let options = FrameOptions {
                border,
                full_width,
                transparent,
            };
            let html = render_frame_text(options, &class, &content);
            writeln!(out, "{html}").into_diagnostic()?;
        }
        Commands::List => {
            for record in registry.iter() {
                let handle = record.twitter_handle().unwrap_or("-");
                writeln!(out, "{}\t{}\t{}", record.key, record.name, handle).into_diagnostic()?;
            }
        }
    }
    Ok(())
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(3)
                .tab_width(2)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_to_string(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("masthead").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(cli.command, &AuthorRegistry::bundled(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn registry_flag_is_global() {
        let cli = Cli::try_parse_from(["masthead", "list", "--registry", "a.json"]).unwrap();
        assert_eq!(cli.registry, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn list_prints_every_author() {
        let out = run_to_string(&["list"]);
        assert_eq!(out.lines().count(), AuthorRegistry::bundled().len());
        assert!(out.lines().all(|line| line.split('\t').count() == 3));
    }

    #[test]
    fn authors_renders_known_keys() {
        let registry = AuthorRegistry::bundled();
        let first = registry.iter().next().unwrap();
        let out = run_to_string(&["authors", first.key.as_str(), "no-such-author"]);
        assert!(out.contains(first.name.as_str()));
        assert_eq!(out.matches("<a ").count(), 1);
    }

    #[test]
    fn frame_flags_reach_the_markup() {
        let out = run_to_string(&["frame", "hello", "--border", "--full-width"]);
        assert!(out.contains("bg-gradient-to-tr"));
        assert!(out.contains("max-w-full"));
        assert!(out.contains("hello"));
    }

    #[test]
    fn frame_content_is_escaped() {
        let out = run_to_string(&["frame", "<em>hi</em>"]);
        assert!(out.contains("&#60;em&#62;hi&#60;/em&#62;"));
        assert!(!out.contains("<em>"));
    }
}
