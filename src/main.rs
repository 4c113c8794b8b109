use anyhow::Result;
use clap::Parser;

use gh_release::analyzer::get_next_version_and_release_notes;
use gh_release::changelog::extract_changelog_from_github;
use gh_release::config;
use gh_release::github::{GithubClient, RepoRef};
use gh_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "gh-release",
    about = "Compute the next semantic version and changelog from GitHub history"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Repository slug, e.g. owner/name (defaults to $GITHUB_REPOSITORY)"
    )]
    repo: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "GitHub API token (defaults to $GITHUB_TOKEN)"
    )]
    token: Option<String>,

    #[arg(long, global = true, help = "Print the result as JSON")]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Determine the next version and release notes from commit history
    NextVersion,
    /// Assemble a combined changelog from published releases
    Changelog,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let slug = args
        .repo
        .or_else(|| std::env::var("GITHUB_REPOSITORY").ok())
        .unwrap_or_default();
    if slug.is_empty() {
        ui::display_error("No repository given; pass --repo or set GITHUB_REPOSITORY");
        std::process::exit(1);
    }
    let repo = RepoRef::from_slug(&slug)?;

    let token = args.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    let host = GithubClient::new(&config.github.api_base, &repo, token)?;

    match args.command {
        Command::NextVersion => {
            let analysis = get_next_version_and_release_notes(&host, &config)?;

            for warning in &analysis.warnings {
                ui::display_warning(warning);
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(&analysis.result)?);
            } else {
                ui::display_bump_result(&analysis.result);
            }
        }
        Command::Changelog => {
            let changelog = extract_changelog_from_github(&host, &repo)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&changelog)?);
            } else {
                println!("{}", changelog.markdown);
            }
        }
    }

    Ok(())
}
