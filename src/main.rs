//! mergelog - CLI entry point.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mergelog::changelog::{ClassifiedPr, render_document, render_table, select_in_range};
use mergelog::git::commits_in_range;
use mergelog::github::{fetch_closed_prs, resolve_token};

/// Labels a PR must carry to be changelog-relevant, unless --all-prs is set.
const DEFAULT_LABEL_FILTER: [&str; 2] = ["impact/changelog", "impact/breaking"];

/// Build a changelog from merged GitHub PRs in a git tag range.
#[derive(Parser, Debug)]
#[command(name = "mergelog")]
#[command(about = "Build a changelog from merged GitHub PRs in a git tag range")]
#[command(version)]
struct Cli {
    /// Start of the changelog range, as a git tag or revision (exclusive)
    #[arg(long)]
    from: String,

    /// End of the changelog range, as a git tag or revision (inclusive)
    #[arg(long)]
    to: String,

    /// GitHub owner or organization
    #[arg(short = 'o', long)]
    owner: String,

    /// Comma-separated list of GitHub repositories
    #[arg(short = 'r', long, value_delimiter = ',', required = true)]
    repos: Vec<String>,

    /// Directory containing one git working tree per repository
    #[arg(short = 'd', long, default_value = ".")]
    git_root: PathBuf,

    /// GitHub access token. If not provided, uses environment variable GITHUB_TOKEN
    #[arg(long)]
    token: Option<String>,

    /// List all pull requests in range, regardless of label
    #[arg(long)]
    all_prs: bool,

    /// Output a tab-separated table instead of a markdown document
    #[arg(long)]
    tab_output: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let token = match resolve_token(cli.token.as_deref()) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error: {}", e);
            let _ = Cli::command().write_help(&mut std::io::stderr());
            eprintln!();
            std::process::exit(1);
        }
    };

    let label_filter = (!cli.all_prs).then(|| {
        DEFAULT_LABEL_FILTER
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
    });

    let mut all_prs: Vec<ClassifiedPr> = Vec::new();
    let mut contributors: Vec<String> = Vec::new();
    let mut seen_prs: HashSet<(String, u64)> = HashSet::new();

    // Repositories are processed one at a time, in the given order. A fetch
    // or range failure costs that repository its contribution, not the run.
    for repo in &cli.repos {
        eprintln!("--- Getting closed PRs for {}:{} ---", cli.owner, repo);

        let prs = match fetch_closed_prs(&token, &cli.owner, repo).await {
            Ok(prs) => prs,
            Err(e) => {
                eprintln!("Warning: skipping {}/{}: {}", cli.owner, repo, e);
                continue;
            }
        };

        let workdir = cli.git_root.join(repo);
        eprintln!(
            "--- Resolving {}..{} in {} ---",
            cli.from,
            cli.to,
            workdir.display()
        );

        let in_range = match commits_in_range(&workdir, &cli.from, &cli.to) {
            Ok(hashes) => hashes,
            Err(e) => {
                eprintln!("Warning: skipping {}/{}: {}", cli.owner, repo, e);
                continue;
            }
        };

        let selection = select_in_range(prs, &in_range, label_filter.as_deref());

        for item in selection.prs {
            if seen_prs.insert((item.pr.head_repo.clone(), item.pr.number)) {
                all_prs.push(item);
            }
        }
        for login in selection.contributors {
            if !contributors.contains(&login) {
                contributors.push(login);
            }
        }
    }

    let output = if cli.tab_output {
        render_table(&all_prs)
    } else {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        render_document(&all_prs, &cli.to, &date)
    };

    print!("{}", output);

    if !contributors.is_empty() {
        eprintln!("Contributors: {}", contributors.join(", "));
    }
    eprintln!(
        "--- Done: {} pull requests across {} repositories ---",
        all_prs.len(),
        cli.repos.len()
    );

    Ok(())
}
