use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_beta_tag::boundary::PlanWarning;
use git_beta_tag::branch_info::EnvBranchInfo;
use git_beta_tag::cli::{run_workflow, WorkflowArgs};
use git_beta_tag::config;
use git_beta_tag::git::Git2Repository;
use git_beta_tag::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-beta-tag",
    about = "Compute and publish the next beta or stable tag for a feat/fix -> main -> release flow"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Branch name to classify, overriding CI variables")]
    branch: Option<String>,

    #[arg(long, help = "Compute the next tag without creating or pushing it")]
    dry_run: bool,

    #[arg(long, help = "Fetch branches and tags from the remote first")]
    fetch: bool,

    #[arg(long, help = "Exit with status 1 when no tag can be derived from the inputs")]
    strict: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "git_beta_tag=debug"
    } else {
        "git_beta_tag=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-beta-tag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = Git2Repository::open(".")
        .context("Not in a git repository")?
        .with_remote(config.tags.remote.clone());

    if args.fetch {
        ui::display_status(&format!("Fetching tags from '{}'...", repo.remote()));
        if let Err(e) = repo.fetch_tags() {
            ui::report_warning(&PlanWarning::FetchFailed {
                remote: repo.remote().to_string(),
                reason: e.to_string(),
            });
        }
    }

    let branch_info = EnvBranchInfo::new(args.branch, config.branch_detection.env_vars.clone())
        .with_repository(&repo);

    let workflow_args = WorkflowArgs {
        dry_run: args.dry_run,
        strict: args.strict,
    };

    let result = run_workflow(&workflow_args, &config, &repo, &repo, &branch_info);

    let code = result.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
