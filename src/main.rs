use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use snap::areas::config::Config;
use snap::areas::repository::Repository;
use snap::artifacts::core::PagerWriter;
use snap::commands::porcelain::log::LogOptions;

#[derive(Parser)]
#[command(
    name = "snap",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny snapshot-based version control system",
    long_about = "snap records whole-tree snapshots of a working directory. \
    Files are staged into an index, frozen into commits that each carry their \
    complete file set, and restored by checking out branches or commits.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files (directories are walked recursively) \
        and records them in the index. Staged files that were deleted from disk are dropped from the index."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command freezes the index into a new commit on top of HEAD."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists commits from HEAD back to the root commit."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "show",
        about = "Show a commit and its changes",
        long_about = "This command prints a commit followed by a line diff of every file it changes \
        compared to its parent."
    )]
    Show {
        #[arg(index = 1, help = "The full commit SHA")]
        commit: String,
    },
    #[command(
        name = "branch",
        about = "List or create branches",
        long_about = "Without a name this command lists branches, marking the current one. \
        With a name it creates a branch at the current HEAD commit."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command rewrites the working tree to match the target branch, or a full commit SHA \
        (detached HEAD), and moves HEAD to it."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit SHA to check out")]
        target: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command compares HEAD, the index and the working tree."
    )]
    Status {
        #[arg(long, help = "Give the output in a stable, short format")]
        porcelain: bool,
    },
}

fn init_tracing() {
    let level = std::env::var("SNAP_LOG")
        .ok()
        .and_then(|level| level.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn current_dir() -> Result<String> {
    Ok(std::env::current_dir()?.to_string_lossy().to_string())
}

fn open_repository() -> Result<Repository> {
    Repository::new(&current_dir()?, Box::new(std::io::stdout()))
}

/// Run `command` against a repository whose output goes through the pager
/// when stdout is an interactive terminal
fn with_pager(command: impl FnOnce(&Repository) -> Result<()>) -> Result<()> {
    let config = Config::load_from_env()?;

    if config.use_pager && std::io::stdout().is_terminal() {
        let pager = Pager::new();
        let writer = PagerWriter::new(pager.clone());
        let repository = Repository::with_config(&current_dir()?, Box::new(writer), config)?;

        command(&repository)?;
        minus::page_all(pager)?;
    } else {
        let repository =
            Repository::with_config(&current_dir()?, Box::new(std::io::stdout()), config)?;
        command(&repository)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => current_dir()?,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?;
        }
        Commands::Add { paths } => {
            let mut repository = open_repository()?;

            repository.add(paths).await?
        }
        Commands::Commit { message } => {
            let mut repository = open_repository()?;

            repository.commit(message).await?;
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };

            with_pager(|repository| repository.log(&opts))?
        }
        Commands::Show { commit } => with_pager(|repository| repository.show(commit))?,
        Commands::Branch { name } => {
            let mut repository = open_repository()?;

            match name {
                Some(name) => {
                    repository.branch(name)?;
                }
                None => repository.list_branches()?,
            }
        }
        Commands::Checkout { target } => {
            let mut repository = open_repository()?;

            repository.checkout(target).await?;
        }
        Commands::Status { porcelain } => {
            let repository = open_repository()?;

            repository.status(*porcelain).await?;
        }
    }

    Ok(())
}
