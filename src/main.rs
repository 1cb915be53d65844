use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;
use jot::artifacts::core::pager::{PagerWriter, should_page};

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple local version control system",
    long_about = "jot is a small, single-user version control system. \
    It snapshots whole files into a content-addressed store, stages changes \
    in an index, and links snapshots into per-branch commit history.",
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
        long_about = "This command stages file snapshots (or deletions of missing tracked files). \
        Pass '.' to stage every modified, deleted, and untracked path."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The paths to stage ('.' for everything)")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Remove a file and stage its deletion",
        long_about = "This command deletes a file from the working tree and stages the deletion. \
        Untracked files are refused unless --force is given."
    )]
    Rm {
        #[arg(index = 1, help = "The path to remove")]
        path: String,
        #[arg(short, long, help = "Remove even if the path is not tracked")]
        force: bool,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit on the current branch from the staged index."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command shows staged changes, unstaged changes, and untracked files."
    )]
    Status,
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command walks the current branch's history, or every branch's with --all."
    )]
    Log {
        #[arg(long, help = "Show commits from all branches")]
        all: bool,
    },
    #[command(
        name = "branch",
        about = "Create a branch, or list branches",
        long_about = "This command creates a new branch at the current commit, or lists all branches \
        when no name is given."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch",
        long_about = "This command switches to a branch and reconciles the working tree with its tip."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
        #[arg(short = 'b', help = "Create the branch before switching")]
        create: bool,
    },
    #[command(
        name = "restore",
        about = "Restore the working directory to a commit",
        long_about = "This command resets the working tree to the given commit's snapshot without \
        moving HEAD or any branch ref."
    )]
    Restore {
        #[arg(index = 1, help = "The commit hash to restore")]
        commit: String,
    },
    #[command(
        name = "clean",
        about = "Remove untracked files",
        long_about = "This command deletes every untracked file, asking for confirmation unless \
        --force is given."
    )]
    Clean {
        #[arg(short, long, help = "Delete without asking for confirmation")]
        force: bool,
    },
    #[command(
        name = "rebase",
        about = "Rebase the current branch onto another branch",
        long_about = "This command replays the current branch's commits onto the target branch's tip. \
        The replay is metadata-only: no conflict detection, no content re-application."
    )]
    Rebase {
        #[arg(index = 1, help = "The target branch")]
        branch: String,
    },
}

fn repository_at_cwd() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => repository_at_cwd()?,
            };

            repository.init()?
        }
        Commands::Add { paths } => {
            repository_at_cwd()?.add(paths)?;
        }
        Commands::Rm { path, force } => {
            repository_at_cwd()?.remove(path, *force)?;
        }
        Commands::Commit { message } => {
            repository_at_cwd()?.commit(message.as_str())?;
        }
        Commands::Status => {
            repository_at_cwd()?.status()?;
        }
        Commands::Log { all } => {
            // route long history output through the pager on a terminal
            if should_page() {
                let pager = minus::Pager::new();
                let writer = PagerWriter::new(pager.clone());
                let pwd = std::env::current_dir()?;
                let mut repository =
                    Repository::new(&pwd.to_string_lossy(), Box::new(writer))?;
                repository.log(*all)?;
                minus::page_all(pager)?;
            } else {
                repository_at_cwd()?.log(*all)?;
            }
        }
        Commands::Branch { name } => {
            repository_at_cwd()?.branch(name.as_deref())?;
        }
        Commands::Checkout { branch, create } => {
            repository_at_cwd()?.checkout(branch, *create)?;
        }
        Commands::Restore { commit } => {
            repository_at_cwd()?.restore(commit)?;
        }
        Commands::Clean { force } => {
            repository_at_cwd()?.clean(*force)?;
        }
        Commands::Rebase { branch } => {
            repository_at_cwd()?.rebase(branch)?;
        }
    }

    Ok(())
}
