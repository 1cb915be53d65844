//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files (or deletions of missing tracked files)
//! - `rm`: Remove a file and stage its deletion
//! - `commit`: Create a new commit from the staged index
//! - `status`: Show working tree status
//! - `log`: Show commit history (current branch or all branches)
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches, restoring the working tree
//! - `restore`: Reset the working tree to an arbitrary commit
//! - `clean`: Remove untracked files
//! - `rebase`: Replay the current branch onto another branch's tip

pub mod add;
pub mod branch;
pub mod checkout;
pub mod clean;
pub mod commit;
pub mod init;
pub mod log;
pub mod rebase;
pub mod restore;
pub mod rm;
pub mod status;
