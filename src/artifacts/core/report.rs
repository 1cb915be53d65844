//! Message classification for terminal output
//!
//! Commands report results through the repository writer; these helpers tag
//! messages with a presentation class (success, error, warning, info) so the
//! engine's control flow stays decoupled from formatting concerns. The
//! `colored` crate handles terminal detection and `NO_COLOR` on its own.

use colored::Colorize;

pub fn success(msg: &str) -> String {
    msg.green().to_string()
}

pub fn error(msg: &str) -> String {
    msg.red().to_string()
}

pub fn warning(msg: &str) -> String {
    msg.yellow().to_string()
}

pub fn info(msg: &str) -> String {
    msg.blue().to_string()
}

pub fn highlight(msg: &str) -> String {
    msg.cyan().to_string()
}

pub fn bold(msg: &str) -> String {
    msg.bold().to_string()
}

pub fn dimmed(msg: &str) -> String {
    msg.dimmed().to_string()
}
