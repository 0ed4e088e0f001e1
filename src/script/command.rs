//! Script command parsing.

use std::fmt;

use crate::common::{Error, Result};

/// One line of an operations script.
///
/// # Format
/// ```text
/// c        create an empty tree (replacing any current one)
/// i <n>    insert n
/// d <n>    delete one instance of n
/// mn       print the minimum
/// mx       print the maximum
/// s        print the tree
/// nn       print the node count
/// nk       print the key count
/// b <n>    print whether n is in the tree
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create,
    Insert(i32),
    Delete(i32),
    Min,
    Max,
    Show,
    NodeCount,
    KeyCount,
    Search(i32),
    /// Unrecognised op-code; skipped by the interpreter.
    Unknown(String),
}

impl Command {
    /// Parse one script line. `line_no` is 1-based and only used in errors.
    ///
    /// Returns `Ok(None)` for a blank line. Tokens past the ones a command
    /// needs are ignored.
    ///
    /// # Errors
    /// - `Error::Parse` if a command's integer argument is missing or
    ///   malformed
    pub fn parse(line: &str, line_no: usize) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(op) = tokens.next() else {
            return Ok(None);
        };

        let mut arg = || -> Result<i32> {
            let raw = tokens.next().ok_or_else(|| Error::Parse {
                line: line_no,
                reason: format!("missing argument for '{}'", op),
            })?;
            raw.parse::<i32>().map_err(|e| Error::Parse {
                line: line_no,
                reason: format!("bad argument '{}' for '{}': {}", raw, op, e),
            })
        };

        let command = match op {
            "c" => Command::Create,
            "i" => Command::Insert(arg()?),
            "d" => Command::Delete(arg()?),
            "mn" => Command::Min,
            "mx" => Command::Max,
            "s" => Command::Show,
            "nn" => Command::NodeCount,
            "nk" => Command::KeyCount,
            "b" => Command::Search(arg()?),
            other => Command::Unknown(other.to_string()),
        };
        Ok(Some(command))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create => write!(f, "c"),
            Command::Insert(n) => write!(f, "i {}", n),
            Command::Delete(n) => write!(f, "d {}", n),
            Command::Min => write!(f, "mn"),
            Command::Max => write!(f, "mx"),
            Command::Show => write!(f, "s"),
            Command::NodeCount => write!(f, "nn"),
            Command::KeyCount => write!(f, "nk"),
            Command::Search(n) => write!(f, "b {}", n),
            Command::Unknown(op) => write!(f, "{}", op),
        }
    }
}
