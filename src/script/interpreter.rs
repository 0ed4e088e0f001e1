//! Script interpreter.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{Degree, Result};
use crate::index::BTree;
use crate::script::Command;

/// Runs operations scripts against a tree.
///
/// The tree does not exist until a `c` command creates it; other commands
/// seen before that are ignored. The tree outlives a single script, so
/// several files can be run against the same instance.
///
/// # Usage
/// ```
/// use b3rtree::script::Interpreter;
///
/// let script = "c\ni 10\ni 20\ni 5\nmn\nb 20\n";
/// let mut out = Vec::new();
/// let mut interp = Interpreter::default();
/// interp.run(script.as_bytes(), &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert_eq!(out, "Minimum value: 5\nValue 20 in tree? true\n");
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Current tree, created by `c`.
    tree: Option<BTree>,

    /// Degree used for every tree `c` creates.
    degree: Degree,
}

impl Interpreter {
    /// Create an interpreter whose trees use `degree`.
    pub fn new(degree: Degree) -> Self {
        Self { tree: None, degree }
    }

    /// The current tree, if one has been created.
    pub fn tree(&self) -> Option<&BTree> {
        self.tree.as_ref()
    }

    /// Run a single command, writing any report to `out`.
    ///
    /// # Errors
    /// - I/O errors from writing to `out`
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<()> {
        if let Command::Create = command {
            self.tree = Some(BTree::with(self.degree));
            return Ok(());
        }

        let Some(tree) = self.tree.as_mut() else {
            debug!(%command, "script.no_tree");
            return Ok(());
        };

        match command {
            Command::Create => {}
            Command::Insert(key) => tree.insert(*key),
            Command::Delete(key) => {
                tree.delete(*key);
            }
            Command::Min => match tree.min_value() {
                Ok(min) => writeln!(out, "Minimum value: {}", min)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            Command::Max => match tree.max_value() {
                Ok(max) => writeln!(out, "Maximum value: {}", max)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            Command::Show => {
                writeln!(out, "Tree:")?;
                write!(out, "{}", tree)?;
            }
            Command::NodeCount => writeln!(out, "Number of nodes: {}", tree.node_count())?,
            Command::KeyCount => writeln!(out, "Number of keys: {}", tree.key_count())?,
            Command::Search(key) => {
                writeln!(out, "Value {} in tree? {}", key, tree.search(*key))?
            }
            Command::Unknown(op) => warn!(op = %op, "script.unknown_opcode"),
        }

        Ok(())
    }

    /// Run every line of a script. Returns the number of commands run.
    ///
    /// # Errors
    /// - `Error::Parse` on the first malformed line; earlier lines have
    ///   already taken effect
    /// - I/O errors from reading or writing
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> Result<usize> {
        let mut executed = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(command) = Command::parse(&line, i + 1)? {
                self.execute(&command, out)?;
                executed += 1;
            }
        }
        Ok(executed)
    }

    /// Run the script at `path`.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be opened or read
    /// - Everything [`Interpreter::run`] returns
    pub fn run_file<P: AsRef<Path>, W: Write>(&mut self, path: P, out: &mut W) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let executed = self.run(BufReader::new(file), out)?;
        debug!(path = %path.display(), executed, "script.file_done");
        Ok(executed)
    }
}
