// Stopword set: loaded once at startup, read-only afterwards.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// A set of words dropped from every token list.
///
/// Matching is exact and case-sensitive against the stored form.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load a newline-delimited UTF-8 stopword file.
    ///
    /// Each line is trimmed; blank lines are skipped. A missing or unreadable
    /// file is an error, since serving without stopwords changes predictions.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;

        let set = Self::parse(&contents);
        info!(
            path = %path.display(),
            count = set.len(),
            "Loaded stopwords"
        );
        Ok(set)
    }

    /// Parse stopwords from file contents (one per line).
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The Marathi list bundled with the `stop-words` crate.
    ///
    /// Only used to bootstrap a stopword file; the server always reads its
    /// list from disk.
    pub fn builtin() -> Self {
        let words: Vec<String> = get(LANGUAGE::Marathi);
        words.into_iter().collect()
    }

    /// Write the list to `path`, one word per line.
    ///
    /// An existing file is left untouched unless `overwrite` is set, since it
    /// may be the list the server loads.
    pub fn write_to(&self, path: &Path, overwrite: bool) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                anyhow::anyhow!(
                    "{} already exists; pass --force to replace it",
                    path.display()
                )
            } else {
                anyhow::Error::new(e)
                    .context(format!("Failed to open {} for writing", path.display()))
            }
        })?;

        file.write_all(self.to_file_contents().as_bytes())
            .with_context(|| format!("Failed to write stopwords to {}", path.display()))?;

        info!(path = %path.display(), count = self.len(), "Wrote stopwords");
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order, one per line, ready to write back to disk.
    pub fn to_file_contents(&self) -> String {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        let mut out = words.join("\n");
        out.push('\n');
        out
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
