use crate::exceptions::HearthError;
use crate::fs::{atomic_write_json, read_json_list};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// A persisted entry addressed by a 1-based, contiguous id.
pub trait Record {
    fn id(&self) -> usize;
    fn set_id(&mut self, id: usize);
}

/// Outcome of applying an action to a list of user-supplied ids.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IdReport {
    pub found: Vec<usize>,
    pub missing: Vec<String>,
}

impl IdReport {
    /// Formats `"<noun> 1, 2 <verb>"` and `"<noun> with IDs x not found."` lines.
    pub fn summarize(&self, noun: &str, verb: &str) -> String {
        let mut lines = Vec::new();
        if !self.found.is_empty() {
            lines.push(format!(
                "{} {} {}",
                noun,
                crate::utils::join_ids(&self.found),
                verb
            ));
        }
        if !self.missing.is_empty() {
            lines.push(format!(
                "{} with IDs {} not found.",
                noun,
                self.missing.join(", ")
            ));
        }
        lines.join("\n")
    }
}

/// JSON-array backed list owned by exactly one module.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    items: Vec<T>,
}

impl<T: Record + Serialize + DeserializeOwned> JsonStore<T> {
    /// Opens the store; a missing file is an empty store, a corrupt one is an error.
    pub fn open(path: PathBuf) -> Result<Self, HearthError> {
        let items = read_json_list(&path)?;
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_mut(&mut self, id: usize) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn next_id(&self) -> usize {
        self.items.len() + 1
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.reindex();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Runs `action` on the position of every id token that names an existing item.
    ///
    /// Ids refer to the numbering at the start of the call, even if `action`
    /// removes items. Tokens that are not numbers or match nothing are
    /// reported as missing.
    pub fn apply_ids<'a, I, F>(&mut self, tokens: I, mut action: F) -> IdReport
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&mut Vec<T>, usize),
    {
        let mut report = IdReport::default();
        for token in tokens {
            let Ok(id) = token.parse::<usize>() else {
                report.missing.push(token.to_string());
                continue;
            };
            match self.items.iter().position(|item| item.id() == id) {
                Some(pos) => {
                    action(&mut self.items, pos);
                    report.found.push(id);
                }
                None => report.missing.push(id.to_string()),
            }
        }
        report
    }

    pub fn reindex(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_id(index + 1);
        }
    }

    pub fn save(&self) -> Result<(), HearthError> {
        atomic_write_json(&self.path, &self.items)
    }
}

/// Splits id arguments on commas and whitespace (`"2, 4 5"` -> `2`, `4`, `5`).
pub fn split_ids(args: &[String]) -> Vec<String> {
    args.join(" ")
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
