use std::fs;
use std::path::Path;

use rustyline::completion::Pair;

/// Completes file and directory names for argument words.
#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match incomplete.rfind('/') {
            Some(pos) => incomplete.split_at(pos + 1),
            None => ("", incomplete),
        };
        let search_dir = if dir_part.is_empty() { "." } else { dir_part };

        let Ok(entries) = fs::read_dir(Path::new(search_dir)) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) || (name.starts_with('.') && !file_prefix.starts_with('.')) {
                    return None;
                }

                let candidate = format!("{}{}", dir_part, name);
                let is_dir = entry.path().is_dir();
                Some(if is_dir {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
