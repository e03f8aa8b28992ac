use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rustyline::completion::Pair;

use crate::core::commands::CommandType;
use crate::path::resolver;

/// Completes the command word from builtins, aliases and `PATH`.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    path_var: String,
    aliases: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<'a>(&mut self, path_var: &str, aliases: impl Iterator<Item = &'a str>) {
        self.path_var = path_var.to_string();
        self.aliases = aliases.map(String::from).collect();
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        let mut names: BTreeSet<String> = CommandType::names()
            .map(String::from)
            .chain(self.aliases.iter().cloned())
            .filter(|name| name.starts_with(prefix))
            .collect();

        for dir in resolver::search_dirs(&self.path_var) {
            Self::add_dir_matches(&mut names, Path::new(&dir), prefix);
        }

        names
            .into_iter()
            .map(|name| Pair {
                replacement: format!("{} ", name),
                display: name,
            })
            .collect()
    }

    fn add_dir_matches(names: &mut BTreeSet<String>, dir: &Path, prefix: &str) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let is_file = entry
                .file_type()
                .map(|t| t.is_file() || t.is_symlink())
                .unwrap_or(false);
            if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                if name.starts_with(prefix) {
                    names.insert(name.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_and_aliases() {
        let mut completer = CommandCompleter::new();
        completer.update("", ["ealias"].into_iter());

        let displays: Vec<String> = completer
            .complete_command("e")
            .into_iter()
            .map(|pair| pair.display)
            .collect();
        assert_eq!(displays, ["ealias", "env", "exit"]);
    }

    #[test]
    fn test_path_commands() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hsh-tool"), "").unwrap();
        fs::create_dir(dir.path().join("hsh-dir")).unwrap();

        let mut completer = CommandCompleter::new();
        completer.update(dir.path().to_str().unwrap(), std::iter::empty());

        let pairs = completer.complete_command("hsh-");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "hsh-tool ");
    }
}
