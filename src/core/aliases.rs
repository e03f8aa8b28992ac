use std::collections::BTreeMap;

use crate::input::tokenizer::{self, DELIMITERS};

/// Alias table owned by the shell state; listing order is by name.
#[derive(Clone, Debug, Default)]
pub struct AliasManager {
    aliases: BTreeMap<Box<str>, Box<str>>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, command: &str) {
        self.aliases.insert(name.into(), command.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| &**s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&**k, &**v))
    }

    /// Replaces the command word with its alias value, one level deep.
    pub fn expand_command(&self, mut tokens: Vec<String>) -> Vec<String> {
        let Some(value) = tokens.first().and_then(|first| self.get(first)) else {
            return tokens;
        };

        let mut expanded = tokenizer::split(value, DELIMITERS, 0).unwrap_or_default();
        expanded.extend(tokens.drain(1..));
        expanded
    }
}
