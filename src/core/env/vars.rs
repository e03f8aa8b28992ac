use super::EnvError;
use std::collections::BTreeMap;
use std::env;

/// The shell's exported variables.
///
/// Children never see this map directly: [`Environment::to_strarr`] takes a
/// snapshot in the flat `NAME=VALUE` form right before a spawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<Box<str>, Box<str>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from the environment this process was started with.
    pub fn inherit() -> Self {
        let entries = env::vars_os().map(|(key, value)| {
            format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
        });
        Self::from_strarr(entries)
    }

    /// Entries without a `=` carry no value and are skipped.
    pub fn from_strarr<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = entries
            .into_iter()
            .filter_map(|entry| {
                let (name, value) = entry.as_ref().split_once('=')?;
                (!name.is_empty()).then(|| (name.into(), value.into()))
            })
            .collect();
        Self { vars }
    }

    pub fn to_strarr(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| &**s)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName(name.to_string()));
        }

        self.vars.insert(name.into(), value.into());
        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    /// Returns the value of `name`, inserting `default` first if it is unset.
    pub fn get_or_insert(&mut self, name: &str, default: &str) -> &str {
        let value = self.vars.entry(name.into()).or_insert_with(|| default.into());
        &**value
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
