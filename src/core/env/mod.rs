mod vars;

pub use vars::Environment;

#[derive(Debug, PartialEq, Eq)]
pub enum EnvError {
    EmptyName,
    InvalidName(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::EmptyName => write!(f, "variable name cannot be empty"),
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {}", name),
        }
    }
}

impl std::error::Error for EnvError {}
