use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();
        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add("config", "-c", "--config", "Source FILE before reading commands", true);
        add("quiet", "-q", "--quiet", "Turn off log output", false);
        add("debug", "-d", "--debug", "Enable debug log output", false);

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses everything after the program name. The first word that is not a
    /// flag names the script to run; parsing stops there.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if !arg.starts_with('-') || arg == "-" {
                self.script = Some(arg.clone());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| *arg == flag.short || *arg == flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown option {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = iter.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|f| f.value.as_deref())
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn print_help(&self) {
        println!("Usage: hsh [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} FILE", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<15} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut flags = Flags::new();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_short_and_long_flags() -> Result<(), ShellError> {
        let flags = parse(&["-q", "--debug"])?;
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
        assert_eq!(flags.script(), None);
        Ok(())
    }

    #[test]
    fn test_config_takes_a_value() -> Result<(), ShellError> {
        let flags = parse(&["--config", "/tmp/rc", "script.sh"])?;
        assert_eq!(flags.get_value("config"), Some("/tmp/rc"));
        assert_eq!(flags.script(), Some("script.sh"));
        Ok(())
    }

    #[test]
    fn test_script_ends_flag_parsing() -> Result<(), ShellError> {
        let flags = parse(&["run.sh", "-q"])?;
        assert_eq!(flags.script(), Some("run.sh"));
        assert!(!flags.is_set("quiet"));
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["-x"]), Err(ShellError::FlagError(_))));
        assert!(matches!(parse(&["-c"]), Err(ShellError::FlagError(_))));
    }
}
