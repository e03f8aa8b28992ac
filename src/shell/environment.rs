use crate::core::state::ShellState;

pub(crate) trait EnvironmentHandler {
    fn expand_tokens(&self, tokens: Vec<String>) -> Vec<String>;
}

impl<O: std::io::Write, E: std::io::Write> EnvironmentHandler for super::Shell<O, E> {
    /// Words that expand to nothing are dropped, as unquoted empty
    /// expansions are in sh.
    fn expand_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| expand(&token, &self.state))
            .filter(|token| !token.is_empty())
            .collect()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Substitutes `$?`, `$$` and `$NAME` references in one left-to-right pass.
///
/// Substituted text is never scanned again, so a value containing `$` comes
/// through verbatim. Unset names expand to the empty string; a `$` that does
/// not start a reference is kept.
pub fn expand(token: &str, state: &ShellState) -> String {
    if !token.contains('$') {
        return token.to_string();
    }

    let mut result = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(dollar) = rest.find('$') {
        result.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        match after.chars().next() {
            Some('?') => {
                result.push_str(&state.status.to_string());
                rest = &after[1..];
            }
            Some('$') => {
                result.push_str(&state.pid.to_string());
                rest = &after[1..];
            }
            _ => {
                let end = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
                if end == 0 {
                    result.push('$');
                } else if let Some(value) = state.env.get(&after[..end]) {
                    result.push_str(value);
                }
                rest = &after[end..];
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn setup_state() -> ShellState {
        let env = Environment::from_strarr([
            "HOME=/home/test",
            "USER=tester",
            "LOOP=$LOOP",
            "PRICE=$5",
        ]);
        let mut state = ShellState::new("hsh", env);
        state.status = 3;
        state.pid = 4242;
        state
    }

    #[test]
    fn test_expands_names() {
        let state = setup_state();
        assert_eq!(expand("$HOME", &state), "/home/test");
        assert_eq!(expand("$HOME/bin", &state), "/home/test/bin");
        assert_eq!(expand("$USER@$HOME", &state), "tester@/home/test");
        assert_eq!(expand("plain", &state), "plain");
    }

    #[test]
    fn test_special_parameters() {
        let state = setup_state();
        assert_eq!(expand("$?", &state), "3");
        assert_eq!(expand("$$", &state), "4242");
        assert_eq!(expand("pid=$$;status=$?", &state), "pid=4242;status=3");
    }

    #[test]
    fn test_unset_names_expand_to_empty() {
        let state = setup_state();
        assert_eq!(expand("$NOPE", &state), "");
        assert_eq!(expand("a$NOPE-b", &state), "a-b");
    }

    #[test]
    fn test_lone_dollar_is_literal() {
        let state = setup_state();
        assert_eq!(expand("$", &state), "$");
        assert_eq!(expand("cost:$-", &state), "cost:$-");
        assert_eq!(expand("a$/b", &state), "a$/b");
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        let state = setup_state();
        assert_eq!(expand("$LOOP", &state), "$LOOP");
        assert_eq!(expand("$PRICE", &state), "$5");
    }
}
