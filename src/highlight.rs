use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word and flags in place; whitespace is preserved so
    /// the cursor stays where the editor expects it.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut seen_command = false;
        let mut pieces = input.split_inclusive(char::is_whitespace);

        while let Some(piece) = pieces.next() {
            let word = piece.trim_end();
            let tail = &piece[word.len()..];

            if word.starts_with('#') {
                let rest: String = std::iter::once(piece).chain(pieces.by_ref()).collect();
                out.push_str(&rest.as_str().style(comment_style()).to_string());
                break;
            }

            if word.is_empty() {
                out.push_str(tail);
                continue;
            }

            if !seen_command {
                out.push_str(&word.style(command_style()).to_string());
                seen_command = true;
            } else if word.starts_with('-') {
                out.push_str(&word.style(flag_style()).to_string());
            } else {
                out.push_str(word);
            }
            out.push_str(tail);
        }

        out
    }

    pub fn highlight_prompt(&self, prompt: &str) -> String {
        if !self.enabled() {
            return prompt.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Green).bold().build();
        prompt.style(prompt_style).to_string()
    }
}

fn command_style() -> Style {
    Style::builder().foreground(Color::Cyan).bold().build()
}

fn flag_style() -> Style {
    Style::builder().foreground(Color::Yellow).build()
}

fn comment_style() -> Style {
    Style::builder().foreground(Color::RGB(128, 128, 128)).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_survives_without_colour() {
        let highlighter = SyntaxHighlighter {
            color_support: ColorSupport::NoColor,
        };
        let line = "ls   -l\t/tmp # note";
        assert_eq!(highlighter.highlight_command(line), line);
        assert_eq!(highlighter.highlight_prompt("($) "), "($) ");
    }
}
