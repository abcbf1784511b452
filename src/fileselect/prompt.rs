//! # Interactive Prompt
//!
//! Asks for one argument on a [`Console`]: the prompt goes to the diagnostic stream
//! (so piped stdout stays clean), the answer is a single blocking line read.
//!
//! Answer handling:
//! - Whitespace is trimmed.
//! - An empty answer adopts the current default, and the default becomes the skip
//!   sentinel. Asking again for the same argument then offers `-` instead of the
//!   default that was just rejected.
//! - An answer wrapped in a matching pair of `'` or `"` loses the outer pair.
//!   No escaping; a lone or mismatched quote passes through untouched.
//!
//! The prompt never fails. End of input and read errors both count as an empty line.

use crate::model::{ArgumentSpec, SKIP_SENTINEL};
use std::io::{self, BufRead, Write};

/// The input and diagnostic streams used for prompting and validation messages.
pub struct Console<R, W> {
    input: R,
    diagnostics: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, diagnostics: W) -> Self {
        Self { input, diagnostics }
    }

    pub fn diagnostics(&self) -> &W {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.diagnostics)
    }

    /// Writes one diagnostic line. Failures to write are logged, never surfaced.
    pub fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.diagnostics, "{}", message) {
            tracing::warn!(error = %e, "could not write diagnostic");
        }
    }

    /// Reads one line; `None` at end of input or on a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                tracing::debug!(error = %e, "prompt read failed, treating as empty input");
                None
            }
        }
    }
}

impl Console<io::StdinLock<'static>, io::Stderr> {
    /// Standard input for answers, standard error for everything written.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

/// Prompts for `spec` and stores the answer in `spec.response`.
pub fn prompt<R: BufRead, W: Write>(spec: &mut ArgumentSpec, console: &mut Console<R, W>) {
    let question = format!("{}. {}=[{}]: ", spec.message, spec.name, spec.default_path);
    if let Err(e) = console
        .diagnostics
        .write_all(question.as_bytes())
        .and_then(|_| console.diagnostics.flush())
    {
        tracing::warn!(error = %e, "could not write prompt");
    }

    let line = console.read_line().unwrap_or_default();
    let text = line.trim();

    if text.is_empty() {
        spec.response = std::mem::replace(&mut spec.default_path, SKIP_SENTINEL.to_string());
        tracing::debug!(name = %spec.name, response = %spec.response, "adopted default");
        return;
    }

    spec.response = strip_quotes(text).to_string();
}

/// Removes one matching pair of outer quotes (`'...'` or `"..."`).
pub fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return text;
    }
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    if first == last && (first == b'\'' || first == b'"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Console;
    use std::io::Cursor;

    /// A console answering from a fixed script and capturing diagnostics.
    pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn scripted(answers: &[&str]) -> ScriptedConsole {
        let mut input = String::new();
        for answer in answers {
            input.push_str(answer);
            input.push('\n');
        }
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn diagnostics_text(console: &ScriptedConsole) -> String {
        String::from_utf8_lossy(console.diagnostics()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{diagnostics_text, scripted};
    use super::*;

    fn spec() -> ArgumentSpec {
        ArgumentSpec::new("file", "Enter input file", "in.txt", true)
    }

    #[test]
    fn writes_prompt_to_diagnostics() {
        let mut console = scripted(&["data.csv"]);
        let mut spec = spec();
        prompt(&mut spec, &mut console);

        assert_eq!(
            diagnostics_text(&console),
            "Enter input file. file=[in.txt]: "
        );
        assert_eq!(spec.response, "data.csv");
    }

    #[test]
    fn trims_whitespace() {
        let mut console = scripted(&["   data.csv \t"]);
        let mut spec = spec();
        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "data.csv");
    }

    #[test]
    fn empty_answer_adopts_default_then_sentinel() {
        let mut console = scripted(&["", "  "]);
        let mut spec = spec();

        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "in.txt");
        assert_eq!(spec.default_path, "-");

        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "-");
        assert!(diagnostics_text(&console).ends_with("file=[-]: "));
    }

    #[test]
    fn end_of_input_reads_as_empty() {
        let mut console = scripted(&[]);
        let mut spec = spec();
        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "in.txt");
        assert_eq!(spec.default_path, "-");
    }

    #[test]
    fn strips_matching_single_quotes() {
        let mut console = scripted(&["'my file.txt'"]);
        let mut spec = spec();
        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "my file.txt");
    }

    #[test]
    fn strips_quotes_after_trimming() {
        let mut console = scripted(&["  \"my file.txt\"  "]);
        let mut spec = spec();
        prompt(&mut spec, &mut console);
        assert_eq!(spec.response, "my file.txt");
    }

    #[test]
    fn strip_quotes_only_removes_outer_pair() {
        assert_eq!(strip_quotes("\"\"a\"\""), "\"a\"");
        assert_eq!(strip_quotes("''"), "");
    }

    #[test]
    fn strip_quotes_leaves_malformed_quoting() {
        assert_eq!(strip_quotes("'"), "'");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("'a\""), "'a\"");
        assert_eq!(strip_quotes("'abc"), "'abc");
        assert_eq!(strip_quotes("abc'"), "abc'");
    }

    #[test]
    fn strip_quotes_handles_multibyte_inner_text() {
        assert_eq!(strip_quotes("'résumé.pdf'"), "résumé.pdf");
    }
}
