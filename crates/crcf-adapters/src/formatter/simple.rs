//! Simple whitespace-normalizing source formatter.
//!
//! Stands in for a full pretty-printer: a pure string → string pass that
//! strips trailing whitespace, collapses runs of blank lines, and guarantees
//! a single trailing newline. Rejects source with unbalanced delimiters,
//! which is the "malformed input" failure mode the orchestrator folds into a
//! write error.

use crcf_core::application::ports::{FormatError, SourceFormatter};

/// Minimal formatter implementation of the [`SourceFormatter`] port.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter;

impl SimpleFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFormatter for SimpleFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        check_balanced(source)?;

        let mut out = String::with_capacity(source.len() + 1);
        let mut blank_run = 0usize;

        for line in source.lines() {
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                blank_run += 1;
                // At most one consecutive blank line, never at the top.
                if blank_run > 1 || out.is_empty() {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            out.push_str(trimmed);
            out.push('\n');
        }

        // Drop a trailing blank line left by a blank-then-EOF input.
        while out.ends_with("\n\n") {
            out.pop();
        }

        Ok(out)
    }
}

/// Cheap well-formedness probe: bracket kinds must balance, ignoring
/// anything inside string literals.
fn check_balanced(source: &str) -> Result<(), FormatError> {
    let mut stack = Vec::new();
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for c in source.chars() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_string = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return Err(FormatError {
                        reason: format!("unbalanced '{c}'"),
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(FormatError {
            reason: format!("unclosed '{open}'"),
        });
    }
    if in_string.is_some() {
        return Err(FormatError {
            reason: "unterminated string literal".into(),
        });
    }
    Ok(())
}
