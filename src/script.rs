//! Edit scripts
//!
//! A script is a list of editor commands, one per line:
//!
//! ```text
//! # comment
//! insert 0 Hello
//! insert end " World"
//! insert end-1 ","
//! delete 5 11
//! undo
//! redo
//! print
//! info
//! ```
//!
//! Insert positions are either a character index or `end`/`end-N`, resolved
//! against the text length when the command runs. Text may be double-quoted
//! to keep surrounding spaces; `\"`, `\\` and `\n` are recognised inside quotes.

use std::fmt;
use std::io::{self, Write};

use crate::editor::Editor;
use crate::model::operation;

/// Script that replays the classic undo/redo walkthrough
pub const DEMO_SCRIPT: &str = r#"# Performing operations
insert 0 Hello
insert 5 " World"
insert 11 !
delete 5 11
insert 5 " Go"

# Undo back to the beginning of history
undo
undo
undo
undo
undo
undo

# Redo three steps
redo
redo
redo

# A new edit discards the remaining redo history
insert 11 ", Programming"
insert end-1 " Meow Meow"
info
"#;

/// Where an insert lands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptPosition {
    /// Absolute character index
    Index(usize),
    /// `N` characters before the end of the text
    FromEnd(usize),
}

impl ScriptPosition {
    /// Resolve against a text of `length` characters
    pub fn resolve(self, length: usize) -> usize {
        match self {
            Self::Index(idx) => idx,
            Self::FromEnd(back) => length.saturating_sub(back),
        }
    }
}

impl fmt::Display for ScriptPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "{idx}"),
            Self::FromEnd(0) => write!(f, "end"),
            Self::FromEnd(back) => write!(f, "end-{back}"),
        }
    }
}

/// A single script command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptCommand {
    Insert {
        position: ScriptPosition,
        text: String,
    },
    Delete {
        start: usize,
        end: usize,
    },
    Undo,
    Redo,
    /// Write the current text
    Print,
    /// Write the history summary
    Info,
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { position, text } => operation::fmt_insert(f, text, position),
            Self::Delete { start, end } => operation::fmt_delete(f, *start, *end),
            Self::Undo => write!(f, "undo"),
            Self::Redo => write!(f, "redo"),
            Self::Print => write!(f, "print"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Script parse error with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole script, skipping blank lines and `#` comments
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let parsed = parse_line(line).map_err(|message| ScriptError {
            line: idx + 1,
            message,
        })?;
        commands.extend(parsed);
    }
    Ok(commands)
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(trimmed);
    let command = match word {
        "insert" => {
            let (position, rest) = split_word(rest);
            if position.is_empty() {
                return Err("insert needs a position and text".to_string());
            }
            ScriptCommand::Insert {
                position: parse_position(position)?,
                text: parse_text(rest)?,
            }
        }
        "delete" => {
            let (start, rest) = split_word(rest);
            let (end, rest) = split_word(rest);
            if !rest.is_empty() {
                return Err(format!("unexpected argument `{rest}`"));
            }
            ScriptCommand::Delete {
                start: parse_number(start)?,
                end: parse_number(end)?,
            }
        }
        "undo" | "redo" | "print" | "info" => {
            if !rest.is_empty() {
                return Err(format!("`{word}` takes no arguments"));
            }
            match word {
                "undo" => ScriptCommand::Undo,
                "redo" => ScriptCommand::Redo,
                "print" => ScriptCommand::Print,
                _ => ScriptCommand::Info,
            }
        }
        other => return Err(format!("unknown command `{other}`")),
    };

    Ok(Some(command))
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

fn parse_number(word: &str) -> Result<usize, String> {
    if word.is_empty() {
        return Err("missing number".to_string());
    }
    word.parse()
        .map_err(|_| format!("`{word}` is not a valid position"))
}

fn parse_position(word: &str) -> Result<ScriptPosition, String> {
    if word == "end" {
        return Ok(ScriptPosition::FromEnd(0));
    }
    match word.strip_prefix("end-") {
        Some(back) => parse_number(back).map(ScriptPosition::FromEnd),
        None => parse_number(word).map(ScriptPosition::Index),
    }
}

/// Parse an insert payload: either the raw rest of the line or a quoted string
fn parse_text(rest: &str) -> Result<String, String> {
    let Some(quoted) = rest.strip_prefix('"') else {
        if rest.is_empty() {
            return Err("missing text".to_string());
        }
        return Ok(rest.to_string());
    };

    let mut text = String::new();
    let mut chars = quoted.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let trailing = chars.as_str().trim();
                if !trailing.is_empty() {
                    return Err(format!("unexpected text after closing quote: `{trailing}`"));
                }
                return Ok(text);
            }
            '\\' => match chars.next() {
                Some('n') => text.push('\n'),
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some(other) => return Err(format!("unknown escape `\\{other}`")),
                None => break,
            },
            _ => text.push(ch),
        }
    }

    Err("unterminated quoted text".to_string())
}

/// Execute commands against `editor`, writing one transcript line per command
pub fn run_script<W: Write>(
    editor: &mut Editor,
    commands: &[ScriptCommand],
    out: &mut W,
) -> io::Result<()> {
    for command in commands {
        execute(editor, command, out)?;
    }
    Ok(())
}

fn execute<W: Write>(editor: &mut Editor, command: &ScriptCommand, out: &mut W) -> io::Result<()> {
    match command {
        ScriptCommand::Insert { position, text } => {
            editor.insert(position.resolve(editor.length()), text);
            writeln!(out, "{command} -> {:?}", editor.text())
        }
        ScriptCommand::Delete { start, end } => {
            editor.delete(*start, *end);
            writeln!(out, "{command} -> {:?}", editor.text())
        }
        ScriptCommand::Undo => {
            if editor.undo() {
                writeln!(out, "undo -> {:?}", editor.text())
            } else {
                writeln!(out, "undo -> (nothing to undo)")
            }
        }
        ScriptCommand::Redo => {
            if editor.redo() {
                writeln!(out, "redo -> {:?}", editor.text())
            } else {
                writeln!(out, "redo -> (nothing to redo)")
            }
        }
        ScriptCommand::Print => writeln!(out, "{:?}", editor.text()),
        ScriptCommand::Info => writeln!(out, "{}", editor.info()),
    }
}
