//! Row tokenizer for store CSV text
//!
//! A field is either a quoted run, optionally padded with spaces or tabs, or
//! everything up to the next comma or line break. Quoted runs may contain
//! commas and line breaks, and a doubled quote inside one stands for a single
//! quote. Unquoted fields are trimmed; quoted fields keep their content as is.

use crate::{Error, Result};
use regex::Regex;

/// One tokenized row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Line the row starts on, counting from 1
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// Empty or whitespace-only line
    pub fn is_blank(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].is_empty()
    }
}

/// Regex-driven splitter from CSV text to rows
#[derive(Debug, Clone)]
pub struct RowTokenizer {
    quoted_field: Regex,
    bare_field: Regex,
}

impl RowTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            quoted_field: compile(r#"^[ \t]*"((?:[^"]|"")*)"[ \t]*(,|\r?\n|\z)"#)?,
            bare_field: compile(r"^([^,\n]*?)(,|\r?\n|\z)")?,
        })
    }

    /// Split text into rows, header row included
    pub fn rows(&self, text: &str) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut pos = 0;
        let mut line = 1;

        while pos < text.len() {
            let start_line = line;
            let mut fields = Vec::new();

            loop {
                let rest = &text[pos..];
                let field = self.next_field(rest);
                line += rest[..field.consumed].matches('\n').count();
                pos += field.consumed;
                fields.push(field.value);

                if !field.more {
                    break;
                }
            }

            rows.push(Row {
                line: start_line,
                fields,
            });
        }

        rows
    }

    fn next_field(&self, rest: &str) -> Field {
        if let Some(caps) = self.quoted_field.captures(rest) {
            return Field {
                value: caps
                    .get(1)
                    .map_or("", |m| m.as_str())
                    .replace("\"\"", "\""),
                consumed: caps.get(0).map_or(rest.len(), |m| m.end()),
                more: caps.get(2).is_some_and(|m| m.as_str() == ","),
            };
        }

        match self.bare_field.captures(rest) {
            Some(caps) => Field {
                value: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
                consumed: caps.get(0).map_or(rest.len(), |m| m.end()),
                more: caps.get(2).is_some_and(|m| m.as_str() == ","),
            },
            // bare_field matches any input; treat the rest as one last field
            None => Field {
                value: rest.trim().to_string(),
                consumed: rest.len(),
                more: false,
            },
        }
    }
}

struct Field {
    value: String,
    consumed: usize,
    /// A comma followed, so the row continues
    more: bool,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::configuration(format!("Invalid CSV field pattern '{}': {}", pattern, e)))
}
