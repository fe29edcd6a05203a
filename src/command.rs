use anyhow::{anyhow, Result};
use std::collections::HashMap;

/// One line of wizard input, split into command, arguments and flags
#[derive(Debug, Clone, PartialEq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    pub fn parse(input: &str) -> Result<Self> {
        // Normalize non-breaking spaces so they split like normal ones
        let normalized_input = input.replace('\u{a0}', " ");
        log::debug!("Normalized input: {}", normalized_input);

        let mut parts = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut quoted = false;
        let mut escaped = false;

        for c in normalized_input.trim().chars() {
            match c {
                '\\' if !escaped => {
                    escaped = true;
                }
                '"' if !escaped => {
                    in_quotes = !in_quotes;
                    quoted = true;
                }
                c if c.is_whitespace() && !in_quotes && !escaped => {
                    if !current.is_empty() || quoted {
                        parts.push(std::mem::take(&mut current));
                        quoted = false;
                    }
                }
                _ => {
                    if escaped && c != '"' && c != '\\' {
                        current.push('\\');
                    }
                    current.push(c);
                    escaped = false;
                }
            }
        }
        if in_quotes {
            return Err(anyhow!("Unterminated quote in input"));
        }
        if !current.is_empty() || quoted {
            parts.push(current);
        }

        if parts.is_empty() {
            return Err(anyhow!("No command provided"));
        }

        let command = parts.remove(0).to_lowercase();
        let mut args = Vec::new();
        let mut flags = HashMap::new();
        let mut i = 0;

        while i < parts.len() {
            if let Some(flag) = parts[i].strip_prefix("--") {
                if i + 1 < parts.len() && !parts[i + 1].starts_with("--") {
                    flags.insert(flag.to_string(), Some(parts[i + 1].clone()));
                    i += 1;
                } else {
                    flags.insert(flag.to_string(), None);
                }
            } else {
                args.push(parts[i].clone());
            }
            i += 1;
        }

        log::debug!(
            "Parsed command: {:?}, args: {:?}, flags: {:?}",
            command, args, flags
        );

        Ok(CommandArgs {
            command,
            args,
            flags,
        })
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|v| v.as_deref())
    }
}
