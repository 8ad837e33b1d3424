use std::collections::HashMap;

use crate::error::Error;
use crate::{COMMENT, DEFAULT_SECTION, SEPARATOR};

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    text: &'a str,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Parser<'_> {
    /// Scan every line once, filling `sections` as headers and key-value pairs appear.
    ///
    /// Aborts on the first malformed line; the caller is expected to discard
    /// `sections` on error rather than surface a half-filled document.
    pub(crate) fn parse_into(
        self,
        sections: &mut HashMap<String, HashMap<String, String>>,
    ) -> Result<(), Error> {
        let mut current = DEFAULT_SECTION.to_owned();

        for (index, raw) in self.text.split('\n').enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with(COMMENT) {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current = parse_section_name(line, index)?;
                // Duplicate headers re-target the existing section; entries merge.
                sections.entry(current.clone()).or_default();
                continue;
            }

            let (key, value) = parse_key_value(line, index)?;
            sections.entry(current.clone()).or_default().insert(key, value);
        }

        Ok(())
    }
}

/// Read the name out of a `[name]` header line.
fn parse_section_name(line: &str, index: usize) -> Result<String, Error> {
    // Everything between the brackets, untrimmed.
    let name = &line[1..line.len() - 1];

    if name.is_empty() {
        return Err(Error::Format { line: index + 1 });
    }

    Ok(name.to_owned())
}

/// Split a line on the first separator into a trimmed key and value.
fn parse_key_value(line: &str, index: usize) -> Result<(String, String), Error> {
    let Some(position) = line.find(SEPARATOR) else {
        return Err(Error::Format { line: index + 1 });
    };

    let key = line[..position].trim();
    let value = line[position + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return Err(Error::Format { line: index + 1 });
    }

    Ok((key.to_owned(), value.to_owned()))
}
