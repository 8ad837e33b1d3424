#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod parser;

use std::collections::HashMap;
use std::io::{self, Write};

pub use crate::error::Error;
use crate::parser::Parser;

/// Name of the implicit section holding key-value pairs that appear before any
/// `[name]` header.
pub const DEFAULT_SECTION: &str = "";

pub(crate) const SEPARATOR: char = '=';
pub(crate) const COMMENT: char = '#';

/// An INI document: named sections of key-value pairs, plus the default
/// (unnamed) section, which always exists.
///
/// Iteration order over sections and keys is not guaranteed; serializing the
/// same document twice may order lines differently across runs, but parsing
/// the output back always reproduces an equal mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ini {
    sections: HashMap<String, HashMap<String, String>>,
}

impl Ini {
    /// Create an empty document containing only the (empty) default section.
    #[must_use]
    pub fn new() -> Self {
        let mut sections = HashMap::new();
        sections.insert(DEFAULT_SECTION.to_owned(), HashMap::new());
        Self { sections }
    }

    /// Parse a document out of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] on the first malformed line; no partial
    /// document is produced.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut conf = Self::new();
        Parser::new(text).parse_into(&mut conf.sections)?;
        Ok(conf)
    }

    /// Read `reader` to the end and parse the decoded text.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailure`] if the reader fails, otherwise any error
    /// [`Ini::parse`] returns.
    pub fn from_reader<R>(reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read,
    {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| Error::ReadFailure { source })?;

        Self::parse(&String::from_utf8_lossy(&buffer))
    }

    /// Serialize the document into `writer`.
    ///
    /// The default section's lines come first with no header; every other
    /// section is a `[name]` line followed by its `key=value` lines. Values
    /// are written verbatim, without quoting or escaping.
    ///
    /// # Errors
    ///
    /// Fails only when the underlying writer does.
    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let mut writer = io::BufWriter::new(writer);

        // The default section has no header, so it must come first.
        if let Some(entries) = self.sections.get(DEFAULT_SECTION) {
            write_entries(&mut writer, entries)?;
        }

        for (name, entries) in &self.sections {
            if name == DEFAULT_SECTION {
                continue;
            }

            writeln!(writer, "[{name}]")?;
            write_entries(&mut writer, entries)?;
        }

        writer.flush()
    }

    /// Get a section's key-value map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionMissing`] for an unknown name; the lookup never
    /// creates the section.
    pub fn section(&self, name: &str) -> Result<&HashMap<String, String>, Error> {
        self.sections.get(name).ok_or(Error::SectionMissing)
    }

    /// Get the value stored under `key` in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionMissing`] for an unknown section, otherwise
    /// [`Error::KeyMissing`] for an unknown key.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, Error> {
        self.section(section)?
            .get(key)
            .map(String::as_str)
            .ok_or(Error::KeyMissing)
    }

    /// Set `key` to `value` in `section`, creating the section if needed and
    /// overwriting any previous value.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_owned())
            .or_default()
            .insert(key.to_owned(), value.to_owned());
    }

    /// Remove `key` from `section`. Removing a key that is not present is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionMissing`] for an unknown section.
    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<(), Error> {
        let entries = self.sections.get_mut(section).ok_or(Error::SectionMissing)?;
        entries.remove(key);
        Ok(())
    }

    /// Remove a whole section and its keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefaultSectionProtected`] for the default section,
    /// which can only have its keys removed individually, and
    /// [`Error::SectionMissing`] for an unknown name.
    pub fn remove_section(&mut self, name: &str) -> Result<(), Error> {
        if name == DEFAULT_SECTION {
            return Err(Error::DefaultSectionProtected);
        }

        if self.sections.remove(name).is_none() {
            return Err(Error::SectionMissing);
        }

        Ok(())
    }

    /// Merge `data` into `section`, creating the section if needed. Colliding
    /// keys take the value from `data`; other existing keys are untouched.
    pub fn update(&mut self, section: &str, data: HashMap<String, String>) {
        self.sections.entry(section.to_owned()).or_default().extend(data);
    }

    /// Iterate over the section names, the default section included.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Get the default section's key-value map.
    ///
    /// # Errors
    ///
    /// See [`Ini::section`]; a document built through this API always has a
    /// default section.
    pub fn default_section(&self) -> Result<&HashMap<String, String>, Error> {
        self.section(DEFAULT_SECTION)
    }

    /// Get a value from the default section.
    ///
    /// # Errors
    ///
    /// See [`Ini::get`].
    pub fn default_get(&self, key: &str) -> Result<&str, Error> {
        self.get(DEFAULT_SECTION, key)
    }

    /// Set a key in the default section.
    pub fn default_set(&mut self, key: &str, value: &str) {
        self.set(DEFAULT_SECTION, key, value);
    }

    /// Remove a key from the default section.
    ///
    /// # Errors
    ///
    /// See [`Ini::remove_key`].
    pub fn default_remove_key(&mut self, key: &str) -> Result<(), Error> {
        self.remove_key(DEFAULT_SECTION, key)
    }
}

impl Default for Ini {
    fn default() -> Self {
        Self::new()
    }
}

fn write_entries<W>(writer: &mut W, entries: &HashMap<String, String>) -> io::Result<()>
where
    W: io::Write,
{
    for (key, value) in entries {
        writeln!(writer, "{key}{SEPARATOR}{value}")?;
    }

    Ok(())
}
