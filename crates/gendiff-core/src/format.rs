use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DiffError;

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Bracketed tree with `+`/`-` markers (default).
    #[default]
    Stylish,
    /// One sentence per changed property, with dotted paths.
    Plain,
    /// The diff tree serialized as JSON.
    Json,
}

impl Format {
    /// All selectable formats, in the order they are documented.
    pub const ALL: [Format; 3] = [Format::Stylish, Format::Plain, Format::Json];

    /// Returns the selector name of this format.
    ///
    /// ```
    /// # use gendiff_core::Format;
    /// assert_eq!(Format::Plain.name(), "plain");
    /// ```
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Stylish => "stylish",
            Format::Plain => "plain",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = DiffError;

    /// Parses a selector name.
    ///
    /// ```
    /// # use gendiff_core::{DiffError, Format};
    /// assert_eq!("json".parse::<Format>()?, Format::Json);
    /// assert!(matches!("yaml".parse::<Format>(), Err(DiffError::UnknownFormat { .. })));
    /// # Ok::<(), DiffError>(())
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| DiffError::UnknownFormat { name: name.to_string() })
    }
}
