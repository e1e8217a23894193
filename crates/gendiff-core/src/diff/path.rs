use std::fmt;

/// Dotted property path accumulated while walking a diff tree.
///
/// Root-level keys have no prefix; nested keys are joined with `.`.
///
/// ```
/// # use gendiff_core::diff::PropertyPath;
/// let path = PropertyPath::root().with_key("common").with_key("setting6");
/// assert_eq!(path.to_string(), "common.setting6");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Returns the empty root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a copy of this path extended by `key`.
    #[must_use]
    pub fn with_key<S>(&self, key: S) -> Self
    where
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }

    /// Returns the individual keys that make up the path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Indicates whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S> FromIterator<S> for PropertyPath
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { segments: iter.into_iter().map(Into::into).collect() }
    }
}
