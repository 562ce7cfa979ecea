use anyhow::{Context, Result};
use regex::Regex;

/// Removes bracketed numeric citation markers such as `[12]`.
pub(super) struct ReferenceStripper {
    marker: Regex,
}

impl ReferenceStripper {
    pub(super) fn new() -> Result<Self> {
        let marker =
            Regex::new(r"\[[0-9]+\]").context("failed to compile reference marker regex")?;
        Ok(Self { marker })
    }

    /// Strips markers until none remain, so nested input like `[1[2]]` is fully cleaned.
    pub(super) fn strip(&self, text: &str) -> String {
        let mut stripped = self.marker.replace_all(text, "").into_owned();
        while self.marker.is_match(&stripped) {
            stripped = self.marker.replace_all(&stripped, "").into_owned();
        }
        stripped
    }
}
