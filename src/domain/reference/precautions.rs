//! The four recommended actions associated with a diagnosis.

use serde::{Deserialize, Serialize};

/// Exactly four precaution strings, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precautions([String; 4]);

impl Precautions {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        fourth: impl Into<String>,
    ) -> Self {
        Self([first.into(), second.into(), third.into(), fourth.into()])
    }

    /// Builds from a slice, taking the first four entries.
    ///
    /// Returns `None` if fewer than four are given.
    pub fn from_slice<S: AsRef<str>>(items: &[S]) -> Option<Self> {
        match items {
            [a, b, c, d, ..] => Some(Self::new(
                a.as_ref().trim(),
                b.as_ref().trim(),
                c.as_ref().trim(),
                d.as_ref().trim(),
            )),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
