//! The two label values of a binary problem

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered pair of label values: the first is negative, the second positive
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryLabels<L> {
    /// Label value of the negative class
    pub negative: L,
    /// Label value of the positive class
    pub positive: L,
}

impl<L> BinaryLabels<L> {
    /// Create a label pair
    pub fn new(negative: L, positive: L) -> Self {
        Self { negative, positive }
    }
}

impl<L: PartialEq> BinaryLabels<L> {
    /// Whether `label` is one of the two values
    pub fn contains(&self, label: &L) -> bool {
        *label == self.negative || *label == self.positive
    }

    /// Whether `label` is the positive value
    pub fn is_positive(&self, label: &L) -> bool {
        *label == self.positive
    }
}

/// `{0, 1}` for integer label types
impl<L: From<u8>> Default for BinaryLabels<L> {
    fn default() -> Self {
        Self::new(L::from(0), L::from(1))
    }
}

impl<L> From<[L; 2]> for BinaryLabels<L> {
    fn from([negative, positive]: [L; 2]) -> Self {
        Self::new(negative, positive)
    }
}

impl<L: fmt::Debug> fmt::Display for BinaryLabels<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.negative, self.positive)
    }
}
