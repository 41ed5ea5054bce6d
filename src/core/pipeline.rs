//! core::pipeline
//!
//! The even-square-sum pipeline and its report.
//!
//! # Stages
//!
//! ```text
//! input -> filter_even -> square -> sum
//! ```
//!
//! The input, filtered and squared sequences are each kept in the
//! [`Report`] so they can be displayed alongside the total.
//!
//! # Example
//!
//! ```
//! use evensum::core::pipeline::{run, DEFAULT_INPUT};
//!
//! let report = run(&DEFAULT_INPUT);
//! assert_eq!(report.evens, vec![2, 4, 6]);
//! assert_eq!(report.squared, vec![4, 16, 36]);
//! assert_eq!(report.total, 56);
//! ```

use std::fmt;

use super::integral::{sum, Integral};
use super::seq::{filter_even, square, stringify};
use crate::ui::output::format_set;

/// Input used when no config supplies one.
pub const DEFAULT_INPUT: [i32; 6] = [1, 2, 3, 4, 5, 6];

/// Prefixes for the four report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub original: String,
    pub evens: String,
    pub squared: String,
    pub total: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            original: "Original numbers".to_string(),
            evens: "Even numbers".to_string(),
            squared: "Squared even numbers".to_string(),
            total: "Sum of squared even numbers".to_string(),
        }
    }
}

/// Every stage of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<T: Integral> {
    /// The input sequence, as given
    pub original: Vec<T>,
    /// Even elements of the input
    pub evens: Vec<T>,
    /// Squares of the even elements
    pub squared: Vec<T>,
    /// Sum of the squares
    pub total: T,
}

/// Run the pipeline over `numbers`.
pub fn run<T: Integral>(numbers: &[T]) -> Report<T> {
    let evens = filter_even(numbers);
    let squared = square(&evens);
    let total = sum(&squared);

    Report {
        original: numbers.to_vec(),
        evens,
        squared,
        total,
    }
}

impl<T: Integral> Report<T> {
    /// Render the report as four lines, without a trailing newline.
    pub fn render(&self, labels: &Labels) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}",
            labels.original,
            format_set(&stringify(&self.original)),
            labels.evens,
            format_set(&stringify(&self.evens)),
            labels.squared,
            format_set(&stringify(&self.squared)),
            labels.total,
            self.total,
        )
    }
}

impl<T: Integral> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Labels::default()))
    }
}
