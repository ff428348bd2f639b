//! Digit grouping through the recursive function adapter
//!
//! `"1234567"` becomes `"1,234,567"`: the last group is split off, the
//! remainder is grouped recursively, and the halves are joined with the
//! separator. Strings no longer than one group are returned unchanged.

use fnkit_core::config::FormatConfig;
use fnkit_core::error::{Error, Result};
use fnkit_core::recursion::recursive_function;
use tracing::trace;

/// Splits digit strings into fixed-width groups counted from the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrouping {
    separator: String,
    group_size: usize,
}

impl Default for DigitGrouping {
    fn default() -> Self {
        let config = FormatConfig::default();
        Self {
            separator: config.separator,
            group_size: config.group_size,
        }
    }
}

impl DigitGrouping {
    /// Grouping described by `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config does not validate.
    pub fn with_config(config: &FormatConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            separator: config.separator.clone(),
            group_size: config.group_size,
        })
    }

    /// Separator placed between groups
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Characters per group
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Insert separators into `number`
    ///
    /// Grouping counts characters, so multi-byte input is never split
    /// inside a code point.
    ///
    /// Each group adds one level of recursion, so stack use grows with
    /// `chars / group_size`. Inputs of a few thousand characters are fine on
    /// a default 2 MiB thread stack; tens of thousands can exhaust it, which
    /// aborts the process rather than panicking.
    pub fn apply(&self, number: &str) -> String {
        let group_size = self.group_size;
        let separator = self.separator.as_str();
        // Byte offset of every char boundary, including the end
        let bounds: Vec<usize> = number
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(number.len()))
            .collect();

        // Recurse on the char count of the prefix still to be grouped
        let insert = recursive_function(|this: &dyn Fn(usize) -> String, chars: usize| {
            if chars <= group_size {
                return number[..bounds[chars]].to_string();
            }
            let split = chars - group_size;
            let mut grouped = this(split);
            grouped.push_str(separator);
            grouped.push_str(&number[bounds[split]..bounds[chars]]);
            grouped
        });

        let grouped = insert(bounds.len() - 1);
        trace!(target: "fnkit::digits", input = number, output = %grouped, "Grouped digits");
        grouped
    }
}

/// Insert `,` every 3 characters from the right
pub fn insert_separators(number: &str) -> String {
    DigitGrouping::default().apply(number)
}

/// One `input:expected` digit-grouping case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Raw digit string
    pub input: String,
    /// Expected grouped output
    pub expected: String,
}

impl Scenario {
    /// Parse `"1234567:1,234,567"` into its two halves
    ///
    /// Only the first `:` splits, so the expected half may itself contain `:`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScenario` when no `:` is present.
    pub fn parse(case: &str) -> Result<Self> {
        let (input, expected) = case
            .split_once(':')
            .ok_or_else(|| Error::invalid_scenario(format!("missing ':' in {:?}", case)))?;
        Ok(Self {
            input: input.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Group the input with `grouping`
    pub fn run(&self, grouping: &DigitGrouping) -> String {
        grouping.apply(&self.input)
    }

    /// Whether `grouping` produces the expected output
    pub fn passes(&self, grouping: &DigitGrouping) -> bool {
        self.run(grouping) == self.expected
    }
}
