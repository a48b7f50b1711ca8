//! Unique-name resolution.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::comparison::NameComparison;
use super::error::NameError;
use super::reserved::{NameSet, ReservedNames};

pub const ASYNC_SUFFIX: &str = "Async";

/// Shapes the candidate for each attempt.
///
/// With suffix `s` and stem `b` (the base name, minus a trailing `s`):
/// attempt 1 is `b + s`, attempt `n >= 2` is `b + n + s`. The empty suffix
/// gives plain numbering (`item`, `item2`, `item3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuffixStrategy {
    suffix: SmolStr,
}

impl SuffixStrategy {
    pub const NUMERIC: Self = Self {
        suffix: SmolStr::new_inline(""),
    };

    pub const ASYNC: Self = Self {
        suffix: SmolStr::new_inline(ASYNC_SUFFIX),
    };

    pub fn custom(suffix: impl Into<SmolStr>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `base` without a trailing copy of the suffix.
    pub fn stem<'a>(&self, base: &'a str) -> &'a str {
        if self.suffix.is_empty() {
            return base;
        }
        match base.strip_suffix(self.suffix.as_str()) {
            Some(stem) if !stem.is_empty() => stem,
            _ => base,
        }
    }

    /// The candidate name for `attempt` (1-based).
    pub fn candidate(&self, base: &str, attempt: u32) -> String {
        let stem = self.stem(base);
        if attempt <= 1 {
            format!("{stem}{}", self.suffix)
        } else {
            format!("{stem}{attempt}{}", self.suffix)
        }
    }
}

impl Default for SuffixStrategy {
    fn default() -> Self {
        Self::NUMERIC
    }
}

/// Return the first candidate for `base_name` under `strategy` that
/// `reserved` does not contain.
///
/// # Example
/// ```
/// use syster_select::naming::{NameComparison, SuffixStrategy, ensure_unique};
///
/// let taken = ["item", "item2", "item3"];
/// let name = ensure_unique("item", &taken, NameComparison::Ordinal, &SuffixStrategy::NUMERIC);
/// assert_eq!(name.unwrap(), "item4");
///
/// let name = ensure_unique("Process", &[] as &[&str], NameComparison::Ordinal, &SuffixStrategy::ASYNC);
/// assert_eq!(name.unwrap(), "ProcessAsync");
/// ```
pub fn ensure_unique<R>(
    base_name: &str,
    reserved: &R,
    comparison: NameComparison,
    strategy: &SuffixStrategy,
) -> Result<String, NameError>
where
    R: ReservedNames + ?Sized,
{
    if base_name.is_empty() {
        return Err(NameError::EmptyBaseName);
    }

    let mut attempt: u32 = 1;
    loop {
        let candidate = strategy.candidate(base_name, attempt);
        if !reserved.is_reserved(&candidate, comparison) {
            if attempt > 1 {
                debug!(
                    "[NAMING] '{}' resolved to '{}' after {} attempts",
                    base_name, candidate, attempt
                );
            }
            return Ok(candidate);
        }
        trace!("[NAMING] '{}' is reserved", candidate);

        attempt = attempt
            .checked_add(1)
            .ok_or_else(|| NameError::AttemptsExhausted {
                base: base_name.to_string(),
            })?;
    }
}

/// A suffix strategy and name comparison chosen by the caller.
///
/// ```
/// use syster_select::naming::{NameComparison, NameGenerator};
///
/// let generator = NameGenerator::numeric().with_comparison(NameComparison::OrdinalIgnoreCase);
/// let name = generator.ensure_unique("value", &["Value"]).unwrap();
/// assert_eq!(name, "value2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameGenerator {
    strategy: SuffixStrategy,
    comparison: NameComparison,
}

impl NameGenerator {
    pub fn new(strategy: SuffixStrategy) -> Self {
        Self {
            strategy,
            comparison: NameComparison::default(),
        }
    }

    pub fn numeric() -> Self {
        Self::new(SuffixStrategy::NUMERIC)
    }

    pub fn async_method() -> Self {
        Self::new(SuffixStrategy::ASYNC)
    }

    pub fn with_comparison(mut self, comparison: NameComparison) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn strategy(&self) -> &SuffixStrategy {
        &self.strategy
    }

    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    pub fn is_unique<R>(&self, name: &str, reserved: &R) -> bool
    where
        R: ReservedNames + ?Sized,
    {
        !reserved.is_reserved(name, self.comparison)
    }

    pub fn ensure_unique<R>(&self, base_name: &str, reserved: &R) -> Result<String, NameError>
    where
        R: ReservedNames + ?Sized,
    {
        ensure_unique(base_name, reserved, self.comparison, &self.strategy)
    }

    /// Generate one name per base name, unique against `reserved` and
    /// against each other. Earlier base names win the unsuffixed form.
    pub fn ensure_unique_all<I, S, R>(
        &self,
        base_names: I,
        reserved: &R,
    ) -> Result<Vec<String>, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: ReservedNames + ?Sized,
    {
        let mut generated = NameSet::new();
        let mut names = Vec::new();
        for base_name in base_names {
            let name = self.ensure_unique(base_name.as_ref(), &(reserved, &generated))?;
            generated.insert(&name);
            names.push(name);
        }
        Ok(names)
    }
}
