use smol_str::SmolStr;

/// How two names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameComparison {
    /// Exact, case-sensitive match.
    #[default]
    Ordinal,
    /// Match ignoring case, by the Unicode lowercase mapping of each name.
    OrdinalIgnoreCase,
}

impl NameComparison {
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::OrdinalIgnoreCase => {
                a == b
                    || a.chars()
                        .flat_map(char::to_lowercase)
                        .eq(b.chars().flat_map(char::to_lowercase))
            }
        }
    }

    /// Append the folded form of `ch` to `out`. A single char may fold to
    /// several (`İ` becomes `i\u{307}`).
    pub(crate) fn push_folded(self, ch: char, out: &mut String) {
        match self {
            Self::Ordinal => out.push(ch),
            Self::OrdinalIgnoreCase => out.extend(ch.to_lowercase()),
        }
    }

    /// Hash key for `name`: two names are equal under this comparison iff
    /// their keys are equal.
    pub fn key(self, name: &str) -> SmolStr {
        match self {
            Self::Ordinal => SmolStr::new(name),
            Self::OrdinalIgnoreCase => name.chars().flat_map(char::to_lowercase).collect(),
        }
    }
}
