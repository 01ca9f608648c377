//! Flag set attached to every parsed specifier.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of flags collected while parsing a specifier
///
/// Rules between flags are applied by the parser in the order the characters appear:
/// `-` clears [`FormatFlags::ZERO_PAD`] and `+` clears [`FormatFlags::SPACE_SIGN`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// Pad with `0` instead of spaces
    pub const ZERO_PAD: Self = Self(1 << 0);

    /// Left justify within the field width
    pub const LEFT_JUSTIFY: Self = Self(1 << 1);

    /// Always print a sign, overrides [`FormatFlags::SPACE_SIGN`]
    pub const FORCE_SIGN: Self = Self(1 << 2);

    /// Print a space where a positive sign would go
    pub const SPACE_SIGN: Self = Self(1 << 3);

    /// Value comes from an external dictionary key instead of an argument
    pub const EXTERNAL: Self = Self(1 << 4);

    /// Numeric conversion that should follow the locale
    pub const LOCALIZABLE: Self = Self(1 << 5);

    /// Key was written with the `%[key]@` entity marker
    pub const ENTITY_MARKER: Self = Self(1 << 6);

    const NAMED: [(&'static str, FormatFlags); 7] = [
        ("zero-pad", Self::ZERO_PAD),
        ("left-justify", Self::LEFT_JUSTIFY),
        ("force-sign", Self::FORCE_SIGN),
        ("space-sign", Self::SPACE_SIGN),
        ("external", Self::EXTERNAL),
        ("localizable", Self::LOCALIZABLE),
        ("entity-marker", Self::ENTITY_MARKER),
    ];

    /// An empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation
    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Names of the flags that are set, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
    }

    /// Flag with the given name, as listed by [`FormatFlags::names`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }
}

impl BitOr for FormatFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::FormatFlags;

    #[traced_test]
    #[test]
    fn insert_and_remove() {
        let mut flags = FormatFlags::empty();
        assert!(flags.is_empty());

        flags.insert(FormatFlags::ZERO_PAD | FormatFlags::FORCE_SIGN);
        assert!(flags.contains(FormatFlags::ZERO_PAD));
        assert!(flags.contains(FormatFlags::FORCE_SIGN));
        assert!(!flags.contains(FormatFlags::ZERO_PAD | FormatFlags::SPACE_SIGN));

        flags.remove(FormatFlags::ZERO_PAD);
        assert_eq!(flags, FormatFlags::FORCE_SIGN);
    }

    #[traced_test]
    #[test]
    fn display_lists_names() {
        let flags = FormatFlags::LEFT_JUSTIFY | FormatFlags::EXTERNAL;
        assert_eq!(flags.to_string(), "left-justify|external");
        assert_eq!(FormatFlags::empty().to_string(), "");
    }

    #[traced_test]
    #[test]
    fn lookup_by_name() {
        assert_eq!(
            FormatFlags::from_name("entity-marker"),
            Some(FormatFlags::ENTITY_MARKER)
        );
        assert_eq!(FormatFlags::from_name("alternate"), None);
    }
}
