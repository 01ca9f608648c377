//! Base types describing a parsed format specifier.

use derive_more::derive::{Constructor, Deref, Display, Index, IntoIterator};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::FormatFlags;

/// Byte width of the argument a specifier consumes
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Size {
    /// Whatever the conversion implies without a length modifier
    #[default]
    #[display("default")]
    Default,
    #[display("1")]
    Size1,
    #[display("2")]
    Size2,
    #[display("4")]
    Size4,
    #[display("8")]
    Size8,
    #[display("16")]
    Size16,
}

impl Size {
    /// Size of a C `long`
    pub const LONG: Size = Size::Size8;

    /// Size of a pointer
    pub const POINTER: Size = Size::Size8;

    /// Number of bytes, if not the default size.
    pub const fn bytes(&self) -> Option<u8> {
        match self {
            Size::Default => None,
            Size::Size1 => Some(1),
            Size::Size2 => Some(2),
            Size::Size4 => Some(4),
            Size::Size8 => Some(8),
            Size::Size16 => Some(16),
        }
    }
}

/// How the argument of a specifier must be consumed
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArgType {
    /// Specifier ended before a conversion character
    #[default]
    #[display("unknown")]
    Unknown,

    /// Not a conversion, such as the `%%` escape. Never returned by [`crate::scan`]
    #[display("literal")]
    Literal,

    #[display("integer")]
    Integer,

    #[display("float")]
    Float,

    #[display("pointer")]
    Pointer,

    /// General object, `%@`
    #[display("object")]
    Object,

    /// Wide character string, `%S`
    #[display("wide string")]
    WideString,

    /// Byte character string, `%s`
    #[display("string")]
    CString,

    /// Length prefixed character string, `%P`
    #[display("pascal string")]
    PascalString,

    /// Single wide character, `%C`
    #[display("wide char")]
    WideChar,

    /// `%n`, which is disabled and never writes back
    #[display("disabled write-back")]
    DisabledWriteBack,
}

/// Presentation of a localizable numeric conversion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericStyle {
    #[display("decimal")]
    Decimal,
    #[display("unsigned")]
    Unsigned,
    #[display("scientific")]
    Scientific,
}

/// Width or precision of a specifier
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arg {
    /// Literal value written in the format string
    Value(u32),

    /// Taken from the argument at this 0-based position (`*N$`)
    Index(u8),

    /// Taken from the next argument in sequence (`*`)
    Next,
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(value) => write!(f, "{}", value),
            Arg::Index(index) => write!(f, "*{}$", u16::from(*index) + 1),
            Arg::Next => f.write_str("*"),
        }
    }
}

/// A single parsed format specifier
///
/// Constructed by [`crate::parse::parse_spec`]. Once returned it is plain data.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spec {
    pub size: Size,
    pub arg_type: ArgType,
    pub flags: FormatFlags,

    /// Byte offset of the `%` in the format string
    pub location: usize,

    /// Length in bytes of the specifier, including the `%`
    pub length: usize,

    /// The 0-based position of the argument in the argument list.
    pub main_arg_num: Option<u8>,

    pub precision: Option<Arg>,
    pub width: Option<Arg>,

    /// Only set for localizable numeric quantities
    pub numeric_style: Option<NumericStyle>,

    /// Dictionary key for externally resolved specifiers
    pub config_key: Option<String>,
}

impl Spec {
    /// Exact text this specifier was parsed from, including the leading `%`.
    ///
    /// Returns `None` when `format` is not the string the specifier came from.
    pub fn source_text<'a>(&self, format: &'a str) -> Option<&'a str> {
        format.get(self.location..self.location + self.length)
    }

    /// Resolved through a dictionary key rather than an argument
    pub fn is_external(&self) -> bool {
        self.flags.contains(FormatFlags::EXTERNAL)
    }

    /// Written with the `%[key]@` entity syntax
    pub fn is_entity(&self) -> bool {
        self.flags.contains(FormatFlags::ENTITY_MARKER)
    }

    /// Whether a formatter would read a main argument for this specifier
    pub fn consumes_argument(&self) -> bool {
        !self.is_external() && !matches!(self.arg_type, ArgType::Unknown | ArgType::Literal)
    }
}

/// Ordered list of the specifiers found in a format string
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, Index, IntoIterator)]
#[into_iterator(owned, ref)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Specifiers(Vec<Spec>);

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::{Arg, ArgType, Size, Spec};

    #[traced_test]
    #[test]
    fn size_aliases() {
        assert_eq!(Size::LONG, Size::Size8);
        assert_eq!(Size::POINTER, Size::Size8);
        assert_eq!(Size::Default.bytes(), None);
        assert_eq!(Size::Size16.bytes(), Some(16));
    }

    #[traced_test]
    #[test]
    fn arg_display() {
        assert_eq!(Arg::Value(12).to_string(), "12");
        assert_eq!(Arg::Index(2).to_string(), "*3$");
        assert_eq!(Arg::Next.to_string(), "*");
    }

    #[traced_test]
    #[test]
    fn empty_spec_defaults() {
        let spec = Spec::default();
        assert_eq!(spec.size, Size::Default);
        assert_eq!(spec.arg_type, ArgType::Unknown);
        assert!(spec.flags.is_empty());
        assert_eq!(spec.main_arg_num, None);
        assert_eq!(spec.precision, None);
        assert_eq!(spec.width, None);
        assert!(!spec.consumes_argument());
    }

    #[traced_test]
    #[test]
    fn source_text_out_of_bounds() {
        let spec = Spec {
            location: 4,
            length: 3,
            ..Default::default()
        };
        assert_eq!(spec.source_text("ab %@"), None);
        assert_eq!(spec.source_text("abc %2$@"), Some("%2$"));
    }
}
