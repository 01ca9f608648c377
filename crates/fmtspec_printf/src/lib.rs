//! This library statically analyzes **printf** style format strings as found in localization tables.
//!
//! # Format Specifier Documentation
//!
//! Format strings follow the C `printf` grammar, extended with positional arguments (`%2$@`),
//! an object conversion (`%@`) and dictionary keys (`%#@key@`, `%[key]@`) resolved by a
//! pluralization or localization dictionary. Nothing is ever formatted: every specifier is
//! described by a [`types::Spec`] stating what a conforming formatter would expect.
//!
//! ## Specifier Structure
//!
//! A specifier starts with `%` and ends with a conversion character. Everything in between is
//! optional and may be repeated or interleaved.
//!
//! | Part                   | Syntax                    | Description                                         |
//! |------------------------|---------------------------|-----------------------------------------------------|
//! | Position               | `N$`                      | 1-based argument position, at most 127              |
//! | Flags                  | `-`, `+`, ` `, `0`, `#`   | Justification, sign and padding                     |
//! | Width                  | `N`, `*`, `*N$`           | Literal value or taken from an argument             |
//! | Precision              | `.N`, `.*`, `.*N$`        | Literal value or taken from an argument             |
//! | Length                 | `hh`, `h`, `l`, `ll`, ... | Size of the argument                                |
//! | Conversion             | `d`, `f`, `s`, `@`, ...   | Type of the argument                                |
//!
//! ### Flags
//!
//! - **`-`**: Left justify. Clears zero padding.
//! - **`+`**: Always print a sign. Clears the space flag.
//! - **` `**: Space in place of a positive sign, unless `+` was seen.
//! - **`0`**: Zero padding, unless `-` was seen. Directly after `.` it is a precision of `0`.
//! - **`#`**: No effect, except that `#@` starts a dictionary key.
//!
//! ### Length Modifiers
//!
//! | Modifier | Size (bytes) |
//! |----------|--------------|
//! | `hh`     | 1            |
//! | `h`      | 2            |
//! | `l`      | 8            |
//! | `ll`     | 8            |
//! | `q`, `j` | 8            |
//! | `t`, `z` | 8            |
//! | `L`      | 16           |
//!
//! ### Conversions
//!
//! | Conversion                        | Type                        | Size              |
//! |-----------------------------------|-----------------------------|-------------------|
//! | `c`                               | integer                     | 1                 |
//! | `d` `i` `D` `o` `O` `x` `X`       | integer, decimal style      | length modifier   |
//! | `u` `U`                           | integer, unsigned style     | length modifier   |
//! | `e` `E` `g` `G`                   | float, scientific style     | 8, or 16 with `L` |
//! | `f` `F`                           | float, decimal style        | 8, or 16 with `L` |
//! | `a` `A`                           | float                       | 8, or 16 with `L` |
//! | `p`                               | pointer                     | 8                 |
//! | `s`                               | byte string                 | 8                 |
//! | `S`                               | wide string                 | 8                 |
//! | `P`                               | length prefixed string      | 8                 |
//! | `C`                               | wide character              | 2                 |
//! | `@`                               | object                      | 8                 |
//! | `n`                               | disabled write-back         | 8                 |
//!
//! Any other character ends the specifier as a literal, which is how `%%` is skipped.
//!
//! ### Dictionary Keys
//!
//! - **`%#@key@`**: The object is looked up by `key`.
//! - **`%[key]@`**: Same, with the entity marker flag set.
//!
//! Keys are made of ASCII letters, digits and `_`. If anything else follows the opening `[` or
//! `#@`, the key is abandoned and the character is parsed as part of the regular grammar.
//!
//! ## Errors
//!
//! - A `%` at the very end of the string is [`error::Error::Malformed`].
//! - A width or precision above `i32::MAX`, or a position above 127, is
//!   [`error::Error::Overflow`].
//!
//! Either error fails the whole scan.
//!
//! ```
//! use fmtspec_printf::types::{Arg, ArgType};
//!
//! let specs = fmtspec_printf::scan("%1$d:%2$.*3$d:%4$.*3$d")?;
//! assert_eq!(specs.len(), 3);
//! assert_eq!(specs[1].main_arg_num, Some(1));
//! assert_eq!(specs[1].precision, Some(Arg::Index(2)));
//! assert_eq!(specs[2].arg_type, ArgType::Integer);
//! # Ok::<(), fmtspec_printf::error::Error>(())
//! ```
//!

pub mod compat;
pub mod error;
pub mod flags;
pub mod parse;
pub mod scan;
#[cfg(feature = "serde")]
mod serde;
pub mod types;

pub use compat::{compare, CompareOptions, Signature};
pub use flags::FormatFlags;
pub use parse::parse_spec;
pub use scan::{scan, source_text, FormatSpecifiers};
pub use types::{Spec, Specifiers};
