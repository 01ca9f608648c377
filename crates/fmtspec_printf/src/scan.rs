//! Finding every specifier in a format string
//!

use tracing::{instrument, trace};

use crate::error::Result;
use crate::parse::parse_spec;
use crate::types::{ArgType, Spec, Specifiers};

/// Parse every specifier in `format`, in order of appearance.
///
/// Literal results such as `%%` are skipped. A malformed or overflowing specifier anywhere in
/// the string fails the whole scan.
///
/// ```
/// use fmtspec_printf::types::ArgType;
///
/// let specs = fmtspec_printf::scan("%2$@ has %1$d files")?;
/// assert_eq!(specs.len(), 2);
/// assert_eq!(specs[0].arg_type, ArgType::Object);
/// assert_eq!(specs[0].main_arg_num, Some(1));
/// # Ok::<(), fmtspec_printf::error::Error>(())
/// ```
#[instrument(skip(format), err, fields(len = format.len()))]
pub fn scan(format: &str) -> Result<Specifiers> {
    let mut specs = Vec::new();
    let mut cursor = 0;

    while let Some(found) = format[cursor..].find('%') {
        cursor += found;
        let spec = parse_spec(format, &mut cursor)?;
        if spec.arg_type == ArgType::Literal {
            trace!(location = spec.location, "skipping literal");
            continue;
        }

        trace!(
            location = spec.location,
            length = spec.length,
            arg_type = %spec.arg_type,
            "found specifier"
        );
        specs.push(spec);
    }

    Ok(Specifiers::new(specs))
}

/// Exact text `spec` was parsed from, including the leading `%`.
pub fn source_text<'a>(spec: &Spec, format: &'a str) -> Option<&'a str> {
    spec.source_text(format)
}

/// Method form of [`scan`]
pub trait FormatSpecifiers {
    fn format_specifiers(&self) -> Result<Specifiers>;
}

impl FormatSpecifiers for str {
    fn format_specifiers(&self) -> Result<Specifiers> {
        scan(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{scan, source_text, FormatSpecifiers};
    use crate::error::{Error, Result};
    use crate::types::ArgType;

    #[traced_test]
    #[test]
    fn skips_escapes_between_specifiers() -> Result<()> {
        let format = "100%% of %d%%";
        let specs = scan(format)?;
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].arg_type, ArgType::Integer);
        assert_eq!(source_text(&specs[0], format), Some("%d"));
        Ok(())
    }

    #[traced_test]
    #[test]
    fn error_aborts_whole_scan() {
        assert_eq!(scan("%d %@ %"), Err(Error::Malformed { offset: 6 }));
        assert_eq!(scan("%d %999$@"), Err(Error::Overflow { offset: 4 }));
    }

    #[traced_test]
    #[test]
    fn method_form_matches_function() -> Result<()> {
        let format = "%1$@ %2$.*3$f";
        assert_eq!(format.format_specifiers()?, scan(format)?);
        Ok(())
    }

    #[traced_test]
    #[test]
    fn multibyte_text_around_specifiers() -> Result<()> {
        let format = "Größe: %d × %@ — %é";
        let specs = scan(format)?;
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].source_text(format), Some("%d"));
        assert_eq!(specs[1].source_text(format), Some("%@"));
        Ok(())
    }
}
