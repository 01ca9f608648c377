use fmtspec_printf::error::{Error, Result};
use fmtspec_printf::types::{Arg, ArgType, Size};
use fmtspec_printf::{scan, source_text, FormatSpecifiers};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

const SAMPLES: [&str; 12] = [
    "hi",
    "hi %@",
    "%@, %@",
    "%2$@ %1$@",
    "%d %1d %2d",
    "%2.2f",
    "${firstName} still has %#@numberOfRemainingTODOItems@ to complete.",
    "%#@special_key@.",
    "%%",
    "%1$d:%2$.*3$d:%4$.*3$d",
    "100%% done, %-08.3lf%% left %[items]@ %hhu%n",
    "%Lg %zu %5s %C %S %P %p %c %% %x",
];

#[traced_test]
#[test]
fn plain_string() -> Result<()> {
    assert!(scan("hi")?.is_empty());
    assert!(scan("")?.is_empty());
    assert!(scan("no specifiers at all, just text")?.is_empty());
    Ok(())
}

#[traced_test]
#[test]
fn simple_object() -> Result<()> {
    let results = "hi %@".format_specifiers()?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].arg_type, ArgType::Object);
    Ok(())
}

#[traced_test]
#[test]
fn multiple_simple_objects() -> Result<()> {
    let format = "%@, %@";
    let results = scan(format)?;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|s| s.arg_type == ArgType::Object));
    assert_eq!(results[0].location, 0);
    assert_eq!(results[1].location, 4);
    Ok(())
}

#[traced_test]
#[test]
fn positional() -> Result<()> {
    let results = scan("%2$@ %1$@")?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].main_arg_num, Some(1));
    assert_eq!(results[1].main_arg_num, Some(0));
    Ok(())
}

#[traced_test]
#[test]
fn integer() -> Result<()> {
    let results = scan("%d %1d %2d")?;
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].width, Some(Arg::Value(1)));
    Ok(())
}

#[traced_test]
#[test]
fn float() -> Result<()> {
    let results = scan("%2.2f")?;
    assert_eq!(results.len(), 1);
    let spec = &results[0];
    assert_eq!(spec.arg_type, ArgType::Float);
    assert_eq!(spec.precision, Some(Arg::Value(2)));
    assert_eq!(spec.width, Some(Arg::Value(2)));
    Ok(())
}

#[traced_test]
#[test]
fn dictionary_key_in_sentence() -> Result<()> {
    let results =
        scan("${firstName} still has %#@numberOfRemainingTODOItems@ to complete.")?;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].config_key.as_deref(),
        Some("numberOfRemainingTODOItems")
    );
    Ok(())
}

#[traced_test]
#[test]
fn dictionary_key() -> Result<()> {
    let results = scan("%#@special_key@.")?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].config_key.as_deref(), Some("special_key"));
    assert_eq!(results[0].size, Size::POINTER);
    Ok(())
}

#[traced_test]
#[test]
fn invalid() {
    assert_eq!(scan("%"), Err(Error::Malformed { offset: 0 }));
}

#[traced_test]
#[test]
fn valid_escape() -> Result<()> {
    assert!(scan("%%")?.is_empty());
    Ok(())
}

/// Example from https://pubs.opengroup.org/onlinepubs/009695399/functions/printf.html
#[traced_test]
#[test]
fn open_group_example() -> Result<()> {
    let results = scan("%1$d:%2$.*3$d:%4$.*3$d")?;
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].main_arg_num, Some(0));

    assert_eq!(results[1].main_arg_num, Some(1));
    assert_eq!(results[1].precision, Some(Arg::Index(2)));

    assert_eq!(results[2].main_arg_num, Some(3));
    assert_eq!(results[2].precision, Some(Arg::Index(2)));
    Ok(())
}

#[traced_test]
#[test]
fn never_returns_literals() -> Result<()> {
    for format in SAMPLES {
        let results = scan(format)?;
        info!("{} -> {} specifiers", format, results.len());
        assert!(results.iter().all(|s| s.arg_type != ArgType::Literal));
    }
    Ok(())
}

#[traced_test]
#[test]
fn scanning_is_repeatable() -> Result<()> {
    for format in SAMPLES {
        assert_eq!(scan(format)?, scan(format)?);
    }
    Ok(())
}

#[traced_test]
#[test]
fn source_text_matches_span() -> Result<()> {
    for format in SAMPLES {
        for spec in &scan(format)? {
            let text = source_text(spec, format).expect("span inside the format string");
            assert!(text.starts_with('%'), "{}", text);
            assert_eq!(text.len(), spec.length);
        }
    }
    Ok(())
}

#[traced_test]
#[test]
fn mixed_specifiers() -> Result<()> {
    let format = "100%% done, %-08.3lf%% left %[items]@ %hhu%n";
    let results = scan(format)?;

    let texts = results
        .iter()
        .map(|s| s.source_text(format).unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["%-08.3lf", "%[items]@", "%hhu", "%n"]);

    let types = results.iter().map(|s| s.arg_type).collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![
            ArgType::Float,
            ArgType::Object,
            ArgType::Integer,
            ArgType::DisabledWriteBack
        ]
    );

    assert_eq!(results[0].width, Some(Arg::Value(8)));
    assert_eq!(results[0].precision, Some(Arg::Value(3)));
    assert!(results[1].is_entity());
    assert_eq!(results[2].size, Size::Size1);
    Ok(())
}

#[traced_test]
#[test]
fn owned_iteration() -> Result<()> {
    let keys = scan("%#@a@ %#@b@ %d")?
        .into_iter()
        .filter_map(|s| s.config_key)
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    Ok(())
}
