use clap::Args;
use fmtspec_printf::compat::Mismatch;
use fmtspec_printf::{compare, scan, CompareOptions, Signature};
use itertools::Itertools;
use miette::{miette, Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{collections::HashMap, fmt::Display, fs::File, io::BufReader, path::PathBuf};
use tracing::{info, warn};

#[derive(Args)]
pub struct CheckArgs {
    /// Table the translation was made from, a JSON object of key to format string
    #[arg(short, long, value_name = "FILE")]
    base: PathBuf,

    /// Translated table, a JSON object of key to format string
    #[arg(short, long, value_name = "FILE")]
    translation: PathBuf,

    /// Accept different length modifiers for the same conversion
    #[arg(long, default_value_t = false)]
    loose_size: bool,

    /// Do not compare dictionary keys
    #[arg(long, default_value_t = false)]
    ignore_keys: bool,
}

/// Problems found for one key of the table
#[derive(Debug, PartialEq, Eq)]
pub enum Finding {
    Unreadable(String),
    Mismatches(Vec<Mismatch>),
}

impl Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::Unreadable(reason) => writeln!(f, "  ❌ {}", reason.red()),
            Finding::Mismatches(mismatches) => {
                for mismatch in mismatches {
                    writeln!(f, "  * {}", mismatch.yellow())?;
                }
                Ok(())
            }
        }
    }
}

fn load_table(path: &PathBuf) -> Result<HashMap<String, String>> {
    let file = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .into_diagnostic()
        .context(format!("parsing {}", path.display()))
}

/// Compare one pair of strings.
pub fn check_pair(base: &str, translation: &str, options: &CompareOptions) -> Option<Finding> {
    let base = match scan(base) {
        Ok(specs) => Signature::new(&specs, options),
        Err(e) => return Some(Finding::Unreadable(format!("base: {}", e))),
    };
    let translation = match scan(translation) {
        Ok(specs) => Signature::new(&specs, options),
        Err(e) => return Some(Finding::Unreadable(format!("translation: {}", e))),
    };

    let mismatches = compare(&base, &translation, options);
    if mismatches.is_empty() {
        None
    } else {
        Some(Finding::Mismatches(mismatches))
    }
}

/// Compare every key found in both tables, sorted by key.
pub fn check_tables(
    base: &HashMap<String, String>,
    translation: &HashMap<String, String>,
    options: &CompareOptions,
) -> Vec<(String, Finding)> {
    for key in translation.keys().filter(|k| !base.contains_key(*k)).sorted() {
        warn!("{} only exists in the translation", key);
    }

    base.iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .filter_map(|(key, value)| match translation.get(key) {
            Some(translated) => check_pair(value, translated, options)
                .map(|finding| (key.clone(), finding)),
            None => {
                warn!("{} is missing from the translation", key);
                None
            }
        })
        .collect()
}

impl CheckArgs {
    pub fn handle(&self) -> Result<()> {
        let options = CompareOptions::builder()
            .strict_size(!self.loose_size)
            .check_keys(!self.ignore_keys)
            .build();

        let base = load_table(&self.base)?;
        let translation = load_table(&self.translation)?;
        info!(
            "comparing {} entries against {}",
            translation.len(),
            self.base.display()
        );

        let findings = check_tables(&base, &translation, &options);
        for (key, finding) in &findings {
            println!("🔃 {}", key.blue());
            print!("{}", finding);
        }

        if findings.is_empty() {
            info!("no mismatches found");
            Ok(())
        } else {
            Err(miette!("{} entries do not match", findings.len()))
        }
    }
}
