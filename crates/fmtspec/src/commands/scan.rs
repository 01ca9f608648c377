use clap::Args;
use fmtspec_printf::{scan, Spec};
use itertools::Itertools;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use tracing::debug;

#[derive(Args)]
pub struct ScanArgs {
    /// Format strings to scan
    #[arg(required = true, value_name = "FORMAT")]
    formats: Vec<String>,

    /// Print the specifiers as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// One line summary of a specifier
pub fn describe(spec: &Spec, format: &str) -> String {
    let mut parts = vec![format!("{}", spec.arg_type)];
    if let Some(bytes) = spec.size.bytes() {
        parts.push(format!("{} bytes", bytes));
    }
    if let Some(index) = spec.main_arg_num {
        parts.push(format!("argument {}", u16::from(index) + 1));
    }
    if let Some(width) = spec.width {
        parts.push(format!("width {}", width));
    }
    if let Some(precision) = spec.precision {
        parts.push(format!("precision {}", precision));
    }
    if let Some(style) = spec.numeric_style {
        parts.push(format!("{} style", style));
    }
    if !spec.flags.is_empty() {
        parts.push(format!("[{}]", spec.flags));
    }
    if let Some(key) = &spec.config_key {
        parts.push(format!("key '{}'", key));
    }

    format!(
        "{:>4} {:<12} {}",
        spec.location,
        spec.source_text(format).unwrap_or_default(),
        parts.iter().join(", ")
    )
}

impl ScanArgs {
    pub fn handle(&self) -> Result<()> {
        if self.json {
            let results = self
                .formats
                .iter()
                .map(|format| scan(format).context(format!("scanning {:?}", format)))
                .collect::<Result<Vec<_>>>()?;
            let out = serde_json::to_string_pretty(&results).into_diagnostic()?;
            println!("{}", out);
            return Ok(());
        }

        for format in &self.formats {
            let specs = scan(format).context(format!("scanning {:?}", format))?;
            debug!("{} specifiers in {:?}", specs.len(), format);

            println!("{}", format.bold());
            for spec in &specs {
                println!("{}", describe(spec, format));
            }
        }

        Ok(())
    }
}
