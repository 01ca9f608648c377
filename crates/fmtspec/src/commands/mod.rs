pub mod check;
pub mod scan;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// List the specifiers of format strings
    Scan(scan::ScanArgs),
    /// Compare the specifiers of two localization tables
    Check(check::CheckArgs),
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Scan(scan) => scan.handle(),
            Commands::Check(check) => check.handle(),
        }
    }
}
