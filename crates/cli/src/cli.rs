use std::path::PathBuf;

use clap::Parser;

use casestatus_core::Credentials;

/// Look up case statuses for a list of receipt numbers.
#[derive(Parser)]
#[command(name = "case-status", version)]
pub struct Args {
    /// Name of input file, one receipt number per line
    #[arg(short, long, default_value = "receipts.txt")]
    pub infile: PathBuf,

    /// Name of output file; results are appended
    #[arg(short, long, default_value = "receipts_and_status.txt")]
    pub outfile: PathBuf,

    /// Login username
    #[arg(short, long, default_value = "", env = "CASESTATUS_USERNAME")]
    pub username: String,

    /// Login password
    #[arg(
        short,
        long,
        default_value = "",
        env = "CASESTATUS_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
