use std::ffi::OsString;

use clap::Parser;

/// The only accepted argument is the id list, so clap's own `--help`/`--version` are turned off
/// and anything starting with `-` is taken as the ids.
#[derive(Parser, Debug)]
#[clap(name = "Bilibili Emote Downloader", about, long_about = None)]
#[clap(
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Emote package ids, comma separated (e.g. 1,2,7067)
    #[clap(value_parser, allow_hyphen_values = true)]
    pub ids: OsString,
}

/// Outcome of reading the command line.
#[derive(Debug)]
pub enum ParsedArgs {
    Run(Cli),
    /// Wrong argument count. Holds the text to print on stderr.
    Usage(String),
}

pub fn parse_from<I, T>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParsedArgs::Run(cli),
        Err(err) => ParsedArgs::Usage(err.to_string()),
    }
}
