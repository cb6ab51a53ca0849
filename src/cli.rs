//! CLI argument parsing via clap.

use clap::{ArgGroup, Parser};

const AFTER_HELP: &str = "\
Subcommands (abbreviate to any unambiguous prefix):
  say <words>...       Emit a message paragraph
  attach <path>...     Attach a file, or every file under a directory
  insert <file>...     Insert file contents verbatim
  exec <command>...    Run a command and capture its stdout
  paste                Insert the current clipboard text

attach/insert also accept remote paths of the form host:path, staged through
the configured copy program.

Comma separation:
  - A comma at the end of a word ends that subcommand; the comma is dropped.
  - A word that is only a comma ends that subcommand and contributes nothing.
  - A comma inside a word is literal.

Examples:
  missive -c say \"Please review\", attach src/main.rs, say \"Thank you!\"
  missive -o out.md say \"Here are the changes:\", insert changes.txt, attach src/
  missive -o - exec ls -l, say \"Directory listing above.\"
  missive -c attach build-host:/var/log/app.log, say \"Remote log attached.\"";

/// Compose one markdown document from say/attach/insert/exec/paste
/// subcommands.
#[derive(Debug, Parser)]
#[command(
    name = "missive",
    version,
    long_version = &*missive::build_info::cli_version_text().leak(),
    after_help = AFTER_HELP
)]
#[command(group(
    ArgGroup::new("destination")
        .required(true)
        .args(["clipboard", "output"])
))]
pub struct Args {
    /// Copy the generated markdown to the clipboard.
    #[arg(short = 'c', long = "clipboard")]
    pub clipboard: bool,

    /// Write the markdown to FILE; use `-` for stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Path to config file (default: ./missive.toml or
    /// ~/.config/missive/missive.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Subcommand tokens; commas separate invocations.
    #[arg(
        value_name = "TOKEN",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
