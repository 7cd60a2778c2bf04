//! Shell completion support for filterbar
//!
//! - Default: static completion scripts for subcommands and flags
//! - `dynamic-completions`: completions served by the binary itself through
//!   the `COMPLETE` environment variable

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Destination of the script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

/// Initialize dynamic completion system
///
/// Call this at the start of main() before argument parsing. It answers
/// completion requests when `COMPLETE` is set and exits.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}
