// file: src/cli/args.rs
// version: 1.0.0
// guid: a5d7e9fb-d7e8-4d19-a9fb-d7e8f90a1b23

//! Command line argument definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "safe_rsync")]
#[command(about = "Fast & safe rsync wrapper with colourful progress and logs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example:\n  safe_rsync -n ~/data1 ~/data2")]
pub struct Cli {
    /// Source directory
    pub src: String,

    /// Destination directory
    pub dst: String,

    /// Dry run (no changes)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Emit the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_two_positionals() {
        assert!(Cli::try_parse_from(["safe_rsync"]).is_err());
        assert!(Cli::try_parse_from(["safe_rsync", "only-src"]).is_err());
        assert!(Cli::try_parse_from(["safe_rsync", "src", "dst", "extra"]).is_err());
        assert!(Cli::try_parse_from(["safe_rsync", "src", "dst"]).is_ok());
    }

    #[test]
    fn test_dry_run_flag_variants() {
        let short = Cli::try_parse_from(["safe_rsync", "-n", "src", "dst"]).unwrap();
        assert!(short.dry_run);

        let long = Cli::try_parse_from(["safe_rsync", "--dry-run", "src", "dst"]).unwrap();
        assert!(long.dry_run);

        let off = Cli::try_parse_from(["safe_rsync", "src", "dst"]).unwrap();
        assert!(!off.dry_run);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["safe_rsync", "-v", "-q", "src", "dst"]).is_err());
    }
}
