use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "A keypad calculator for the terminal")]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the storage file holding history and theme
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed key scripts and print the final display
    Eval {
        /// Keys and button labels, e.g. "12+30=" or "5 × 3 +/- <Enter>"
        #[arg(required = true)]
        script: Vec<String>,

        /// Copy the resulting operand to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show saved calculations
    History {
        /// Remove all saved calculations
        #[arg(long)]
        clear: bool,
    },

    /// Show the current theme
    Theme {
        /// Switch to the next theme (dark → light → blue)
        #[arg(long)]
        next: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_args() {
        let cli = Cli::try_parse_from(["keycalc", "--no-color", "eval", "5+3", "=", "--copy"]).unwrap();
        assert!(cli.no_color);
        match cli.command {
            Some(Command::Eval { script, copy }) => {
                assert_eq!(script, vec!["5+3", "="]);
                assert!(copy);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["keycalc", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }
}
