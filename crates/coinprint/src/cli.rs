use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// coinprint — generate coin key seeds and print them as PDF labels.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory that output files are written to and default input files
    /// are read from.
    #[arg(long, global = true, default_value = ".", env = "COINPRINT_OUT_DIR")]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of coin seeds, their contract input, and labels.
    Generate {
        /// Number of coins to generate.
        #[arg(long, default_value = "10", env = "COINPRINT_COUNT")]
        count: usize,

        /// Face value of every coin in micro-units. Defaults to 1000 CCD,
        /// or 2000 CCD with `--qr`.
        #[arg(long, env = "COINPRINT_AMOUNT")]
        amount: Option<u64>,

        /// Print QR code labels instead of plain text labels.
        #[arg(long)]
        qr: bool,

        /// Built-in label style name or path to a style TOML file.
        #[arg(long, default_value = "coin", env = "COINPRINT_STYLE", requires = "qr")]
        style: String,
    },

    /// Re-render QR labels from a saved seed file.
    Reprint {
        /// Seed file to reload [default: <out-dir>/qr-coin-seeds.json]
        #[arg(long, env = "COINPRINT_SEEDS")]
        seeds: Option<PathBuf>,

        /// Face value assigned to every reprinted coin, in micro-units.
        #[arg(long, default_value = "2000000000", env = "COINPRINT_AMOUNT")]
        amount: u64,
    },

    /// Check that every seed in a seed file matches its contract entry.
    Verify {
        /// Check the QR bundle instead of the plain one.
        #[arg(long)]
        qr: bool,

        /// Seed file [default: the bundle's seed file in <out-dir>]
        #[arg(long, env = "COINPRINT_SEEDS")]
        seeds: Option<PathBuf>,

        /// Contract input [default: the bundle's contract input in <out-dir>]
        #[arg(long, env = "COINPRINT_CONTRACT_INPUT")]
        contract_input: Option<PathBuf>,
    },

    /// Sign an account address with a coin seed to redeem the coin.
    Sign {
        /// Base58 coin seed as printed on the label.
        #[arg(long, env = "COINPRINT_SEED", hide_env_values = true)]
        seed: String,

        /// Account address to sign, hex encoded.
        #[arg(long)]
        account: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults_match_plain_batch() {
        let cli = Cli::try_parse_from(["coinprint", "generate"]).expect("parse");
        let Command::Generate {
            count,
            amount,
            qr,
            style,
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(count, 10);
        assert_eq!(amount, None);
        assert!(!qr);
        assert_eq!(style, "coin");
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }

    #[test]
    fn reprint_defaults_to_qr_seed_file() {
        let cli = Cli::try_parse_from(["coinprint", "reprint", "--out-dir", "out"]).expect("parse");
        let Command::Reprint { seeds, amount } = cli.command else {
            panic!("expected reprint");
        };
        assert_eq!(seeds, None);
        assert_eq!(amount, 2_000_000_000);
        assert_eq!(cli.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn style_without_qr_is_rejected() {
        let err = Cli::try_parse_from(["coinprint", "generate", "--style", "coin-alt"])
            .err()
            .expect("--style needs --qr");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        Cli::try_parse_from(["coinprint", "generate", "--qr", "--style", "coin-alt"])
            .expect("parse with --qr");
    }

    #[test]
    fn verify_takes_qr_flag_and_optional_paths() {
        let cli = Cli::try_parse_from(["coinprint", "verify", "--qr"]).expect("parse");
        let Command::Verify {
            qr,
            seeds,
            contract_input,
        } = cli.command
        else {
            panic!("expected verify");
        };
        assert!(qr);
        assert_eq!(seeds, None);
        assert_eq!(contract_input, None);
    }
}
