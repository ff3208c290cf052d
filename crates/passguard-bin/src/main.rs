//! `passguard`: check passwords against a policy from the command line.
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use passguard_lib::{PasswordValidator, PolicyOverrides, Settings, ValidationResult};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::{Zeroize, Zeroizing};

/// Longest stdin line accepted, newline included
const MAX_LINE_BYTES: usize = 64 * 1024;

/// Check passwords against a password policy.
///
/// Passwords given as arguments are checked in order; with none, one
/// password per line is read from stdin. Exits 0 if every password passes,
/// 1 if any fails and 2 on a settings or I/O error.
#[derive(Debug, Parser)]
#[command(name = "passguard", version)]
struct Cli {
    /// Settings file (.toml, .yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum password length
    #[arg(long)]
    min_length: Option<usize>,

    /// Maximum password length
    #[arg(long)]
    max_length: Option<usize>,

    /// Require an uppercase letter
    #[arg(long)]
    require_uppercase: Option<bool>,

    /// Require a lowercase letter
    #[arg(long)]
    require_lowercase: Option<bool>,

    /// Require a digit
    #[arg(long)]
    require_numbers: Option<bool>,

    /// Require a special character
    #[arg(long)]
    require_symbols: Option<bool>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Passwords to check
    passwords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl Cli {
    fn overrides(&self) -> PolicyOverrides {
        PolicyOverrides {
            min_length: self.min_length,
            max_length: self.max_length,
            require_uppercase: self.require_uppercase,
            require_lowercase: self.require_lowercase,
            require_numbers: self.require_numbers,
            require_symbols: self.require_symbols,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = run(cli, stdin.lock(), &mut stdout.lock());
    if let Err(e) = &outcome {
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 if every password passed, 1 if any failed, 2 on a settings or I/O error
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether every password passed
fn run<R: BufRead, W: Write>(mut cli: Cli, mut input: R, out: &mut W) -> anyhow::Result<bool> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load().context("failed to load settings")?,
    };
    init_tracing(&settings.log_level);

    // The policy is only checked once every layer is merged
    settings.policy = settings.policy.merged_with(&cli.overrides());
    let policy = settings.policy().context("invalid password policy")?;
    debug!(?policy, "policy resolved");
    let validator = PasswordValidator::new(policy);

    let mut checked = 0usize;
    let mut all_valid = true;

    if cli.passwords.is_empty() {
        // Fixed capacity: the buffer never reallocates, so zeroizing it
        // leaves no stale copy of a password behind.
        let mut line = Zeroizing::new(Vec::with_capacity(MAX_LINE_BYTES));
        loop {
            let read = input
                .by_ref()
                .take(MAX_LINE_BYTES as u64)
                .read_until(b'\n', &mut *line)
                .context("failed to read stdin")?;
            if read == 0 {
                break;
            }
            if line.len() == MAX_LINE_BYTES && line.last() != Some(&b'\n') {
                bail!("input line longer than {MAX_LINE_BYTES} bytes");
            }

            let text = std::str::from_utf8(&line).context("input is not valid UTF-8")?;
            let password = text.strip_suffix('\n').unwrap_or(text);
            let password = password.strip_suffix('\r').unwrap_or(password);
            let result = validator.validate(password);
            line.zeroize();

            all_valid &= result.valid;
            checked += 1;
            report(out, &result, cli.format)?;
        }
    } else {
        for password in cli.passwords.iter_mut() {
            let result = validator.validate(password.as_str());
            password.zeroize();

            all_valid &= result.valid;
            checked += 1;
            report(out, &result, cli.format)?;
        }
    }

    info!(checked, all_valid, "done");
    Ok(all_valid)
}

fn report(out: &mut impl Write, result: &ValidationResult, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
        Format::Text if result.valid => writeln!(out, "ok")?,
        Format::Text => writeln!(out, "{}", result.errors.join("; "))?,
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // Ignore a second install; `run` may be called more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
