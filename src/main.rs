mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use sitepass::{Digest, PasswordGenerator, ProfileOverrides};

#[derive(Parser)]
#[command(
    name = "sitepass",
    version,
    author,
    about = "Stateless site password derivation using PBKDF2"
)]
struct Cli {
    /// Site the password is for, e.g. example.com
    site: String,

    /// Login used on that site
    login: String,

    /// Final password length in characters
    #[arg(short = 'L', long, default_value_t = 16)]
    length: usize,

    /// Rotation index; bump it to get a fresh password for the same site
    #[arg(short, long, default_value_t = 1)]
    counter: u32,

    /// PBKDF2 round count
    #[arg(short, long, default_value_t = 100_000)]
    iterations: u32,

    /// Derived key length in bytes
    #[arg(short, long, default_value_t = 32)]
    keylen: usize,

    #[arg(short, long, value_enum, default_value = "sha256")]
    digest: DigestArg,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_symbols: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum DigestArg {
    Sha256,
    Sha512,
}

impl From<DigestArg> for Digest {
    fn from(arg: DigestArg) -> Self {
        match arg {
            DigestArg::Sha256 => Digest::Sha256,
            DigestArg::Sha512 => Digest::Sha512,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ProfileOverrides {
        lowercase: cli.no_lowercase.then_some(false),
        uppercase: cli.no_uppercase.then_some(false),
        numbers: cli.no_numbers.then_some(false),
        symbols: cli.no_symbols.then_some(false),
        digest: Some(cli.digest.into()),
        iterations: Some(cli.iterations),
        key_length: Some(cli.keylen),
        length: Some(cli.length),
        counter: Some(cli.counter),
        version: None,
    };

    let generator = PasswordGenerator::with_profile(&overrides);
    generator.profile().validate()?;

    let master_password = ui::prompt_master_password()?;

    let password = generator.generate_password(&cli.site, &cli.login, &master_password, None)?;

    ui::display_password(&password, &cli.site, &cli.login, generator.profile())?;

    Ok(())
}
