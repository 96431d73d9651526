use anyhow::{Context, Result};
use console::{Style, Term};
use rpassword::read_password;
use std::io::{self, Write};
use zeroize::Zeroizing;

use sitepass::PasswordProfile;

pub const MAX_MASTER_BYTES: usize = 1024 * 1024;

pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    print!("Master password: ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read master password")?);

    if password.is_empty() {
        anyhow::bail!("Master password cannot be empty");
    }
    if password.len() > MAX_MASTER_BYTES {
        anyhow::bail!(
            "Master password too long ({} bytes, maximum is {})",
            password.len(),
            MAX_MASTER_BYTES
        );
    }

    Ok(password)
}

pub fn display_password(
    password: &Zeroizing<String>,
    site: &str,
    login: &str,
    profile: &PasswordProfile,
) -> Result<()> {
    let term = Term::stdout();
    let dim = if term.features().colors_supported() {
        Style::new().dim()
    } else {
        Style::new()
    };

    term.write_line(&**password)?;
    term.write_line(&format!(
        "{}",
        dim.apply_to(format!(
            "{} / {} | {} chars, counter {}, {} x{}",
            site, login, profile.length, profile.counter, profile.digest, profile.iterations
        ))
    ))?;

    Ok(())
}
