use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "KZREAD_PASSWORD";

/// Resolves the store password.
///
/// Order: `file` if given, then `KZREAD_PASSWORD`, then the first line of
/// piped stdin, then an interactive prompt.
pub fn read_password(file: Option<&Path>) -> Result<Zeroizing<String>> {
    let password = match file {
        Some(path) => {
            let mut text = Zeroizing::new(
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read password file '{}'", path.display()))?,
            );
            trim_newline(&mut text);
            text
        }
        None => from_env_or_terminal()?,
    };

    if password.is_empty() {
        bail!("No password provided");
    }
    Ok(password)
}

fn from_env_or_terminal() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Zeroizing::new(rpassword::prompt_password("Store password: ")?));
    }

    let mut line = Zeroizing::new(String::new());
    stdin.lock().read_line(&mut line)?;
    trim_newline(&mut line);
    Ok(line)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
