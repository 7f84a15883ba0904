use std::io::{self, Write};

use anyhow::{bail, Result};

pub const USERNAME_ENV: &str = "KHOURY_USERNAME";
pub const PASSWORD_ENV: &str = "KHOURY_PASSWORD";

/// Login credentials for one run. Never written anywhere.
pub struct Credentials {
    pub username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from the environment, then `default_username`,
    /// prompting for whatever is still missing.
    pub fn resolve(default_username: Option<&str>) -> Result<Self> {
        Self::from_sources(
            std::env::var(USERNAME_ENV).ok(),
            std::env::var(PASSWORD_ENV).ok(),
            default_username,
            prompt_username,
            || Ok(rpassword::prompt_password("Khoury password: ")?),
        )
    }

    fn from_sources(
        env_username: Option<String>,
        env_password: Option<String>,
        default_username: Option<&str>,
        ask_username: impl FnOnce() -> Result<String>,
        ask_password: impl FnOnce() -> Result<String>,
    ) -> Result<Self> {
        let username = match env_username
            .filter(|u| !u.trim().is_empty())
            .or_else(|| default_username.map(String::from))
        {
            Some(username) => username,
            None => ask_username()?,
        };
        let username = username.trim().to_string();
        if username.is_empty() {
            bail!("Username is required");
        }

        let password = match env_password.filter(|p| !p.is_empty()) {
            Some(password) => password,
            None => ask_password()?,
        };
        if password.is_empty() {
            bail!("Password is required");
        }

        Ok(Self { username, password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

fn prompt_username() -> Result<String> {
    print!("Khoury username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    Ok(username.trim().to_string())
}
