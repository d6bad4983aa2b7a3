//! Account subcommands: signup, login, logout, whoami.

use anyhow::{bail, Result};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

pub fn signup(store: &mut StateStore, name: &str, email: &str, password: &str) -> Result<()> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        bail!("name, email, and password are all required");
    }

    if !store.signup(name, email, password)? {
        bail!("an account with this email already exists");
    }

    println!(
        "{} Welcome to MediMate, {}! You are now signed in.",
        "+".bright_green(),
        name.bright_white()
    );
    Ok(())
}

pub fn login(store: &mut StateStore, email: &str, password: &str) -> Result<()> {
    if !store.login(email, password)? {
        bail!("invalid email or password");
    }

    if let Some(user) = store.user() {
        println!(
            "{} Signed in as {} ({})",
            "+".bright_green(),
            user.name.bright_white(),
            user.email.dimmed()
        );
    }
    Ok(())
}

pub fn logout(store: &mut StateStore) -> Result<()> {
    store.logout()?;
    println!("{} Signed out. Your history stays on this device.", "+".bright_green());
    Ok(())
}

pub fn whoami(store: &StateStore) -> Result<()> {
    match store.user() {
        Some(user) => {
            println!("{} ({})", user.name.bright_white(), user.email);
            println!("Member since {}", user.join_date.format("%Y-%m-%d"));
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
