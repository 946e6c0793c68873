// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lumeo — backend service for a digital-consultancy marketing and
//! lead-generation platform.
//!
//! This is the binary entry point.

mod doctor;
mod serve;

use clap::{Parser, Subcommand};

use lumeo_core::error::LumeoError;

/// Lumeo — consultancy marketing platform backend.
#[derive(Parser, Debug)]
#[command(name = "lumeo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Lumeo HTTP server.
    Serve,
    /// Run diagnostic checks against the configuration and integrations.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Hash a password for use as `admin.password_hash`.
    HashPassword {
        /// The password to hash.
        password: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup; every component takes
    // it by reference from here.
    let config = match lumeo_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            lumeo_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        Some(Commands::HashPassword { password }) => hash_password(&password),
        None => {
            println!("lumeo: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Prints an Argon2id PHC string for `admin.password_hash`.
fn hash_password(password: &str) -> Result<(), LumeoError> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
    use argon2::Argon2;

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| LumeoError::Internal(format!("failed to hash password: {e}")))?;
    println!("{hash}");
    Ok(())
}
