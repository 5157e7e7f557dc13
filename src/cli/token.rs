use crate::cli::TokenCommand;
use crate::services::api_token;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, command: TokenCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    match command {
        TokenCommand::Create { name, expires_at } => {
            let (raw, token) = api_token::create_token(&db, &name, expires_at.as_deref())?;
            println!("Created token '{}' (id {})", token.name, token.id);
            println!();
            println!("  {}", raw);
            println!();
            println!("Store it now. It cannot be shown again.");
        }
        TokenCommand::List => {
            let tokens = api_token::list_tokens(&db)?;
            if tokens.is_empty() {
                println!("No tokens.");
                return Ok(());
            }
            println!("{:<6} {:<24} {:<16} {:<22} {}", "ID", "Name", "Prefix", "Last used", "Expires");
            for t in tokens {
                println!(
                    "{:<6} {:<24} {:<16} {:<22} {}",
                    t.id,
                    t.name,
                    t.prefix,
                    t.last_used_at.as_deref().unwrap_or("never"),
                    t.expires_at.as_deref().unwrap_or("never"),
                );
            }
        }
        TokenCommand::Revoke { id } => {
            api_token::revoke_token(&db, id)?;
            println!("Revoked token {}", id);
        }
    }

    Ok(())
}
