pub mod init;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus")]
#[command(version)]
#[command(about = "Content management API for a training institute site", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "campus.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        production: bool,
    },
    Migrate,
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Subcommand)]
pub enum TokenCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        expires_at: Option<String>,
    },
    List,
    Revoke {
        id: i64,
    },
}
