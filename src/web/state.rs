use crate::{Config, Database};
use std::path::PathBuf;

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub upload_dir: PathBuf,
    pub production_mode: bool,
}

impl AppState {
    pub fn new(config: Config, db: Database, production_mode: bool) -> Self {
        let upload_dir = PathBuf::from(&config.media.upload_dir);
        Self {
            config,
            db,
            upload_dir,
            production_mode,
        }
    }
}
