use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::persistence::Persistence;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the platform data directory when set.
pub const HOME_ENV: &str = "BOOKSHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
}

/// Picks the data directory: an explicit path wins, then `BOOKSHELF_HOME`, then
/// the platform data dir (e.g. `~/.local/share/bookshelf`).
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match env::var_os(HOME_ENV) {
        Some(value) if !value.is_empty() => return Ok(PathBuf::from(value)),
        _ => {}
    }

    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))
}

/// Loads config, checks storage once, and hydrates the shelf.
pub fn initialize(data_dir: PathBuf) -> ShelfContext {
    let config = ShelfConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone());
    let persistence = Persistence::with_key(store, config.storage_key.clone());
    let api = ShelfApi::new(persistence, data_dir);

    ShelfContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookForm;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/somewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn state_survives_a_new_session() {
        let temp = TempDir::new().unwrap();

        let mut first = initialize(temp.path().to_path_buf());
        first
            .api
            .add_book(&mut BookForm::new("Dune", "Herbert", "1965", false))
            .unwrap();

        let second = initialize(temp.path().to_path_buf());
        assert_eq!(second.api.shelf().books(), first.api.shelf().books());
    }

    #[test]
    fn uses_configured_storage_key() {
        let temp = TempDir::new().unwrap();
        let mut config = ShelfConfig::default();
        config.set("storage-key", "MY-BOOKS").unwrap();
        config.save(temp.path()).unwrap();

        let mut ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.api.data_dir(), temp.path());
        assert_eq!(ctx.api.persistence().key(), "MY-BOOKS");
        assert_eq!(ctx.api.persistence().store().root(), temp.path());
        ctx.api
            .add_book(&mut BookForm::new("Emma", "Austen", "1815", true))
            .unwrap();

        assert!(temp.path().join("MY-BOOKS.json").exists());
        assert!(!temp.path().join("BOOKSHELF-APP.json").exists());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.json"), "{oops").unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.config, ShelfConfig::default());
    }
}
