use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use atku_store::{JsonFileStore, Storefront};

/// A storefront over its own temp data directory.
pub struct TestShop {
    dir: TempDir,
    pub shop: Storefront,
}

impl TestShop {
    pub fn open() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let shop = open_at(dir.path());
        Self { dir, shop }
    }

    /// Simulate a process restart: drop the running instance and restore
    /// a fresh one from the same files.
    pub fn reopen(&mut self) {
        self.shop = open_at(self.dir.path());
    }

    /// Overwrite one persisted document with raw bytes, bypassing the
    /// engine. Used to simulate corruption.
    pub fn clobber(&self, key: &str, raw: &str) {
        std::fs::write(self.dir.path().join(format!("{key}.json")), raw)
            .expect("overwrite persisted document");
    }
}

fn open_at(path: &Path) -> Storefront {
    let port = Arc::new(JsonFileStore::open(path).expect("open json store"));
    Storefront::open_demo(port)
}
