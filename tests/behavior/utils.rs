use kill_items::error::Result;
use kill_items::item::{Item, ItemId};
use kill_items::storage::{EntityQuery, StorageClient, StorageConfig};
use libtest_mimic::{Failed, Trial};
use rand::Rng;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use tempfile::TempDir;
use uuid::Uuid;

pub static TEST_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

pub static TEST_FIXTURE: LazyLock<Fixture> = LazyLock::new(Fixture::new);

const OVERRIDE_VARS: &[&str] = &[
    "KILL_ITEMS_PROVIDER",
    "KILL_ITEMS_ROOT",
    "KILL_ITEMS_BUCKET",
    "KILL_ITEMS_ENDPOINT",
    "KILL_ITEMS_REGION",
    "KILL_ITEMS_ACCESS_KEY_ID",
    "KILL_ITEMS_ACCESS_KEY_SECRET",
];

pub struct Fixture {
    base: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let base = tempfile::Builder::new()
            .prefix("kill-items-behavior-")
            .tempdir()
            .unwrap();
        Self { base }
    }

    /// A fresh directory for one test, so trials can run in parallel.
    pub fn new_root(&self) -> PathBuf {
        self.base.path().join(Uuid::new_v4().to_string())
    }

    pub fn cleanup(&self) {
        let _ = fs::remove_dir_all(self.base.path());
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// An fs item store plus a config file pointing the binary at it.
pub struct TestStore {
    root: PathBuf,
    config_file: PathBuf,
    client: StorageClient,
}

impl TestStore {
    pub async fn new() -> Result<Self> {
        let root = TEST_FIXTURE.new_root();
        let items_root = root.join("items");
        fs::create_dir_all(&items_root)?;

        let config_file = root.join("config.toml");
        fs::write(
            &config_file,
            format!(
                "provider = \"fs\"\nroot_path = {:?}\n",
                items_root.to_string_lossy()
            ),
        )?;

        let client =
            StorageClient::new(StorageConfig::fs(Some(items_root.to_string_lossy().to_string())))
                .await?;

        Ok(Self {
            root,
            config_file,
            client,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn client(&self) -> &StorageClient {
        &self.client
    }

    pub async fn seed(&self, id: u64, field_name: &str, host_type: &str) -> Result<()> {
        let item_id = ItemId::new(id).expect("test ids are positive");
        let item = Item::new(item_id, field_name, host_type);
        self.client
            .operator()
            .write(&item_id.document_path(), serde_json::to_vec(&item)?)
            .await?;
        Ok(())
    }

    pub async fn seed_ids(&self, ids: &[u64]) -> Result<()> {
        for id in ids {
            self.seed(*id, &format!("field_{id}"), "node").await?;
        }
        Ok(())
    }

    pub async fn ids(&self) -> Result<Vec<u64>> {
        Ok(self
            .client
            .execute()
            .await?
            .into_iter()
            .map(ItemId::get)
            .collect())
    }

    /// The binary, configured through this store's config file only.
    pub fn cmd(&self) -> Command {
        let mut cmd = kill_items_cmd();
        for var in OVERRIDE_VARS {
            cmd.env_remove(var);
        }
        cmd.env("KILL_ITEMS_CONFIG", &self.config_file);
        cmd
    }
}

pub fn kill_items_cmd() -> Command {
    use assert_cmd::prelude::*;
    Command::cargo_bin("kill-items").unwrap()
}

/// Distinct random positive ids.
pub fn random_ids(count: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut ids = BTreeSet::new();
    while ids.len() < count {
        ids.insert(rng.random_range(1..100_000u64));
    }
    ids.into_iter().collect()
}

pub fn build_async_trial<F, Fut>(name: &str, f: F) -> Trial
where
    F: FnOnce(TestStore) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<()>> + Send,
{
    let handle = TEST_RUNTIME.handle().clone();

    Trial::test(format!("behavior::{name}"), move || {
        handle
            .block_on(async move {
                let store = TestStore::new().await?;
                f(store).await
            })
            .map_err(|err| Failed::from(err.to_string()))
    })
}

macro_rules! async_trials {
    ($($test:ident),* $(,)?) => {
        vec![$(
            build_async_trial(stringify!($test), $test),
        )*]
    };
}
