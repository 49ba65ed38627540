use crate::*;
use assert_cmd::prelude::*;
use kill_items::error::Result;
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_config_show_reads_config_file,
        test_root_flag_overrides_config_file,
        test_unknown_provider_fails,
    ));
}

async fn test_config_show_reads_config_file(store: TestStore) -> Result<()> {
    let items_root = store.root().join("items");

    store
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Configuration source: config file"))
        .stdout(predicate::str::contains("provider=fs"))
        .stdout(predicate::str::contains(format!(
            "root_path={}",
            items_root.display()
        )));
    Ok(())
}

async fn test_root_flag_overrides_config_file(store: TestStore) -> Result<()> {
    store.seed_ids(&[2]).await?;
    let elsewhere = store.root().join("elsewhere");
    std::fs::create_dir_all(&elsewhere)?;

    store
        .cmd()
        .arg("--root")
        .arg(&elsewhere)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("There are no field collection items.\n"));

    assert_eq!(store.ids().await?, vec![2]);
    Ok(())
}

async fn test_unknown_provider_fails(store: TestStore) -> Result<()> {
    store
        .cmd()
        .env("KILL_ITEMS_PROVIDER", "ftp")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported storage provider: ftp"));
    Ok(())
}
