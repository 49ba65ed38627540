use crate::*;
use assert_cmd::prelude::*;
use kill_items::error::Result;
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_list_empty_store,
        test_list_shows_every_item,
        test_list_skips_stray_files,
    ));
}

async fn test_list_empty_store(store: TestStore) -> Result<()> {
    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("There are no field collection items.\n"));
    Ok(())
}

async fn test_list_shows_every_item(store: TestStore) -> Result<()> {
    store.seed(3, "field_gallery", "node").await?;
    store.seed(7, "field_slides", "paragraph").await?;

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Here are the field collection items you can kill. Be careful!",
        ))
        .stdout(predicate::str::contains("Item id  Field name     Host type"))
        .stdout(predicate::str::contains("3        field_gallery  node"))
        .stdout(predicate::str::contains("7        field_slides   paragraph"))
        .stdout(predicate::str::contains("Ids of items to kill"))
        .stdout(predicate::str::contains("[Submit]"));
    Ok(())
}

async fn test_list_skips_stray_files(store: TestStore) -> Result<()> {
    store.seed(4, "field_gallery", "node").await?;
    store
        .client()
        .operator()
        .write("field_collection_item/README", "not an item")
        .await?;

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4        field_gallery"))
        .stdout(predicate::str::contains("README").not());
    Ok(())
}
