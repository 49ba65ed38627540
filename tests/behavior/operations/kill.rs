use crate::*;
use assert_cmd::prelude::*;
use kill_items::error::Result;
use predicates::prelude::*;

const NOTHING_TO_KILL: &str = "Sorry, no ids were given. Nothing to kill.";
const NOT_NUMBERS: &str = "Sorry, all of the ids must be numbers.";
const KILLED: &str = "The items have been killed.";

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_kill_blank_input,
        test_kill_rejects_non_numeric_list,
        test_kill_existing_and_stale_ids,
        test_kill_duplicate_ids,
        test_kill_then_list_round_trip,
        test_kill_unreadable_item,
        test_kill_many_random_ids,
        test_kill_without_force_is_cancelled_non_interactively,
        test_kill_without_ids_requires_prompt,
        test_form_requires_prompt,
    ));
}

async fn test_kill_blank_input(store: TestStore) -> Result<()> {
    store.seed_ids(&[1, 2]).await?;

    store
        .cmd()
        .args(["kill", "--force", "   "])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{NOTHING_TO_KILL}\n")));

    assert_eq!(store.ids().await?, vec![1, 2]);
    Ok(())
}

async fn test_kill_rejects_non_numeric_list(store: TestStore) -> Result<()> {
    store.seed_ids(&[1, 2]).await?;

    store
        .cmd()
        .args(["kill", "--force", "1,2,abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(NOT_NUMBERS));

    assert_eq!(store.ids().await?, vec![1, 2]);
    Ok(())
}

async fn test_kill_existing_and_stale_ids(store: TestStore) -> Result<()> {
    store.seed_ids(&[3, 7, 8]).await?;

    store
        .cmd()
        .args(["kill", "--force", "3, 7, 10"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{KILLED}\n")));

    assert_eq!(store.ids().await?, vec![8]);
    Ok(())
}

async fn test_kill_duplicate_ids(store: TestStore) -> Result<()> {
    store.seed_ids(&[5]).await?;

    store
        .cmd()
        .args(["kill", "-f", "5,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(KILLED));

    assert!(store.ids().await?.is_empty());
    Ok(())
}

async fn test_kill_then_list_round_trip(store: TestStore) -> Result<()> {
    store.seed_ids(&[3, 7, 9]).await?;

    store
        .cmd()
        .args(["kill", "-f", "3,7"])
        .assert()
        .success();

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("9        field_9"))
        .stdout(predicate::str::contains("field_3").not())
        .stdout(predicate::str::contains("field_7").not());
    Ok(())
}

async fn test_kill_many_random_ids(store: TestStore) -> Result<()> {
    let ids = random_ids(25);
    store.seed_ids(&ids).await?;
    let raw = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    store
        .cmd()
        .args(["kill", "-f", raw.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(KILLED));

    assert!(store.ids().await?.is_empty());
    Ok(())
}

async fn test_kill_without_force_is_cancelled_non_interactively(store: TestStore) -> Result<()> {
    store.seed_ids(&[3]).await?;

    store
        .cmd()
        .args(["--non-interactive", "kill", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."))
        .stdout(predicate::str::contains(KILLED).not());

    assert_eq!(store.ids().await?, vec![3]);
    Ok(())
}

async fn test_kill_without_ids_requires_prompt(store: TestStore) -> Result<()> {
    store
        .cmd()
        .args(["--non-interactive", "kill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires interactive input"));
    Ok(())
}

async fn test_form_requires_prompt(store: TestStore) -> Result<()> {
    store.seed_ids(&[1]).await?;

    store
        .cmd()
        .args(["--non-interactive", "form"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires interactive input"));

    assert_eq!(store.ids().await?, vec![1]);
    Ok(())
}

async fn test_kill_unreadable_item(store: TestStore) -> Result<()> {
    store.seed_ids(&[1]).await?;
    store
        .client()
        .operator()
        .write("field_collection_item/2.json", "{oops")
        .await?;

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("field_1"))
        .stdout(predicate::str::is_match(r"(?m)^2$").unwrap());

    store
        .cmd()
        .args(["kill", "--force", "2"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{KILLED}\n")));

    assert_eq!(store.ids().await?, vec![1]);
    Ok(())
}
