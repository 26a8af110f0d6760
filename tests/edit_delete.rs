use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn bin(store_path: &str) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_CSV_PATH", store_path);
    cmd
}

fn add(store: &str, first: &str, email: &str, phone: &str) {
    bin(store)
        .args([
            "add",
            "--first-name",
            first,
            "--last-name",
            "Smith",
            "--address",
            "12 Elm Road",
            "--email",
            email,
            "--phone",
            phone,
        ])
        .assert()
        .success()
        .stdout(contains("Contact added successfully"));
}

#[test]
fn edit_changes_only_the_given_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("contacts.csv");
    let store = store.to_string_lossy();

    add(&store, "Alice", "alice@example.com", "0803123456");

    bin(&store)
        .args([
            "edit",
            "--email",
            "alice@example.com",
            "--new-phone",
            "0707654321",
        ])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    bin(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("0707654321"))
        .stdout(contains("Alice"));

    Ok(())
}

#[test]
fn edit_unknown_email_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("contacts.csv");
    let store = store.to_string_lossy();

    bin(&store)
        .args([
            "edit",
            "--email",
            "ghost@example.com",
            "--new-phone",
            "0707654321",
        ])
        .assert()
        .failure()
        .stderr(contains("Contact not found"));

    Ok(())
}

#[test]
fn edit_to_an_email_already_taken_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("contacts.csv");
    let store = store.to_string_lossy();

    add(&store, "Alice", "alice@example.com", "0803123456");
    add(&store, "Bob", "bob@example.com", "0909876543");

    bin(&store)
        .args([
            "edit",
            "--email",
            "bob@example.com",
            "--new-email",
            "alice@example.com",
        ])
        .assert()
        .failure()
        .stderr(contains("A contact with this email already exists"));

    Ok(())
}

#[test]
fn delete_then_delete_again() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store = dir.path().join("contacts.csv");
    let store = store.to_string_lossy();

    add(&store, "Alice", "alice@example.com", "0803123456");

    bin(&store)
        .args(["delete", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(contains("Contact deleted successfully"));

    bin(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No contact yet"));

    bin(&store)
        .args(["delete", "--email", "alice@example.com"])
        .assert()
        .failure()
        .stderr(contains("Contact not found"));

    Ok(())
}
