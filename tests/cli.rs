use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_DATA_DIR", data_dir).env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, description: &str, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["add", description, amount, category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully"));
}

#[test]
fn coffee_and_bus_scenario() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    add(dir, "Coffee", "3.5", "food", "01-01-2024");
    add(dir, "Bus", "2.0", "TRANSPORTATION", "02-01-2024");

    expenses(dir)
        .args(["summary", "1", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent in 1/2024: R$ 5.50"));

    expenses(dir)
        .args(["budget", "5.0", "2024", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded! Actual: R$ 5.50"));

    expenses(dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully: 1"));

    expenses(dir)
        .args(["summary", "1", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent in 1/2024: R$ 2.00"));

    let content = fs::read_to_string(dir.join("expenses.json"))?;
    assert_eq!(
        content,
        r#"[{"id":2, "description":"Bus", "amount":2, "date":"02-01-2024", "category":"TRANSPORTATION"}]"#
    );
    Ok(())
}

#[test]
fn budget_survives_between_runs() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    expenses(dir)
        .args(["status", "2024", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for 2024-01"));

    add(dir, "Groceries", "40", "groceries", "10-01-2024");
    expenses(dir)
        .args(["budget", "100", "2024", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're on track for 2024-01!"));

    expenses(dir)
        .args(["status", "2024", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget of R$ 100.00 not exceeded"));
    Ok(())
}

#[test]
fn malformed_file_discards_everything() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    fs::write(
        dir.join("expenses.json"),
        concat!(
            r#"[{"id":1, "description":"Coffee", "amount":3.5, "date":"01-01-2024", "category":"FOOD"},"#,
            r#"{"id":2, "description":"Bus", "amount":2.0, "date":"02-01-2024", "category":"SPACESHIP"}]"#
        ),
    )?;

    expenses(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."))
        .stderr(predicate::str::contains("discarding the entire collection"));
    Ok(())
}

#[test]
fn update_and_delete_missing_ids() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    expenses(dir)
        .args(["update", "9", "Tea", "1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not found: 9"));

    expenses(dir)
        .args(["delete", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not found: 9"));

    assert!(!dir.join("expenses.json").exists());
    Ok(())
}

#[test]
fn invalid_input_fails() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    expenses(dir)
        .args(["summary", "13", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month: 13"));

    expenses(dir)
        .args(["add", "Trip", "100", "travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category: travel"));

    expenses(dir)
        .args(["add", "Milk, eggs", "12", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description may not contain"));

    assert!(!dir.join("expenses.json").exists());
    Ok(())
}

#[test]
fn export_writes_csv() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    add(dir, "Weekly market", "12.30", "groceries", "05-02-2024");

    expenses(dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses to:"));

    let csv = fs::read_to_string(dir.join("expenses_export.csv"))?;
    assert_eq!(
        csv,
        "Description,Amount,Date,Category\nWeekly market,12.3,05-02-2024,GROCERIES\n"
    );
    Ok(())
}

#[test]
fn descriptions_reload_unchanged() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    add(dir, "Pack [2]", "3", "food", "01-01-2024");
    add(dir, "  Coffee ", "3.5", "food", "02-01-2024");

    let content = fs::read_to_string(dir.join("expenses.json"))?;
    assert!(content.contains(r#""description":"Pack [2]""#));
    assert!(content.contains(r#""description":"Coffee""#));

    expenses(dir)
        .args(["add", "Tea", "1", "food", "--date", "03-01-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense: 3 | Description: Tea"));

    expenses(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack [2]"));
    Ok(())
}
