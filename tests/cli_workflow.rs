#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Shop {
    dir: TempDir,
}

impl Shop {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("movierent").unwrap();
        cmd.env("MOVIERENT_DB", self.dir.path().join("shop.sqlite3"))
            .env("MOVIERENT_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd().args(args).assert()
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

#[test]
fn test_no_args_prints_usage() {
    let shop = Shop::new();
    shop.run(&[])
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("insert movie <title> <year> <genre> <director>"));
    assert!(!shop.dir.path().join("shop.sqlite3").exists());
}

#[test]
fn test_bad_arity_prints_usage_without_touching_store() {
    let shop = Shop::new();
    for args in [
        vec!["insert", "movie", "Inception", "2010"],
        vec!["update", "1"],
        vec!["rent", "1"],
        vec!["return"],
        vec!["show", "directors"],
        vec!["remove", "not-a-number"],
        vec!["frobnicate"],
    ] {
        shop.run(&args)
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
    assert!(!shop.dir.path().join("shop.sqlite3").exists());
}

#[test]
fn test_empty_listings() {
    let shop = Shop::new();
    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains("No movies found."));
    shop.run(&["show", "customers"])
        .success()
        .stdout(predicate::str::contains("No customers found."));
    shop.run(&["show", "rentals"])
        .success()
        .stdout(predicate::str::contains("No rentals found."));
}

#[test]
fn test_full_rental_workflow() {
    let shop = Shop::new();

    shop.run(&[
        "insert",
        "movie",
        "Inception",
        "2010",
        "Sci-Fi",
        "Christopher Nolan",
    ])
    .success()
    .stdout(predicate::str::contains("Movie added (1): Inception (2010)"));

    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains("movie_id"))
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains("Christopher Nolan"));

    shop.run(&[
        "insert",
        "customer",
        "John",
        "Doe",
        "john@example.com",
        "123-456-7890",
    ])
    .success()
    .stdout(predicate::str::contains("Customer added (1): John Doe"));

    shop.run(&["rent", "1", "1"])
        .success()
        .stdout(predicate::str::contains("Rental 1 created"));

    shop.run(&["show", "rentals"])
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains(today()))
        .stdout(predicate::str::contains("null"));

    shop.run(&["return", "1"])
        .success()
        .stdout(predicate::str::contains(format!(
            "Rental 1 returned on {}",
            today()
        )));

    shop.run(&["return", "1"])
        .success()
        .stdout(predicate::str::contains("not found or already returned"));

    shop.run(&["show", "rentals"])
        .success()
        .stdout(predicate::str::contains("null").not());
}

#[test]
fn test_duplicate_email_fails_cleanly() {
    let shop = Shop::new();
    shop.run(&["insert", "customer", "John", "Doe", "john@example.com"])
        .success();
    shop.run(&["insert", "customer", "Jane", "Doe", "john@example.com"])
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "A customer with email john@example.com already exists",
        ));

    shop.run(&["show", "customers", "--output", "json"])
        .success()
        .stdout(predicate::str::contains("\"first_name\": \"John\""))
        .stdout(predicate::str::contains("Jane").not());
}

#[test]
fn test_update_and_remove_missing_customer() {
    let shop = Shop::new();
    shop.run(&["update", "7", "x@example.com"])
        .success()
        .stdout(predicate::str::contains("Customer 7 not found"));
    shop.run(&["remove", "7"])
        .success()
        .stdout(predicate::str::contains("Customer 7 not found"));
}

#[test]
fn test_remove_cascades_and_clear_empties() {
    let shop = Shop::new();
    shop.run(&["insert", "movie", "Heat", "1995", "Crime", "Michael Mann"])
        .success();
    shop.run(&["insert", "customer", "Ann", "Lee", "ann@example.com"])
        .success();
    shop.run(&["insert", "customer", "Bob", "Ray", "bob@example.com"])
        .success();
    shop.run(&["rent", "1", "1"]).success();
    shop.run(&["rent", "2", "1"]).success();

    shop.run(&["remove", "1"])
        .success()
        .stdout(predicate::str::contains("removed"));
    shop.run(&["show", "rentals"])
        .success()
        .stdout(predicate::str::contains("Bob Ray"))
        .stdout(predicate::str::contains("Ann Lee").not());
    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains("Heat"));

    shop.run(&["clear"])
        .success()
        .stdout(predicate::str::contains(
            "Cleared 1 rentals, 1 customers, 1 movies",
        ));
    shop.run(&["clear"])
        .success()
        .stdout(predicate::str::contains("Nothing to clear"));
    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains("No movies found."));
}

#[test]
fn test_rent_unknown_ids_is_rejected() {
    let shop = Shop::new();
    shop.run(&["rent", "1", "1"])
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_database_flag_overrides_env() {
    let shop = Shop::new();
    let other = shop.dir.path().join("other.sqlite3");
    shop.cmd()
        .args(["--database", other.to_str().unwrap()])
        .args(["insert", "movie", "Up", "2009", "Animation", "Pete Docter"])
        .assert()
        .success();
    assert!(other.exists());
    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains("No movies found."));
}

#[test]
fn test_long_values_are_listed_in_full() {
    let shop = Shop::new();
    let email = "alexandra.montgomery-worthington@example.com";
    let title = "The Assassination of Jesse James by the Coward Robert Ford";
    shop.run(&[
        "insert",
        "customer",
        "Alexandra",
        "Montgomery-Worthington",
        email,
    ])
    .success();
    shop.run(&["insert", "movie", title, "2007", "Western", "Andrew Dominik"])
        .success();

    shop.run(&["show", "customers"])
        .success()
        .stdout(predicate::str::contains(email))
        .stdout(predicate::str::contains("…").not());
    shop.run(&["show", "movies"])
        .success()
        .stdout(predicate::str::contains(title));
}

#[test]
fn test_dash_leading_values_are_stored() {
    let shop = Shop::new();
    shop.run(&["insert", "movie", "-Ism", "2001", "Drama", "Someone"])
        .success()
        .stdout(predicate::str::contains("Movie added (1): -Ism (2001)"));
    shop.run(&["insert", "movie", "Ben-Hur", "-50", "Drama", "Wyler"])
        .success()
        .stdout(predicate::str::contains("Movie added (2): Ben-Hur (-50)"));

    shop.run(&["show", "movies", "--output", "json"])
        .success()
        .stdout(predicate::str::contains("\"title\": \"-Ism\""))
        .stdout(predicate::str::contains("\"release_year\": -50"));
}

#[test]
fn test_blank_email_is_rejected() {
    let shop = Shop::new();
    shop.run(&["insert", "customer", "John", "Doe", "john@example.com"])
        .success();
    shop.run(&["update", "1", ""])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Customer email cannot be empty"));
    shop.run(&["show", "customers"])
        .success()
        .stdout(predicate::str::contains("john@example.com"));
}
