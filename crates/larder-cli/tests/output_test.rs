use assert_cmd::Command;
use larder_testing::TestWorld;
use predicates::prelude::*;

#[allow(deprecated)]
fn larder(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("larder").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_bare_invocation_lists_shelves() {
    let world = TestWorld::new();

    larder(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing tracked yet"))
        .stdout(predicate::str::contains("Fridge (0)"))
        .stdout(predicate::str::contains("Freezer (0)"))
        .stdout(predicate::str::contains("Pantry (0)"))
        .stdout(predicate::str::contains("larder add \"Milk\" --date tomorrow"));
}

#[test]
fn test_plain_listing_has_no_ansi_when_piped() {
    let world = TestWorld::new();
    world.add("Milk", "tomorrow", "fridge").unwrap();

    larder(&world)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fridge (1)"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Expires tomorrow!"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_control_characters_are_neutralized() {
    let world = TestWorld::new();
    world.add("Milk\x1b[2J", "tomorrow", "fridge").unwrap();

    larder(&world)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk\\u{1b}[2J"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_invalid_pinned_today_is_reported() {
    let world = TestWorld::new().with_today("someday");

    larder(&world)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: LARDER_TODAY is not a valid date"));
}

#[test]
fn test_unknown_location_is_a_usage_error() {
    let world = TestWorld::new();

    larder(&world)
        .args(["add", "Milk", "--location", "garage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("garage"));
}

#[test]
fn test_ui_refuses_without_terminal() {
    let world = TestWorld::new();

    larder(&world)
        .arg("ui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs an interactive terminal"));
}

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();

    larder(&world)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("add")
                .and(predicate::str::contains("edit"))
                .and(predicate::str::contains("rm"))
                .and(predicate::str::contains("export"))
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("ui")),
        );
}
