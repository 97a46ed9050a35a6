//! Integration tests for greeter-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `greeter` command isolated from the developer's own config and env.
fn greeter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greeter").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

#[test]
fn default_run_prints_hello_alice() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .assert()
        .success()
        .code(0)
        .stdout("Hello, Alice!\n");
}

#[test]
fn run_subcommand_matches_default() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .arg("run")
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn greet_with_flags() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["greet", "--name", "Bob", "--age", "41"])
        .assert()
        .success()
        .stdout("Hello, Bob!\n");
}

#[test]
fn greet_without_flags_uses_defaults() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn json_output_contains_report() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["--output-format", "json", "run"])
        .assert()
        .success()
        .stdout("{\"name\":\"Alice\",\"age\":30,\"greeting\":\"Hello, Alice!\"}\n");
}

#[test]
fn quiet_still_prints_greeting() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["-q", "run"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["-v", "run"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n")
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn env_overrides_default_name() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .env("GREETER_DEFAULTS__NAME", "Dave")
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, Dave!\n");
}

#[test]
fn env_name_is_not_reinterpreted() {
    let temp = TempDir::new().unwrap();
    for (name, expected) in [
        ("007", "Hello, 007!\n"),
        ("1.50", "Hello, 1.50!\n"),
        ("True", "Hello, True!\n"),
    ] {
        greeter(&temp)
            .env("GREETER_DEFAULTS__NAME", name)
            .arg("greet")
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn env_age_still_parses() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .env("GREETER_DEFAULTS__AGE", "41")
        .args(["--output-format", "json", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"age\":41"));
}

#[test]
fn init_local_then_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let path = temp.path().join(".greeter.toml");
    assert!(path.exists());

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, text.replace("Alice", "Erin")).unwrap();

    greeter(&temp)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, Erin!\n");

    // the fixed demo ignores configuration
    greeter(&temp).assert().success().stdout("Hello, Alice!\n");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".greeter.toml"), "# mine\n").unwrap();

    greeter(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let text = std::fs::read_to_string(temp.path().join(".greeter.toml")).unwrap();
    assert_eq!(text, "# mine\n");
}

#[test]
fn config_get_reads_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "[defaults]\nname = \"Frank\"\n").unwrap();

    greeter(&temp)
        .args(["--config", path.to_str().unwrap(), "config", "get", "defaults.name"])
        .assert()
        .success()
        .stdout("defaults.name = Frank\n");
}

#[test]
fn quiet_config_get_still_prints_value() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["-q", "config", "get", "defaults.name"])
        .assert()
        .success()
        .stdout("defaults.name = Alice\n");
}

#[test]
fn quiet_config_list_drops_only_the_header() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["-q", "config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"Alice\""))
        .stdout(predicate::str::contains("Current Configuration").not());
}

#[test]
fn quiet_config_path_still_prints_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "").unwrap();

    greeter(&temp)
        .args(["-q", "--config", path.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn no_color_zero_still_disables_colour() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .env("NO_COLOR", "0")
        .args(["--output-format", "human", "init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn human_format_is_coloured_without_no_color() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["--output-format", "human", "init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn config_list_shows_defaults() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"Alice\""));
}

#[test]
fn help_flag_succeeds() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("greet"));
}

#[test]
fn version_flag_succeeds() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    greeter(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
