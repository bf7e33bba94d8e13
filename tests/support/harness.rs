use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated project directory for driving the fleet
/// binary. The temporary directory is removed on drop.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    #[allow(dead_code)]
    pub store_path: PathBuf,
    pub fleet_binary: PathBuf,
}

impl TestHarness {
    /// Creates an empty directory; `fleet init` has not been run.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        TestHarness {
            config_path: base_path.join(".fleet/config.md"),
            store_path: base_path.join(".fleet/store/ships.json"),
            dir: temp_dir,
            fleet_binary: PathBuf::from(env!("CARGO_BIN_EXE_fleet")),
        }
    }

    /// Creates a harness and runs `fleet init` in it.
    #[allow(dead_code)]
    pub fn initialized() -> Self {
        let harness = Self::new();
        let output = harness.run(&["init"]).expect("Failed to run fleet init");
        assert!(output.status.success(), "fleet init failed: {:?}", output);
        harness
    }

    /// Creates an initialized harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::initialized();
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the fleet binary with the given arguments in the harness
    /// directory. Color and inherited fleet settings are switched off.
    pub fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(&self.fleet_binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("FLEET_LOG")
            .env_remove("FLEET_QUIET")
            .output()
    }

    /// Runs a command expected to succeed and returns its stdout.
    #[allow(dead_code)]
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args).expect("Failed to run fleet");
        assert!(
            output.status.success(),
            "fleet {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Runs a command with `--json` appended and parses its stdout.
    #[allow(dead_code)]
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut args = args.to_vec();
        args.push("--json");
        let stdout = self.run_ok(&args);
        serde_json::from_str(&stdout).expect("Command did not print JSON")
    }

    /// Registers a ship through `fleet add` and returns the assigned id.
    #[allow(dead_code)]
    pub fn add_ship(&self, name: &str, planet: &str, speed: &str, year: u32) -> u64 {
        let date = format!("{}-06-01", year);
        let ship = self.run_json(&[
            "add",
            "--name",
            name,
            "--planet",
            planet,
            "--ship-type",
            "transport",
            "--prod-date",
            &date,
            "--speed",
            speed,
            "--crew-size",
            "10",
        ]);
        ship["id"].as_u64().expect("Added ship has no id")
    }
}
