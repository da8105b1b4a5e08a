#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};

/// Isolated HOME and store directory for one test.
pub struct Sandbox {
    pub home: PathBuf,
    pub store: PathBuf,
}

impl Sandbox {
    pub fn new(root: &Path) -> Self {
        let home = root.join("home");
        std::fs::create_dir_all(&home).unwrap();
        Self {
            home,
            store: root.join("store"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_brewlog"));
        cmd.args(args);
        cmd.env("HOME", &self.home);
        cmd.env("XDG_DATA_HOME", self.home.join("data"));
        cmd.env_remove("BREWLOG_STORE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Run the CLI with isolated session storage.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI feeding `input` on stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn CLI");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();

        child.wait_with_output().expect("Failed to wait for CLI")
    }

    /// Log in as `owner` against this sandbox's store.
    pub fn login(&self, owner: &str) {
        let store = self.store.to_string_lossy().to_string();
        self.run_success(&["login", "--owner", owner, "--store", &store]);
    }

    /// Create a record through stdin and return its id.
    pub fn create(&self, record: &Value) -> String {
        let output = self.run_with_stdin(&["create", "--json", "-"], &record.to_string());
        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Parse line-delimited JSON from `list`.
    pub fn list(&self, args: &[&str]) -> Vec<Value> {
        let mut full = vec!["list"];
        full.extend_from_slice(args);
        self.run_success(&full)
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

pub fn record(brand: &str, overall: u32, order_date: &str) -> Value {
    json!({
        "brandName": brand,
        "roast": "medium",
        "formFactor": "beans",
        "notes": "chocolate",
        "quantity": 250,
        "quantityUnit": "g",
        "orderDate": order_date,
        "bitternessRating": 4,
        "acidityRating": 6,
        "noteClarityRating": 7,
        "overallTasteRating": overall,
        "worthReordering": 1
    })
}
