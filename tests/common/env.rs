//! Test environment for isolated kafka-compose runs.
//!
//! Every run gets its own working directory and HOME, and the
//! `KAFKA_COMPOSE_*` variables of the calling shell are stripped.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_yaml_ng::Value;
use tempfile::TempDir;

const OVERRIDE_VARS: &[&str] = &[
    "KAFKA_COMPOSE_PROJECT",
    "KAFKA_COMPOSE_DOCKER_PORT",
    "KAFKA_COMPOSE_RESTART",
    "KAFKA_COMPOSE_KAFKA_IMAGE",
    "KAFKA_COMPOSE_ZOOKEEPER_IMAGE",
    "KAFKA_COMPOSE_MANAGER_IMAGE",
    "KAFKA_COMPOSE_MANAGER_SECRET",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory and HOME
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("Failed to create work dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_kafka-compose")),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for var in OVERRIDE_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute kafka-compose");
        to_result(output)
    }

    /// Read a generated file
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse a generated descriptor
    pub fn descriptor(&self, relative: &str) -> Value {
        serde_yaml_ng::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{} is not valid YAML: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Sorted file names directly inside `relative`
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path(relative))
            .expect("Failed to read dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Lines of the deploy script that call docker-compose
pub fn invocation_lines(script: &str) -> Vec<&str> {
    script
        .lines()
        .filter(|line| line.contains("docker-compose -f"))
        .collect()
}
