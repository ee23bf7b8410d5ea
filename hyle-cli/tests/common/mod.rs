#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use hyle_core::ProofEnvelope;
use tempfile::TempDir;

/// Public output of the reference record, followed by one program output.
pub const OUTPUT: &str = "[1 0 3 03 04 05 4 68 69 74 68 4 62 79 65 21 1000 2000 0 42]";

pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn hyle(&self) -> Command {
        let mut cmd = Command::cargo_bin("hyle-verify").unwrap();
        let path = self.home_dir.path();
        cmd.env("HOME", path);
        cmd.env("USERPROFILE", path);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write a file under the isolated home directory.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.home_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write a proof file whose output segment is `output`.
    pub fn proof_file(&self, output: &str) -> PathBuf {
        let envelope = ProofEnvelope::new(b"proof".to_vec(), b"inputs".to_vec(), output);
        self.write("proof.bin", envelope.to_bytes().unwrap())
    }

    pub fn key_file(&self) -> PathBuf {
        self.write("verification.key", b"vk")
    }
}
