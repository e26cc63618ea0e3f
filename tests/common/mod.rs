#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub const DECLARATION: &str =
    "cmake_minimum_required(VERSION 3.15)\n\nproject(app\n\tVERSION \"1.3.0.${BUILD_NUMBER}\"\n\tLANGUAGES CXX\n)\n";

pub const COMMIT_DATE: &str = "2020-07-02T12:00:00+0000";

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A scratch checkout with one commit containing `CMakeLists.txt`.
pub struct Checkout {
    pub dir: TempDir,
}

impl Checkout {
    pub fn new() -> Self {
        Self::with_declaration(DECLARATION)
    }

    pub fn with_declaration(declaration: &str) -> Self {
        let checkout = Checkout {
            dir: tempfile::tempdir().unwrap(),
        };
        checkout.git(&["init", "-q"]);
        checkout.write("CMakeLists.txt", declaration);
        checkout.commit("initial import");
        checkout
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn commit(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", message]);
    }

    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    pub fn annotated_tag(&self, name: &str) {
        self.git(&["tag", "-a", "-m", name, name]);
    }

    /// Run git with a fixed identity and commit date; panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Build Bot",
                "-c",
                "user.email=build@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
            ])
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_DATE", COMMIT_DATE)
            .env("GIT_COMMITTER_DATE", COMMIT_DATE)
            .output()
            .expect("Failed to execute git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Pack `count` distinct blobs into the object database.
    pub fn import_blobs(&self, count: usize) {
        let mut stream = String::new();
        for i in 0..count {
            let data = format!("blob {}\n", i);
            stream.push_str(&format!("blob\ndata {}\n{}\n", data.len(), data));
        }

        let mut child = Command::new("git")
            .args(["fast-import", "--quiet"])
            .current_dir(self.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .expect("Failed to execute git fast-import");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stream.as_bytes())
            .unwrap();
        assert!(child.wait().unwrap().success());
    }

    pub fn short_hash(&self) -> String {
        self.git(&["rev-parse", "--short", "HEAD"])
    }
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the built binary in `dir`.
pub fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_build-version"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute build-version")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
