//! Test environment builder for isolated Conkie testing.
//!
//! Provides `TestEnv` - a temp directory holding a theme and its
//! `node_modules`, a private home directory, and helpers to run the `conkie`
//! binary or build a compiler against the same tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use conkie::infrastructure::{LocalFs, NodeModulesLocator};
use conkie::{CompileOptions, CompileSession, ThemeCompiler};
use tempfile::TempDir;

/// Result of running the conkie binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment
///
/// Layout:
/// ```text
/// <root>/theme/index.html
/// <root>/node_modules/<package>/...
/// <home>/.config/conkie/config.toml
/// ```
pub struct TestEnv {
    pub root: TempDir,
    pub home_dir: TempDir,
    conkie_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create theme root");
        let home_dir = tempfile::tempdir().expect("create home dir");
        fs::create_dir_all(root.path().join("theme")).expect("create theme dir");
        Self {
            root,
            home_dir,
            conkie_bin: PathBuf::from(env!("CARGO_BIN_EXE_conkie")),
        }
    }

    pub fn theme_dir(&self) -> PathBuf {
        self.root.path().join("theme")
    }

    /// Path of the theme entry file
    pub fn entry(&self) -> PathBuf {
        self.theme_dir().join("index.html")
    }

    /// Write a file relative to the theme directory
    pub fn write_theme_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.theme_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create theme subdir");
        }
        fs::write(&path, content).expect("write theme file");
        path
    }

    pub fn write_entry(&self, markup: &str) -> PathBuf {
        self.write_theme_file("index.html", markup)
    }

    /// Install a package under `<root>/node_modules/<name>`
    pub fn install_package(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        self.install_package_with_main(name, None, files)
    }

    pub fn install_package_with_main(
        &self,
        name: &str,
        main: Option<&str>,
        files: &[(&str, &str)],
    ) -> PathBuf {
        let dir = self.root.path().join("node_modules").join(name);
        fs::create_dir_all(&dir).expect("create package dir");

        let manifest = match main {
            Some(main) => serde_json::json!({ "name": name, "version": "1.0.0", "main": main }),
            None => serde_json::json!({ "name": name, "version": "1.0.0" }),
        };
        fs::write(dir.join("package.json"), manifest.to_string()).expect("write manifest");

        for (relative, content) in files {
            let path = dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create package subdir");
            }
            fs::write(path, content).expect("write package file");
        }
        dir
    }

    /// Write the user config file read by the binary
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.path().join(".config").join("conkie");
        fs::create_dir_all(&dir).expect("create config dir");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("write config");
        path
    }

    /// Session compiling `theme`, searching packages from the env root and
    /// keeping the transient document inside the home dir
    pub fn session(&self, theme: impl Into<String>) -> CompileSession {
        CompileSession::new(self.options(theme))
    }

    pub fn options(&self, theme: impl Into<String>) -> CompileOptions {
        CompileOptions::new(theme)
            .with_root_dir(self.root.path())
            .with_transient_dir(self.home_dir.path())
    }

    /// Compiler that only searches the env's own `node_modules`
    pub fn compiler(&self) -> ThemeCompiler<LocalFs, NodeModulesLocator> {
        ThemeCompiler::new(LocalFs::new(), NodeModulesLocator::local_only())
    }

    /// Run the binary from the env root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.conkie_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("CONKIE_TEST_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("CONKIE_ARGS")
            .env_remove("CONKIE_THEME")
            .env_remove("CONKIE_VERBOSITY")
            .env_remove("CONKIE_WATCH")
            .env_remove("CONKIE_DEBUG")
            .env_remove("CONKIE_COLOR")
            .env_remove("NPM_CONFIG_PREFIX");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute conkie");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Display form of a path, for building CLI arguments
pub fn arg(path: &Path) -> String {
    path.display().to_string()
}
