//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a salter command running inside the test directory.
    ///
    /// Logging and colors are switched off so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("salter").expect("failed to find salter binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SALTER_LOG");
        cmd
    }

    /// Run salter with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run salter")
    }

    /// Shortcut for `salter --action generate -s <env> -o <json>`.
    pub fn generate(&self, env_file: &str, output: &str) -> Output {
        self.run(&["--action", "generate", "-s", env_file, "-o", output])
    }
}
