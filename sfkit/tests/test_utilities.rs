#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "sfkit.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "sfkit";

/// Path of a file in the shared `testdata` directory, as a command line argument.
pub fn get_testdata(filename: &str) -> String {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../testdata").join(filename);
	path.to_string_lossy().into_owned()
}

/// A path in a fresh temporary directory. Keep the `TempDir` alive while the file is used.
pub fn get_temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

pub fn sfkit_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Runs `sfkit convert <args> - -` on `input` and returns stdout.
pub fn convert_stdin(args: &[&str], input: &str) -> String {
	let output = sfkit_cmd()
		.arg("convert")
		.args(args)
		.args(["-", "-"])
		.write_stdin(input)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	String::from_utf8(output).expect("stdout is not UTF-8")
}
