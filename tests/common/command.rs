use assert_cmd::Command;
use std::path::Path;

pub fn run_initpack_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("initpack").expect("Failed to find initpack binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
