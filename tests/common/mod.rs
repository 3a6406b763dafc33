#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn blossom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blossom").unwrap();
    cmd.env_remove("BLOSSOM_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized diary at `root`
pub fn diary_cmd(root: &Path) -> Command {
    let mut cmd = blossom_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_diary(root: &Path) {
    blossom_cmd().arg("init").arg(root).assert().success();
}
