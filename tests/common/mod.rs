use assert_cmd::Command;
use std::path::Path;

pub fn logbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("logbook").unwrap();
    cmd.env_remove("LOGBOOK_ROOT");
    cmd.env_remove("LOGBOOK_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized workspace
#[allow(dead_code)]
pub fn logbook_in(root: &Path) -> Command {
    let mut cmd = logbook_cmd();
    cmd.current_dir(root);
    cmd
}
