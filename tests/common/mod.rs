use assert_cmd::Command;

pub fn wayfare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wayfare").unwrap();
    cmd.env_remove("WAYFARE_ROOT");
    cmd.env_remove("WAYFARE_API_BASE");
    cmd.env_remove("RUST_LOG");
    cmd
}
