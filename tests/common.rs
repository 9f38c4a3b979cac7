use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for campus-nav, isolated from any user configuration
pub fn campus_nav() -> Command {
    let mut cmd = cargo_bin_cmd!("campus-nav");
    cmd.env_remove("CAMPUS_NAV_CONFIG")
        .env_remove("CAMPUS_NAV_LOG")
        .env_remove("RUST_LOG")
        .env("CAMPUS_NAV_CONFIG_DIR", "/nonexistent/campus-nav-test-config");
    cmd
}

/// Triangle A-B (1), B-C (1), A-C (5) plus an unconnected vertex
#[allow(dead_code)]
pub const TRIANGLE_MAP: &str = r#"
vertices = ["Island"]

[[edges]]
from = "A"
to = "B"
distance = 1.0

[[edges]]
from = "B"
to = "C"
distance = 1.0

[[edges]]
from = "A"
to = "C"
distance = 5.0
"#;
