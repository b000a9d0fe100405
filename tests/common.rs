#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn rdp() -> Command {
    cargo_bin_cmd!("rdayplan")
}

/// Busy-interval arguments shared by several CLI tests
pub fn demo_busy_args() -> Vec<&'static str> {
    vec!["--busy", "08:20-09:30=standup", "--busy", "10:20-11:40=review"]
}
