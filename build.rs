use std::process::Command;

/// Value of `var` if set, else the trimmed stdout of `program args`.
fn env_or_command(var: &str, program: &str, args: &[&str]) -> String {
    println!("cargo:rerun-if-env-changed={}", var);

    std::env::var(var).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    // Release builds pass these in; local builds ask git and date
    let git_sha = env_or_command("FLEET_GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = env_or_command("FLEET_BUILD_DATE", "date", &["-u", "+%Y-%m-%d"]);

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
