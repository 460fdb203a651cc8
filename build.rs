use std::process::Command;

const TAG_OVERRIDE_ENV: &str = "UPLIFT_BUILD_TAG";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={TAG_OVERRIDE_ENV}");

    // Release pipelines can pin the label; otherwise use the nearest git tag.
    let tag = std::env::var(TAG_OVERRIDE_ENV)
        .ok()
        .or_else(nearest_git_tag)
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty());

    if let Some(tag) = tag {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}

fn nearest_git_tag() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
