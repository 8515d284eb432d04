use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn violations(dir: &str, forbidden: &[&str]) -> Vec<String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir);
    let mut out = Vec::new();
    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for needle in forbidden {
            if content.contains(needle) {
                out.push(format!(
                    "{} references forbidden dependency `{}`",
                    file.display(),
                    needle
                ));
            }
        }
    }
    out
}

// The two core subsystems are independent leaves: they must not reference
// each other, and neither may reach into the CLI layer.

#[test]
fn cleanup_module_is_a_leaf() {
    let found = violations(
        "src/cleanup",
        &["crate::system", "sysinfo", "clap", "color_eyre"],
    );
    assert!(found.is_empty(), "Cleanup layering violations:\n{}", found.join("\n"));
}

#[test]
fn system_module_is_a_leaf() {
    let found = violations(
        "src/system",
        &["crate::cleanup", "walkdir", "clap", "color_eyre"],
    );
    assert!(found.is_empty(), "System layering violations:\n{}", found.join("\n"));
}

#[test]
fn core_modules_do_not_block_on_the_runtime() {
    let found = violations("src/cleanup", &["tokio"]);
    let more = violations("src/system", &["tokio"]);
    let all: Vec<String> = found.into_iter().chain(more).collect();
    assert!(
        all.is_empty(),
        "Core must stay runtime-agnostic (callers offload it):\n{}",
        all.join("\n")
    );
}
