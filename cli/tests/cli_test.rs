//! End-to-end tests for the tex2md and texclean binaries.

use std::fs;
use std::process::Command;

fn tex2md() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tex2md"))
}

fn texclean() -> Command {
    Command::new(env!("CARGO_BIN_EXE_texclean"))
}

#[test]
fn test_tex2md_converts() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("notes.tex");
    let dst = dir.path().join("notes.md");
    fs::write(&src, "\\section{Intro}\n% skip\n\\textbf{a} and \\textbf{b}\n").unwrap();

    let output = tex2md()
        .arg("--src")
        .arg(&src)
        .arg("--dst")
        .arg(&dst)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&dst).unwrap(),
        "# Intro\n**a** and **b**\n"
    );
}

#[test]
fn test_tex2md_requires_both_paths() {
    let output = tex2md().arg("--src").arg("x.tex").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_tex2md_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = tex2md()
        .arg("--src")
        .arg(dir.path().join("absent.tex"))
        .arg("--dst")
        .arg(dir.path().join("out.md"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not find file"));
}

#[test]
fn test_tex2md_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("bad.tex");
    let dst = dir.path().join("bad.md");
    fs::write(&src, "\\hyperlink{http://x}here\n").unwrap();

    let output = tex2md()
        .arg("--src")
        .arg(&src)
        .arg("--dst")
        .arg(&dst)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dst.exists());
}

#[test]
fn test_tex2md_stats_json() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a.tex");
    let dst = dir.path().join("a.md");
    fs::write(&src, "\\usepackage{x}\n\\section{A}\n").unwrap();

    let output = tex2md()
        .arg("--src")
        .arg(&src)
        .arg("--dst")
        .arg(&dst)
        .arg("--stats-json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["input_lines"], 2);
    assert_eq!(stats["output_lines"], 1);
    assert_eq!(stats["preamble_lines"], 1);
}

#[test]
fn test_texclean_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("src.tex"), "% gone\nkeep % cut\n").unwrap();

    let output = texclean().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("dst.tex")).unwrap(),
        "keep \n"
    );
}

#[test]
fn test_texclean_missing_default_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = texclean().current_dir(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("dst.tex").exists());
}
