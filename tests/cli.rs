//! End-to-end tests for the icnspack, icnsinfo and mkiconset binaries.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn icnspack_cmd() -> Command {
    Command::cargo_bin("icnspack").unwrap()
}

fn write_sources(dir: &TempDir, contents: [&[u8]; 4]) -> Vec<PathBuf> {
    ["128", "256", "512", "1024"]
        .iter()
        .zip(contents)
        .map(|(px, data)| {
            let path = dir.path().join(format!("icon_{px}.png"));
            fs::write(&path, data).unwrap();
            path
        })
        .collect()
}

fn abcd_container() -> Vec<u8> {
    let mut expected = b"icns".to_vec();
    expected.extend_from_slice(&44u32.to_be_bytes());
    for (code, byte) in [(b"ic07", b'A'), (b"ic08", b'B'), (b"ic09", b'C'), (b"ic10", b'D')] {
        expected.extend_from_slice(code);
        expected.extend_from_slice(&9u32.to_be_bytes());
        expected.push(byte);
    }
    expected
}

fn dir_is_empty_except(dir: &Path, keep: &[PathBuf]) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .all(|p| keep.contains(&p))
}

// ==================== PACK ====================

#[test]
fn packs_and_confirms_on_stdout() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    let out = dir.path().join("AppIcon.icns");

    icnspack_cmd()
        .args(&sources)
        .arg(&out)
        .assert()
        .success()
        .stdout(format!("Wrote: {}\n", out.display()))
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read(&out).unwrap(), abcd_container());
}

#[test]
fn creates_output_directory() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    let out = dir.path().join("dist").join("Resources").join("AppIcon.icns");

    icnspack_cmd().args(&sources).arg(&out).assert().success();

    let bytes = fs::read(&out).unwrap();
    assert_eq!(u32::from_be_bytes(bytes[4..8].try_into().unwrap()), 44);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    let out = dir.path().join("AppIcon.icns");

    icnspack_cmd()
        .arg("-v")
        .args(&sources)
        .arg(&out)
        .assert()
        .success()
        .stdout(format!("Wrote: {}\n", out.display()))
        .stderr(predicate::str::contains("container size 44 B"));
}

#[test]
fn missing_input_exits_1_and_names_path() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    fs::remove_file(&sources[0]).unwrap();
    let missing = sources[0].clone();
    let out = dir.path().join("AppIcon.icns");

    icnspack_cmd()
        .args(&sources)
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("Missing file: {}", missing.display())));

    assert!(!out.exists());
}

#[test]
fn wrong_argument_count_exits_2_and_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    let out = dir.path().join("AppIcon.icns");

    icnspack_cmd()
        .args(&sources[..3])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));

    icnspack_cmd()
        .args(&sources)
        .arg(&out)
        .arg(dir.path().join("extra"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert!(dir_is_empty_except(dir.path(), &sources));
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"B", b"C", b"D"]);
    let out = sources[0].join("AppIcon.icns");

    icnspack_cmd()
        .args(&sources)
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

// ==================== ICNSINFO ====================

#[test]
fn icnsinfo_reads_packed_file() {
    let dir = TempDir::new().unwrap();
    let sources = write_sources(&dir, [b"A", b"BB", b"CCC", b"DDDD"]);
    let out = dir.path().join("AppIcon.icns");
    icnspack_cmd().args(&sources).arg(&out).assert().success();

    let output = Command::cargo_bin("icnsinfo")
        .unwrap()
        .arg("--json")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_len"], 8 + 4 * 8 + 10);
    let chunks = json["chunks"].as_array().unwrap();
    let summary: Vec<(&str, u64, u64)> = chunks
        .iter()
        .map(|c| {
            (
                c["type_code"].as_str().unwrap(),
                c["pixels"].as_u64().unwrap(),
                c["payload_len"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("ic07", 128, 1), ("ic08", 256, 2), ("ic09", 512, 3), ("ic10", 1024, 4)]
    );
}

#[test]
fn icnsinfo_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not.icns");
    fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

    Command::cargo_bin("icnsinfo")
        .unwrap()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("magic"));
}

// ==================== MKICONSET ====================

#[test]
fn mkiconset_renders_and_packs() {
    let dir = TempDir::new().unwrap();
    let set = dir.path().join("AppIcon.iconset");
    let out = dir.path().join("AppIcon.icns");

    Command::cargo_bin("mkiconset")
        .unwrap()
        .arg(&set)
        .arg("--pack")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Wrote: {}", out.display())));

    let bytes = fs::read(&out).unwrap();
    let container = icnspack::format::parse_container(&bytes).unwrap();
    assert_eq!(container.chunks.len(), 4);
    for (chunk, px) in container.chunks.iter().zip(["128", "256", "512", "1024"]) {
        let png = fs::read(set.join(format!("icon_{px}.png"))).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        assert_eq!(chunk.payload, &png[..]);
    }
}
