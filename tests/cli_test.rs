use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

use lls::cli::{DisplayOptions, Format};

fn lls(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_lls")).args(args).output()?)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

fn listing(path: &Path, options: &DisplayOptions) -> Result<String> {
    let mut out = Vec::new();
    lls::run(&mut out, path, options)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn hidden_entries_are_skipped_and_names_sorted() -> Result<()> {
    let dir = tempdir()?;
    for name in [".hidden", "b.txt", "A.txt"] {
        fs::write(dir.path().join(name), b"")?;
    }

    let output = lls(&["-w", "0", path_arg(dir.path())])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "A.txt  \nb.txt  \n");

    let output = lls(&["-a", "-w", "0", path_arg(dir.path())])?;
    assert_eq!(
        String::from_utf8(output.stdout)?,
        ".hidden  \nA.txt    \nb.txt    \n"
    );
    Ok(())
}

#[test]
fn grid_fills_rows_across_the_width() -> Result<()> {
    let dir = tempdir()?;
    for name in ["one", "two", "three", "four"] {
        fs::write(dir.path().join(name), b"")?;
    }

    // widest name is "three": 7 per entry, 14 / 7 = 2 columns
    let output = lls(&["--width", "14", path_arg(dir.path())])?;
    assert_eq!(String::from_utf8(output.stdout)?, "four   one  \nthree  two  \n");
    Ok(())
}

#[test]
fn grid_output_is_repeatable() -> Result<()> {
    let dir = tempdir()?;
    for i in 0..30 {
        fs::write(dir.path().join(format!("file{i}")), vec![b'x'; i * 37])?;
    }
    let options = DisplayOptions {
        show_size: true,
        show_permit: true,
        use_color: true,
        width: Some(100),
        ..DisplayOptions::default()
    };

    let first = listing(dir.path(), &options)?;
    let second = listing(dir.path(), &options)?;
    assert_eq!(first, second);
    assert!(first.lines().count() > 1);
    Ok(())
}

#[test]
fn empty_directory_prints_nothing() -> Result<()> {
    let dir = tempdir()?;
    let output = lls(&[path_arg(dir.path())])?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn detailed_list_prints_one_line_per_entry() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let script = dir.path().join("run.sh");
    fs::write(&script, b"#!/bin/sh\n")?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o750))?;
    fs::create_dir(dir.path().join("docs"))?;

    let options = DisplayOptions {
        format: Format::DetailedList,
        ..DisplayOptions::default()
    };
    let text = listing(dir.path(), &options)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" docs"));
    assert_eq!(lines[1], "rwxr-x--- 10       run.sh");
    Ok(())
}

#[cfg(unix)]
#[test]
fn detailed_list_with_owner_names_root() -> Result<()> {
    let output = lls(&["-l", "-o", "/"])?;
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout)?;
    assert!(text.lines().any(|line| line.contains(" root ")));
    Ok(())
}

#[test]
fn regular_file_is_dumped() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("data.bin");
    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    fs::write(&file, &data)?;

    let output = lls(&["--raw", path_arg(&file)])?;
    assert!(output.status.success());
    assert_eq!(output.stdout, data);

    let output = lls(&[path_arg(&file)])?;
    assert!(output.status.success());
    let mut framed = data[..8192].to_vec();
    framed.push(b'\n');
    framed.extend_from_slice(&data[8192..]);
    framed.push(b'\n');
    assert_eq!(output.stdout, framed);
    Ok(())
}

#[test]
fn missing_path_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("does-not-exist");

    let output = lls(&[path_arg(&missing)])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does-not-exist"));
    assert!(stderr.contains("failed to stat"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn device_path_is_unhandled() -> Result<()> {
    let output = lls(&["/dev/null"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("unhandled entry type"));
    Ok(())
}

#[test]
fn two_paths_is_a_usage_error() -> Result<()> {
    let output = lls(&["one", "two"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn help_exits_zero() -> Result<()> {
    let output = lls(&["--help"])?;
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout)?;
    for flag in ["--hidden", "--color", "--list", "--owner", "--permit", "--size"] {
        assert!(text.contains(flag), "missing {flag}");
    }
    Ok(())
}
