use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const MISSING_PROGRAM: &str = "rev-stamp-test-program-that-does-not-exist";

#[test]
fn cli_version_shows_package_version() {
    let output = cargo_bin_cmd!("rev-stamp-cli")
        .arg("--version")
        .output()
        .unwrap();
    print_output("e2e_cli", &output);
    assert!(
        output.status.success(),
        "expected success, got status: {}",
        output.status
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "expected --version output to contain the version, got: {}",
        stdout
    );
}

#[test]
fn missing_svnversion_stamps_zero() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("version.template.h");
    let output_file = temp.path().join("version.h");
    fs::write(&template, "#define REVISION $revision$ // $revision$\n").unwrap();

    let output = cargo_bin_cmd!("rev-stamp-cli")
        .arg("--svnversion")
        .arg(MISSING_PROGRAM)
        .arg(temp.path())
        .arg(&template)
        .arg(&output_file)
        .output()
        .unwrap();
    print_output("e2e_cli", &output);
    assert!(
        output.status.success(),
        "expected success, got status: {}",
        output.status
    );
    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "#define REVISION 0 // 0\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Version template replacement successful"),
        "expected confirmation line, got: {}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn svnversion_output_is_stamped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let working_copy = temp.path().join("wc");
    let script = temp.path().join("svnversion");
    let template = temp.path().join("version.template.h");
    let output_file = temp.path().join("version.h");
    fs::create_dir(&working_copy).unwrap();
    fs::write(&template, "#define REVISION $revision$\n").unwrap();

    // prints a mixed-revision range and fails, unless called as `<program> <working copy> -c`
    fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
             if [ \"$#\" -ne 2 ] || [ \"$1\" != '{}' ] || [ \"$2\" != \"-c\" ]; then\n\
             \texit 2\n\
             fi\n\
             echo \"10:42M\"\n\
             exit 1\n",
            working_copy.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    wait_until_executable(&script);

    let output = cargo_bin_cmd!("rev-stamp-cli")
        .arg("--svnversion")
        .arg(&script)
        .arg(&working_copy)
        .arg(&template)
        .arg(&output_file)
        .output()
        .unwrap();
    print_output("e2e_cli", &output);
    assert!(
        output.status.success(),
        "expected success, got status: {}",
        output.status
    );
    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "#define REVISION 42\n"
    );
}

#[test]
fn missing_template_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("missing.template.h");
    let output_file = temp.path().join("version.h");

    let output = cargo_bin_cmd!("rev-stamp-cli")
        .arg("--svnversion")
        .arg(MISSING_PROGRAM)
        .arg(temp.path())
        .arg(&template)
        .arg(&output_file)
        .output()
        .unwrap();
    print_output("e2e_cli", &output);
    assert!(
        !output.status.success(),
        "expected failure, got status: {}",
        output.status
    );
    assert!(!output_file.exists());
}

#[test]
fn missing_arguments_fail() {
    let temp = TempDir::new().unwrap();

    let output = cargo_bin_cmd!("rev-stamp-cli")
        .arg(temp.path())
        .output()
        .unwrap();
    print_output("e2e_cli", &output);
    assert!(
        !output.status.success(),
        "expected failure, got status: {}",
        output.status
    );
}

/// Waits until a freshly written script can be executed. Exec fails with ETXTBSY while a process
/// forked by a concurrent test still holds the script open for writing.
#[cfg(unix)]
fn wait_until_executable(script: &std::path::Path) {
    for _ in 0..100 {
        match std::process::Command::new(script).output() {
            Err(err) if err.raw_os_error() == Some(26) => {
                std::thread::sleep(std::time::Duration::from_millis(10))
            }
            _ => return,
        }
    }
}

fn print_output(prefix: &str, output: &std::process::Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        println!("[{}] {}", prefix, line);
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stderr.lines() {
        eprintln!("[{}] {}", prefix, line);
    }
}
