use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn psd_writes_csv_to_stdout() {
    let output = Command::cargo_bin("psd")
        .expect("psd bin")
        .args(["--detector", "lisa", "--fmin", "1e-4", "--fmax", "1e-1", "--points", "25"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("frequency_hz,psd_ae,psd_xyz\n"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text.lines().count(), 26);
}

#[test]
fn psd_rejects_inverted_range() {
    Command::cargo_bin("psd")
        .expect("psd bin")
        .args(["--fmin", "1.0", "--fmax", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fmin < fmax"));
}

#[test]
fn orbit_writes_csv_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("tq.csv");
    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args([
            "--detector",
            "TianQin",
            "--catalog",
            "configs/detectors",
            "--days",
            "2",
            "--step",
            "3600",
            "--summary",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("csv");
    assert_eq!(csv.lines().count(), 1 + 49);

    let summary = fs::read_to_string(dir.path().join("tq_summary.json")).expect("summary");
    assert!(summary.contains("\"geocentric\""));
    assert!(summary.contains("\"sample_count\": 49"));
}

#[test]
fn orbit_rejects_unknown_detector() {
    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args(["--detector", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn orbit_rejects_unbounded_spans() {
    let cases = [
        (["--days", "inf", "--step", "60"], "days must be finite"),
        (["--days", "NaN", "--step", "60"], "days must be finite"),
        (["--days", "1", "--step", "0"], "step must be finite and positive"),
        (["--days", "1e12", "--step", "1"], "exceeds the limit"),
    ];
    for (args, message) in cases {
        Command::cargo_bin("orbit")
            .expect("orbit bin")
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains(message));
    }
}

#[test]
fn psd_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("psd.csv");
    let png_path = dir.path().join("psd.png");

    Command::cargo_bin("psd")
        .expect("psd bin")
        .args([
            "--detector",
            "TianQin",
            "--points",
            "200",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    Command::cargo_bin("psd_plot")
        .expect("psd_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--asd",
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}
