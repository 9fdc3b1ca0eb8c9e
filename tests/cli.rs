//! End-to-end tests of the suntimes binary.
//! Each test points HOME at a temp directory so no real rc file is read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TIMES_LINE: &str = r"^\d{2}:\d{2}:\d{2},\d{2}:\d{2}:\d{2}\n$";

const BAD_DATES: [[&str; 3]; 4] =
    [["2021", "2", "29"], ["2021", "4", "31"], ["1752", "1", "1"], ["2021", "13", "1"]];

fn suntimes(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("suntimes").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("SUNTIMES_LATITUDE")
        .env_remove("SUNTIMES_LONGITUDE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_rc(home: &TempDir, body: &str) {
    std::fs::write(home.path().join(".suntimesrc"), body).unwrap();
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().unwrap();
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn norwich_sunrise_and_sunset() {
    let home = TempDir::new().unwrap();
    let expected = r"^05:4[2-4]:\d{2},17:(48|49|50):\d{2}\n$";
    suntimes(&home)
        .args(["--latitude", "52.628", "--longitude", "1.252", "2021", "9", "24"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected).unwrap());
}

#[test]
fn twilight_flags_select_kind() {
    let home = TempDir::new().unwrap();
    for flag in ["-0", "-1", "-2", "-3"] {
        suntimes(&home)
            .args([flag, "--la", "40", "--lo", "-74", "2024", "3", "20"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(TIMES_LINE).unwrap());
    }
}

#[test]
fn polar_night_and_midnight_sun() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .args(["--latitude", "78", "--longitude", "0", "2021", "12", "21"])
        .assert()
        .success()
        .stdout("NeverRises.\n");
    suntimes(&home)
        .args(["--latitude", "78", "--longitude", "0", "2021", "6", "21"])
        .assert()
        .success()
        .stdout("NeverSets.\n");
}

#[test]
fn polar_night_still_has_deep_twilight() {
    // Noon at 78N on the solstice is about 11.4 degrees down: no civil twilight,
    // but the sun still climbs through -12 and -18.
    let home = TempDir::new().unwrap();
    let at_78n = ["--latitude", "78", "--longitude", "0", "2021", "12", "21"];
    suntimes(&home).arg("-1").args(at_78n).assert().success().stdout("NeverRises.\n");
    for flag in ["-2", "-3"] {
        suntimes(&home)
            .arg(flag)
            .args(at_78n)
            .assert()
            .success()
            .stdout(predicate::str::is_match(TIMES_LINE).unwrap());
    }
}

#[test]
fn defaults_to_today() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .args(["--latitude", "0", "--longitude", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(TIMES_LINE).unwrap());
}

#[test]
fn invalid_date_fails() {
    let home = TempDir::new().unwrap();
    for date in BAD_DATES {
        suntimes(&home)
            .args(["--latitude", "0", "--longitude", "0"])
            .args(date)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Invalid date!"));
    }
}

#[test]
fn leap_day_accepted() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .args(["--latitude", "0", "--longitude", "0", "2020", "2", "29"])
        .assert()
        .success();
}

#[test]
fn partial_date_is_usage_error() {
    let home = TempDir::new().unwrap();
    suntimes(&home).args(["2021", "9"]).assert().code(2);
}

#[test]
fn conflicting_kinds_rejected() {
    let home = TempDir::new().unwrap();
    suntimes(&home).args(["-1", "-3", "2021", "9", "24"]).assert().code(2);
}

#[test]
fn out_of_range_flag_rejected() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .args(["--latitude", "95", "2021", "9", "24"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("latitude must be between -90 and 90"));
}

#[test]
fn user_rc_supplies_location() {
    let home = TempDir::new().unwrap();
    write_rc(&home, "latitude = 78.0\nlongitude = 15.6\n");
    suntimes(&home).args(["2021", "12", "21"]).assert().success().stdout("NeverRises.\n");
}

#[test]
fn flag_overrides_config() {
    let home = TempDir::new().unwrap();
    write_rc(&home, "latitude = 78.0\nlongitude = 15.6\n");
    suntimes(&home)
        .args(["--latitude", "10", "2021", "12", "21"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(TIMES_LINE).unwrap());
}

#[test]
fn env_overrides_config() {
    let home = TempDir::new().unwrap();
    write_rc(&home, "latitude = 10.0\n");
    suntimes(&home)
        .env("SUNTIMES_LATITUDE", "-78")
        .args(["2021", "12", "21"])
        .assert()
        .success()
        .stdout("NeverSets.\n");
}

#[test]
fn explicit_config_file() {
    let home = TempDir::new().unwrap();
    let cfg = home.path().join("arctic.toml");
    std::fs::write(&cfg, "latitude = 78.0\nlongitude = 0.0\n").unwrap();
    suntimes(&home)
        .arg("--config")
        .arg(&cfg)
        .args(["2021", "6", "21"])
        .assert()
        .success()
        .stdout("NeverSets.\n");
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .args(["2021", "6", "21"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("problem with config file"));
}

#[test]
fn bad_config_value_fails() {
    let home = TempDir::new().unwrap();
    write_rc(&home, "longitude = 200.0\n");
    suntimes(&home)
        .args(["2021", "9", "24"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("problem with config file"))
        .stderr(predicate::str::contains("longitude must be between -180 and 180"));
}

#[test]
fn json_output_sentinel() {
    let home = TempDir::new().unwrap();
    let mut cmd = suntimes(&home);
    cmd.args(["--json", "-1", "--latitude", "78", "--longitude", "0", "2021", "12", "21"]);
    let v = json_stdout(&mut cmd);
    assert_eq!(v["kind"], "civil");
    assert_eq!(v["date"], "2021-12-21");
    assert_eq!(v["event"], "never_rises");
}

#[test]
fn json_output_times() {
    let home = TempDir::new().unwrap();
    let mut cmd = suntimes(&home);
    cmd.args(["--json", "-2", "--latitude", "78", "--longitude", "0", "2021", "12", "21"]);
    let v = json_stdout(&mut cmd);
    assert_eq!(v["kind"], "nautical");
    assert_eq!(v["latitude"], 78.0);
    assert!(v["event"]["times"]["rise"].as_str().unwrap().starts_with("10:4"));
    assert!(v["event"]["times"]["set"].as_str().unwrap().starts_with("13:1"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .args(["-vv", "--latitude", "0", "--longitude", "0", "2021", "3", "20"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(TIMES_LINE).unwrap())
        .stderr(predicate::str::contains("computing sun times"));
}

#[test]
fn help_shows_resolved_defaults() {
    let home = TempDir::new().unwrap();
    write_rc(&home, "latitude = -33.87\n");
    suntimes(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default latitude:  -33.870"))
        .stdout(predicate::str::contains("Default longitude: +001.252"))
        .stdout(predicate::str::is_match(r"Default date:      \d{4} \d{2} \d{2}").unwrap());
}

#[test]
fn build_info() {
    let home = TempDir::new().unwrap();
    suntimes(&home)
        .arg("--show-build-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built from Git commit:"));
}
