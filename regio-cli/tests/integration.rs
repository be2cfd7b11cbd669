use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

const FIXTURE: &str = "\
code,name,level,parent_code,type
110000000000,北京市,1,0,0
110100000000,市辖区,2,110000000000,0
110101000000,东城区,3,110100000000,0,58000.5,96.2%
320000000000,江苏省,1,0,0
320100000000,南京市,2,320000000000,0
530102000000,五华区,3,999999999999,0
";

/// Write the fixture dataset into an isolated temp directory and return a
/// `regio` command pointed at it.
fn regio_cmd(work_dir: &TempDir) -> Command {
    let data = work_dir.path().join("area_code.csv");
    let mut file = std::fs::File::create(&data).expect("create fixture");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");

    let mut cmd = Command::cargo_bin("regio").expect("binary built");
    cmd.current_dir(work_dir.path());
    cmd.arg("--data").arg(data);
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    Command::cargo_bin("regio")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrative-division query CLI"))
        .stdout(predicate::str::contains("code"))
        .stdout(predicate::str::contains("name"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn code_lookup_prints_card_and_lineage() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["code", "110101000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("东城区"))
        .stdout(predicate::str::contains("58000.50"))
        .stdout(predicate::str::contains("96.2%"))
        .stdout(predicate::str::contains("part of prefecture (2): 市辖区"))
        .stdout(predicate::str::contains("part of province (1): 北京市"));
}

#[test]
fn code_miss_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["code", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no division with code '999'"));
}

#[test]
fn orphan_code_is_not_found() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["code", "530102000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no division with code"));
}

#[test]
fn name_search_lists_matches() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["name", "京"])
        .assert()
        .success()
        .stdout(predicate::str::contains("北京市"))
        .stdout(predicate::str::contains("南京市"))
        .stdout(predicate::str::contains("2 match(es) found"));
}

#[test]
fn name_search_limit_truncates() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["name", "区", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es) shown; more may exist"));
}

#[test]
fn name_search_no_matches_is_success() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .args(["name", "广州"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no divisions matching '广州'"));
}

#[test]
fn stats_reports_orphans() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Records:   6"))
        .stdout(predicate::str::contains("Orphans:   1"));
}

#[test]
fn shell_runs_piped_commands() {
    let dir = TempDir::new().unwrap();
    regio_cmd(&dir)
        .arg("shell")
        .write_stdin("code 110000000000\nname 南京\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("北京市"))
        .stdout(predicate::str::contains("南京市"));
}

#[test]
fn missing_data_flag_is_usage_error() {
    Command::cargo_bin("regio")
        .unwrap()
        .env("NO_COLOR", "1")
        .args(["code", "11"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pass --data"));
}
