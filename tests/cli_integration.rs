use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Subscriber,Male,1975.0
1473887,2017-06-26 09:01:20,2017-06-26 09:11:06,586,Clinton St & Washington Blvd,Canal St & Taylor St,Subscriber,Male,1990.0
961916,2017-05-26 09:41:44,2017-05-26 09:46:25,281,Wood St & Hubbard St,Damen Ave & Chicago Ave,Customer,,
";

const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
";

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write_file(&dir.path().join("chicago.csv"), CHICAGO);
    write_file(&dir.path().join("washington.csv"), WASHINGTON);
    dir
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("write test file");
}

fn run_bikestats(args: &[&str], data_dir: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_bikestats").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("bikestats.exe");
        } else {
            path.push("bikestats");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .arg("--data-dir")
        .arg(data_dir)
        .env_remove("RUST_LOG")
        .env("HOME", data_dir)
        .output()
        .expect("run bikestats");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn run_json(args: &[&str], data_dir: &Path) -> Value {
    let (ok, stdout, stderr) = run_bikestats(args, data_dir);
    assert!(ok, "command failed: {stderr}");
    serde_json::from_str(&stdout).expect("valid JSON output")
}

#[test]
fn stats_json_for_whole_city() {
    let dir = data_dir();
    let json = run_json(&["--city", "chicago", "--json"], dir.path());

    assert_eq!(json["city"], "Chicago");
    assert_eq!(json["rows_loaded"], 7);
    assert_eq!(json["rows_analyzed"], 7);

    let stats = &json["statistics"];
    assert_eq!(stats["time"]["common_month"]["value"], 6);
    assert_eq!(stats["time"]["common_month"]["count"], 2);
    assert_eq!(stats["station"]["common_start_station"]["value"], "Wood St & Hubbard St");
    assert_eq!(stats["station"]["common_start_station"]["count"], 2);
    assert_eq!(stats["station"]["common_trip"]["end_station"], "Damen Ave & Chicago Ave");
    assert_eq!(stats["duration"]["total_duration"], 4098);
    assert_eq!(stats["duration"]["mean_duration"], 585.43);
    assert_eq!(stats["duration"]["shortest"], 281);
    assert_eq!(stats["duration"]["longest"], 1610);

    let demo = &stats["user"]["demographics"];
    assert_eq!(demo["gender_counts"][0]["value"], "Male");
    assert_eq!(demo["gender_counts"][0]["count"], 5);
    assert_eq!(demo["birth_years"]["earliest"], 1975);
    assert_eq!(demo["birth_years"]["latest"], 1992);
    assert_eq!(demo["birth_years"]["most_common"]["value"], 1992);
}

#[test]
fn stats_json_month_and_day_filter() {
    let dir = data_dir();
    let json = run_json(
        &["stats", "-c", "Chicago", "-m", "June", "-d", "monday", "-j"],
        dir.path(),
    );

    assert_eq!(json["filter"]["month"], "June");
    assert_eq!(json["filter"]["day"], "Monday");
    assert_eq!(json["rows_analyzed"], 1);
    assert_eq!(json["statistics"]["time"]["common_hour"]["value"], 9);
    assert_eq!(json["statistics"]["duration"]["total_duration"], 586);
}

#[test]
fn washington_has_no_demographics() {
    let dir = data_dir();
    let json = run_json(&["-c", "dc", "--json"], dir.path());

    assert_eq!(json["city"], "Washington");
    assert!(json["statistics"]["user"].get("demographics").is_none());
    // 489.066 + 402.549 + 637.251, each rounded to whole seconds
    assert_eq!(json["statistics"]["duration"]["total_duration"], 1529);
    assert_eq!(json["statistics"]["user"]["user_type_counts"][0]["count"], 3);
}

#[test]
fn stats_table_output() {
    let dir = data_dir();
    let (ok, stdout, stderr) = run_bikestats(&["-c", "washington", "--no-color"], dir.path());
    assert!(ok, "command failed: {stderr}");
    assert!(stdout.contains("Most Frequent Times of Travel"));
    assert!(stdout.contains("Start Station - 14th & Belmont St NW; End Station - 15th & K St NW"));
    assert!(stdout.contains("Gender and birth year data are not available for Washington."));
    assert!(stdout.contains("3 trips analyzed (3 loaded)"));
}

#[test]
fn unknown_city_fails() {
    let dir = data_dir();
    let (ok, _, stderr) = run_bikestats(&["-c", "boston"], dir.path());
    assert!(!ok);
    assert!(stderr.contains(r#"Unknown city "boston""#));
}

#[test]
fn invalid_filter_fails() {
    let dir = data_dir();
    let (ok, _, stderr) = run_bikestats(&["-c", "chicago", "-m", "smarch"], dir.path());
    assert!(!ok);
    assert!(stderr.contains(r#"Invalid month filter "smarch""#));
}

#[test]
fn empty_selection_fails() {
    let dir = data_dir();
    let (ok, _, stderr) = run_bikestats(&["-c", "chicago", "-m", "december"], dir.path());
    assert!(!ok);
    assert!(stderr.contains("No trips match the selected filters"));
}

#[test]
fn missing_city_file_fails() {
    let dir = data_dir();
    let (ok, _, stderr) = run_bikestats(&["-c", "nyc"], dir.path());
    assert!(!ok);
    assert!(stderr.contains("new_york_city.csv"));
}

#[test]
fn missing_city_argument_fails() {
    let dir = data_dir();
    let (ok, _, stderr) = run_bikestats(&["stats"], dir.path());
    assert!(!ok);
    assert!(stderr.contains("--city is required"));
}

#[test]
fn raw_pages_through_rows() {
    let dir = data_dir();
    let first = run_json(&["raw", "-c", "chicago", "--json"], dir.path());
    assert_eq!(first["total_rows"], 7);
    assert_eq!(first["rows"].as_array().map(Vec::len), Some(5));
    assert_eq!(first["rows"][0]["start_time"], "2017-06-23 15:09:32");

    let second = run_json(&["raw", "-c", "chicago", "--offset", "5", "--json"], dir.path());
    assert_eq!(second["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(second["rows"][1]["user_type"], "Customer");
    assert!(second["rows"][1]["gender"].is_null());
}

#[test]
fn raw_respects_filter_and_limit() {
    let dir = data_dir();
    let json = run_json(
        &["raw", "-c", "chicago", "-m", "may", "-n", "1", "--json"],
        dir.path(),
    );
    assert_eq!(json["total_rows"], 2);
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["rows"][0]["day_of_week"], "Thursday");
}

#[test]
fn cities_lists_supported_cities() {
    let dir = data_dir();
    let json = run_json(&["cities", "--json"], dir.path());
    let names: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, ["chicago", "new_york_city", "washington"]);
}
