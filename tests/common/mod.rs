#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    /// Default fixture: five listings across Haeundae (3) and Suyeong (2),
    /// all with capacity 4.
    pub fn new() -> Self {
        Self::with_items(vec![
            fixture_listing("g1", "Haeundae", 4),
            fixture_listing("g2", "Suyeong", 4),
            fixture_listing("g3", "Haeundae", 4),
            fixture_listing("g4", "Suyeong", 4),
            fixture_listing("g5", "Haeundae", 4),
        ])
    }

    pub fn with_items(items: Vec<Value>) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let data = make_fixture_data(tmp.path(), items);
        Self {
            _tmp: tmp,
            home,
            data,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("halmi").unwrap();
        cmd.env("HOME", &self.home)
            .arg("--data")
            .arg(self.data.to_str().expect("data path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Feed a script into `session` and collect one parsed JSON value per
    /// reply line.
    pub fn run_session_json(&self, script: &str) -> Vec<Value> {
        let out = self
            .cmd()
            .arg("--json")
            .arg("session")
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out)
            .expect("utf8 output")
            .lines()
            .map(|l| serde_json::from_str(l).expect("valid json line"))
            .collect()
    }

    pub fn run_session_text(&self, script: &str) -> String {
        let out = self
            .cmd()
            .arg("session")
            .write_stdin(script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }
}

pub fn fixture_listing(id: &str, district: &str, headcount: u8) -> Value {
    json!({
        "id": id,
        "district": district,
        "headcount": headcount,
        "title": "Warm house",
        "title2": "with a story",
        "image": format!("images/{}.png", id),
        "first_name": "Young-sook",
        "last_name": "Kim"
    })
}

pub fn make_fixture_data(base: &Path, items: Vec<Value>) -> PathBuf {
    let data = base.join("data");
    fs::create_dir_all(&data).expect("create data dir");
    fs::write(
        data.join("items.json"),
        serde_json::to_string_pretty(&json!({ "items": items })).unwrap(),
    )
    .expect("write items.json");
    fs::write(
        data.join("address.json"),
        serde_json::to_string_pretty(&json!({
            "address": [
                { "eng_name": "Haeundae", "kor_name": "해운대구" },
                { "eng_name": "Suyeong", "kor_name": "수영구" },
                { "eng_name": "Gijang", "kor_name": "기장군" }
            ]
        }))
        .unwrap(),
    )
    .expect("write address.json");
    data
}
