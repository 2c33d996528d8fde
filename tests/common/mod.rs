#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub cards: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let cards = make_fixture_cards(tmp.path());

        Self {
            _tmp: tmp,
            home,
            cards,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cardclass");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn cards_arg(&self) -> &str {
        self.cards.to_str().expect("cards path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read_card(&self, rel: &str) -> Value {
        let raw = fs::read_to_string(self.cards.join(rel)).expect("read card");
        serde_json::from_str(&raw).expect("card json")
    }

    pub fn write_card(&self, rel: &str, body: &str) {
        let p = self.cards.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create card dir");
        }
        fs::write(p, body).expect("write card");
    }
}

fn make_fixture_cards(base: &Path) -> PathBuf {
    let cards = base.join("cards");
    let nekoma = cards.join("nekoma");
    let karasuno = cards.join("karasuno");

    fs::create_dir_all(nekoma.join("characters")).expect("create characters");
    fs::create_dir_all(nekoma.join("actions")).expect("create actions");
    fs::create_dir_all(karasuno.join("characters")).expect("create characters");

    fs::write(
        nekoma.join("characters/kuroo-tetsuro-1.json"),
        serde_json::json!({"name": "Kuroo Tetsuro", "power": 8}).to_string(),
    )
    .expect("write kuroo");
    fs::write(
        nekoma.join("characters/kozume-kenma-1.json"),
        serde_json::json!({
            "name": "Kozume Kenma",
            "class": 11,
            "skill": {"name": "Observe", "description": "A Grade 9 style feint"}
        })
        .to_string(),
    )
    .expect("write kenma");
    fs::write(
        nekoma.join("actions/kuroo-tetsuro-1.json"),
        serde_json::json!({"name": "Read Block", "class": 12}).to_string(),
    )
    .expect("write action");
    fs::write(
        nekoma.join("actions/receive-1.json"),
        serde_json::json!({"name": "Receive"}).to_string(),
    )
    .expect("write receive");
    fs::write(
        karasuno.join("characters/mystery-player-1.json"),
        serde_json::json!({"name": "Mystery Player"}).to_string(),
    )
    .expect("write mystery");
    fs::write(karasuno.join("characters/notes.md"), "# not a card\n").expect("write notes");

    cards
}
