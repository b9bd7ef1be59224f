use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub const DEFAULT_TEMPLATE: &str = "\
Value TITLE ^:title:[ \\t]*(.*)$
Value SPEAKER ^:speaker:[ \\t]*(.*)$
Value LOCATION ^:location:[ \\t]*(.*)$
";

pub const DEFAULT_PAGE: &str = "\
NYCU Meetup
###########

:title: Rust for Pythonistas
:speaker: Jane Doe
:location: NYCU EC122
";

pub struct TestEnv {
    _tmp: TempDir,
    pub pages: PathBuf,
    pub template: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let pages = tmp.path().join("content").join("pages").join("meetup");
        fs::create_dir_all(&pages).expect("create pages dir");
        let template = tmp.path().join("meetup.template");
        fs::write(&template, DEFAULT_TEMPLATE).expect("write template");
        let out = tmp.path().join("meetup_information.json");
        Self {
            _tmp: tmp,
            pages,
            template,
            out,
        }
    }

    pub fn write_page(&self, year: i32, name: &str, body: &str) {
        let dir = self.pages.join(year.to_string());
        fs::create_dir_all(&dir).expect("create year dir");
        fs::write(dir.join(name), body).expect("write page");
    }

    pub fn write_template(&self, body: &str) {
        fs::write(&self.template, body).expect("write template");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nextmeet").expect("binary built");
        cmd.arg("--pages-dir")
            .arg(&self.pages)
            .arg("--template")
            .arg(&self.template)
            .arg("--out")
            .arg(&self.out);
        cmd
    }

    pub fn run_json(&self, extra: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
