//! Integration tests for the arcgen binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const TEMPLATE_DIR: &str = ".cli/commands/reactium/component/template";

const HOOKS_HBS: &str = "Reactium.Component.register('{{name}}', {{name}});\n";
const COMPONENT_HBS: &str =
    "export const {{name}} = () => <div{{#if className}} className='{{className}}'{{/if}} />;\n";
const DOMAIN_HBS: &str = "module.exports = {\n    name: '{{name}}',\n};\n";
const ROUTE_HBS: &str = "export default {\n    path: {{{route}}},\n    component: {{name}},\n};\n";

/// A temporary workspace with a Reactium web app at `web/`.
struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn web() -> Self {
        let fixture = Self {
            tmp: TempDir::new().unwrap(),
        };
        fixture.reactium_app("web");
        fixture
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    fn reactium_app(&self, rel: &str) {
        let app = self.path(rel);
        let templates = app.join(TEMPLATE_DIR);
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(app.join("src/app/components")).unwrap();
        fs::write(app.join("reactium-config.js"), "module.exports = {};").unwrap();
        fs::write(templates.join("reactium-hooks.hbs"), HOOKS_HBS).unwrap();
        fs::write(templates.join("index-functional.hbs"), COMPONENT_HBS).unwrap();
        fs::write(templates.join("domain.hbs"), DOMAIN_HBS).unwrap();
        fs::write(templates.join("route.hbs"), ROUTE_HBS).unwrap();
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// `arcgen` run from the workspace root with isolated config.
    fn arcgen(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("arcgen");
        cmd.current_dir(self.root())
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.path(".xdg"))
            .env("HOME", self.path(".home"))
            .env_remove("RUST_LOG");
        cmd
    }
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("component"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("detect"));
}

#[test]
fn version_flag() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arcgen"));
}

#[test]
fn no_color_env_accepts_any_value() {
    let fixture = Fixture::web();
    for value in ["1", "true", "0", ""] {
        fixture
            .arcgen()
            .env("NO_COLOR", value)
            .args(["detect", "web"])
            .assert()
            .success()
            .stdout(predicate::str::contains("reactium-web"));
    }
}

// ── detect ────────────────────────────────────────────────────────────────────

#[test]
fn detect_reports_web_variant() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .args(["detect", "web/src/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reactium-web"))
        .stdout(predicate::str::contains(TEMPLATE_DIR));
}

#[test]
fn detect_prefers_native_marker() {
    let fixture = Fixture::web();
    fixture.write("web/metro.config.js", "module.exports = {};");
    fixture
        .arcgen()
        .args(["detect", "web/src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reactium-native"));
}

#[test]
fn detect_json_output() {
    let fixture = Fixture::web();
    let output = fixture
        .arcgen()
        .args(["--output-format", "json", "detect", "web"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["variant"], "reactium-web");
    assert_eq!(value["generatable"], true);
}

#[test]
fn detect_outside_any_project_is_none() {
    let fixture = Fixture::web();
    fs::create_dir_all(fixture.path("docs")).unwrap();
    fixture
        .arcgen()
        .args(["detect", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("none"));
}

// ── component ─────────────────────────────────────────────────────────────────

#[test]
fn component_from_flags() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .args([
            "component",
            "web/src/app/components",
            "--name",
            "main-menu",
            "--features",
            "hooks,style,route,domain",
            "--route",
            "/menu, /",
            "--style",
            "atoms",
            "--yes",
        ])
        .assert()
        .success();

    let dir = "web/src/app/components/MainMenu";
    assert!(fixture.read(&format!("{dir}/index.js")).contains("className='main-menu'"));
    assert!(fixture.read(&format!("{dir}/reactium-hooks.js")).contains("'MainMenu'"));
    assert!(fixture.read(&format!("{dir}/domain.js")).contains("name: 'MainMenu'"));
    assert!(fixture.read(&format!("{dir}/route.js")).contains("path: ['/menu', '/'],"));
    assert!(fixture.path(&format!("{dir}/_reactium-style-atoms.scss")).is_file());
}

#[test]
fn component_rerun_keeps_existing_files() {
    let fixture = Fixture::web();
    let args = [
        "component",
        "web/src/app/components",
        "--name",
        "Card",
        "--features",
        "hooks",
    ];

    fixture.arcgen().args(args).arg("--yes").assert().success();
    fixture.write("web/src/app/components/Card/index.js", "edited");

    fixture
        .arcgen()
        .args(args)
        .arg("--no-overwrite")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"));

    assert_eq!(fixture.read("web/src/app/components/Card/index.js"), "edited");
}

#[test]
fn component_without_answers_and_no_terminal_fails() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .args(["component", "web/src/app/components"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reactium Component: Name"));

    assert!(fs::read_dir(fixture.path("web/src/app/components")).unwrap().next().is_none());
}

#[test]
fn component_reports_missing_template() {
    let fixture = Fixture::web();
    fs::remove_file(fixture.path(&format!("web/{TEMPLATE_DIR}/domain.hbs"))).unwrap();

    fixture
        .arcgen()
        .args([
            "component",
            "web/src/app/components",
            "--name",
            "Panel",
            "--features",
            "domain",
            "--yes",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Skipped domain.js"));

    assert!(fixture.path("web/src/app/components/Panel/index.js").is_file());
    assert!(!fixture.path("web/src/app/components/Panel/domain.js").exists());
}

#[test]
fn component_json_report() {
    let fixture = Fixture::web();
    let output = fixture
        .arcgen()
        .args([
            "--output-format",
            "json",
            "component",
            "web/src/app/components",
            "--name",
            "Badge",
            "--features",
            "hooks",
            "--yes",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["written"].as_array().unwrap().len(), 2);
    assert!(value["failed"].as_array().unwrap().is_empty());
}

#[test]
fn native_component_gets_domain_and_skips_route() {
    let fixture = Fixture::web();
    fixture.write("web/metro.config.js", "module.exports = {};");

    fixture
        .arcgen()
        .args([
            "component",
            "web/src/app/components",
            "--name",
            "Home",
            "--features",
            "hooks,route",
            "--route",
            "Home Screen",
            "--yes",
        ])
        .assert()
        .success();

    let dir = fixture.path("web/src/app/components/Home");
    assert!(dir.join("domain.js").is_file());
    assert!(dir.join("index.js").is_file());
    assert!(!dir.join("route.js").exists());
}

// ── route / domain / style ────────────────────────────────────────────────────

#[test]
fn route_command_writes_in_place() {
    let fixture = Fixture::web();
    fs::create_dir_all(fixture.path("web/src/app/components/About")).unwrap();

    fixture
        .arcgen()
        .args(["route", "web/src/app/components/About", "--route", "about", "--yes"])
        .assert()
        .success();

    let route = fixture.read("web/src/app/components/About/route.js");
    assert!(route.contains("path: ['/about'],"));
    assert!(route.contains("component: About,"));
}

#[test]
fn domain_command_writes_in_place() {
    let fixture = Fixture::web();
    fs::create_dir_all(fixture.path("web/src/app/components/user-card")).unwrap();

    fixture
        .arcgen()
        .args(["zone", "web/src/app/components/user-card", "--yes"])
        .assert()
        .success();

    assert!(fixture.read("web/src/app/components/user-card/domain.js").contains("name: 'UserCard'"));
}

#[test]
fn style_command_touches_tier_file() {
    let fixture = Fixture::web();
    fixture.write("web/src/app/components/Header/domain.js", "module.exports = { name: 'Header' };");

    fixture
        .arcgen()
        .args(["style", "web/src/app/components/Header", "--style", "organisms", "--yes"])
        .assert()
        .success();

    assert!(fixture.path("web/src/app/components/Header/_reactium-style-organisms.scss").is_file());
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn config_set_then_get() {
    let fixture = Fixture::web();
    let config = fixture.path("arcgen.toml");
    fs::write(&config, "").unwrap();
    let config = config.to_str().unwrap();

    fixture
        .arcgen()
        .args(["--config", config, "config", "set", "defaults.style", "molecules"])
        .assert()
        .success();

    fixture
        .arcgen()
        .args(["--config", config, "config", "get", "defaults.style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("molecules"));
}

#[test]
fn invalid_config_default_is_a_configuration_error() {
    let fixture = Fixture::web();
    fixture.write(".arcgen.toml", "[defaults]\nstyle = \"gigantic\"\n");

    fixture
        .arcgen()
        .args([
            "component",
            "web/src/app/components",
            "--name",
            "Grid",
            "--features",
            "hooks",
            "--yes",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.style"));

    assert!(!fixture.path("web/src/app/components/Grid").exists());
}

#[test]
fn env_overrides_template_subpath() {
    let fixture = Fixture::web();
    fixture
        .arcgen()
        .env("ARCGEN__TEMPLATES__SUBPATH", "custom/templates")
        .args(["detect", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn init_local_then_refuse_without_force() {
    let fixture = Fixture::web();

    fixture.arcgen().args(["init", "--local"]).assert().success();
    assert!(fixture.read(".arcgen.toml").contains("[defaults]"));

    fixture
        .arcgen()
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    fixture.arcgen().args(["init", "--local", "--force"]).assert().success();
}
