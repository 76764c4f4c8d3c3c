//! End-to-end generation against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arcgen_adapters::{
    FixedConfirmer, HandlebarsRenderer, LocalFilesystem, PresetAnswers, PresetPrompter,
    RecordingProgress, UnattendedPrompter,
};
use arcgen_core::prelude::*;
use tempfile::TempDir;

const TEMPLATE_DIR: &str = ".cli/commands/reactium/component/template";

const HOOKS_HBS: &str = "import Reactium from 'reactium-core/sdk';

Reactium.Plugin.register('{{name}}').then(() => {
    Reactium.Component.register('{{name}}', {{name}});
});
";

const COMPONENT_HBS: &str = "import React from 'react';

export const {{name}} = () => {
    return <div{{#if className}} className='{{className}}'{{/if}}>{{name}}</div>;
};

export default {{name}};
";

const DOMAIN_HBS: &str = "module.exports = {
    name: '{{name}}',
};
";

const ROUTE_HBS: &str = "import {{name}} from './index';

export default {
    path: {{{route}}},
    exact: true,
    component: {{name}},
};
";

/// A workspace holding one Reactium web app with the stock template set.
struct Workspace {
    _tmp: TempDir,
    root: PathBuf,
    app: PathBuf,
}

impl Workspace {
    fn web() -> Self {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_path_buf();
        let app = root.join("web");
        let templates = app.join(TEMPLATE_DIR);

        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(app.join("src/app/components")).unwrap();
        fs::write(app.join("reactium-config.js"), "module.exports = {};").unwrap();
        fs::write(templates.join("reactium-hooks.hbs"), HOOKS_HBS).unwrap();
        fs::write(templates.join("index-functional.hbs"), COMPONENT_HBS).unwrap();
        fs::write(templates.join("domain.hbs"), DOMAIN_HBS).unwrap();
        fs::write(templates.join("route.hbs"), ROUTE_HBS).unwrap();

        Self {
            _tmp: tmp,
            root,
            app,
        }
    }

    fn components(&self) -> PathBuf {
        self.app.join("src/app/components")
    }

    fn target(&self, dir: &Path) -> ScaffoldTarget {
        ScaffoldTarget::locate(dir, &[self.root.clone()]).unwrap()
    }

    fn service(&self, answers: PresetAnswers, overwrite: bool) -> ScaffoldService {
        ScaffoldService::new(
            Arc::new(LocalFilesystem::new()),
            Box::new(HandlebarsRenderer::new()),
            Box::new(PresetPrompter::new(answers, Box::new(UnattendedPrompter))),
            Box::new(FixedConfirmer(overwrite)),
            Box::new(RecordingProgress::new()),
        )
    }

    fn tree(&self) -> Vec<(PathBuf, String)> {
        let mut files: Vec<_> = walk(&self.root)
            .into_iter()
            .map(|path| {
                let content = fs::read_to_string(&path).unwrap();
                (path, content)
            })
            .collect();
        files.sort();
        files
    }
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}

fn card_answers() -> PresetAnswers {
    PresetAnswers {
        name: Some("user card".into()),
        features: Some(vec![Feature::Hooks, Feature::Style, Feature::Route]),
        route: Some("b, a ,c".into()),
        style: Some(StyleTier::Molecules),
    }
}

#[test]
fn web_component_renders_selected_files() {
    let ws = Workspace::web();
    let report = ws
        .service(card_answers(), false)
        .component(&ws.target(&ws.components()))
        .unwrap();

    let dir = ws.components().join("UserCard");
    assert_eq!(report.dir, dir);
    assert!(report.is_complete());

    let route = fs::read_to_string(dir.join("route.js")).unwrap();
    assert!(route.contains("path: ['/c', '/b', '/a'],"));
    assert!(route.contains("component: UserCard,"));

    let index = fs::read_to_string(dir.join("index.js")).unwrap();
    assert!(index.contains("export const UserCard = () =>"));
    assert!(index.contains("className='user-card'"));

    assert!(dir.join("reactium-hooks.js").is_file());
    assert_eq!(
        fs::read_to_string(dir.join("_reactium-style-molecules.scss")).unwrap(),
        ""
    );
    assert!(!dir.join("domain.js").exists());
}

#[test]
fn rerun_declining_overwrites_is_byte_identical() {
    let ws = Workspace::web();
    let target = ws.target(&ws.components());
    ws.service(card_answers(), false).component(&target).unwrap();
    let before = ws.tree();

    let report = ws.service(card_answers(), false).component(&target).unwrap();

    assert_eq!(ws.tree(), before);
    assert_eq!(report.declined.len(), 4);
}

#[test]
fn accepting_overwrites_rerenders() {
    let ws = Workspace::web();
    let target = ws.target(&ws.components());
    ws.service(card_answers(), true).component(&target).unwrap();

    let index = ws.components().join("UserCard/index.js");
    fs::write(&index, "edited").unwrap();

    ws.service(card_answers(), true).component(&target).unwrap();
    assert_ne!(fs::read_to_string(&index).unwrap(), "edited");
}

#[test]
fn native_project_gets_domain_and_no_style_or_route_files() {
    let ws = Workspace::web();
    fs::write(ws.app.join("metro.config.js"), "").unwrap();

    let answers = PresetAnswers {
        name: Some("Home".into()),
        features: Some(vec![Feature::Hooks, Feature::Style, Feature::Route]),
        route: Some("Home Screen".into()),
        style: None,
    };
    let report = ws
        .service(answers, false)
        .component(&ws.target(&ws.components()))
        .unwrap();

    let dir = ws.components().join("Home");
    let mut produced: Vec<_> = report
        .produced()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    produced.sort();

    assert_eq!(produced, ["domain.js", "index.js", "reactium-hooks.js"]);
    assert!(!dir.join("route.js").exists());
    assert!(
        fs::read_to_string(dir.join("domain.js"))
            .unwrap()
            .contains("name: 'Home'")
    );
}

#[test]
fn missing_template_is_reported_and_others_written() {
    let ws = Workspace::web();
    fs::remove_file(ws.app.join(TEMPLATE_DIR).join("route.hbs")).unwrap();

    let report = ws
        .service(card_answers(), false)
        .component(&ws.target(&ws.components()))
        .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].key, ManifestKey::Route);
    assert!(ws.components().join("UserCard/index.js").is_file());
}

#[test]
fn style_command_uses_domain_name() {
    let ws = Workspace::web();
    let dir = ws.components().join("menu");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("domain.js"), "module.exports = { name: 'MainMenu' };").unwrap();

    let answers = PresetAnswers {
        style: Some(StyleTier::Overrides),
        ..PresetAnswers::default()
    };
    let report = ws.service(answers, false).style(&ws.target(&dir)).unwrap();

    assert_eq!(report.touched, vec![dir.join("_reactium-style-overrides.scss")]);
}

#[test]
fn detect_reports_template_root() {
    let ws = Workspace::web();
    let info = ws
        .service(PresetAnswers::default(), false)
        .inspect(&ws.target(&ws.components()))
        .unwrap();

    assert_eq!(info.variant, ProjectVariant::ReactiumWeb);
    assert_eq!(info.template_root, Some(ws.app.join(TEMPLATE_DIR)));
}

#[test]
fn actinium_target_writes_nothing() {
    let ws = Workspace::web();
    let api = ws.root.join("api");
    fs::create_dir_all(api.join("src")).unwrap();
    fs::write(api.join("actinium-config.js"), "").unwrap();
    let before = ws.tree();

    let err = ws
        .service(card_answers(), false)
        .component(&ws.target(&api.join("src")))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(ws.tree(), before);
}
