mod common;

use collapse_setup::bundler::{
    Channel, Directory, Settings, SettingsBuilder, StagedTree, Version,
    package::{self, Entity, IdGenerator, MAX_ID_LEN, PackageModel, ShortcutLocation, ShortcutTarget},
    platform::windows::wix,
    stage,
};
use std::{collections::HashSet, path::Path};

struct Fixture {
    _source: tempfile::TempDir,
    work: tempfile::TempDir,
    settings: Settings,
    version: Version,
    staged: StagedTree,
}

async fn staged_fixture() -> Fixture {
    let source = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    common::publish_tree(source.path(), "Stable", [1, 4, 0, 0]);

    let settings = SettingsBuilder::new()
        .source_directory(source.path())
        .channel(Channel::Stable)
        .wsx_only(true)
        .working_directory(work.path())
        .build()
        .unwrap();
    let version = Version::new(1, 4, 0, 0);
    let staged = stage::stage_files(&settings, &version).await.unwrap();

    Fixture {
        _source: source,
        work,
        settings,
        version,
        staged,
    }
}

fn map(fixture: &Fixture, ids: &mut IdGenerator) -> Directory {
    package::map_directory(&fixture.staged.app_directory, &fixture.staged.root, ids).unwrap()
}

fn model(fixture: &Fixture) -> PackageModel {
    let mut ids = IdGenerator::new();
    let tree = map(fixture, &mut ids);
    package::assemble(
        &fixture.settings,
        &fixture.version,
        &fixture.staged,
        tree,
        &mut ids,
    )
    .unwrap()
}

fn collect_ids(dir: &Directory, out: &mut Vec<String>) {
    out.push(dir.id.to_string());
    for child in dir.children() {
        match child {
            Entity::File(f) => out.push(f.id.to_string()),
            Entity::Directory(d) => collect_ids(d, out),
        }
    }
}

fn is_legal(id: &str) -> bool {
    let first = id.chars().next().unwrap();
    (first == '_' || first.is_ascii_alphabetic())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && id.len() <= MAX_ID_LEN
}

#[tokio::test]
async fn test_tree_mirrors_staged_directory() {
    let fixture = staged_fixture().await;
    let mut ids = IdGenerator::new();
    let tree = map(&fixture, &mut ids);

    assert_eq!(tree.name, "app-1.4");
    let files: Vec<_> = tree.files().map(|f| f.name.as_str()).collect();
    assert_eq!(
        files,
        ["CollapseLauncher.dll", "Microsoft.UI.Xaml.dll", "resources.pri"]
    );

    let subdirs: Vec<_> = tree.directories().collect();
    assert_eq!(subdirs.len(), 1);
    assert_eq!(subdirs[0].name, "Lang");
    let lang: Vec<_> = subdirs[0].files().map(|f| f.name.as_str()).collect();
    assert_eq!(lang, ["en_US.json", "id-ID.json"]);

    assert_eq!(tree.all_files().len(), 5);
    for file in tree.all_files() {
        assert!(file.source.is_absolute());
        assert!(file.source.is_file());
    }
}

#[tokio::test]
async fn test_identifiers_are_unique_and_legal() {
    let fixture = staged_fixture().await;
    let model = model(&fixture);

    let mut ids = Vec::new();
    collect_ids(&model.install_root, &mut ids);
    ids.extend(model.shortcuts.iter().map(|s| s.id.to_string()));

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate identifiers: {ids:?}");
    for id in &ids {
        assert!(is_legal(id), "illegal identifier {id}");
        assert!(!id.contains(['-', '@', '.']));
    }
}

#[tokio::test]
async fn test_identifiers_are_stable_across_runs() {
    let fixture = staged_fixture().await;
    let first = map(&fixture, &mut IdGenerator::new());
    let second = map(&fixture, &mut IdGenerator::new());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_long_names_stay_within_limit() {
    let fixture = staged_fixture().await;
    let long = "A".repeat(120) + ".dll";
    std::fs::write(fixture.staged.app_directory.join(&long), b"x").unwrap();

    let tree = map(&fixture, &mut IdGenerator::new());
    let file = tree.file(&long).unwrap();
    assert!(file.id.as_str().len() <= MAX_ID_LEN);
    assert!(is_legal(file.id.as_str()));
}

#[tokio::test]
async fn test_assembled_install_root() {
    let fixture = staged_fixture().await;
    let model = model(&fixture);
    let root = &model.install_root;

    assert_eq!(root.id.as_str(), "INSTALLDIR");
    assert_eq!(root.name, "Collapse Launcher");
    let names: Vec<_> = root.children().iter().map(Entity::name).collect();
    assert_eq!(
        names,
        ["app-1.4", "icon.ico", "CollapseLauncher.exe", "Update.exe"]
    );
    assert_eq!(root.all_files().len(), 8);
    assert_eq!(model.channel, Channel::Stable);
    assert_eq!(model.license, fixture.staged.app_directory.join("LICENSE.rtf"));
}

#[tokio::test]
async fn test_shortcuts() {
    let fixture = staged_fixture().await;
    let model = model(&fixture);
    let launcher = model.install_root.file("CollapseLauncher.exe").unwrap();

    let start_menu: Vec<_> = model.shortcuts_at(ShortcutLocation::StartMenu).collect();
    let desktop: Vec<_> = model.shortcuts_at(ShortcutLocation::Desktop).collect();
    assert_eq!(start_menu.len(), 2);
    assert_eq!(desktop.len(), 1);

    assert_eq!(desktop[0].target, ShortcutTarget::File(launcher.id.clone()));
    assert_eq!(start_menu[0].target.formatted(), format!("[#{}]", launcher.id));

    let uninstall = start_menu
        .iter()
        .find(|s| s.name == "Uninstall Collapse Launcher")
        .unwrap();
    assert_eq!(uninstall.target.formatted(), "[System64Folder]msiexec.exe");
    assert_eq!(uninstall.arguments, "/x [ProductCode]");
}

#[tokio::test]
async fn test_rendered_script() {
    let fixture = staged_fixture().await;
    let model = model(&fixture);
    let script = wix::render_wxs(&model).unwrap();

    assert!(script.contains(r#"ProductCode="1B671B04-CE52-4284-AAF1-1608C2761EEA""#));
    assert!(script.contains(r#"Version="1.4.0.0""#));
    assert!(script.contains(r#"Language="1033""#));
    assert!(script.contains(r#"Scope="perMachine""#));
    assert!(script.contains(r#"<ui:WixUI Id="WixUI_InstallDir" />"#));
    assert!(script.contains(r#"<StandardDirectory Id="ProgramFiles64Folder">"#));
    assert!(script.contains(r#"Name="app-1.4""#));
    assert!(script.contains("[System64Folder]msiexec.exe"));
    assert!(script.contains("Collapse Project Team"));

    for file in model.install_root.all_files() {
        assert!(script.contains(&format!(r#"<ComponentRef Id="{}" />"#, file.id)));
        assert!(script.contains(&format!(r#"<File Id="{}""#, file.id)));
    }
}

#[tokio::test]
async fn test_rendered_script_is_byte_stable() {
    let fixture = staged_fixture().await;
    assert_eq!(
        wix::render_wxs(&model(&fixture)).unwrap(),
        wix::render_wxs(&model(&fixture)).unwrap()
    );
}

#[tokio::test]
async fn test_emit_script_only() {
    let fixture = staged_fixture().await;
    let model = model(&fixture);

    let emitted = wix::emit(&model, &fixture.settings).await.unwrap();
    let expected = fixture.work.path().join("CL-Stable-1.4_InstallerScript.wsx");
    assert_eq!(emitted, wix::Emitted::Script(expected.clone()));
    assert!(Path::new(&expected).is_file());
    assert!(!fixture.work.path().join("CL-Stable-1.4.msi").exists());
}
