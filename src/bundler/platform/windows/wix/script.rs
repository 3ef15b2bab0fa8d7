//! WiX source generation.
//!
//! Renders the package model into a WiX v4 `.wxs` document. The directory
//! tree is rendered recursively in code; the surrounding document comes from
//! a Handlebars template.

use super::{template::WXS_TEMPLATE, utils};
use crate::bundler::{
    WixUiMode,
    error::{ErrorExt, Result},
    package::{Directory, PackageModel, ShortcutLocation},
};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use std::{fmt::Write, path::Path};
use uuid::Uuid;

const TREE_INDENT: usize = 4;

/// Template row for one `<Shortcut>` element.
#[derive(Serialize)]
struct ShortcutRow<'a> {
    id: &'a str,
    name: &'a str,
    target: String,
    arguments: &'a str,
}

/// Render the WiX source for `model`.
pub fn render_wxs(model: &PackageModel) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("installer.wxs", WXS_TEMPLATE)?;

    let bitness = utils::map_bitness(model.platform);

    let mut install_tree = String::new();
    render_children(&model.install_root, TREE_INDENT, bitness, &mut install_tree);

    let component_refs: Vec<&str> = model
        .install_root
        .all_files()
        .into_iter()
        .map(|f| f.id.as_str())
        .collect();

    let shortcuts = |location: ShortcutLocation| {
        model
            .shortcuts_at(location)
            .map(|s| ShortcutRow {
                id: s.id.as_str(),
                name: &s.name,
                target: s.target.formatted(),
                arguments: &s.arguments,
            })
            .collect::<Vec<_>>()
    };

    let data = json!({
        "product_name": model.product_name,
        "manufacturer": model.manufacturer,
        "comments": model.comments,
        "help_link": model.help_link,
        "readme_link": model.readme_link,
        "contact": model.contact,
        "channel": model.channel.as_str(),
        "version": model.version.to_msi_string(),
        "version_short": model.version.to_short_string(),
        "product_guid": format_guid(model.product_guid),
        "start_menu_guid": format_guid(component_guid(model.product_guid, "StartMenuShortcuts")),
        "desktop_guid": format_guid(component_guid(model.product_guid, "DesktopShortcuts")),
        "language": utils::language_lcid(&model.language)?.to_string(),
        "scope": utils::map_scope(model.scope),
        "ui": utils::map_ui(model.ui),
        "install_dir_ui": model.ui == WixUiMode::InstallDir,
        "program_files": utils::program_files_folder(model.platform),
        "bitness": bitness,
        "icon": model.icon.display().to_string(),
        "license": model.license.display().to_string(),
        "banner_image": model.banner_image.display().to_string(),
        "background_image": model.background_image.display().to_string(),
        "registry_key": format!("Software\\{}\\{}", model.manufacturer, model.product_name),
        "install_tree": install_tree,
        "start_menu_shortcuts": shortcuts(ShortcutLocation::StartMenu),
        "desktop_shortcuts": shortcuts(ShortcutLocation::Desktop),
        "component_refs": component_refs,
    });

    Ok(handlebars.render("installer.wxs", &data)?)
}

/// Render `model` and write it to `path`.
pub async fn write_wxs(model: &PackageModel, path: &Path) -> Result<()> {
    let content = render_wxs(model)?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating script directory", parent)?;
    }
    tokio::fs::write(path, content)
        .await
        .fs_context("writing WiX source", path)?;
    log::info!("✓ Wrote WiX source {}", path.display());
    Ok(())
}

/// Files as components, then subdirectories, each level indented two spaces.
fn render_children(dir: &Directory, depth: usize, bitness: &str, out: &mut String) {
    let pad = "  ".repeat(depth);
    for file in dir.files() {
        let id = file.id.as_str();
        let _ = writeln!(out, r#"{pad}<Component Id="{id}" Bitness="{bitness}">"#);
        let _ = writeln!(
            out,
            r#"{pad}  <File Id="{id}" Name="{}" Source="{}" KeyPath="yes" />"#,
            utils::escape_attr(&file.name),
            utils::escape_attr(&file.source.display().to_string()),
        );
        let _ = writeln!(out, "{pad}</Component>");
    }
    for sub in dir.directories() {
        let _ = writeln!(
            out,
            r#"{pad}<Directory Id="{}" Name="{}">"#,
            sub.id,
            utils::escape_attr(&sub.name)
        );
        render_children(sub, depth + 1, bitness, out);
        let _ = writeln!(out, "{pad}</Directory>");
    }
}

/// Stable component GUID derived from the product GUID.
fn component_guid(product: Uuid, component: &str) -> Uuid {
    Uuid::new_v5(&product, component.as_bytes())
}

fn format_guid(guid: Uuid) -> String {
    guid.hyphenated().to_string().to_uppercase()
}
