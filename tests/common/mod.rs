//! Shared fixtures: a minimal PE32+ image with a version resource and a
//! publish directory laid out the way the release build leaves it.

#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

const RSRC_RVA: u32 = 0x1000;
const RSRC_FILE_OFFSET: usize = 0x200;
const FILE_LEN: usize = 0x400;
const RT_VERSION: u32 = 16;
const RT_RCDATA: u32 = 10;

fn put_u16(buf: &mut [u8], at: usize, v: u16) {
    buf[at..at + 2].copy_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, v: u32) {
    buf[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// One-entry resource directory pointing at `offset`.
fn resource_directory(buf: &mut Vec<u8>, id: u32, offset: u32) {
    buf.extend_from_slice(&[0u8; 12]);
    push_u16(buf, 0);
    push_u16(buf, 1);
    push_u32(buf, id);
    push_u32(buf, offset);
}

fn version_info(version: [u16; 4]) -> Vec<u8> {
    let ms = (u32::from(version[0]) << 16) | u32::from(version[1]);
    let ls = (u32::from(version[2]) << 16) | u32::from(version[3]);

    let mut blob = Vec::new();
    push_u16(&mut blob, 92);
    push_u16(&mut blob, 52);
    push_u16(&mut blob, 0);
    for unit in "VS_VERSION_INFO".encode_utf16().chain([0]) {
        push_u16(&mut blob, unit);
    }
    push_u16(&mut blob, 0);
    push_u32(&mut blob, 0xFEEF_04BD);
    push_u32(&mut blob, 0x0001_0000);
    push_u32(&mut blob, ms);
    push_u32(&mut blob, ls);
    push_u32(&mut blob, ms);
    push_u32(&mut blob, ls);
    blob.extend_from_slice(&[0u8; 28]);
    blob
}

/// `.rsrc` contents: type -> name -> language -> data entry -> VS_VERSIONINFO.
fn resource_section(type_id: u32, version: [u16; 4]) -> Vec<u8> {
    let mut rsrc = Vec::new();
    resource_directory(&mut rsrc, type_id, 0x8000_0000 | 0x18);
    resource_directory(&mut rsrc, 1, 0x8000_0000 | 0x30);
    resource_directory(&mut rsrc, 0x409, 0x48);
    push_u32(&mut rsrc, RSRC_RVA + 0x58);
    push_u32(&mut rsrc, 92);
    push_u32(&mut rsrc, 0);
    push_u32(&mut rsrc, 0);
    rsrc.extend(version_info(version));
    rsrc
}

fn pe_image(rsrc: &[u8], resource_directory_entry: bool) -> Vec<u8> {
    let mut image = vec![0u8; FILE_LEN];

    // DOS header
    image[0..2].copy_from_slice(b"MZ");
    put_u32(&mut image, 0x3C, 0x80);

    // PE signature and COFF header
    image[0x80..0x84].copy_from_slice(b"PE\0\0");
    put_u16(&mut image, 0x84, 0x8664);
    put_u16(&mut image, 0x86, 1);
    put_u16(&mut image, 0x94, 240);
    put_u16(&mut image, 0x96, 0x0022);

    // PE32+ optional header
    let opt = 0x98;
    put_u16(&mut image, opt, 0x020B);
    put_u32(&mut image, opt + 32, 0x1000);
    put_u32(&mut image, opt + 36, 0x200);
    put_u16(&mut image, opt + 40, 6);
    put_u16(&mut image, opt + 48, 6);
    put_u32(&mut image, opt + 56, 0x2000);
    put_u32(&mut image, opt + 60, 0x200);
    put_u16(&mut image, opt + 68, 2);
    put_u32(&mut image, opt + 108, 16);

    // data directory 2: resource table
    if resource_directory_entry {
        put_u32(&mut image, opt + 128, RSRC_RVA);
        put_u32(&mut image, opt + 132, rsrc.len() as u32);
    }

    // section table
    let section = opt + 240;
    image[section..section + 5].copy_from_slice(b".rsrc");
    put_u32(&mut image, section + 8, rsrc.len() as u32);
    put_u32(&mut image, section + 12, RSRC_RVA);
    put_u32(&mut image, section + 16, 0x200);
    put_u32(&mut image, section + 20, RSRC_FILE_OFFSET as u32);
    put_u32(&mut image, section + 36, 0x4000_0040);

    image[RSRC_FILE_OFFSET..RSRC_FILE_OFFSET + rsrc.len()].copy_from_slice(rsrc);
    image
}

/// A PE32+ image whose file version is `version`.
pub fn pe_with_version(version: [u16; 4]) -> Vec<u8> {
    pe_image(&resource_section(RT_VERSION, version), true)
}

/// A PE32+ image with resources but no `RT_VERSION` entry.
pub fn pe_without_version() -> Vec<u8> {
    pe_image(&resource_section(RT_RCDATA, [0; 4]), true)
}

/// A PE32+ image with a `.rsrc` section the data directories do not point at.
pub fn pe_without_resource_table() -> Vec<u8> {
    pe_image(&resource_section(RT_VERSION, [1, 4, 0, 0]), false)
}

/// Files under `{channel}-build/`, relative.
pub const BUILD_FILES: [&str; 5] = [
    "CollapseLauncher.dll",
    "Microsoft.UI.Xaml.dll",
    "resources.pri",
    "Lang/en_US.json",
    "Lang/id-ID.json",
];

/// Create a publish directory at `root` for `channel` with the launcher at `version`.
///
/// `{channel}-build/` holds three files and a `Lang/` folder with two more;
/// the icon, launcher and updater sit at the root.
pub fn publish_tree(root: &Path, channel: &str, version: [u16; 4]) -> PathBuf {
    let build = root.join(format!("{channel}-build"));
    for file in BUILD_FILES {
        let path = build.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("contents of {file}")).unwrap();
    }

    fs::write(root.join("icon.ico"), b"\0\0\x01\0icon").unwrap();
    fs::write(root.join("CollapseLauncher.exe"), pe_with_version(version)).unwrap();
    fs::write(root.join("Update.exe"), b"MZupdater").unwrap();
    root.to_path_buf()
}

/// Count regular files below `dir`.
pub fn count_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

/// Every regular file below `dir` as relative path -> contents.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (relative, fs::read(e.path()).unwrap())
        })
        .collect()
}
