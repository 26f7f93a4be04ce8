//! Build script: собирает манифест изображений каталога.
//!
//! Обходит `public/catalogue/<Категория>/<файл>` и пишет JSON-массив путей
//! (относительно `public/`) в `$OUT_DIR/asset_manifest.json`. Порядок
//! лексический, чтобы нумерация товаров не зависела от файловой системы.

use std::fs;
use std::path::{Path, PathBuf};

const CATALOGUE_DIR: &str = "public/catalogue";

fn main() {
    println!("cargo:rerun-if-changed={}", CATALOGUE_DIR);

    let root = Path::new(CATALOGUE_DIR);
    let mut paths: Vec<String> = Vec::new();

    if root.exists() {
        collect(root, &mut paths);
    } else {
        println!("cargo:warning=Catalogue directory not found, manifest will be empty");
    }

    paths.sort();

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    let out_file = out_dir.join("asset_manifest.json");
    let json = serde_json::to_string_pretty(&paths).expect("Failed to serialize manifest");
    fs::write(&out_file, json).expect("Failed to write asset manifest");
}

fn collect(dir: &Path, out: &mut Vec<String>) {
    println!("cargo:rerun-if-changed={}", dir.display());

    for entry in fs::read_dir(dir).expect("Failed to read catalogue directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let rel = path
            .strip_prefix("public")
            .expect("Catalogue asset outside public/")
            .to_string_lossy()
            .replace('\\', "/");
        out.push(rel);
    }
}
