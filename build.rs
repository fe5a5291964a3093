use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUTPUT: &str = "assets/dist/bundle.css";

/// Every stylesheet under assets/css, sorted so the rerun list is stable
fn css_partials(dir: &Path) -> Vec<PathBuf> {
    let mut partials: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read assets/css")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "css"))
        .collect();
    partials.sort();
    partials
}

fn main() {
    // Directory entry catches added/removed partials, file entries catch edits
    println!("cargo:rerun-if-changed={}", CSS_DIR);
    let partials = css_partials(Path::new(CSS_DIR));
    for partial in &partials {
        println!("cargo:rerun-if-changed={}", partial.display());
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    // main.css pulls in the partials through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {}: {}", CSS_ENTRY, e));

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify tutorials stylesheet");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print tutorials stylesheet");

    // Picked up by asset!("/assets/dist/bundle.css") in the layout
    fs::write(CSS_OUTPUT, css.code).expect("Failed to write bundle.css");
}
