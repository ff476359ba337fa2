use std::env;
use std::fs;
use std::path::Path;

// Keep config.toml next to the built binary so the app finds it when
// launched from the target directory.
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout");

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
}
