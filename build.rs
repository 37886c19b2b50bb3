use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Copy the sample hidden_window.toml next to the built executable
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    // Navigate up: out -> hidden_window-xxx -> build -> <profile>
    if let Some(profile_dir) = out_path.ancestors().nth(3) {
        let src = Path::new("hidden_window.toml");
        let dst = profile_dir.join("hidden_window.toml");

        if src.exists() {
            println!("cargo:rerun-if-changed=hidden_window.toml");
            if let Err(e) = fs::copy(src, &dst) {
                println!("cargo:warning=Failed to copy hidden_window.toml: {}", e);
            }
        }
    }
}
