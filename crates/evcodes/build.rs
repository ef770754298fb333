use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// Same order as linux/input.h includes them: codes first, then bus types
const HEADERS: &[&str] = &["headers/input-event-codes.h", "headers/input.h"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("event_codes.rs");
    let mut f = BufWriter::new(File::create(&dest_path).unwrap());

    evcodegen_core::generate(HEADERS, &mut f).unwrap();

    for header in HEADERS {
        println!("cargo:rerun-if-changed={}", header);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
