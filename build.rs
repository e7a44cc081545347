use std::env;
use std::fs;
use std::path::PathBuf;

use cxr_gen::{CallOrder, Generator, MaxDepth, RustClosure};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Splice the generated entries into a table constructor. The fragments
    // rely on `Primitive` and `first_arg` being in scope at the include site.
    let generator = Generator::new(
        MaxDepth::REFERENCE,
        RustClosure {
            order: CallOrder::Conventional,
        },
    );

    let mut table = Vec::new();
    table.extend_from_slice(b"pub(crate) fn accessor_table() -> Vec<Primitive> {\nvec![\n");
    generator
        .write_to(&mut table)
        .expect("failed to render accessor table");
    table.extend_from_slice(b"]\n}\n");

    fs::write(out_dir.join("accessors.rs"), table).expect("failed to write accessors.rs");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=crates/cxr-gen/src");
}
