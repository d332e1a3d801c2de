use protobuf_codegen::Customize;
use std::path::PathBuf;

const PROTOS: [&str; 4] = [
    "proto/ga4gh/common.proto",
    "proto/ga4gh/reads.proto",
    "proto/ga4gh/sequence_annotations.proto",
    "proto/ga4gh/read_service.proto",
];

fn main() {
    let generated_dir = PathBuf::from("src/generated");
    std::fs::create_dir_all(&generated_dir).unwrap();

    protobuf_codegen::Codegen::new()
        .pure()
        .inputs(PROTOS)
        .include("proto")
        .customize(Customize::default().gen_mod_rs(true))
        .out_dir(&generated_dir)
        .run()
        .expect("Protobuf codegen failed");

    // Tell cargo to rerun if proto files change
    for proto in PROTOS {
        println!("cargo:rerun-if-changed={}", proto);
    }
}
