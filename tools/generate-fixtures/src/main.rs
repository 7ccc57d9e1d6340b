//! Generate canonical fixtures for conformance testing

use ogs_canonical::{digest, to_canonical_string};
use ogs_core::Node;
use std::fs;
use std::path::Path;

fn main() {
    let fixtures_dir = Path::new("fixtures");
    let canonical_dir = fixtures_dir.join("canonical");

    println!("Generating canonical fixtures...");
    println!();

    let mut count = 0;

    for entry in fs::read_dir(fixtures_dir).expect("Failed to read fixtures directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let filename = path.file_stem().unwrap().to_str().unwrap();
            let json = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read {}.json", filename));

            let value: serde_json::Value = serde_json::from_str(&json)
                .unwrap_or_else(|_| panic!("Failed to parse {}.json", filename));
            let node = Node::from(value);

            // Generate and write canonical JSON
            let canonical = to_canonical_string(&node);
            let canonical_path = canonical_dir.join(format!("{}.json", filename));
            fs::write(&canonical_path, &canonical)
                .unwrap_or_else(|_| panic!("Failed to write {}.json", filename));
            println!("  Generated: canonical/{}.json", filename);

            // Generate and write digest
            let node_digest = digest(&node);
            let digest_path = canonical_dir.join(format!("{}.digest", filename));
            fs::write(&digest_path, &node_digest)
                .unwrap_or_else(|_| panic!("Failed to write {}.digest", filename));
            println!("  Generated: canonical/{}.digest", filename);

            count += 1;
        }
    }

    println!();
    println!("Done! Generated {} canonical fixtures.", count);
}
