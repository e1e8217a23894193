use std::fs;
use std::path::Path;

use gendiff_core::{generate_diff, DiffNode, Format, Node};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RenderOutputs {
    stylish: String,
    plain: String,
    json: String,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    lhs: String,
    rhs: String,
    #[serde(default)]
    yaml: bool,
    render: RenderOutputs,
}

fn load_fixture(path: &Path) -> Fixture {
    let data = fs::read_to_string(path).expect("fixture should be readable");
    serde_json::from_str(&data).expect("fixture should deserialize")
}

fn parse(text: &str, yaml: bool) -> Node {
    if yaml {
        Node::from_yaml_str(text).expect("yaml parses")
    } else {
        Node::from_json_str(text).expect("json parses")
    }
}

#[test]
fn render_outputs_match_fixtures() {
    let fixtures_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/render");
    let mut entries: Vec<_> = fs::read_dir(&fixtures_root)
        .expect("fixtures directory must exist")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    assert!(!entries.is_empty(), "expected at least one render fixture under tests/fixtures/render");

    for path in entries {
        let fixture = load_fixture(&path);
        let lhs = parse(&fixture.lhs, fixture.yaml);
        let rhs = parse(&fixture.rhs, fixture.yaml);

        for (format, expected) in [
            (Format::Stylish, &fixture.render.stylish),
            (Format::Plain, &fixture.render.plain),
            (Format::Json, &fixture.render.json),
        ] {
            let rendered = generate_diff(&lhs, &rhs, format.name()).expect("diff renders");
            assert_eq!(&rendered, expected, "fixture {path:?} {format} output");
        }
    }
}

#[test]
fn json_output_decodes_back_into_the_tree() {
    let fixtures_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/render");
    let fixture = load_fixture(&fixtures_root.join("nested.json"));
    let lhs = parse(&fixture.lhs, false);
    let rhs = parse(&fixture.rhs, false);

    let tree = lhs.diff(&rhs).expect("both roots are mappings");
    let decoded: Vec<DiffNode> = serde_json::from_str(&fixture.render.json).expect("json decodes");
    assert_eq!(decoded, tree);
}
