use mindmap_babel::{FormatRegistry, MapNode, MindMap};

fn serialize(map: &MindMap) -> String {
    let registry = FormatRegistry::with_defaults();
    registry.serialize(map, "freemind").expect("Failed to serialize")
}

#[test]
fn test_freemind_export_structure() {
    let map = MindMap::with_roots(vec![MapNode::with_children(
        "Root",
        vec![MapNode::new("Child 1"), MapNode::new("Child 2")],
    )]);

    insta::assert_snapshot!(serialize(&map), @r#"
    <map version="freeplane 1.9.13">
      <node TEXT="Root" FOLDED="false">
        <node TEXT="Child 1" FOLDED="false"/>
        <node TEXT="Child 2" FOLDED="false"/>
      </node>
    </map>
    "#);
}

#[test]
fn test_freemind_export_hyperlink_hook() {
    let map = MindMap::with_roots(vec![MapNode::with_link("Link", "http://example.com")]);

    let xml = serialize(&map);
    assert!(xml.contains(r#"<node TEXT="Link" FOLDED="false">"#));
    assert!(xml.contains(r#"<hook NAME="ExternalObject" URI="http://example.com"/>"#));
}

#[test]
fn test_freemind_export_parses_back() {
    let map = MindMap::with_roots(vec![MapNode::with_children(
        "Root & <co>",
        vec![MapNode::with_link("Docs", "http://example.com?a=1&b=2")],
    )]);

    let registry = FormatRegistry::with_defaults();
    let xml = serialize(&map);
    let reparsed = registry.parse(&xml, "freemind").expect("Failed to parse");

    assert_eq!(reparsed, map);
}

#[test]
fn test_freemind_export_empty_map() {
    let xml = serialize(&MindMap::new());
    let registry = FormatRegistry::with_defaults();
    let reparsed = registry.parse(&xml, "freemind").expect("Failed to parse");
    assert!(reparsed.is_empty());
}
