use mindmap_babel::{FormatRegistry, MapNode, MindMap};

fn serialize(map: &MindMap) -> String {
    let registry = FormatRegistry::with_defaults();
    registry.serialize(map, "plantuml").expect("Failed to serialize")
}

#[test]
fn test_plantuml_export_three_levels() {
    let map = MindMap::with_roots(vec![MapNode::with_children(
        "Root",
        vec![
            MapNode::new("Child 1"),
            MapNode::with_children("Child 2", vec![MapNode::new("Grandchild")]),
        ],
    )]);

    insta::assert_snapshot!(serialize(&map), @r"
    @startmindmap
    * Root
    ** Child 1
    ** Child 2
    *** Grandchild
    @endmindmap
    ");
}

#[test]
fn test_plantuml_export_empty_map_is_sentinels_only() {
    assert_eq!(serialize(&MindMap::new()), "@startmindmap\n@endmindmap");
}

#[test]
fn test_plantuml_export_link_forms() {
    let map = MindMap::with_roots(vec![
        MapNode::with_link("Link", "http://example.com"),
        MapNode::with_link("http://x.com", "http://x.com"),
    ]);

    insta::assert_snapshot!(serialize(&map), @r"
    @startmindmap
    * [[http://example.com Link]]
    * [[http://x.com]]
    @endmindmap
    ");
}

#[test]
fn test_plantuml_export_block_text() {
    let map = MindMap::with_roots(vec![MapNode::with_children(
        "Root",
        vec![MapNode::new("Line 1\nLine 2")],
    )]);

    let out = serialize(&map);
    assert!(out.contains("** :Line 1"));
    assert!(out.contains("Line 2;"));
}
