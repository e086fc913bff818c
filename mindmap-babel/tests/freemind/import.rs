use mindmap_babel::{FormatError, FormatRegistry};

#[test]
fn test_freemind_import_basic() {
    let xml = r#"<map version="freeplane 1.9.13">
<node TEXT="Root">
<node TEXT="Child 1"/>
<node TEXT="Child 2">
<node TEXT="Grandchild"/>
</node>
</node>
</map>"#;

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(xml, "freemind").expect("Failed to parse");

    assert_eq!(map.roots.len(), 1);
    let root = &map.roots[0];
    assert_eq!(root.label, "Root");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[1].children[0].label, "Grandchild");
}

#[test]
fn test_freemind_import_hyperlink_hook() {
    let xml = r#"<map version="freeplane 1.9.13">
<node TEXT="Link">
<hook URI="http://example.com"/>
</node>
</map>"#;

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(xml, "freemind").expect("Failed to parse");

    let root = &map.roots[0];
    assert_eq!(root.label, "Link");
    assert_eq!(root.link.as_deref(), Some("http://example.com"));
}

#[test]
fn test_freemind_import_multiline_text() {
    let xml = r#"<map version="freeplane 1.9.13">
<node TEXT="Root">
<node TEXT="Line 1&#10;Line 2"/>
</node>
</map>"#;

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(xml, "freemind").expect("Failed to parse");

    assert_eq!(map.roots[0].children[0].label, "Line 1\nLine 2");
}

#[test]
fn test_freemind_import_empty_map() {
    let registry = FormatRegistry::with_defaults();
    let map = registry
        .parse(r#"<map version="freeplane 1.9.13" />"#, "freemind")
        .expect("Failed to parse");

    assert!(map.is_empty());
}

#[test]
fn test_freemind_import_rejects_malformed_xml() {
    let registry = FormatRegistry::with_defaults();
    let result = registry.parse("<map><node TEXT=", "freemind");

    assert!(matches!(result, Err(FormatError::ParseError(_))));
}
