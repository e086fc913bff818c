use mindmap_babel::{FormatError, FormatRegistry};

#[test]
fn test_plantuml_import_basic() {
    let puml = "@startmindmap
* Root
** Child 1
** Child 2
*** Grandchild
@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    assert_eq!(map.roots.len(), 1);
    let root = &map.roots[0];
    assert_eq!(root.label, "Root");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].label, "Child 1");
    assert_eq!(root.children[1].label, "Child 2");
    assert_eq!(root.children[1].children[0].label, "Grandchild");
}

#[test]
fn test_plantuml_import_legacy_underscore_markers() {
    let puml = "@startmindmap
*_ Root
**_ Child 1
**_ Child 2
@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    let root = &map.roots[0];
    assert_eq!(root.label, "Root");
    assert_eq!(root.children.len(), 2);
}

#[test]
fn test_plantuml_import_comments_and_indentation() {
    let puml = "@startmindmap
' This is a comment
  * Root
    ** Child 1
@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    assert_eq!(map.roots[0].label, "Root");
    assert_eq!(map.roots[0].children[0].label, "Child 1");
}

#[test]
fn test_plantuml_import_extra_spaces_around_text() {
    let puml = "@startmindmap\n  *   Root  \n@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    assert_eq!(map.roots[0].label, "Root");
}

#[test]
fn test_plantuml_import_multiline_label() {
    let puml = "@startmindmap
* Root
** :Child line 1
Child line 2;
@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    let child = &map.roots[0].children[0];
    assert_eq!(child.label, "Child line 1\nChild line 2");
}

#[test]
fn test_plantuml_import_hyperlink() {
    let puml = "@startmindmap\n* [[http://example.com Link]]\n@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    let root = &map.roots[0];
    assert_eq!(root.label, "Link");
    assert_eq!(root.link.as_deref(), Some("http://example.com"));
}

#[test]
fn test_plantuml_import_rejects_invalid_content() {
    let registry = FormatRegistry::with_defaults();
    let result = registry.parse("Invalid content", "plantuml");

    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_plantuml_import_empty_map() {
    let registry = FormatRegistry::with_defaults();
    let map = registry
        .parse("@startmindmap\n@endmindmap", "plantuml")
        .expect("Failed to parse");

    assert!(map.is_empty());
}

#[test]
fn test_plantuml_import_kitchensink() {
    let puml = "@startmindmap
' kitchen sink: links, blocks, forests, depth jumps
* Project
** [[http://tracker.example.com Issues]]
** :Release notes
drafted, not final;
**** Deep jump
* Second tree
@endmindmap";

    let registry = FormatRegistry::with_defaults();
    let map = registry.parse(puml, "plantuml").expect("Failed to parse");

    assert_eq!(map.roots.len(), 2);
    let project = &map.roots[0];
    assert_eq!(project.children.len(), 2);
    assert_eq!(project.children[0].link.as_deref(), Some("http://tracker.example.com"));
    assert_eq!(project.children[1].label, "Release notes\ndrafted, not final");
    // The depth-4 line hangs off the deepest surviving ancestor.
    assert_eq!(project.children[1].children[0].label, "Deep jump");
    assert_eq!(map.roots[1].label, "Second tree");
}
