//! End-to-end tests for the source -> tree -> extraction pipeline.

use layertext_extract::{ExtractError, Extractor, extract_text};
use layertext_source::{JsonSource, LayerRecord, SourceError, TreeSource, assemble};
use layertext_tree::{Bounds, Node, NodeKind, TreeArena};
use rstest::rstest;

fn texts_of(root: &Node<'_>) -> Vec<String> {
    extract_text(root).map(str::to_owned).collect()
}

mod exported_json {
    use super::*;
    use pretty_assertions::assert_eq;

    const POSTER: &str = r#"{
        "type": "document",
        "children": [
            { "type": "group", "name": "header", "children": [
                { "type": "text", "name": "title", "text": "Summer Sale", "left": 20, "top": 16, "right": 460, "bottom": 72 },
                { "type": "text", "name": "subtitle", "text": { "value": "This weekend only" } }
            ]},
            { "type": "group", "name": "body", "children": [
                { "type": "image", "name": "hero" },
                { "type": "group", "name": "badge", "children": [
                    { "type": "text", "name": "price", "text": "$9.99" }
                ]},
                { "type": "shape", "name": "ribbon" }
            ]},
            { "type": "text", "name": "footer", "text": "While stocks last" },
            { "type": "image", "name": "Background" }
        ]
    }"#;

    #[test]
    fn extracts_in_document_order() {
        let arena = TreeArena::new();
        let root = JsonSource::new().load(&arena, POSTER).unwrap();

        assert_eq!(
            texts_of(&root),
            vec![
                "Summer Sale",
                "This weekend only",
                "$9.99",
                "While stocks last"
            ]
        );
    }

    #[test]
    fn group_caption_follows_its_contents() {
        let arena = TreeArena::new();
        let root = JsonSource::new()
            .load(
                &arena,
                r#"{ "children": [
                    { "type": "group", "name": "g", "text": "outer", "children": [
                        { "type": "text", "text": "inner" }
                    ]}
                ]}"#,
            )
            .unwrap();

        assert_eq!(texts_of(&root), vec!["inner", "outer"]);
    }

    #[test]
    fn root_text_is_not_part_of_the_document() {
        let arena = TreeArena::new();
        let root = JsonSource::new()
            .load(
                &arena,
                r#"{ "text": "notes about the file", "children": [ { "type": "text", "text": "visible" } ] }"#,
            )
            .unwrap();

        assert_eq!(texts_of(&root), vec!["visible"]);
    }

    #[test]
    fn extraction_is_restartable() {
        let arena = TreeArena::new();
        let root = JsonSource::new().load(&arena, POSTER).unwrap();

        assert_eq!(texts_of(&root), texts_of(&root));
    }

    #[test]
    fn early_stop_is_safe() {
        let arena = TreeArena::new();
        let root = JsonSource::new().load(&arena, POSTER).unwrap();

        let first = extract_text(&root).next();
        assert_eq!(first, Some("Summer Sale"));
    }

    #[test]
    fn serialized_tree_loads_back() {
        let arena = TreeArena::new();
        let root = JsonSource::new().load(&arena, POSTER).unwrap();

        let exported = serde_json::to_string(&root).unwrap();
        let arena2 = TreeArena::new();
        let reloaded = JsonSource::new().load(&arena2, &exported).unwrap();

        assert_eq!(texts_of(&root), texts_of(&reloaded));
        assert_eq!(reloaded.children[0].kind, NodeKind::Group);
        assert_eq!(
            reloaded.children[0].children[0].bounds,
            Bounds::new(20, 16, 460, 72)
        );
    }
}

mod flat_layer_lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembles_and_extracts() {
        let arena = TreeArena::new();
        let root = assemble(
            &arena,
            &[
                LayerRecord::open_folder("header"),
                LayerRecord::text("title", "Summer Sale"),
                LayerRecord::text("subtitle", "This weekend only"),
                LayerRecord::divider(),
                LayerRecord::image("hero"),
                LayerRecord::text("footer", "While stocks last"),
            ],
        )
        .unwrap();

        assert_eq!(
            texts_of(&root),
            vec!["Summer Sale", "This weekend only", "While stocks last"]
        );
    }

    #[test]
    fn unbalanced_lists_are_rejected_before_extraction() {
        let arena = TreeArena::new();
        let err = assemble(&arena, &[LayerRecord::divider()]).unwrap_err();
        assert!(matches!(err, SourceError::UnbalancedSection { .. }));
    }

    #[test]
    fn assembled_trees_pass_the_depth_guard() {
        let arena = TreeArena::new();
        let root = assemble(
            &arena,
            &[
                LayerRecord::open_folder("outer"),
                LayerRecord::open_folder("inner"),
                LayerRecord::text("t", "deep"),
                LayerRecord::divider(),
                LayerRecord::divider(),
            ],
        )
        .unwrap();

        let fragments = Extractor::new().max_depth(8).extract(&root).unwrap();
        assert_eq!(fragments.collect::<Vec<_>>(), vec!["deep"]);

        let err = Extractor::new().max_depth(1).extract(&root).unwrap_err();
        assert_eq!(err, ExtractError::DepthExceeded { limit: 1 });
    }
}

mod traversal_properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::flat(
        r#"{ "children": [ { "text": "A" }, { "text": "B" } ] }"#,
        &["A", "B"]
    )]
    #[case::nested_container_after_contents(
        r#"{ "children": [ { "text": "outer", "children": [ { "text": "inner" } ] } ] }"#,
        &["inner", "outer"]
    )]
    #[case::mixed_leaves(
        r#"{ "children": [ {}, { "text": "only" }, { "children": [] } ] }"#,
        &["only"]
    )]
    #[case::empty_document(r#"{ "children": [] }"#, &[])]
    #[case::no_children_at_all(r#"{}"#, &[])]
    fn extraction_scenarios(#[case] input: &str, #[case] expected: &[&str]) {
        let arena = TreeArena::new();
        let root = JsonSource::new().load(&arena, input).unwrap();

        let texts: Vec<&str> = extract_text(&root).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn output_length_matches_text_carrying_layers() {
        let arena = TreeArena::new();
        let root = JsonSource::new()
            .load(
                &arena,
                r#"{ "children": [
                    { "text": "1" },
                    { "children": [ { "text": "2" }, {} ], "text": "3" },
                    {}
                ]}"#,
            )
            .unwrap();

        assert_eq!(extract_text(&root).count(), 3);
    }

    #[test]
    fn sibling_subtrees_do_not_interleave() {
        let arena = TreeArena::new();
        let root = JsonSource::new()
            .load(
                &arena,
                r#"{ "children": [
                    { "name": "a", "children": [ { "text": "a1" }, { "text": "a2" } ] },
                    { "name": "b", "children": [ { "text": "b1" } ] }
                ]}"#,
            )
            .unwrap();

        let texts: Vec<&str> = extract_text(&root).collect();
        let a2 = texts.iter().position(|t| *t == "a2").unwrap();
        let b1 = texts.iter().position(|t| *t == "b1").unwrap();
        assert!(a2 < b1);
    }
}
