use super::*;
use crate::pack::packer::RowLimit;

#[test]
fn shape_resolution_prefers_explicit_shape() {
    let item = FeedItem::new("a")
        .with_aspect_ratio(2.0)
        .with_shape(TileShape::Apparel);
    assert_eq!(item.resolved_shape(), TileShape::Apparel);

    let item = FeedItem::new("b").with_aspect_ratio(2.0);
    assert_eq!(item.resolved_shape(), TileShape::MinorLandscape);
    assert_eq!(item.tile_shape(), TileShape::MinorLandscape);

    let item = FeedItem::new("c");
    assert_eq!(item.resolved_shape(), TileShape::MinorSquare);
}

#[test]
fn feed_json_parses_with_optional_fields() {
    let json = r#"{
        "layout": { "gap_px": 12, "row_limit": "auto" },
        "items": [
            { "id": "p1", "title": "Dunes", "album": "desert", "tags": ["sand"], "aspect_ratio": 0.5 },
            { "id": "p2", "shape": "major-landscape", "price": 40 }
        ]
    }"#;
    let feed = Feed::from_reader(json.as_bytes()).unwrap();
    feed.validate().unwrap();
    assert_eq!(feed.items.len(), 2);
    assert_eq!(feed.items[0].album.as_deref(), Some("desert"));
    assert_eq!(feed.items[0].resolved_shape(), TileShape::MinorPortrait);
    assert_eq!(feed.items[1].resolved_shape(), TileShape::MajorLandscape);

    let opts = feed.pack_opts();
    assert_eq!(opts.gap_px, 12.0);
    assert_eq!(opts.columns, 9);
    assert_eq!(opts.row_limit, RowLimit::Auto);
}

#[test]
fn missing_layout_uses_defaults() {
    let feed = Feed::from_reader(r#"{ "items": [] }"#.as_bytes()).unwrap();
    assert_eq!(feed.pack_opts(), PackOpts::default());
}

#[test]
fn validate_rejects_duplicate_and_empty_ids() {
    let feed = Feed {
        layout: None,
        items: vec![FeedItem::new("a"), FeedItem::new("a")],
    };
    let err = feed.validate().unwrap_err();
    assert!(err.to_string().contains("duplicates id 'a'"));

    let feed = Feed {
        layout: None,
        items: vec![FeedItem::new("")],
    };
    assert!(feed.validate().is_err());

    let feed = Feed {
        layout: Some(PackOpts::default().with_columns(0)),
        items: vec![],
    };
    assert!(feed.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Feed::from_reader("{ items: ".as_bytes()).unwrap_err();
    assert!(matches!(err, GridError::Serde(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Feed::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, GridError::Other(_)));
    assert!(err.to_string().contains("open feed JSON"));
}
