use super::*;

#[test]
fn spans_match_palette_table() {
    let expect = [
        (TileShape::MinorSquare, 2, 2),
        (TileShape::MinorPortrait, 2, 3),
        (TileShape::MinorLandscape, 3, 2),
        (TileShape::SingleColumn, 1, 2),
        (TileShape::MajorPortrait, 3, 4),
        (TileShape::MajorLandscape, 4, 3),
        (TileShape::MajorSquare, 3, 4),
        (TileShape::Apparel, 2, 3),
    ];
    for (shape, c, r) in expect {
        assert_eq!(
            shape.spans(),
            TileSpans {
                col_span: c,
                row_span: r
            },
            "{shape}"
        );
    }
}

#[test]
fn aliases_share_spans_and_ratio() {
    assert_eq!(TileShape::MajorSquare.spans(), TileShape::MajorPortrait.spans());
    assert_eq!(TileShape::Apparel.spans(), TileShape::MinorPortrait.spans());
    assert_eq!(
        TileShape::Apparel.nominal_ratio(),
        TileShape::MinorPortrait.nominal_ratio()
    );
}

#[test]
fn names_parse_back_and_match_serde() {
    for shape in TileShape::ALL {
        assert_eq!(shape.name().parse::<TileShape>().unwrap(), shape);
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, format!("\"{}\"", shape.name()));
    }
    assert!("giant-square".parse::<TileShape>().is_err());
}

#[test]
fn default_is_minor_square() {
    assert_eq!(TileShape::default(), TileShape::MinorSquare);
}
