use super::*;

#[test]
fn exact_nominal_ratios_map_to_first_palette_entry() {
    assert_eq!(classify_aspect_ratio(1.0), TileShape::MinorSquare);
    assert_eq!(classify_aspect_ratio(0.5), TileShape::MinorPortrait);
    assert_eq!(classify_aspect_ratio(2.0), TileShape::MinorLandscape);
    assert_eq!(classify_aspect_ratio(0.25), TileShape::SingleColumn);
    assert_eq!(classify_aspect_ratio(0.75), TileShape::MajorPortrait);
    assert_eq!(classify_aspect_ratio(1.5), TileShape::MajorLandscape);
}

#[test]
fn aliases_are_never_selected_by_ratio() {
    // Aliases sit later in the palette than the shape they share a ratio with.
    for i in 1..400 {
        let r = f64::from(i) / 100.0;
        let shape = classify_aspect_ratio(r);
        assert_ne!(shape, TileShape::MajorSquare, "ratio {r}");
        assert_ne!(shape, TileShape::Apparel, "ratio {r}");
    }
}

#[test]
fn ties_resolve_to_earlier_palette_entry() {
    // 0.625 is equidistant from 0.5 and 0.75.
    assert_eq!(classify_aspect_ratio(0.625), TileShape::MinorPortrait);
    // 1.25 is equidistant from 1.0 and 1.5.
    assert_eq!(classify_aspect_ratio(1.25), TileShape::MinorSquare);
    // 1.75 is equidistant from 1.5 and 2.0; minor-landscape comes first.
    assert_eq!(classify_aspect_ratio(1.75), TileShape::MinorLandscape);
    // 0.375 is equidistant from 0.25 and 0.5; minor-portrait comes first.
    assert_eq!(classify_aspect_ratio(0.375), TileShape::MinorPortrait);

    for _ in 0..16 {
        assert_eq!(classify_aspect_ratio(0.625), TileShape::MinorPortrait);
    }
}

#[test]
fn extreme_ratios_clamp_to_palette_ends() {
    assert_eq!(classify_aspect_ratio(0.01), TileShape::SingleColumn);
    assert_eq!(classify_aspect_ratio(16.0 / 9.0), TileShape::MinorLandscape);
    assert_eq!(classify_aspect_ratio(10.0), TileShape::MinorLandscape);
}

#[test]
fn degenerate_input_falls_back_to_square() {
    assert_eq!(aspect_ratio(0.0, 0.0), FALLBACK_ASPECT_RATIO);
    assert_eq!(aspect_ratio(10.0, 0.0), FALLBACK_ASPECT_RATIO);
    assert_eq!(aspect_ratio(-3.0, 2.0), FALLBACK_ASPECT_RATIO);
    assert_eq!(aspect_ratio(f64::NAN, 2.0), FALLBACK_ASPECT_RATIO);
    assert_eq!(classify_aspect_ratio(f64::NAN), TileShape::MinorSquare);
    assert_eq!(classify_aspect_ratio(f64::INFINITY), TileShape::MinorSquare);
    assert_eq!(classify_aspect_ratio(0.0), TileShape::MinorSquare);
    assert_eq!(classify_dimensions(0, 0), TileShape::MinorSquare);
}

#[test]
fn dimensions_classify_through_ratio() {
    assert_eq!(classify_dimensions(1920, 1080), TileShape::MinorLandscape);
    assert_eq!(classify_dimensions(1200, 1600), TileShape::MajorPortrait);
    assert_eq!(classify_dimensions(400, 400), TileShape::MinorSquare);
}
