use super::*;
use crate::{ItemId, PackOpts, pack};

fn items() -> Vec<FeedItem> {
    vec![
        FeedItem::new("1").with_album("tokyo").with_tag("night"),
        FeedItem::new("2").with_album("oslo"),
        FeedItem::new("3")
            .with_album("tokyo")
            .with_tag("day")
            .with_tag("street"),
        FeedItem::new("4").with_tag("night"),
    ]
}

fn ids(v: &[&FeedItem]) -> Vec<String> {
    v.iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn default_and_sentinels_pass_everything() {
    let all = items();
    assert_eq!(FeedFilter::all().apply(&all).len(), 4);
    let f = FeedFilter::all().with_album(ALL_ALBUMS).with_tag("");
    assert!(f.is_pass_through());
    assert_eq!(f.apply(&all).len(), 4);
}

#[test]
fn album_and_tag_combine() {
    let all = items();
    let f = FeedFilter::all().with_album("tokyo");
    assert_eq!(ids(&f.apply(&all)), ["1", "3"]);

    let f = FeedFilter::all().with_tag("night");
    assert_eq!(ids(&f.apply(&all)), ["1", "4"]);

    let f = FeedFilter::all().with_album("tokyo").with_tag("street");
    assert_eq!(ids(&f.apply(&all)), ["3"]);

    let f = FeedFilter::all().with_album("lima");
    assert!(f.apply(&all).is_empty());
}

#[test]
fn filtered_items_pack_in_original_order() {
    let all = items();
    let kept = FeedFilter::all().with_tag("night").apply(&all);
    let out = pack(&kept, 900.0, &PackOpts::default());
    let placed: Vec<&ItemId> = out.placements.iter().map(|p| &p.id).collect();
    assert_eq!(placed, [&ItemId::new("1"), &ItemId::new("4")]);
}
