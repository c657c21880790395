use super::*;

#[test]
fn features_have_distinct_titles() {
    let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), FEATURES.len());
    assert_eq!(FEATURES.len(), 3);
}

#[test]
fn every_feature_has_copy() {
    assert!(FEATURES.iter().all(|f| !f.title.is_empty() && !f.blurb.is_empty()));
}

#[test]
fn footer_links_cover_legal_pages() {
    assert!(FOOTER_LINKS.contains(&"Privacy"));
    assert!(FOOTER_LINKS.contains(&"Terms"));
}
