use super::*;

#[test]
fn default_chains_keep_candidate_order() {
    let set = FontSet::default();
    assert_eq!(set.ai_badge.candidates().len(), 1);
    let label = set.chain(FontSlot::FreeLabel).candidates();
    assert_eq!(label.len(), 2);
    assert!(label[0].ends_with("PingFang.ttc"));
    assert!(label[1].ends_with("STHeiti Light.ttc"));
}

#[test]
fn missing_candidates_are_skipped_on_load() {
    let dir = PathBuf::from("target").join("font_chain_load");
    std::fs::create_dir_all(&dir).unwrap();
    let present = dir.join("present.ttf");
    std::fs::write(&present, b"not really a font").unwrap();

    let chain = FontChain::new([dir.join("missing.ttf"), present.clone()]);
    let loaded = chain.load();
    let paths: Vec<&Path> = loaded.paths().collect();
    assert_eq!(paths, vec![present.as_path()]);
    assert_eq!(loaded.faces[0].bytes.as_slice(), b"not really a font");
}

#[test]
fn system_only_has_no_candidates() {
    let set = FontSet::system_only();
    for slot in FontSlot::ALL {
        assert!(set.chain(slot).candidates().is_empty());
        assert!(set.load().chain(slot).faces.is_empty());
    }
}

#[test]
fn font_set_json_uses_plain_path_lists() {
    let set: FontSet =
        serde_json::from_str(r#"{ "ai_badge": ["a.ttf"], "free_label": ["b.ttc", "c.ttc"] }"#)
            .unwrap();
    assert_eq!(set.ai_badge, FontChain::new(["a.ttf"]));
    assert_eq!(set.free_label.candidates().len(), 2);
}

#[test]
fn system_default_is_a_fallback() {
    let f = ResolvedFont::system_default();
    assert!(f.is_fallback());
    assert!(f.bytes.is_none());
    assert_eq!(f.source.to_string(), "<system sans-serif>");
}
