//! Integration tests for the text-sequencer crate.
//!
//! These tests exercise the full configure/encode/decode surface against
//! real symbol resource files and a lexicon-stub G2P backend.

use std::path::PathBuf;

use frontend_core::{
    FrontendConfig, FrontendError, FrontendResult, G2pBackend, Separators, Sequence, SymbolFiles,
    TextSequencer,
};
use text_sequencer::TextFrontend;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn symbol_files() -> SymbolFiles {
    SymbolFiles {
        graphemes: fixture_path("graphemes.txt"),
        phonemes: fixture_path("phonemes.txt"),
    }
}

fn grapheme_config() -> FrontendConfig {
    let mut config = FrontendConfig::new(symbol_files());
    config.use_phonemes = false;
    config
}

fn phoneme_config() -> FrontendConfig {
    FrontendConfig::new(symbol_files())
}

/// Stub backend mapping a tiny lexicon to IPA, punctuation stripped the way
/// a real G2P engine strips it. Unknown words are dropped from the output.
struct LexiconBackend;

const LEXICON: &[(&str, &[&str])] = &[
    ("go", &["ɡ", "oʊ"]),
    ("now", &["n", "aʊ"]),
    ("hello", &["h", "ə", "l", "oʊ"]),
    ("world", &["w", "ɜː", "l", "d"]),
];

impl G2pBackend for LexiconBackend {
    fn phonemize(
        &self,
        text: &str,
        _lang: &str,
        separators: &Separators,
        _with_stress: bool,
    ) -> FrontendResult<String> {
        let phone_sep = separators.phone.to_string();
        let words: Vec<String> = text
            .split_whitespace()
            .filter_map(|word| {
                let bare: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
                LEXICON
                    .iter()
                    .find(|(entry, _)| *entry == bare)
                    .map(|(_, phones)| phones.join(&phone_sep))
            })
            .collect();
        Ok(words.join(&separators.word.to_string()))
    }
}

#[test]
fn test_grapheme_vocab_size() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    // 3 fixed + 11 punctuation + 10 digits + 27 graphemes
    assert_eq!(frontend.vocab_size(), 3 + 11 + 10 + 27);
}

#[test]
fn test_phoneme_vocab_size() {
    let frontend =
        TextFrontend::new(&phoneme_config(), Some(Box::new(LexiconBackend))).unwrap();
    let contents = std::fs::read_to_string(fixture_path("phonemes.txt")).unwrap();
    let num_phonemes = contents.trim_end().split('|').count();
    assert_eq!(frontend.vocab_size(), 3 + 11 + 10 + num_phonemes);
}

#[test]
fn test_grapheme_round_trip() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    let sequence = frontend.encode("Hello,   World!", None, false).unwrap();
    assert_eq!(frontend.decode(&sequence), "hello, world!");
}

#[test]
fn test_sequence_ends_with_eos() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    let sequence = frontend.encode("hi", None, false).unwrap();
    assert_eq!(sequence.ids.last().copied(), Some(frontend.eos_id()));
}

#[test]
fn test_decode_filters_eos_and_pad() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    assert_eq!(frontend.decode(&Sequence::new(vec![frontend.eos_id()])), "");
    assert_eq!(
        frontend.decode(&Sequence::new(vec![frontend.pad_id(), frontend.eos_id()])),
        ""
    );
}

#[test]
fn test_decode_drops_out_of_range_ids() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    let sequence = frontend.encode("ok", None, false).unwrap();
    let mut ids = sequence.ids.clone();
    ids.insert(0, 9_999);
    assert_eq!(frontend.decode(&Sequence::new(ids)), "ok");
}

#[test]
fn test_unknown_tokens_silently_dropped() {
    let frontend = TextFrontend::new(&grapheme_config(), None).unwrap();
    // 'é' survives basic_cleaners but is absent from the grapheme set.
    let sequence = frontend.encode("héllo", None, false).unwrap();
    assert_eq!(sequence.len(), 4 + 1);
    assert_eq!(frontend.decode(&sequence), "hllo");
}

#[test]
fn test_phoneme_punctuation_reattachment() {
    let frontend =
        TextFrontend::new(&phoneme_config(), Some(Box::new(LexiconBackend))).unwrap();
    // Two backend words match the two mask entries, so the trailing period
    // is reattached rather than lost.
    let sequence = frontend.encode("Go now.", Some("en-us"), false).unwrap();
    assert_eq!(frontend.decode(&sequence), "ɡ_oʊ_ _n_aʊ_.");
    assert_eq!(sequence.ids.last().copied(), Some(frontend.eos_id()));
}

#[test]
fn test_phoneme_mask_mismatch_fallback() {
    let frontend =
        TextFrontend::new(&phoneme_config(), Some(Box::new(LexiconBackend))).unwrap();
    // The standalone '!' produces a mask entry but no backend word, so the
    // mask is discarded and the punctuation is lost.
    let sequence = frontend.encode("go !", Some("en-us"), false).unwrap();
    assert_eq!(frontend.decode(&sequence), "ɡ_oʊ");
}

#[test]
fn test_just_map_skips_phonemization() {
    let frontend =
        TextFrontend::new(&phoneme_config(), Some(Box::new(LexiconBackend))).unwrap();
    let phonemized = frontend.encode("go now.", Some("en-us"), false).unwrap();
    let mapped = frontend.encode("ɡ_oʊ_ _n_aʊ_.", None, true).unwrap();
    assert_eq!(phonemized, mapped);
}

#[test]
fn test_phoneme_mode_requires_backend() {
    let err = TextFrontend::new(&phoneme_config(), None).unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

#[test]
fn test_phoneme_mode_requires_language() {
    // A missing language code is an encode-time backend failure, not a
    // configuration error.
    let frontend =
        TextFrontend::new(&phoneme_config(), Some(Box::new(LexiconBackend))).unwrap();
    let err = frontend.encode("go", None, false).unwrap_err();
    assert!(matches!(err, FrontendError::Backend(_)));
}

#[test]
fn test_empty_symbol_resource_is_fatal() {
    let mut config = grapheme_config();
    config.symbol_files.graphemes = fixture_path("empty_graphemes.txt");
    let err = TextFrontend::new(&config, None).unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

#[test]
fn test_missing_symbol_resource_is_fatal() {
    let mut config = grapheme_config();
    config.symbol_files.graphemes = fixture_path("no_such_file.txt");
    let err = TextFrontend::new(&config, None).unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

#[test]
fn test_unknown_cleaner_is_fatal() {
    let mut config = grapheme_config();
    config.cleaners = vec!["nonexistent_cleaners".to_string()];
    let err = TextFrontend::new(&config, None).unwrap_err();
    assert!(matches!(err, FrontendError::UnknownCleaner(_)));
}

#[test]
fn test_shared_read_only_use() {
    let frontend = std::sync::Arc::new(TextFrontend::new(&grapheme_config(), None).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let frontend = frontend.clone();
            std::thread::spawn(move || {
                let sequence = frontend.encode("hello", None, false).unwrap();
                frontend.decode(&sequence)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "hello");
    }
}
