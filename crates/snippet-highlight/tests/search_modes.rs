use snippet_highlight::{
    Highlighter, Query, ResolveOptions, SearchMode, Segment, highlight_match, matched_texts,
    segments_to_string,
};

fn highlight(text: &str, mode: SearchMode, argument: &str) -> Vec<Segment> {
    Highlighter::new(
        Query::new(Some(mode), argument),
        None,
        &ResolveOptions::default(),
    )
    .highlight(text)
}

#[test]
fn test_suffix_marks_word_tail() {
    let segments = highlight("testing", SearchMode::Suffix, "ing");
    assert_eq!(
        segments,
        vec![Segment::plain("test"), Segment::matched("ing")]
    );

    // `ing` inside a word is not a suffix.
    let segments = highlight("ingot singing", SearchMode::Suffix, "ing");
    assert_eq!(
        segments,
        vec![Segment::plain("ingot sing"), Segment::matched("ing")]
    );
}

#[test]
fn test_prefix_marks_word_head() {
    let segments = highlight("rebuild", SearchMode::Prefix, "re");
    assert_eq!(
        segments,
        vec![Segment::matched("re"), Segment::plain("build")]
    );

    let segments = highlight("there rework", SearchMode::Prefix, "re");
    assert_eq!(matched_texts(&segments), vec!["re"]);
    assert_eq!(segments[0], Segment::plain("there "));
}

#[test]
fn test_length_modes() {
    let segments = highlight("cat dog mouse", SearchMode::ExactLength, "3");
    assert_eq!(
        segments,
        vec![
            Segment::matched("cat"),
            Segment::plain(" "),
            Segment::matched("dog"),
            Segment::plain(" mouse"),
        ]
    );

    let text = "a whale of a tale";
    assert_eq!(
        matched_texts(&highlight(text, SearchMode::MinLength, "4")),
        vec!["whale", "tale"]
    );
    assert_eq!(
        matched_texts(&highlight(text, SearchMode::MaxLength, "2")),
        vec!["a", "of", "a"]
    );
}

#[test]
fn test_repeat_count() {
    let segments = highlight("book cool tree", SearchMode::RepeatCount, "2");
    assert_eq!(matched_texts(&segments), vec!["book", "cool", "tree"]);

    let segments = highlight("the cat sat", SearchMode::RepeatCount, "2");
    assert_eq!(segments, vec![Segment::plain("the cat sat")]);

    let segments = highlight("aaa bookkeeper bbb ab", SearchMode::RepeatCount, "3");
    assert_eq!(matched_texts(&segments), vec!["aaa", "bbb"]);
}

#[test]
fn test_raw_word_regex_stays_within_words() {
    let segments = highlight(
        "the building was cooking",
        SearchMode::RawWordRegex,
        "^[bcd].*ing$",
    );
    assert_eq!(
        segments,
        vec![
            Segment::plain("the "),
            Segment::matched("building"),
            Segment::plain(" was "),
            Segment::matched("cooking"),
        ]
    );
}

#[test]
fn test_whole_word_modes() {
    let text = "Sea, seas, the SEA.";
    for mode in [SearchMode::ExactWord, SearchMode::ContainsWord] {
        assert_eq!(matched_texts(&highlight(text, mode, "sea")), vec!["Sea", "SEA"]);
    }
}

#[test]
fn test_list_modes() {
    let segments = highlight("walked talking sing", SearchMode::SuffixList, "ed, ing");
    assert_eq!(matched_texts(&segments), vec!["ed", "ing", "ing"]);

    let segments = highlight(
        "The Sea and the whale and a seahorse",
        SearchMode::ContainsAnyOf,
        "whale, sea",
    );
    assert_eq!(matched_texts(&segments), vec!["Sea", "whale"]);
}

#[test]
fn test_exact_phrase_is_literal() {
    let segments = highlight(
        "This is (the) end. The end",
        SearchMode::ExactPhrase,
        "(the) end.",
    );
    assert_eq!(matched_texts(&segments), vec!["(the) end."]);
}

#[test]
fn test_structured_sentence_is_regex() {
    let segments = highlight(
        "call me Ishmael, call him Ahab",
        SearchMode::StructuredSentence,
        r"call \w+",
    );
    assert_eq!(matched_texts(&segments), vec!["call me", "call him"]);
}

#[test]
fn test_malformed_pattern_passes_text_through() {
    let text = "It was the best of times";
    let segments = highlight(text, SearchMode::StructuredSentence, "[unbalanced");
    assert_eq!(segments, vec![Segment::plain(text)]);

    let segments = highlight(text, SearchMode::MinLength, "many");
    assert_eq!(segments, vec![Segment::plain(text)]);

    for argument in ["+3", "3.0", " 3 4"] {
        let segments = highlight(text, SearchMode::ExactLength, argument);
        assert_eq!(segments, vec![Segment::plain(text)], "argument {argument:?}");
    }
}

#[test]
fn test_empty_argument_never_highlights() {
    let text = "It was the best of times";
    for mode in SearchMode::ALL {
        let raw = format!("{}:   ", mode.glyph());
        let segments = highlight_match(text, &raw, "", &ResolveOptions::default());
        assert_eq!(segments, vec![Segment::plain(text)], "mode {mode}");
    }
}

#[test]
fn test_sentence_modes_use_server_pattern() {
    let text = "It was the best of times, it was the worst of times";
    let segments = highlight_match(
        text,
        "\u{1F4DA}:It was",
        "SENTENCE_REGEX:^It was",
        &ResolveOptions::default(),
    );
    assert_eq!(matched_texts(&segments), vec!["It was", "it was"]);

    let segments = highlight_match(
        text,
        "\u{1F4CC}:times",
        "SENTENCE_REGEX:times$",
        &ResolveOptions::default().strip_server_anchors(false),
    );
    assert_eq!(matched_texts(&segments), vec!["times"]);
    assert_eq!(segments.last(), Some(&Segment::matched("times")));
}

#[test]
fn test_unknown_mode_fallbacks() {
    let options = ResolveOptions::default();

    // Server pattern is used verbatim, anchors included.
    let segments = highlight_match("whale ahoy whale", "whale", "^whale", &options);
    assert_eq!(
        segments,
        vec![Segment::matched("whale"), Segment::plain(" ahoy whale")]
    );

    // Without one, the argument is a literal term.
    let segments = highlight_match("1+1 is 2, 1+1!", "1+1", "", &options);
    assert_eq!(matched_texts(&segments), vec!["1+1", "1+1"]);

    // With neither, the text passes through.
    assert_eq!(
        highlight_match("abc", "", "", &options),
        vec![Segment::plain("abc")]
    );
}

#[test]
fn test_variation_selector_is_optional() {
    let with = highlight_match("rebuild", "\u{270F}\u{FE0F}:re", "", &ResolveOptions::default());
    let without = highlight_match("rebuild", "\u{270F}:re", "", &ResolveOptions::default());
    assert_eq!(with, without);
    assert_eq!(matched_texts(&with), vec!["re"]);
}

#[test]
fn test_case_sensitive_option() {
    let h = Highlighter::new(
        Query::new(Some(SearchMode::Suffix), "ing"),
        None,
        &ResolveOptions::default().case_sensitive(true),
    );
    assert_eq!(matched_texts(&h.highlight("TESTING testing")), vec!["ing"]);

    let h = Highlighter::new(
        Query::new(Some(SearchMode::Suffix), "ing"),
        None,
        &ResolveOptions::default(),
    );
    assert_eq!(
        matched_texts(&h.highlight("TESTING testing")),
        vec!["ING", "ing"]
    );
}

#[test]
fn test_segments_reconstruct_input() {
    let texts = [
        "",
        "testing",
        "the building was cooking",
        "café éclair, naïve coöperation",
        "  leading and trailing  ",
        "Loomings. Call me Ishmael. Some years ago - never mind how long precisely",
    ];
    let queries = [
        "\u{1F4C4}:ing",
        "\u{270F}:co",
        "\u{1F4C2}:5",
        "\u{1F4D5}:3",
        "\u{1F4CF}:4",
        "\u{1F4CE}:2",
        "\u{1F4D6}:call",
        "\u{1F527}:.*ing",
        "\u{1F4DD}:me Ishmael.",
        "\u{1F58B}:call, years",
        "\u{1F58D}:\\w*é\\w*",
        "\u{1F58D}:a*",
        "\u{1F58D}:.",
        "\u{1F4DD}:a",
        "plain term",
    ];

    for text in texts {
        for query in queries {
            let segments = highlight_match(text, query, "", &ResolveOptions::default());
            assert_eq!(segments_to_string(&segments), text, "query {query:?}");
            assert!(
                segments.iter().all(|s| !s.text.is_empty()) || segments.len() == 1,
                "empty segment for {query:?} on {text:?}"
            );
            assert!(
                segments.windows(2).all(|w| w[0].is_match != w[1].is_match),
                "segments do not alternate for {query:?} on {text:?}"
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let h = Highlighter::from_raw("\u{1F4CE}:2", "", &ResolveOptions::default());
    let text = "book cool tree";
    assert_eq!(h.highlight(text), h.highlight(text));
}

#[test]
fn test_segments_serialize_for_renderer() {
    let segments = highlight("testing", SearchMode::Suffix, "ing");
    let json = serde_json::to_value(&segments).expect("serialize segments");
    assert_eq!(
        json,
        serde_json::json!([
            { "text": "test", "isMatch": false },
            { "text": "ing", "isMatch": true },
        ])
    );
}

#[test]
fn test_touching_matches_form_one_segment() {
    let segments = highlight("abab cd", SearchMode::ExactPhrase, "ab");
    assert_eq!(
        segments,
        vec![Segment::matched("abab"), Segment::plain(" cd")]
    );

    let h = Highlighter::from_raw("\u{1F4DD}:ab", "", &ResolveOptions::default());
    assert_eq!(h.match_count("abab cd"), 2);
}

#[test]
fn test_malformed_server_pattern_passes_text_through() {
    let text = "It was the best of times";
    for query in ["\u{1F4DA}:It", "\u{1F4CC}:times", "\u{1F6E0}\u{FE0F}:x", "It"] {
        let segments = highlight_match(
            text,
            query,
            "SENTENCE_REGEX:(unclosed",
            &ResolveOptions::default(),
        );
        assert_eq!(segments, vec![Segment::plain(text)], "query {query:?}");
    }
}

#[test]
fn test_search_mode_serde_names() {
    for mode in SearchMode::ALL {
        let json = serde_json::to_string(&mode).expect("serialize mode");
        assert_eq!(json, format!("\"{}\"", mode.name()));
        let back: SearchMode = serde_json::from_str(&json).expect("deserialize mode");
        assert_eq!(back, mode);
    }

    let query: Query =
        serde_json::from_str(r#"{"mode":"min-length","argument":"4"}"#).expect("query json");
    assert_eq!(query, Query::new(Some(SearchMode::MinLength), "4"));
}
