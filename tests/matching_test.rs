//! Integration tests for the matching entry points

mod common;

use common::APOD_ARTICLES;
use textmatch::prelude::*;

const STEMMING_TEXT: &str = "While jogging last night, I saw rocketships streaking across the dark moonless sky - at five times the speed of sound!!!";

const PROXIMITY_TEXT: &str = "While jogging last night, I saw a rocketship streaking across the dark moonless sky - at five times the speed of sound!!!";

const BATCH_EXPRESSIONS: [&str; 11] = [
    "\"rocketship dark sky\"",
    "\"starry night\"",
    "\"sound barrier\"",
    "\"meteor shower\"~2 OR perseid",
    "\"horse with no name\"",
    "\"magellanic clouds\" AND \"star formation\"",
    "\"background radiation\"",
    "\"hubble space telescope\"",
    "\"saturn white spot\"~2",
    "\"distance to andromeda\"",
    "\"chinese space observatory\"",
];

#[test]
fn test_words_are_stemmed() -> Result<()> {
    let terms = FullTextIndex::tokenize(STEMMING_TEXT, &AnalyzerConfig::default())?;
    assert_eq!(
        terms.join(" "),
        "while jog last night i saw rocketship streak across the dark moonless sky at five time the speed of sound"
    );
    Ok(())
}

#[test]
fn test_match_texts_against_articles() -> Result<()> {
    let result = match_texts(&APOD_ARTICLES, "magellanic nebula visible in southern skies", None)?;
    assert!(result.success());
    assert_eq!(result[0], 10);

    let result = match_texts(&APOD_ARTICLES, "\"swift tuttle\" AND comet", None)?;
    assert_eq!(result.items(), &[0]);

    let result = match_texts(&APOD_ARTICLES, "china observation station in antartica", Some(1))?;
    assert_eq!(result.items(), &[14]);

    let result = match_texts(&APOD_ARTICLES, "streak~", None)?;
    assert_eq!(result.items(), &[0, 13, 12]);

    let result = match_texts(&APOD_ARTICLES, "space AND explo*", None)?;
    assert_eq!(result.items(), &[11]);

    Ok(())
}

#[test]
fn test_invalid_query_produces_error() {
    let err = match_texts(
        &APOD_ARTICLES,
        "this [is invalid because of the open square bracket",
        None,
    )
    .unwrap_err();

    assert!(matches!(err, TextMatchError::InvalidQuery { .. }));
}

#[test]
fn test_proximity_search() -> Result<()> {
    let result = match_texts(&[PROXIMITY_TEXT], "\"rocketship dark sky\"~4", None)?;
    assert!(result.success());
    assert_eq!(result[0], 0);

    let result = match_texts(&[PROXIMITY_TEXT], "\"rocketship dark sky\"", None)?;
    assert!(!result.success());

    Ok(())
}

#[test]
fn test_match_multiple_expressions_to_single_text() -> Result<()> {
    let expressions = [
        "\"rocketship dark sky\"~4",
        "jogging at night",
        "speed of sound",
        "(meteor shower) OR perseid",
    ];

    let result = match_queries(PROXIMITY_TEXT, &expressions, None)?;
    assert_eq!(result.items(), &[0, 1, 2]);

    let result = match_queries(PROXIMITY_TEXT, &expressions, Some(1))?;
    assert_eq!(result.items(), &[0]);

    Ok(())
}

#[test]
fn test_match_many_non_cached() -> Result<()> {
    let results = match_many(&APOD_ARTICLES, &BATCH_EXPRESSIONS, false)?;
    assert_eq!(results.len(), APOD_ARTICLES.len());

    for (i, text) in APOD_ARTICLES.iter().enumerate() {
        let expected = match_queries(text, &BATCH_EXPRESSIONS, None)?;
        assert_eq!(results.get(i), Some(expected.items()), "article {i}");
    }

    Ok(())
}

#[test]
fn test_match_many_cached() -> Result<()> {
    let results = match_many(&APOD_ARTICLES, &BATCH_EXPRESSIONS, true)?;
    assert!(results.success());

    for (i, text) in APOD_ARTICLES.iter().enumerate() {
        let expected = match_queries(text, &BATCH_EXPRESSIONS, None)?;
        assert_eq!(results.get(i), Some(expected.items()), "article {i}");
    }

    assert_eq!(results.get(0), Some(&[3][..]));
    assert_eq!(results.get(11), Some(&[7][..]));
    assert_eq!(results.get(1), Some(&[][..]));

    Ok(())
}

#[test]
fn test_matcher_with_custom_separators() -> Result<()> {
    let config = IndexConfig::default()
        .with_analyzer(AnalyzerConfig::default().with_separators(",;"));
    let matcher = TextMatcher::new(config);

    // '-' no longer splits words, so the hyphenated name is one term
    let result = matcher.match_texts(&["Comet Swift-Tuttle", "swift tuttle"], "swift-tuttle", None)?;
    assert_eq!(result.items(), &[0]);

    Ok(())
}
