//! Integration tests for the word frequency query contract.

use std::sync::Arc;
use std::thread;

use wordcount::prelude::*;

const FRUIT: &str = "blueberry blueberry. banana! apple apple apple?";

#[test]
fn test_frequency_for_word_scenarios() {
    let analyzer = WordFrequencyAnalyzer::new();

    assert_eq!(analyzer.calculate_frequency_for_word("apple", "apple"), 1);
    assert_eq!(analyzer.calculate_frequency_for_word("An apple", "apple"), 1);
    assert_eq!(
        analyzer.calculate_frequency_for_word("An apple is an apple.", "apple"),
        2
    );
    assert_eq!(
        analyzer.calculate_frequency_for_word("An apple is an apple.", "an"),
        2
    );
}

#[test]
fn test_frequency_for_word_is_case_insensitive_in_both_arguments() {
    let analyzer = WordFrequencyAnalyzer::new();
    let text = "The cat saw THE Cat and the cAt";

    let expected = analyzer.calculate_frequency_for_word(text, "cat");
    assert_eq!(expected, 3);

    for word in ["CAT", "Cat", "cAT"] {
        assert_eq!(analyzer.calculate_frequency_for_word(text, word), expected);
    }
    assert_eq!(
        analyzer.calculate_frequency_for_word(&text.to_uppercase(), "cat"),
        expected
    );
    assert_eq!(
        analyzer.calculate_frequency_for_word(&text.to_lowercase(), "CAT"),
        expected
    );
}

#[test]
fn test_highest_frequency_scenarios() {
    let analyzer = WordFrequencyAnalyzer::new();

    assert_eq!(analyzer.calculate_highest_frequency(FRUIT), 3);
    assert_eq!(analyzer.calculate_highest_frequency("blueberry blueberry"), 2);
    assert_eq!(analyzer.calculate_highest_frequency(""), 0);
}

#[test]
fn test_highest_frequency_matches_per_word_maximum() {
    let analyzer = WordFrequencyAnalyzer::new();
    let text = "It was the best of times, it was the worst of times; it was the age of wisdom.";

    let table = analyzer.frequency_table(text);
    let max_per_word = table
        .iter()
        .map(|(word, _)| analyzer.calculate_frequency_for_word(text, word))
        .max()
        .unwrap_or(0);

    assert_eq!(analyzer.calculate_highest_frequency(text), max_per_word);
    assert_eq!(max_per_word, 3);
}

#[test]
fn test_most_frequent_tie_is_broken_alphabetically() {
    let analyzer = WordFrequencyAnalyzer::new();

    assert_eq!(
        analyzer.calculate_most_frequent_n_words("blueberry blueberry banana banana", 1),
        vec![WordFrequency::new("banana", 2)]
    );
}

#[test]
fn test_most_frequent_three_of_three() {
    let analyzer = WordFrequencyAnalyzer::new();

    let ranked = analyzer.calculate_most_frequent_n_words(FRUIT, 3);
    assert_eq!(
        ranked,
        vec![
            WordFrequency::new("apple", 3),
            WordFrequency::new("blueberry", 2),
            WordFrequency::new("banana", 1),
        ]
    );

    // The same selection in word order.
    let table = analyzer.frequency_table(FRUIT);
    assert_eq!(
        table.most_frequent_alphabetical(3),
        vec![
            WordFrequency::new("apple", 3),
            WordFrequency::new("banana", 1),
            WordFrequency::new("blueberry", 2),
        ]
    );
}

#[test]
fn test_most_frequent_is_sorted_and_bounded() {
    let analyzer = WordFrequencyAnalyzer::new();
    let text = "d c b a d c b d c d e e f g g g";

    for n in 0..10 {
        let result = analyzer.calculate_most_frequent_n_words(text, n);
        assert!(result.len() <= n);
        assert_eq!(result.len(), n.min(7));

        for pair in result.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.frequency() > b.frequency()
                    || (a.frequency() == b.frequency() && a.word() < b.word()),
                "{a} should rank before {b}"
            );
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let analyzer = WordFrequencyAnalyzer::new();

    assert_eq!(
        analyzer.calculate_most_frequent_n_words(FRUIT, 2),
        analyzer.calculate_most_frequent_n_words(FRUIT, 2)
    );
    assert_eq!(
        analyzer.calculate_highest_frequency(FRUIT),
        analyzer.calculate_highest_frequency(FRUIT)
    );
    assert_eq!(
        analyzer.calculate_frequency_for_word(FRUIT, "apple"),
        analyzer.calculate_frequency_for_word(FRUIT, "apple")
    );
}

#[test]
fn test_non_ascii_text() {
    let analyzer = WordFrequencyAnalyzer::new();
    let text = "Crème brûlée, crème fraîche; 東京 Tokyo tokyo";

    assert_eq!(analyzer.calculate_frequency_for_word(text, "tokyo"), 2);
    assert_eq!(analyzer.calculate_frequency_for_word(text, "crème"), 0);
    assert_eq!(analyzer.calculate_frequency_for_word(text, "cr"), 2);
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = Arc::new(WordFrequencyAnalyzer::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || {
                let text = "word ".repeat(i + 1);
                analyzer.calculate_highest_frequency(&text)
            })
        })
        .collect();

    let results: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![1, 2, 3, 4]);
}

#[test]
fn test_configured_analyzer_from_json() -> Result<()> {
    let config = FrequencyConfig::from_json(
        r#"{ "min_word_length": 2, "stop_words": ["the", "OF"] }"#,
    )?;
    let analyzer = WordFrequencyAnalyzer::from_config(&config)?;
    let text = "The best of the best, a hint of luck.";

    assert_eq!(analyzer.calculate_frequency_for_word(text, "the"), 0);
    assert_eq!(analyzer.calculate_frequency_for_word(text, "of"), 0);
    assert_eq!(analyzer.calculate_frequency_for_word(text, "a"), 0);
    assert_eq!(
        analyzer.calculate_most_frequent_n_words(text, 2),
        vec![WordFrequency::new("best", 2), WordFrequency::new("hint", 1)]
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_reported() {
    let err = FrequencyConfig::from_json(r#"{ "stop_words": ["two words"] }"#).unwrap_err();
    assert!(matches!(err, WordCountError::InvalidConfig(_)));
    assert!(err.to_string().contains("two words"));
}

#[test]
fn test_results_serialize_to_json() {
    let analyzer = WordFrequencyAnalyzer::new();
    let top = analyzer.calculate_most_frequent_n_words(FRUIT, 2);

    let json = serde_json::to_string(&top).unwrap();
    assert_eq!(
        json,
        r#"[{"word":"apple","frequency":3},{"word":"blueberry","frequency":2}]"#
    );
}
