use lexicount::analysis::{
    analyze, compute_basic_stats, count_flat, count_grouped, tokenize, Dictionary,
    TokenCategorySet, INDEFINITE_ARTICLES, PREPOSITIONS, PRONOUNS,
};
use lexicount::app::{App, AppEvent};
use lexicount::error::AnalyzeError;
use lexicount::input::load_path;
use std::io::Write;

#[test]
fn end_to_end_file_analysis() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"She gave her book to him. It was hers.")
        .unwrap();

    let document = load_path(file.path().to_str().unwrap()).expect("Should load file successfully");
    let tokens = tokenize(&document.text);
    assert_eq!(
        tokens,
        vec!["she", "gave", "her", "book", "to", "him", "it", "was", "hers"]
    );

    let pronouns = count_grouped(&tokens, &PRONOUNS);
    let personal = pronouns.get("personal").unwrap();
    for word in ["she", "her", "him", "it", "hers"] {
        assert_eq!(personal.get(word), Some(1), "personal {}", word);
    }
    assert_eq!(personal.len(), 5);

    let possessive = pronouns.get("possessive").unwrap();
    assert_eq!(possessive.get("her"), Some(1));
    assert_eq!(possessive.get("hers"), Some(1));
    assert_eq!(possessive.len(), 2);

    assert_eq!(count_flat(&tokens, &PREPOSITIONS).sorted(), vec![("to", 1)]);
    assert!(count_flat(&tokens, &INDEFINITE_ARTICLES).is_empty());
}

#[test]
fn basic_stats_example() {
    let stats = compute_basic_stats("ab 12!\n");
    assert_eq!(stats.letters, 4);
    assert_eq!(stats.words, 2);
    assert_eq!(stats.spaces, 2);
    assert_eq!(stats.newlines, 1);
    assert_eq!(stats.specials, 1);
}

#[test]
fn caller_supplied_categories() {
    let categories = TokenCategorySet::new()
        .with_category("colors", Dictionary::new(["Red", "blue"]))
        .with_category("warm", Dictionary::new(["red", "orange"]))
        .with_category("empty", Dictionary::default());

    let tokens = tokenize("Red, red wine; BLUE moon.");
    let grouped = count_grouped(&tokens, &categories);

    assert_eq!(grouped.get("colors").unwrap().get("red"), Some(2));
    assert_eq!(grouped.get("colors").unwrap().get("blue"), Some(1));
    assert_eq!(grouped.get("warm").unwrap().get("red"), Some(2));
    assert!(grouped.get("empty").unwrap().is_empty());
    assert_eq!(grouped.len(), 3);
}

#[test]
fn blank_input_is_rejected() {
    assert_eq!(analyze("").unwrap_err(), AnalyzeError::BlankInput);
    assert_eq!(analyze("   ").unwrap_err(), AnalyzeError::BlankInput);
}

#[test]
fn app_session_flow() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"An owl and a cat went to sea.").unwrap();

    let mut app = App::default();
    app.handle_event(AppEvent::LoadFile(
        file.path().to_str().unwrap().to_string(),
    ));
    app.handle_event(AppEvent::Analyze);

    let report = app.report().expect("analysis should succeed");
    assert_eq!(report.articles.get("an"), Some(1));
    assert_eq!(report.articles.get("a"), Some(1));
    assert_eq!(report.prepositions.get("to"), Some(1));

    app.handle_event(AppEvent::Reset);
    assert!(app.report().is_none());
    assert!(app.text().is_empty());
}

#[test]
fn bom_prefixed_file_matches_plain_text() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all("\u{feff}a cat, an owl!".as_bytes()).unwrap();

    let document = load_path(file.path().to_str().unwrap()).unwrap();
    let from_file = analyze(&document.text).unwrap();
    let from_paste = analyze("a cat, an owl!").unwrap();
    assert_eq!(from_file, from_paste);
    assert_eq!(from_file.stats.specials, 2);

    assert_eq!(analyze("\u{feff} \n"), Err(AnalyzeError::BlankInput));
}
