use wordnote_core::query::{filter_notes, sort_notes};
use wordnote_core::{run_query, ListState, Note, NoteId};

fn note(id: &str, sentence: &str) -> Note {
    Note {
        id: NoteId::from(id),
        word: String::new(),
        sentence: sentence.to_string(),
        meaning: String::new(),
        created: 0,
    }
}

fn sentences(output: &wordnote_core::QueryOutput) -> Vec<String> {
    output.items.iter().map(|row| row.sentence.plain()).collect()
}

#[test]
fn apple_scenario_orders_by_length_and_marks_both_matches() {
    let notes = vec![note("1", "Apple pie is sweet"), note("2", "I eat an apple")];
    let output = run_query(&notes, "apple").unwrap();

    assert_eq!(output.count, 2);
    assert_eq!(
        sentences(&output),
        vec!["I eat an apple".to_string(), "Apple pie is sweet".to_string()]
    );
    assert_eq!(
        output.items[0].sentence.render_marked("[", "]"),
        "I eat an [apple]"
    );
    assert_eq!(
        output.items[1].sentence.render_marked("[", "]"),
        "[Apple] pie is sweet"
    );
}

#[test]
fn empty_term_keeps_everything_without_highlights() {
    let notes = vec![note("1", "bb"), note("2", "a"), note("3", "ccc")];
    let output = run_query(&notes, "   ").unwrap();

    assert_eq!(output.term, "");
    assert_eq!(output.count, 3);
    assert_eq!(output.state, ListState::Results);
    assert_eq!(sentences(&output), vec!["a", "bb", "ccc"]);
    assert!(output.items.iter().all(|row| !row.sentence.has_matches()));
}

#[test]
fn ties_on_length_break_by_case_and_accent_insensitive_order() {
    let notes = vec![
        note("1", "Delta"),
        note("2", "alpha"),
        note("3", "Écrit"),
        note("4", "Bravo"),
    ];
    let output = run_query(&notes, "").unwrap();
    assert_eq!(sentences(&output), vec!["alpha", "Bravo", "Delta", "Écrit"]);
}

#[test]
fn base_equal_sentences_keep_collection_order() {
    let notes = vec![note("1", "Apple"), note("2", "apple"), note("3", "APPLE")];
    let output = run_query(&notes, "").unwrap();
    let ids: Vec<_> = output.items.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn sorting_twice_yields_same_order() {
    let notes = vec![
        note("1", "the cat sat"),
        note("2", "a dog"),
        note("3", "The Cat Sat"),
        note("4", "b dog"),
        note("5", "zz"),
    ];
    let mut once: Vec<&Note> = notes.iter().collect();
    sort_notes(&mut once);
    let mut twice = once.clone();
    sort_notes(&mut twice);

    let once_ids: Vec<_> = once.iter().map(|n| n.id.as_str()).collect();
    let twice_ids: Vec<_> = twice.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(once_ids, twice_ids);
    assert_eq!(once_ids, vec!["5", "2", "4", "1", "3"]);
}

#[test]
fn filter_never_returns_non_matching_sentences() {
    let notes = vec![
        note("1", "Hello World"),
        note("2", "hello there"),
        note("3", "goodbye"),
        note("4", "HELLO"),
        note("5", "hel lo"),
    ];
    for term in ["hello", "HeLLo", "o", "lo w", "xyz", "hel lo"] {
        let kept = filter_notes(&notes, term).unwrap();
        let needle = term.to_lowercase();
        for note in &kept {
            assert!(
                note.sentence.to_lowercase().contains(&needle),
                "`{}` kept for term `{term}`",
                note.sentence
            );
        }
        let expected = notes
            .iter()
            .filter(|n| n.sentence.to_lowercase().contains(&needle))
            .count();
        assert_eq!(kept.len(), expected, "term `{term}`");
    }
}

#[test]
fn regex_metacharacters_are_searched_literally() {
    let notes = vec![
        note("1", "costs $5.00 (approx)"),
        note("2", "costs 5000 approx"),
        note("3", "a+b=c"),
        note("4", "aab=c"),
    ];

    let price = run_query(&notes, "$5.00 (").unwrap();
    assert_eq!(sentences(&price), vec!["costs $5.00 (approx)"]);

    let plus = run_query(&notes, "a+b").unwrap();
    assert_eq!(sentences(&plus), vec!["a+b=c"]);

    let star = run_query(&notes, ".*").unwrap();
    assert_eq!(star.count, 0);
    assert_eq!(star.state, ListState::NoMatches);
}

#[test]
fn highlight_marks_every_occurrence() {
    let notes = vec![note("1", "Na na NA batman")];
    let output = run_query(&notes, "na").unwrap();
    let row = &output.items[0];
    assert_eq!(row.sentence.matches().collect::<Vec<_>>(), vec!["Na", "na", "NA"]);
    assert_eq!(
        row.sentence.render_marked("<mark>", "</mark>"),
        "<mark>Na</mark> <mark>na</mark> <mark>NA</mark> batman"
    );
}

#[test]
fn rows_expose_optional_word_and_meaning() {
    let mut with_word = note("1", "I eat an apple");
    with_word.word = "apple".to_string();
    let output = run_query(&[with_word, note("2", "plain")], "").unwrap();

    let apple = output.items.iter().find(|row| row.id.as_str() == "1").unwrap();
    assert_eq!(apple.word.as_deref(), Some("apple"));
    assert_eq!(apple.meaning, None);
}
