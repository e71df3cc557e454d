//! CSV converters and the topic index, checked by playing what they produce.

use memory_match::core::{GameSession, WordPairDataset};
use memory_match::data::convert::{default_multiple_output, default_pairs_output, write_json};
use memory_match::data::{
    analyze, build_topic_index, convert_multiple, convert_pairs, discover_topics, load_dataset,
    write_topic_index, INDEX_FILE_NAME,
};

const PAIRS_CSV: &str = "\u{feff}חם,קר\ngadol,katan\n\nonly-one\n\"a, b\",c\n";
const MULTIPLE_CSV: &str = "fast,quick,rapid\nglad,happy\nlonely\n";

#[test]
fn converted_pairs_file_is_playable() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("opposites.csv");
    std::fs::write(&csv, PAIRS_CSV).unwrap();

    let document = convert_pairs(&std::fs::read_to_string(&csv).unwrap());
    assert_eq!(document.total_pairs, 3);
    assert_eq!(document.pairs[0].term1, "חם");
    assert_eq!(document.pairs[2].term1, "a, b");
    let invalid = document.invalid_rows.as_ref().unwrap();
    assert_eq!(invalid.count, 1);
    assert_eq!(invalid.details[0].row_number, 4);

    let out = default_pairs_output(&csv);
    assert_eq!(out, dir.path().join("opposites.json"));
    write_json(&out, &document).unwrap();

    // Hebrew is written as is, not \u-escaped.
    assert!(std::fs::read_to_string(&out).unwrap().contains("קר"));

    let dataset = load_dataset(&out).unwrap();
    assert!(matches!(dataset, WordPairDataset::Pairs(ref p) if p.len() == 3));
    let session = GameSession::from_dataset(&dataset, 10, 1).unwrap();
    assert_eq!(session.target(), 3);
    assert_eq!(session.board().len(), 6);
}

#[test]
fn converted_multiple_file_is_playable() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("synonyms.csv");
    std::fs::write(&csv, MULTIPLE_CSV).unwrap();

    let document = convert_multiple(MULTIPLE_CSV, "synonyms.csv", 2).unwrap();
    assert_eq!(document.metadata.total_entries, 2);
    assert_eq!(document.statistics.min_alternatives, 2);
    assert_eq!(document.statistics.max_alternatives, 3);
    assert_eq!(document.statistics.average_alternatives, 2.5);
    assert_eq!(document.invalid_rows.as_ref().unwrap().count, 1);

    let out = default_multiple_output(&csv);
    assert_eq!(out, dir.path().join("synonyms_multiple.json"));
    write_json(&out, &document).unwrap();

    let dataset = load_dataset(&out).unwrap();
    assert!(matches!(dataset, WordPairDataset::Alternatives(ref e) if e.len() == 2));
    let session = GameSession::from_dataset(&dataset, 10, 1).unwrap();
    assert_eq!(session.target(), 2);
}

#[test]
fn analyze_counts_cells_per_row() {
    let distribution = analyze(MULTIPLE_CSV);
    assert_eq!(distribution.total_rows, 3);
    assert_eq!(distribution.counts.get(&1), Some(&1));
    assert_eq!(distribution.counts.get(&2), Some(&1));
    assert_eq!(distribution.counts.get(&3), Some(&1));
}

#[test]
fn index_feeds_the_topic_menu() {
    let dir = tempfile::tempdir().unwrap();
    let pairs = convert_pairs(PAIRS_CSV);
    write_json(&dir.path().join("opposites.json"), &pairs).unwrap();
    let multiple = convert_multiple(MULTIPLE_CSV, "synonyms.csv", 2).unwrap();
    write_json(&dir.path().join("synonyms_multiple.json"), &multiple).unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let index = build_topic_index(dir.path()).unwrap();
    assert_eq!(index.total_files, 3);
    let names: Vec<&str> = index.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, ["broken.json", "opposites.json", "synonyms_multiple.json"]);
    assert!(index.files[0].read_error.is_some());
    assert_eq!(index.files[1].total_entries, Some(3));
    assert_eq!(index.files[2].total_entries, Some(2));
    assert_eq!(index.files[2].source_file.as_deref(), Some("synonyms.csv"));

    let path = write_topic_index(dir.path(), &index).unwrap();
    assert_eq!(path, dir.path().join(INDEX_FILE_NAME));

    // Regenerating skips the index itself.
    assert_eq!(build_topic_index(dir.path()).unwrap().total_files, 3);

    let topics = discover_topics(dir.path()).unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[1].name, "opposites");
    assert_eq!(topics[1].entries, Some(3));
    assert_eq!(topics[1].path, dir.path().join("opposites.json"));
}
