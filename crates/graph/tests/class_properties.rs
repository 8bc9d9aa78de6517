use huddle_graph::{
    analyze_lines, analyze_source, max_class_size, ClosureStrategy, GraphError, InlineSource,
    TextFileSource,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn max_of(text: &str) -> usize {
    max_class_size(&InlineSource::new(text)).expect("analysis")
}

fn members_of(text: &str, strategy: ClosureStrategy, player: &str) -> Vec<String> {
    let source = InlineSource::new(text);
    let report = analyze_source(&source, strategy).expect("analysis");
    report
        .classes
        .into_iter()
        .find(|class| class.player == player)
        .map(|class| class.members)
        .expect("player present")
}

#[test]
fn single_player_is_a_class_of_one() {
    assert_eq!(max_of("Ann\n"), 1);
}

#[test]
fn lone_player_seen_list_is_not_resolved() {
    assert_eq!(max_of("Ann, Nobody\n"), 1);
}

#[test]
fn one_way_sight_does_not_join_players() {
    assert_eq!(max_of("A, B\nB\n"), 1);
}

#[test]
fn mutual_pair() {
    assert_eq!(max_of("A, B\nB, A\n"), 2);
}

#[test]
fn three_way_clique() {
    assert_eq!(max_of("A, B, C\nB, A, C\nC, A, B\n"), 3);
}

#[test]
fn largest_of_several_groups_wins() {
    let text = "A, B\nB, A\nC, D, E\nD, C, E\nE, C, D\nF, A\n";
    assert_eq!(max_of(text), 3);
}

#[test]
fn whitespace_and_blank_rows_are_ignored() {
    assert_eq!(max_of("\n  A ,  B  \n\n B,A, \n"), 2);
}

#[test]
fn duplicate_row_owner_is_a_format_error() {
    let err = analyze_lines(&["A, B", "B, A", "A"], ClosureStrategy::SinglePass).unwrap_err();
    assert!(matches!(err, GraphError::DuplicatePlayer { .. }));
    assert!(err.to_string().contains("not in supported format"));
}

#[test]
fn undeclared_seen_player_is_a_lookup_error() {
    let err = analyze_lines(&["A, B", "B, C"], ClosureStrategy::SinglePass).unwrap_err();
    assert!(matches!(err, GraphError::UnknownPlayer { ref name, .. } if name == "C"));
}

#[test]
fn repeated_runs_agree() {
    let text = "A, B\nB, A, C\nD, C, E\nC, B, D\nE, D\n";
    let source = InlineSource::new(text);
    let first = analyze_source(&source, ClosureStrategy::SinglePass).unwrap();
    let second = analyze_source(&source, ClosureStrategy::SinglePass).unwrap();
    assert_eq!(first, second);
}

#[test]
fn chain_of_four_keeps_single_pass_result() {
    let text = "A, B\nB, A, C\nC, B, D\nD, C\n";

    // A is expanded while B still holds only its direct partners
    assert_eq!(
        members_of(text, ClosureStrategy::SinglePass, "A"),
        vec!["A", "B", "C"]
    );
    assert_eq!(
        members_of(text, ClosureStrategy::SinglePass, "B"),
        vec!["A", "B", "C", "D"]
    );
    assert_eq!(max_of(text), 4);

    assert_eq!(
        members_of(text, ClosureStrategy::Exact, "A"),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn chain_of_seven_stops_short_of_full_closure() {
    // Chain A-B-C-D-E-F-G with D declared before C
    let text = "A, B\nB, A, C\nD, C, E\nC, B, D\nE, D, F\nF, E, G\nG, F\n";
    let source = InlineSource::new(text);

    let single = analyze_source(&source, ClosureStrategy::SinglePass).unwrap();
    assert_eq!(single.max_class_size, 6);

    let exact = analyze_source(&source, ClosureStrategy::Exact).unwrap();
    assert_eq!(exact.max_class_size, 7);
}

#[test]
fn file_source_matches_inline_source() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("players.txt");
    let text = "A, B, C\nB, A, C\nC, A, B\nD, A\n";
    std::fs::write(&path, text).expect("write file");

    let source = TextFileSource::new(&path).expect("txt path");
    assert_eq!(max_class_size(&source).unwrap(), 3);
    assert_eq!(max_of(text), 3);
}

#[test]
fn non_txt_path_is_rejected_before_reading() {
    let err = TextFileSource::new("players.csv").unwrap_err();
    assert!(matches!(err, GraphError::InvalidSource(_)));
}
