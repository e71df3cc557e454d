use memory_match::core::{GameSession, PreparedGame, WordPair};
use memory_match::term::board_view::WIN_TEXT;
use memory_match::term::{BoardScene, BoardView, Viewport};
use memory_match::types::WIN_ANNOUNCE_DELAY_MS;

fn session() -> GameSession {
    let prepared = PreparedGame::from_pairs(vec![
        WordPair::new("hot", "cold"),
        WordPair::new("big", "small"),
    ])
    .unwrap();
    GameSession::new(prepared, 2024)
}

fn render(session: &GameSession, cursor: Option<usize>) -> String {
    let snap = session.snapshot();
    let scene = BoardScene {
        snap: &snap,
        cursor,
        topic: "opposites",
    };
    BoardView::default()
        .render(&scene, Viewport::new(80, 24))
        .to_text()
}

#[test]
fn face_down_tiles_hide_their_words() {
    let s = session();
    let text = render(&s, None);

    assert!(text.contains("opposites"));
    assert!(text.contains("PAIRS 0/2"));
    for word in ["hot", "cold", "big", "small"] {
        assert!(!text.contains(word), "{} visible while face down", word);
    }
    assert!(!text.contains(WIN_TEXT));
}

#[test]
fn flipped_and_matched_tiles_show_words() {
    let mut s = session();
    s.select(s.board().position_of("hot").unwrap());
    let text = render(&s, None);
    assert!(text.contains("hot"));
    assert!(!text.contains("cold"));

    s.select(s.board().position_of("cold").unwrap());
    let text = render(&s, None);
    assert!(text.contains("hot"));
    assert!(text.contains("cold"));
    assert!(text.contains("PAIRS 1/2"));
}

#[test]
fn cursor_brackets_a_tile() {
    let s = session();
    let text = render(&s, Some(0));
    assert!(text.contains('['));
    assert!(text.contains(']'));

    let text = render(&s, None);
    assert!(!text.contains('['));
}

#[test]
fn win_overlay_waits_for_the_announcement() {
    let mut s = session();
    for (a, b) in [("hot", "cold"), ("big", "small")] {
        s.select(s.board().position_of(a).unwrap());
        s.select(s.board().position_of(b).unwrap());
    }
    assert!(!render(&s, None).contains(WIN_TEXT));

    s.tick(WIN_ANNOUNCE_DELAY_MS);
    let text = render(&s, None);
    assert!(text.contains(WIN_TEXT));
    assert!(text.contains("PAIRS 2/2"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let s = session();
    let snap = s.snapshot();
    let scene = BoardScene {
        snap: &snap,
        cursor: Some(3),
        topic: "opposites",
    };
    for (w, h) in [(0, 0), (1, 1), (10, 4), (20, 6)] {
        let _ = BoardView::default().render(&scene, Viewport::new(w, h));
    }
}
