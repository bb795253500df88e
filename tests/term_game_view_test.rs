use term_tetris::core::{GameSnapshot, GameState};
use term_tetris::term::{GameView, Viewport};

fn screen_text(fb: &term_tetris::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = 1;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut state = GameState::new(1);
    state.start_game();
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y) in snap.active.unwrap().cells() {
        let px = 1 + (x as u16) * 2;
        let py = 1 + y as u16;
        assert_eq!(fb.get(px, py).unwrap().ch, '█');
        assert!(fb.get(px, py).unwrap().style.bold);
    }
}

#[test]
fn term_view_draws_score_panel_when_wide_enough() {
    let mut snap = GameSnapshot::default();
    snap.score = 12;
    snap.high_score = 40;

    let fb = GameView::default().render(&snap, Viewport::new(70, 22));
    let all = screen_text(&fb);

    assert!(all.contains("Score: 12"));
    assert!(all.contains("High Score: 40"));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let mut snap = GameSnapshot::default();
    snap.score = 12;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert!(!screen_text(&fb).contains("Score"));
}

#[test]
fn term_view_shows_game_over_message() {
    let mut snap = GameSnapshot::default();
    snap.score = 7;
    snap.high_score = 7;
    snap.game_over = true;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Game Over! Your score is 7"));
}
