//! Tests for turn coordination across whole games.

use tictactoe_ai::{
    Cell, Cue, GameResult, MoveError, Phase, Player, Position, SilentCues, TurnCoordinator,
    best_move,
};

/// Plays to the end, the human choosing cells via `pick`.
fn play_out(
    coordinator: &mut TurnCoordinator,
    cues: &mut Vec<Cue>,
    mut pick: impl FnMut(&TurnCoordinator) -> Position,
) {
    while !coordinator.phase().is_terminal() {
        let pos = pick(coordinator);
        coordinator.apply_human_move(pos, cues).unwrap();
        if coordinator.phase() == Phase::AwaitingComputer {
            coordinator.apply_computer_move(cues).unwrap();
        }
    }
}

#[test]
fn test_perfect_play_reaches_draw() {
    let mut coordinator = TurnCoordinator::new();
    let mut cues: Vec<Cue> = Vec::new();

    play_out(&mut coordinator, &mut cues, |c| {
        best_move(c.session().board(), Player::Human).unwrap()
    });

    let board = coordinator.session().board();
    assert!(board.cells().iter().all(|cell| *cell != Cell::Empty));
    assert_eq!(coordinator.phase(), Phase::Terminal(GameResult::Draw));
    assert_eq!(coordinator.status_line(), "It's a draw! Press R to restart");
    assert_eq!(cues.last(), Some(&Cue::Draw));
    assert_eq!(cues.iter().filter(|c| **c == Cue::Draw).count(), 1);
}

#[test]
fn test_restart_after_computer_win() {
    let mut coordinator = TurnCoordinator::new();
    let mut cues: Vec<Cue> = Vec::new();

    // A human who always takes the first empty cell loses.
    play_out(&mut coordinator, &mut cues, |c| {
        c.session().board().empty_positions().next().unwrap()
    });
    assert_eq!(
        coordinator.phase(),
        Phase::Terminal(GameResult::ComputerWin)
    );
    assert!(coordinator.cues().has_fired(Cue::ComputerWon));

    coordinator.restart();

    assert_eq!(coordinator.phase(), Phase::AwaitingHuman);
    assert_eq!(coordinator.status_line(), "Your Turn");
    assert!(coordinator.session().board().cells().iter().all(|c| *c == Cell::Empty));
    assert!(!coordinator.cues().has_fired(Cue::ComputerWon));
}

#[test]
fn test_terminal_rejects_moves_until_restart() {
    let mut coordinator = TurnCoordinator::new();
    let mut cues: Vec<Cue> = Vec::new();
    play_out(&mut coordinator, &mut cues, |c| {
        c.session().board().empty_positions().next().unwrap()
    });
    let before = coordinator.session().clone();

    let empty = coordinator.session().board().empty_positions().next();
    if let Some(pos) = empty {
        assert_eq!(
            coordinator.apply_human_move(pos, &mut SilentCues),
            Err(MoveError::GameOver)
        );
    }
    assert_eq!(coordinator.apply_computer_move(&mut SilentCues), Err(MoveError::GameOver));
    assert_eq!(coordinator.session(), &before);

    coordinator.restart();
    assert!(coordinator.apply_human_move(Position::Center, &mut SilentCues).is_ok());
}

#[test]
fn test_outcome_cue_not_repeated_by_queries() {
    let mut coordinator = TurnCoordinator::new();
    let mut cues: Vec<Cue> = Vec::new();
    play_out(&mut coordinator, &mut cues, |c| {
        c.session().board().empty_positions().next().unwrap()
    });
    let fired = cues.len();

    // Looking at a finished game many times fires nothing new.
    for _ in 0..10 {
        let _ = coordinator.phase();
        let _ = coordinator.status_line();
        let _ = coordinator.apply_human_move(Position::Center, &mut cues);
    }
    assert_eq!(cues.len(), fired);
}
