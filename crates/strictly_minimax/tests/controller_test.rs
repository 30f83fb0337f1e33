//! Tests for the game controller state machine.

use strictly_minimax::{
    Board, Cell, Difficulty, GameConfig, GameController, GameError, Outcome, Phase, Player,
    Starter,
};

#[test]
fn test_completing_top_row_ends_game() {
    let board = Board::parse(["X", "X", "", "", "O", "O", "", "", ""]).expect("Valid board");
    let config = GameConfig::new(Starter::Human, Difficulty::Hard);
    let mut game = GameController::from_position(config, board).expect("Balanced board");
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);

    let phase = game.apply_human_move(2).expect("Legal move");

    assert_eq!(phase, Phase::GameOver(Outcome::Win(Player::X)));
    assert_eq!(game.state().outcome(), Outcome::Win(Player::X));
}

#[test]
fn test_game_over_rejects_everything_but_reset() {
    let board = Board::parse(["X", "X", "", "", "O", "O", "", "", ""]).expect("Valid board");
    let config = GameConfig::new(Starter::Human, Difficulty::Hard);
    let mut game = GameController::from_position(config, board).expect("Balanced board");
    game.apply_human_move(2).expect("Legal move");

    assert!(matches!(
        game.apply_human_move(3),
        Err(GameError::InvalidState { .. })
    ));
    assert!(matches!(
        game.run_computer_move(Difficulty::Hard),
        Err(GameError::InvalidState { .. })
    ));
}

#[test]
fn test_reset_from_game_over() {
    for starter in [Starter::Human, Starter::Ai] {
        let board = Board::parse(["X", "X", "X", "O", "O", "", "", "", ""]).expect("Valid board");
        let config = GameConfig::new(starter, Difficulty::Medium);
        let mut game = GameController::from_position(config, board).expect("Balanced board");
        assert!(game.phase().is_over());

        game.reset();

        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.state().to_move(), Player::X);
        assert!(game.state().history().is_empty());
        let expected = match starter {
            Starter::Human => Phase::AwaitingHumanMove,
            Starter::Ai => Phase::AwaitingComputerMove,
        };
        assert_eq!(game.phase(), expected);
    }
}

#[test]
fn test_computer_opens_as_x() {
    let config = GameConfig::new(Starter::Ai, Difficulty::Hard);
    let mut game = GameController::new(config);

    // Every opening draws under perfect play; ties go to the lowest index.
    let index = game.run_computer_move(Difficulty::Hard).expect("Computer to move");

    assert_eq!(index, 0);
    assert_eq!(game.board().get(0), Some(Cell::Occupied(Player::X)));
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    assert_eq!(game.human_player(), Player::O);
}

#[test]
fn test_seeded_easy_games_are_reproducible() {
    let play = |seed: u64| {
        let config = GameConfig::new(Starter::Ai, Difficulty::Easy).with_seed(seed);
        let mut game = GameController::new(config);
        let mut moves = Vec::new();
        while !game.phase().is_over() {
            match game.phase() {
                Phase::AwaitingComputerMove => {
                    moves.push(game.run_computer_move(Difficulty::Easy).expect("Computer turn"));
                }
                Phase::AwaitingHumanMove => {
                    let index = game.legal_moves()[0];
                    game.apply_human_move(index).expect("Legal move");
                    moves.push(index);
                }
                Phase::GameOver(_) => unreachable!(),
            }
        }
        moves
    };

    assert_eq!(play(17), play(17));
}

#[test]
fn test_full_game_against_hard_never_loses() {
    // Human always takes the lowest open cell.
    let mut game = GameController::new(GameConfig::new(Starter::Human, Difficulty::Hard));
    loop {
        match game.phase() {
            Phase::AwaitingHumanMove => {
                let index = game.legal_moves()[0];
                game.apply_human_move(index).expect("Legal move");
            }
            Phase::AwaitingComputerMove => {
                game.run_computer_move(Difficulty::Hard).expect("Computer turn");
            }
            Phase::GameOver(outcome) => {
                assert_ne!(outcome, Outcome::Win(Player::X));
                break;
            }
        }
    }
}
