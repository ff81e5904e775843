//! Whole games played through the interactive front-end.

use grandpas_dots::{Outcome, Phase, PlayerId, SessionSnapshot};
use grandpas_dots_cli::{Flow, GameConfig, Overrides, Repl};

fn config(board_size: usize, players: usize) -> GameConfig {
    GameConfig::default().with_overrides(Overrides {
        board_size: Some(board_size),
        players: Some(players),
        rank_policy: None,
    })
}

#[test]
fn test_three_by_three_game_to_the_end() {
    let mut repl = Repl::new(config(3, 2), false).unwrap();
    let mut out = Vec::new();
    let mut script = vec!["start".to_string()];
    for row in 0..=3 {
        for col in 0..3 {
            script.push(format!("h {row} {col}"));
        }
    }
    for row in 0..3 {
        for col in 0..=3 {
            script.push(format!("v {row} {col}"));
        }
    }
    script.push("scores".to_string());
    repl.run(script.join("\n").as_bytes(), &mut out).unwrap();

    let session = repl.session();
    assert_eq!(session.phase(), Phase::Over);
    assert_eq!(session.scores().unwrap().total(), 9);
    assert_eq!(session.history().len(), 24);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Game over."));
    assert!(text.contains("#1 "));
}

#[test]
fn test_new_returns_to_setup_after_game() {
    let mut repl = Repl::new(config(3, 2), false).unwrap();
    let mut out = Vec::new();
    repl.execute("start", &mut out).unwrap();
    repl.execute("h 0 0", &mut out).unwrap();
    repl.execute("new", &mut out).unwrap();
    repl.execute("add", &mut out).unwrap();
    assert_eq!(repl.session().phase(), Phase::Setup);
    assert_eq!(repl.session().roster().len(), 3);
    assert_eq!(repl.execute("quit", &mut out).unwrap(), Flow::Quit);
}

#[test]
fn test_json_snapshots_follow_each_command() {
    let mut repl = Repl::new(config(3, 2), true).unwrap();
    let mut out = Vec::new();
    repl.run("size 5\nstart\n".as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    // Pretty JSON objects start at column zero.
    let snapshots: Vec<SessionSnapshot> = text
        .split("\n{")
        .skip(1)
        .map(|chunk| {
            let end = chunk.find("\n}").map_or(chunk.len(), |i| i + 2);
            serde_json::from_str(&format!("{{{}", &chunk[..end])).unwrap()
        })
        .collect();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].phase, Phase::Setup);
    assert_eq!(snapshots[0].board_size, 5);
    assert_eq!(snapshots[1].phase, Phase::InProgress);
    assert_eq!(snapshots[1].active_player, PlayerId::new(1));
}

#[test]
fn test_single_box_game_names_winner() {
    let config = GameConfig::default().with_overrides(Overrides::default());
    let mut repl = Repl::new(config, false).unwrap();
    let mut out = Vec::new();
    // Size 1 isn't offered by default, so the game stays on 3x3.
    repl.execute("size 1", &mut out).unwrap();
    assert_eq!(repl.session().board_size().get(), 3);

    let file_config: GameConfig = toml::from_str("board_size = 1\noffered_sizes = [1]\n").unwrap();
    let mut repl = Repl::new(file_config, false).unwrap();
    for line in ["start", "h 0 0", "h 1 0", "v 0 0", "v 0 1"] {
        repl.execute(line, &mut out).unwrap();
    }
    assert_eq!(
        repl.session().outcome(),
        Some(&Outcome::Winner(PlayerId::new(2).unwrap()))
    );
}
