// Integration tests for the word-guess application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_guess::cli::CliInterface;
use word_guess::wordbank::EMBEDDED_WORDBANK;
use word_guess::*;

fn single_word_bank() -> WordBank {
    load_wordbank_from_str("e,cat\nm,garden\nh,jazzy\n").unwrap()
}

#[test]
fn test_end_to_end_win_through_console() {
    // Player picks easy, makes one miss, then reveals "cat"
    let input = "e\na\nz\nc\nt\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(1);

    let end = game_loop(
        &single_word_bank(),
        &mut interface,
        &mut rng,
        &GameOptions::default(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Won));
}

#[test]
fn test_end_to_end_loss_on_hard() {
    // Hard gives four misses against "jazzy"
    let input = "h\nb\nc\nd\ne\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(1);

    let end = game_loop(
        &single_word_bank(),
        &mut interface,
        &mut rng,
        &GameOptions::default(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Lost));
}

#[test]
fn test_invalid_input_is_reprompted() {
    // Bad difficulty and bad letters are asked again without costing guesses
    let input = "x\neasy\n\ne\nab\n1\nC\na\nt\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(1);

    let end = game_loop(
        &single_word_bank(),
        &mut interface,
        &mut rng,
        &GameOptions::default(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Won));
}

#[test]
fn test_repeated_wrong_letters_do_not_lose_game() {
    // Four repeats of one miss on hard still leave three guesses
    let input = "q\nq\nq\nq\nj\na\nz\ny\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(1);
    let options = GameOptions {
        difficulty: Some(Difficulty::Hard),
        reveal_secret: true,
    };

    let end = game_loop(&single_word_bank(), &mut interface, &mut rng, &options).unwrap();

    assert_eq!(end, SessionEnd::Finished(Outcome::Won));
}

#[test]
fn test_eof_ends_session() {
    let input = "m\ng\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(1);

    let end = game_loop(
        &single_word_bank(),
        &mut interface,
        &mut rng,
        &GameOptions::default(),
    )
    .unwrap();

    assert_eq!(end, SessionEnd::Exited);
}

#[test]
fn test_empty_pool_is_fatal() {
    let wordbank = load_wordbank_from_str("e,cat\nm,garden\n").unwrap();
    let mut interface = CliInterface::new(Cursor::new("h\n"));
    let mut rng = StdRng::seed_from_u64(1);

    let err = game_loop(&wordbank, &mut interface, &mut rng, &GameOptions::default())
        .unwrap_err();

    assert!(matches!(err, GameError::EmptyPool(EmptyPoolError(Difficulty::Hard))));
    assert_eq!(err.to_string(), "no candidate words for hard difficulty");
}

#[test]
fn test_custom_wordbank_file_to_game() {
    // Integration test: Load custom word list file -> play game
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let wordbank_path = temp_dir.join("word_guess_test_custom_words.csv");

    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "e,Owl").unwrap();
        writeln!(file, "notes,these,rows,are,skipped").unwrap();
        writeln!(file, "m,planet").unwrap();
        writeln!(file, "h,sphinx").unwrap();
    }

    let wordbank = load_wordbank_from_file(&wordbank_path).unwrap();
    assert_eq!(wordbank.len(), 3);
    assert_eq!(wordbank.pool(Difficulty::Easy), ["owl".to_string()]);

    let input = "e\no\nw\nl\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut rng = StdRng::seed_from_u64(9);
    let end = game_loop(&wordbank, &mut interface, &mut rng, &GameOptions::default()).unwrap();
    assert_eq!(end, SessionEnd::Finished(Outcome::Won));

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_malformed_file_reports_line() {
    use std::fs;

    let path = std::env::temp_dir().join("word_guess_test_malformed.csv");
    fs::write(&path, "e,cat\nm,good,b4d\n").unwrap();

    let err = load_wordbank_from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("line 2:"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_embedded_wordbank_supports_every_difficulty() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for difficulty in Difficulty::ALL {
        let secret = wordbank.pick(difficulty, &mut rng).unwrap();
        let engine = GameEngine::new(secret, difficulty.guess_budget()).unwrap();
        assert_eq!(engine.remaining_guesses(), difficulty.guess_budget());
        assert_eq!(engine.revealed().chars().count(), secret.len());
        assert!(engine.revealed().chars().all(|c| c == PLACEHOLDER));
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK).unwrap();
    let picks = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| wordbank.pick(Difficulty::Medium, &mut rng).unwrap().to_string())
            .collect()
    };

    assert_eq!(picks(5), picks(5));
}

#[test]
fn test_engine_playthrough_matches_status_output() {
    // Drive the engine directly the way a custom front end would
    let mut engine = GameEngine::new("cat", 4).unwrap();
    let mut seen = Vec::new();

    for c in ['a', 'z', 'z', 'c', 't'] {
        let turn = engine.submit_guess(c.to_string().parse().unwrap()).unwrap();
        seen.push((turn.view.revealed.clone(), turn.view.remaining_guesses));
    }

    assert_eq!(
        seen,
        vec![
            ("•a•".to_string(), 4),
            ("•a•".to_string(), 3),
            ("•a•".to_string(), 3),
            ("ca•".to_string(), 3),
            ("cat".to_string(), 3),
        ]
    );
    assert_eq!(engine.outcome(), Ok(Outcome::Won));
    assert_eq!(
        engine.submit_guess(Letter::try_from('q').unwrap()),
        Err(ContractViolation::GameOver)
    );
}
