use crate::game::{parse_games, Game};
use crate::input::Input;

use super::{check_game, game_power, game_power_sum, valid_id_sum, BagLimits};

const SAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

fn games(text: &'static str) -> Vec<Game> {
    parse_games(Input::new(text.as_bytes())).unwrap()
}

#[test]
fn within_limits() {
    let games = games("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green");

    assert_eq!(check_game(&games[0], &BagLimits::default()), 1);
    assert_eq!(game_power(&games[0]), 48);
}

#[test]
fn over_limit() {
    let games = games("Game 2: 20 red");
    assert_eq!(check_game(&games[0], &BagLimits::default()), 0);
}

#[test]
fn limits_are_inclusive() {
    let limits = BagLimits::default();

    let exact = games("Game 1: 12 red, 13 green, 14 blue");
    assert_eq!(check_game(&exact[0], &limits), 1);

    for game in &games("Game 1: 13 red\nGame 2: 14 green\nGame 3: 15 blue") {
        assert_eq!(check_game(game, &limits), 0, "game {}", game.num());
    }
}

#[test]
fn check_game_is_id_or_zero() {
    for game in &games(SAMPLE) {
        let checked = check_game(game, &BagLimits::default());
        assert!(checked == 0 || checked == game.num());
    }
}

#[test]
fn absent_color_zeroes_power() {
    let games = games("Game 1: 2 red, 3 blue; 1 red");
    assert_eq!(game_power(&games[0]), 0);
}

#[test]
fn no_draws_is_valid() {
    let games = games("Game 7:");

    assert_eq!(check_game(&games[0], &BagLimits::default()), 7);
    assert_eq!(game_power(&games[0]), 0);
}

#[test]
fn sample_sums() {
    let games = games(SAMPLE);

    assert_eq!(valid_id_sum(&games, &BagLimits::default()), 8);
    assert_eq!(game_power_sum(&games), 2286);
}
