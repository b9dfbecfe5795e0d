use std::time::Instant;

use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("{0}:{1}: {2}")]
    Parse(&'static str, LineCol, ErrorKind),
}

fn main() -> Result<()> {
    lib::cli::init_logging()?;

    let started = Instant::now();

    let (test, test_path) = lib::input!("test.txt");
    let (input, input_path) = lib::input!("input.txt");

    let test_games = parse(test, test_path)?;
    let input_games = parse(input, input_path)?;

    log::debug!("{test_path}: {} games", test_games.len());
    log::debug!("{input_path}: {} games", input_games.len());

    let limits = BagLimits::default();

    println!("Test valid game sum: {}", valid_id_sum(&test_games, &limits));
    println!("Main valid game sum: {}", valid_id_sum(&input_games, &limits));

    println!("Test total game power: {}", game_power_sum(&test_games));
    println!("Main total game power: {}", game_power_sum(&input_games));

    log::info!("done in {:?}", started.elapsed());
    Ok(())
}

/// Parse one dataset, labelling any failure with its path and position.
fn parse(input: Input, path: &'static str) -> Result<Vec<Game>> {
    match parse_games(input) {
        Ok(games) => Ok(games),
        Err(e) => {
            let pos = lib::cli::position(input.as_data(), e.span());
            Err(Error::Parse(path, pos, e.kind()).into())
        }
    }
}
