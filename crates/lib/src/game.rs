//! The cube game log: data model and parser.


use arrayvec::ArrayVec;
use bstr::BStr;

use crate::input::{ErrorKind, FromInput, Input, InputError};

type Result<T> = std::result::Result<T, InputError>;

/// One of the three cube colors drawn from the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl CubeColor {
    /// The color's name as it appears in the log.
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeColor::Red => "red",
            CubeColor::Green => "green",
            CubeColor::Blue => "blue",
        }
    }

    fn from_word(word: &[u8]) -> Option<Self> {
        if word.eq_ignore_ascii_case(b"red") {
            Some(CubeColor::Red)
        } else if word.eq_ignore_ascii_case(b"green") {
            Some(CubeColor::Green)
        } else if word.eq_ignore_ascii_case(b"blue") {
            Some(CubeColor::Blue)
        } else {
            None
        }
    }
}

impl FromInput for CubeColor {
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let index = p.index();

        let Some((n, word)) = p.try_next_word::<&BStr>()? else {
            return Ok(None);
        };

        let Some(color) = Self::from_word(word) else {
            return Err(InputError::new(
                index.saturating_add(n)..p.index(),
                ErrorKind::UnknownColor(word),
            ));
        };

        Ok(Some(color))
    }
}

/// The count shown for a single color within one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubes {
    color: CubeColor,
    amount: u32,
}

impl Cubes {
    #[inline]
    pub fn color(&self) -> CubeColor {
        self.color
    }

    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl FromInput for Cubes {
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let Some(amount) = u32::try_from_input(p)? else {
            return Ok(None);
        };

        let color = p.next::<CubeColor>()?;
        Ok(Some(Cubes { color, amount }))
    }
}

/// One draw from the bag, showing at most one count per color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeSet {
    cubes: ArrayVec<Cubes, 3>,
}

impl CubeSet {
    /// The counts shown, in the order they appear in the log.
    #[inline]
    pub fn cubes(&self) -> &[Cubes] {
        &self.cubes
    }

    /// The count shown for the given color, 0 if the color was not drawn.
    pub fn amount(&self, color: CubeColor) -> u32 {
        self.cubes
            .iter()
            .find(|c| c.color == color)
            .map(|c| c.amount)
            .unwrap_or_default()
    }
}

impl FromInput for CubeSet {
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        p.trim();

        if p.is_empty() {
            return Ok(None);
        }

        let mut cubes = ArrayVec::new();

        for mut part in p.split(b',') {
            let index = part.index();

            let Some(c) = Cubes::try_from_input(&mut part)? else {
                return Err(InputError::new(index..part.index(), ErrorKind::EmptyDraw));
            };

            if cubes.iter().any(|seen: &Cubes| seen.color == c.color) {
                return Err(InputError::new(
                    index..part.index(),
                    ErrorKind::DuplicateColor(c.color.as_str()),
                ));
            }

            // Distinct colors, so the three-element capacity cannot overflow.
            cubes.push(c);

            part.trim();

            if !part.is_empty() {
                return Err(InputError::new(
                    part.index()..part.index().saturating_add(part.len()),
                    ErrorKind::Trailing(part.as_bstr()),
                ));
            }
        }

        Ok(Some(CubeSet { cubes }))
    }
}

/// One game in the log: its identifier and the draws in the order shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    num: u32,
    shown: Vec<CubeSet>,
}

impl Game {
    #[inline]
    pub fn num(&self) -> u32 {
        self.num
    }

    #[inline]
    pub fn shown(&self) -> &[CubeSet] {
        &self.shown
    }
}

impl FromInput for Game {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedKeyword("Game")
    }

    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        p.trim();

        if p.is_empty() {
            return Ok(None);
        }

        let mut header = p.until(b':')?;
        let index = header.index();

        let Some((n, keyword)) = header.try_next_word::<&BStr>()? else {
            return Err(InputError::new(
                index..header.index(),
                ErrorKind::ExpectedKeyword("Game"),
            ));
        };

        if !keyword.eq_ignore_ascii_case(b"Game") {
            return Err(InputError::new(
                index.saturating_add(n)..header.index(),
                ErrorKind::ExpectedKeyword("Game"),
            ));
        }

        let num = header.next::<u32>()?;

        header.trim();

        if !header.is_empty() {
            return Err(InputError::new(
                header.index()..header.index().saturating_add(header.len()),
                ErrorKind::Trailing(header.as_bstr()),
            ));
        }

        p.trim();

        let mut shown = Vec::new();

        for mut draw in p.split(b';') {
            let index = draw.index();

            let Some(set) = CubeSet::try_from_input(&mut draw)? else {
                return Err(InputError::new(index..draw.index(), ErrorKind::EmptyDraw));
            };

            shown.push(set);
        }

        Ok(Some(Game { num, shown }))
    }
}

/// Parse every non-empty line of a game log, in order.
///
/// The first malformed line fails the whole batch.
pub fn parse_games(mut input: Input) -> Result<Vec<Game>> {
    let mut games = Vec::new();

    for mut line in input.lines() {
        if let Some(game) = Game::try_from_input(&mut line)? {
            games.push(game);
        }
    }

    Ok(games)
}
