pub mod bag;
pub mod cli;
pub mod game;
pub mod input;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::bag::{check_game, game_power, game_power_sum, valid_id_sum, BagLimits};
    pub use crate::cli::LineCol;
    pub use crate::game::{parse_games, CubeColor, CubeSet, Cubes, Game};
    pub use crate::input::{ErrorKind, Input, InputError};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Embed a puzzle input from the calling crate's `inputs/` directory.
///
/// Evaluates to the input processor paired with the path used to label
/// diagnostics.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        (
            $crate::input::Input::new(include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/inputs/",
                $path
            ))),
            concat!("inputs/", $path),
        )
    }};
}
