//! Lumintop FWAA: 1x7135 + FET on a fixed 8-bit period.
//!
//! No dynamic PWM here. The regulator tops out at level 65 and hands off
//! to the FET; the last level is FET only.

use crate::error::Result;
use crate::table::{Column, LevelTable, Tops};

use super::{Board, BoardId, Policy, RAMP_SIZE, Stage, TOP_INIT};

pub fn board() -> Result<Board> {
    let table = LevelTable::new(
        RAMP_SIZE,
        &[Column::Narrow(&LOW_7135), Column::Narrow(&FET)],
        Tops::Fixed(TOP_INIT),
    )?;
    Board::new(
        BoardId::Fwaa,
        table,
        &[
            Stage::new("1x7135", Policy::Stacked { full: TOP_INIT }),
            Stage::new("FET", Policy::Simple),
        ],
    )
}

// Row 0 is the off row; rows 1..=150 are generator output.
static LOW_7135: [u8; 151] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 6, 7, 8, 9, 10, 12,
    13, 14, 15, 17, 19, 20, 22, 24, 26, 29, 31, 34, 36, 39, 42, 45,
    48, 51, 55, 59, 62, 66, 70, 75, 79, 84, 89, 93, 99, 104, 110, 115,
    121, 127, 134, 140, 147, 154, 161, 168, 176, 184, 192, 200, 209, 217, 226, 236,
    245, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 0,
];
static FET: [u8; 151] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 3, 4, 5, 7, 8, 9, 11, 12, 14, 15, 17, 19,
    20, 22, 24, 25, 27, 29, 31, 33, 35, 37, 39, 41, 43, 45, 48, 50,
    52, 55, 57, 59, 62, 64, 67, 70, 72, 75, 78, 81, 84, 87, 90, 93,
    96, 99, 102, 105, 109, 112, 115, 119, 122, 126, 129, 133, 137, 141, 144, 148,
    152, 156, 160, 165, 169, 173, 177, 182, 186, 191, 195, 200, 205, 209, 214, 219,
    224, 229, 234, 239, 244, 250, 255,
];
