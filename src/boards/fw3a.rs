//! BLF/TLF FW3A, ATtiny1616 driver: 1x7135 + 7x7135 + direct-drive FET.
//!
//! Two linear stages stack under the FET. Dynamic PWM covers the bottom
//! of the 1x7135 range; from there up the period stays at 255. The last
//! level is FET only.

use crate::error::Result;
use crate::table::{Column, LevelTable, Tops};

use super::{Board, BoardId, Policy, RAMP_SIZE, Stage, TOP_INIT};

pub fn board() -> Result<Board> {
    let table = LevelTable::new(
        RAMP_SIZE,
        &[
            Column::Narrow(&LOW_7135),
            Column::Narrow(&MULTI_7135),
            Column::Narrow(&FET),
        ],
        Tops::PerLevel(&TOPS),
    )?;
    Board::new(
        BoardId::Fw3a,
        table,
        &[
            Stage::new("1x7135", Policy::Stacked { full: TOP_INIT }),
            Stage::new("7x7135", Policy::Stacked { full: TOP_INIT }),
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
static MULTI_7135: [u8; 151] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 4, 6, 8, 10, 13, 15, 17, 19, 22, 24, 26, 29, 31,
    34, 37, 39, 42, 45, 48, 51, 54, 57, 60, 64, 67, 70, 74, 77, 81,
    85, 88, 92, 96, 100, 104, 108, 112, 116, 121, 125, 130, 134, 139, 143, 148,
    153, 158, 163, 168, 173, 179, 184, 189, 195, 201, 206, 212, 218, 224, 230, 236,
    243, 249, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 0,
];
static FET: [u8; 151] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 8, 19, 31, 43, 55, 67, 79, 91, 104, 117, 130, 143, 157,
    170, 184, 198, 212, 226, 240, 255,
];
static TOPS: [u16; 151] = [
    255, 4096, 3831, 3570, 3314, 3063, 2817, 2577, 2342, 2115, 1894, 1682, 1477, 1281, 2237, 2005,
    1784, 1576, 1380, 1196, 1111, 1026, 1442, 1348, 1215, 1091, 976, 871, 774, 1031, 942, 860,
    784, 714, 650, 591, 538, 652, 602, 555, 513, 473, 437, 403, 372, 343, 398, 370,
    345, 322, 299, 278, 311, 292, 273, 255, 278, 261, 245, 263, 247, 232, 246, 231,
    243, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255,
];
