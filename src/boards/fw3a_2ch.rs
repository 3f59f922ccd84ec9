//! FW3A 2-channel ATtiny1616 driver.
//!
//! The light carries two ramps over the same timer. The main ramp stacks
//! a 1x7135 regulator under the FET (linear maxes out at level 82, the
//! FET takes over from there). The alternate ramp runs the 7x7135 bank
//! alone. Both use dynamic PWM in the low range.

use crate::error::Result;
use crate::table::{Column, LevelTable, Tops};

use super::{Board, BoardId, Policy, RAMP_SIZE, Stage, TOP_INIT};

pub fn fet_board() -> Result<Board> {
    let table = LevelTable::new(
        RAMP_SIZE,
        &[Column::Narrow(&LINEAR_7135), Column::Narrow(&LINEAR_FET)],
        Tops::PerLevel(&LINEAR_FET_TOPS),
    )?;
    Board::new(
        BoardId::Fw3a2chFet,
        table,
        &[
            Stage::new("1x7135", Policy::Stacked { full: TOP_INIT }),
            Stage::new("FET", Policy::Simple),
        ],
    )
}

pub fn linear_board() -> Result<Board> {
    let table = LevelTable::new(
        RAMP_SIZE,
        &[Column::Narrow(&MULTI_7135)],
        Tops::PerLevel(&MULTI_7135_TOPS),
    )?;
    Board::new(
        BoardId::Fw3a2chLinear,
        table,
        &[Stage::new("7x7135", Policy::Simple)],
    )
}

// Row 0 is the off row; rows 1..=150 are generator output.
static LINEAR_7135: [u8; 151] = [
    0, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 5, 6, 6,
    7, 8, 8, 9, 10, 11, 12, 13, 14, 16, 17, 18, 20, 21, 23, 25,
    26, 28, 30, 32, 34, 36, 39, 41, 44, 46, 49, 52, 55, 58, 61, 64,
    67, 71, 74, 78, 82, 86, 90, 94, 98, 103, 107, 112, 117, 122, 127, 132,
    138, 143, 149, 155, 161, 167, 173, 180, 186, 193, 200, 207, 215, 222, 230, 238,
    246, 254, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255,
];
static LINEAR_FET: [u8; 151] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 4, 6, 8, 10, 11, 13, 15, 17, 19, 21, 23, 25, 28, 30,
    32, 34, 37, 39, 41, 44, 46, 49, 52, 54, 57, 60, 62, 65, 68, 71,
    74, 77, 80, 83, 86, 89, 93, 96, 99, 103, 106, 110, 113, 117, 121, 124,
    128, 132, 136, 140, 144, 148, 152, 156, 160, 165, 169, 173, 178, 182, 187, 192,
    196, 201, 206, 211, 216, 221, 226,
];
static LINEAR_FET_TOPS: [u16; 151] = [
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

// Alternate ramp: 7x7135 bank alone.
static MULTI_7135: [u8; 151] = [
    0, 1, 1, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7,
    8, 8, 9, 9, 10, 11, 11, 12, 13, 13, 14, 15, 15, 16, 17, 18,
    19, 20, 21, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33,
    34, 35, 36, 37, 38, 39, 40, 41, 43, 44, 45, 46, 48, 49, 50, 51,
    53, 54, 56, 57, 58, 60, 61, 63, 64, 66, 67, 69, 70, 72, 74, 75,
    77, 79, 80, 82, 84, 85, 87, 89, 91, 93, 95, 97, 98, 100, 102, 104,
    106, 108, 111, 113, 115, 117, 119, 121, 124, 126, 128, 130, 133, 135, 137, 140,
    142, 145, 147, 150, 152, 155, 157, 160, 163, 165, 168, 171, 173, 176, 179, 182,
    185, 188, 190, 193, 196, 199, 202, 205, 209, 212, 215, 218, 221, 224, 228, 231,
    234, 238, 241, 245, 248, 251, 255,
];
static MULTI_7135_TOPS: [u16; 151] = [
    255, 4096, 3681, 3247, 2794, 2328, 1856, 2937, 2393, 1860, 2690, 2273, 1875, 2281, 1959, 1658,
    1893, 1646, 1774, 1569, 1381, 1466, 1309, 1166, 1224, 1104, 996, 1033, 942, 858, 882, 810,
    746, 687, 634, 586, 604, 561, 522, 487, 454, 425, 397, 409, 385, 362, 341, 321,
    302, 311, 295, 279, 286, 271, 257, 263, 250, 255, 258, 246, 249, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255,
];
