use phf::{Map, phf_map};

/// Known-stable neutron counts per proton count, ascending, for Z in 1..=92.
/// Entries that are present but empty (technetium, promethium, the gap from
/// polonium through actinium, protactinium) mark elements with no exactly
/// stable isotope; callers fall back to the approximate valley curve there.
/// Long-lived primordial nuclides such as bismuth-209, thorium-232 and the
/// uranium isotopes are counted as stable for the purposes of this toy.
#[rustfmt::skip]
pub(super) static STABLE_NEUTRON_COUNTS: Map<u32, &'static [u32]> = phf_map! {
    1u32 => &[0, 1],
    2u32 => &[1, 2],
    3u32 => &[3, 4],
    4u32 => &[5],
    5u32 => &[5, 6],
    6u32 => &[6, 7],
    7u32 => &[7, 8],
    8u32 => &[8, 9, 10],
    9u32 => &[10],
    10u32 => &[10, 11, 12],
    11u32 => &[12],
    12u32 => &[12, 13, 14],
    13u32 => &[14],
    14u32 => &[14, 15, 16],
    15u32 => &[16],
    16u32 => &[16, 17, 18, 20],
    17u32 => &[18, 20],
    18u32 => &[18, 20, 22],
    19u32 => &[20, 22],
    20u32 => &[20, 22, 23, 24, 26, 28],
    21u32 => &[24],
    22u32 => &[24, 25, 26, 27, 28],
    23u32 => &[28],
    24u32 => &[26, 28, 29, 30],
    25u32 => &[30],
    26u32 => &[28, 30, 31, 32],
    27u32 => &[32],
    28u32 => &[30, 32, 33, 34, 36],
    29u32 => &[34, 36],
    30u32 => &[34, 36, 37, 38, 40],
    31u32 => &[38, 40],
    32u32 => &[38, 40, 41, 42],
    33u32 => &[42],
    34u32 => &[40, 42, 43, 44, 46],
    35u32 => &[44, 46],
    36u32 => &[42, 44, 46, 47, 48, 50],
    37u32 => &[48],
    38u32 => &[46, 48, 49, 50],
    39u32 => &[50],
    40u32 => &[50, 51, 52, 54],
    41u32 => &[52],
    42u32 => &[50, 52, 53, 54, 55, 56],
    43u32 => &[],
    44u32 => &[52, 54, 55, 56, 57, 58, 60],
    45u32 => &[58],
    46u32 => &[56, 58, 59, 60, 62, 64],
    47u32 => &[60, 62],
    48u32 => &[58, 60, 62, 63, 64, 66],
    49u32 => &[64],
    50u32 => &[62, 64, 65, 66, 67, 68, 69, 70, 72, 74],
    51u32 => &[70, 72],
    52u32 => &[68, 70, 71, 72, 73, 74],
    53u32 => &[74],
    54u32 => &[72, 74, 75, 76, 77, 78, 80],
    55u32 => &[78],
    56u32 => &[76, 78, 79, 80, 81, 82],
    57u32 => &[82],
    58u32 => &[78, 80, 82, 84],
    59u32 => &[82],
    60u32 => &[82, 83, 85, 86, 88],
    61u32 => &[],
    62u32 => &[82, 87, 88, 90, 92],
    63u32 => &[90],
    64u32 => &[90, 91, 92, 93, 94, 96],
    65u32 => &[94],
    66u32 => &[90, 92, 94, 95, 96, 97, 98],
    67u32 => &[98],
    68u32 => &[94, 96, 98, 99, 100, 102],
    69u32 => &[100],
    70u32 => &[98, 100, 101, 102, 103, 104, 106],
    71u32 => &[104],
    72u32 => &[104, 105, 106, 107, 108],
    73u32 => &[108],
    74u32 => &[108, 109, 110, 112],
    75u32 => &[110],
    76u32 => &[111, 112, 113, 114, 116],
    77u32 => &[114, 116],
    78u32 => &[116, 117, 118, 120],
    79u32 => &[118],
    80u32 => &[116, 118, 119, 120, 121, 122, 124],
    81u32 => &[122, 124],
    82u32 => &[122, 124, 125, 126],
    83u32 => &[126],
    84u32 => &[],
    85u32 => &[],
    86u32 => &[],
    87u32 => &[],
    88u32 => &[],
    89u32 => &[],
    90u32 => &[142],
    91u32 => &[],
    92u32 => &[143, 146],
};
