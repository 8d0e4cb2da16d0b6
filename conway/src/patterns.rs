// patterns.rs - Named seed patterns for the 20x20 board

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(9, 8), (9, 9), (9, 10)],
    },
    Pattern {
        name: "Toad",
        cells: &[(9, 9), (9, 10), (9, 11), (10, 8), (10, 9), (10, 10)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(7, 7), (7, 8), (8, 7), (8, 8), (9, 9), (9, 10), (10, 9), (10, 10)],
    },
    Pattern {
        name: "Block",
        cells: &[(9, 9), (9, 10), (10, 9), (10, 10)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(9, 10), (9, 11), (10, 9), (10, 10), (11, 10)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
