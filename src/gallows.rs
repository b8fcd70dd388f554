//! ASCII gallows drawn next to the word.

pub const STAGES: usize = 6;

const FIGURES: [&str; STAGES + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Figure stage for `wrong` misses out of `budget`, rounded up so that the
/// last miss always completes the figure.
pub fn stage(wrong: usize, budget: usize) -> usize {
    if budget == 0 {
        return 0;
    }
    let wrong = wrong.min(budget);
    (wrong * STAGES).div_ceil(budget)
}

pub fn figure(wrong: usize, budget: usize) -> &'static str {
    FIGURES[stage(wrong, budget)]
}
