use alloc::format;
use alloc::string::String;

/// Delay between the winning reply and the celebration message.
pub const CELEBRATION_DELAY_MS: u32 = 1000;

pub const STAR: &str = "⭐";

const MAX_STARS: u32 = 6;
const GUESSES_PER_STAR: u32 = 20;

/// Six stars minus one for every started block of twenty guesses, never
/// fewer than one.
pub const fn star_count(guesses: u32) -> u32 {
    let lost = guesses.div_ceil(GUESSES_PER_STAR);
    let stars = MAX_STARS.saturating_sub(lost);
    if stars == 0 { 1 } else { stars }
}

pub fn celebration_text(guesses: u32) -> String {
    let stars = STAR.repeat(star_count(guesses) as usize);
    format!("{stars} Amazing! You won in {guesses} guesses! {stars}")
}
