//! Flavor text shown after a shot lands

use rand::Rng;

pub const HIT_MESSAGES: &[&str] = &[
    "Wow, you actually hit something! Did a blindfold help?",
    "Nice job! You finally made a ship sink instead of your hopes.",
    "Incredible! You hit the target. Did you use cheat codes?",
    "Well, well, well, look who’s a naval mastermind now!",
    "You sunk the ship! You must have hired a pro aim coach.",
    "Amazing! You hit the target. The ship’s ghost is crying now.",
    "Bravo! You hit the ship. Did you sacrifice your accuracy to the gods?",
    "Impressive! A broken clock is right twice a day, and so are you!",
    "Congrats! You finally managed to hit something. Better late than never!",
];

pub const MISS_MESSAGES: &[&str] = &[
    "Miss! You threw a torpedo into the ocean, genius!",
    "Whiff! Did you even aim?",
    "Fail! You might want to consider a new hobby.",
    "Oops! Did you just try to hit a ghost?",
    "Miss! Are you sure you’re not blind?",
    "Fail! You’re as accurate as a broken compass.",
    "Miss! Maybe you should try throwing peanuts instead.",
    "Epic fail! You couldn’t hit water if you fell out of a boat.",
    "Nope! Even a blindfolded squirrel would have hit better.",
];

/// Pick one message uniformly at random
pub fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}
