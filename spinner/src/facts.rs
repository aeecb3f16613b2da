//! Static fact-of-the-day list shown beside the wheel.

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;

use rand::Rng;

pub const SOCCER_FACTS: [&str; 10] = [
    "The fastest goal ever scored was in 2.8 seconds.",
    "Football is the most popular sport in the world, with over 3.5 billion fans.",
    "The first World Cup was held in 1930 in Uruguay.",
    "Brazil is the only country to have played in every World Cup.",
    "The highest-scoring game ended 149-0, due to a protest.",
    "A professional football player runs about 9.5 miles in a single game.",
    "The maximum number of goals scored by one player in a single match is 16.",
    "The first football game was played in 1869 between Rutgers and Princeton.",
    "The World Cup is held every four years.",
    "The oldest football club in the world is Sheffield F.C., founded in 1857.",
];

/// Pick one fact uniformly.
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SOCCER_FACTS[rng.random_range(0..SOCCER_FACTS.len())]
}
