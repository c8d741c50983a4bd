//! Canned offline answers used when every provider declines
//!
//! Keyword checks run in a fixed order, so a message matching several
//! groups always gets the first group's answer. Downstream behavior
//! depends on that ordering; keep the chain as-is.

/// Pick a canned answer for the given message. Total: always returns a
/// non-empty paragraph, with a generic prompt-back as the last resort.
pub fn offline_reply(user_text: &str) -> &'static str {
    let input = user_text.to_lowercase();

    if input.contains("black hole") {
        "Black holes are fascinating cosmic objects where gravity is so strong that nothing can \
         escape once it crosses the event horizon. They form when massive stars collapse at the \
         end of their lives."
    } else if input.contains("mars") {
        "Mars is our neighboring red planet, currently being explored by rovers like Perseverance. \
         It has evidence of ancient water flows and is a prime target for future human missions."
    } else if input.contains("space") || input.contains("universe") {
        "The universe is an incredible place filled with billions of galaxies, each containing \
         billions of stars. We're constantly discovering new exoplanets and learning more about \
         our cosmic neighborhood!"
    } else {
        "That's an interesting space question! I'd love to help you explore the cosmos. Ask me \
         about planets, stars, galaxies, space missions, or any other astronomical phenomena."
    }
}
