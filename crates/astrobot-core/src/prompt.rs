//! Space-focused prompt construction
//!
//! Both upstream adapters feed the model the same persona; the local
//! adapter embeds it into a single raw prompt, the hosted adapter sends it
//! as a separate system-role message.

/// System-role message for providers with a chat-style message array.
pub const SYSTEM_PROMPT: &str = "You are AstroBot, an expert space exploration assistant \
     specializing in astronomy, astrophysics, and space science.";

/// Build the full raw prompt for providers that take a single prompt string.
///
/// Pure function: identical input always yields identical output. Empty
/// input is accepted; rejecting empty messages is the facade's job.
pub fn build_prompt(user_text: &str) -> String {
    format!(
        "You are AstroBot, an expert space exploration assistant. You specialize in astronomy, \
         astrophysics, space missions, planets, stars, galaxies, and all things related to space \
         exploration.\n\n\
         User Question: {user_text}\n\n\
         Please provide an informative, engaging response about space topics. Keep responses \
         conversational and educational, around 100-150 words."
    )
}
