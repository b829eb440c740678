//! Prompt - Rewrite instruction construction
//!
//! The instruction sent to the generation service is a fixed template;
//! the selected tone is the only part that varies.

use crate::domain::value_objects::Tone;
use crate::ports::ChatMessage;

/// Build the system instruction for a rewrite in the given tone.
pub fn build_system_prompt(tone: Tone) -> String {
    format!(
        "You are an expert in corporate communication. Your task is to rewrite \
         the user's draft into a professional email.\n\
         \n\
         Rules:\n\
         1. Tone: {}.\n\
         2. Clear structure: Subject, Greeting, Body, Closing.\n\
         3. Fix spelling and grammar.\n\
         4. Be concise so the email is quick to read.",
        tone.label()
    )
}

/// Build the chat payload for one polish call: the fixed instruction
/// plus the untouched draft.
pub fn build_messages(draft: &str, tone: Tone) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_system_prompt(tone)),
        ChatMessage::user(draft),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    #[test]
    fn test_template_varies_only_in_tone_label() {
        // Replacing each tone's label with a placeholder must leave the
        // same template text for all three tones.
        let normalized: Vec<String> = Tone::ALL
            .iter()
            .map(|tone| build_system_prompt(*tone).replace(tone.label(), "<TONE>"))
            .collect();

        assert_eq!(normalized[0], normalized[1]);
        assert_eq!(normalized[1], normalized[2]);
    }

    #[test]
    fn test_system_prompt_contains_tone_label() {
        for tone in Tone::ALL {
            assert!(build_system_prompt(tone).contains(tone.label()));
        }
    }

    #[test]
    fn test_messages_carry_instruction_and_raw_draft() {
        let messages = build_messages("ask juan to move the meeting", Tone::Formal);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "ask juan to move the meeting");
    }
}
