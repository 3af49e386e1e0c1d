//! Fixed prompt templates for the two oracle calls
//!
//! The completion template keeps continuations short and word-boundary
//! shaped; the refine template asks for the rewritten prompt and nothing
//! else, since its output lands directly in the Refine step's editor.

/// System prompt for inline completions
pub const COMPLETE_SYSTEM: &str = "You are a master prompt engineer AI, you are an expert at \
     completing sentences and providing short, concise text completions.";

/// System prompt for draft refinement
pub const REFINE_SYSTEM: &str = "As my 'Master Prompt Engineer,' your mission is to design an \
     optimal, personalized prompt tailored to my specific needs. You excel at refining prompts \
     to ensure they are clear, concise, and comprehensible.\n\n\
     1. Review and improve the initial prompt.\n\
     2. Break down the prompt into smaller, manageable parts.\n\
     3. Answer with the refined prompt only.";

/// User message asking for a short continuation of `text`
pub fn complete_instruction(text: &str) -> String {
    format!(
        "Complete the sentence precisely (max 8 words): \"{}\". \
         Do not include the original text or any other text or characters.",
        text
    )
}

/// User message asking for a rewrite of `text`
pub fn refine_instruction(text: &str) -> String {
    format!("Please review and improve the following prompt:\n\n{}", text)
}

/// Stop sequences for completions: cut at sentence end or newline
pub const COMPLETE_STOP: [&str; 4] = [".", "!", "?", "\n"];

/// Token and sampling budgets per call kind
pub const COMPLETE_MAX_TOKENS: u32 = 32;
pub const COMPLETE_TEMPERATURE: f64 = 0.6;
pub const REFINE_MAX_TOKENS: u32 = 1000;
pub const REFINE_TEMPERATURE: f64 = 0.7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_instruction_embeds_text() {
        let instruction = complete_instruction("Write me a ");
        assert!(instruction.contains("\"Write me a \""));
        assert!(instruction.contains("max 8 words"));
    }

    #[test]
    fn test_refine_instruction_embeds_text() {
        let instruction = refine_instruction("my draft");
        assert!(instruction.ends_with("my draft"));
        assert!(instruction.starts_with("Please review and improve"));
    }

    #[test]
    fn test_complete_stop_sequences_end_sentences() {
        assert!(COMPLETE_STOP.contains(&"."));
        assert!(COMPLETE_STOP.contains(&"\n"));
    }
}
