//! Prompt templates for TLDR generation.

use crate::core::config::SummaryLength;

/// Prompt used when probing whether an API key works.
pub const KEY_CHECK_PROMPT: &str = "Say 'test' if you can read this.";

/// Output cap for the key check request.
pub const KEY_CHECK_MAX_OUTPUT_TOKENS: u32 = 10;

const MEDIUM_INSTRUCTIONS: &str = "Create an explanatory TLDR with exactly 4-5 bullet points. \
Each bullet must be a complete sentence that clearly explains a key point or main idea. \
The summary should give a good overview of what the content covers with moderate detail.";

const LONG_INSTRUCTIONS: &str = "Create a comprehensive and detailed TLDR with exactly 8-10 bullet points. \
Each bullet must be a complete sentence that clearly explains a key point, main idea, or important detail. \
The summary should thoroughly explain what the content is about with comprehensive coverage of all major points.";

/// Bullet-count instruction for a length mode.
#[must_use]
pub const fn length_instructions(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Medium => MEDIUM_INSTRUCTIONS,
        SummaryLength::Long => LONG_INSTRUCTIONS,
    }
}

/// Output token cap, sized so the requested bullet count fits without truncation.
#[must_use]
pub const fn max_output_tokens(length: SummaryLength) -> u32 {
    match length {
        SummaryLength::Medium => 1000,
        SummaryLength::Long => 2000,
    }
}

/// Renders the full prompt: rules, length instructions, then the note verbatim.
#[must_use]
pub fn build_prompt(content: &str, length: SummaryLength) -> String {
    format!(
        "You are a helpful assistant that creates clear, explanatory TLDR summaries of notes.

Your task is to create a summary that helps someone understand what the content is about.

CRITICAL REQUIREMENTS:
- Each bullet point MUST be a complete, full sentence (not cut off or incomplete)
- Each bullet should clearly explain what the content is about
- The summary should tell the reader the main topic and key points
- Use clear, understandable language
- Make sure each bullet makes sense on its own

{instructions}

Example format (adjust number of bullets based on length setting):
- First complete sentence explaining a key point
- Second complete sentence explaining a key point
- Third complete sentence explaining a key point

IMPORTANT: Each bullet point must be a complete sentence. Do NOT cut off mid-sentence. \
Do NOT include any other text, explanations, or formatting. Only return the bullet points starting with hyphens.

Here is the note content to summarize:

{content}",
        instructions = length_instructions(length),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_appended_verbatim() {
        let note = "  # Heading\n\nSome *markdown* body.  ";
        let prompt = build_prompt(note, SummaryLength::Medium);
        assert!(prompt.ends_with(note));
    }

    #[test]
    fn test_only_selected_instructions_are_included() {
        let prompt = build_prompt("body", SummaryLength::Medium);
        assert!(prompt.contains(MEDIUM_INSTRUCTIONS));
        assert!(!prompt.contains(LONG_INSTRUCTIONS));
    }
}
