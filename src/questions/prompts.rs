//! Prompt template and completion parsing for LLM question generation.

use std::sync::LazyLock;

use regex::Regex;

/// System instruction framing the model as a technical interviewer.
pub const INTERVIEWER_PREAMBLE: &str = "You are a professional technical interviewer.";

/// Build the user prompt asking for 3-5 technical questions.
pub fn technical_question_prompt(desired_role: &str, experience: &str, tech_stack: &str) -> String {
    format!(
        "You are a senior technical interviewer.\n\
         \n\
         Candidate Role: {desired_role}\n\
         Years of Experience: {experience}\n\
         Tech Stack: {tech_stack}\n\
         \n\
         IMPORTANT INSTRUCTIONS:\n\
         - Generate ONLY technical interview questions\n\
         - Questions MUST test knowledge of the given tech stack\n\
         - DO NOT ask about years of experience, location, or personal details\n\
         - DO NOT repeat the input information\n\
         - DO NOT ask generic HR questions\n\
         - Ask 3 to 5 clear, technical questions\n\
         - Return ONLY a numbered list of questions\n\
         - Do NOT include any explanation or extra text\n\
         \n\
         Example format:\n\
         1. Question one?\n\
         2. Question two?\n\
         3. Question three?"
    )
}

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s*(.+)$").unwrap());

/// Parse a completion into discrete questions.
///
/// Numbered lines ("1. …" or "1) …") are extracted in order. A completion
/// with no numbered lines falls back to its non-empty lines, so a model
/// that ignores the format instruction still yields usable questions.
pub fn parse_question_list(completion: &str) -> Vec<String> {
    let numbered: Vec<String> = completion
        .lines()
        .filter_map(|line| {
            NUMBERED_LINE
                .captures(line)
                .map(|captures| captures[1].trim().to_string())
        })
        .collect();

    if !numbered.is_empty() {
        return numbered;
    }

    completion
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
