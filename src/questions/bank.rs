//! Rule-based question source backed by fixed per-stack banks.

use async_trait::async_trait;

use crate::error::QuestionError;

use super::{MAX_QUESTIONS, QuestionSource};

/// Keyword-matched question banks, evaluated in table order.
///
/// When several keywords match, the banks are concatenated in this order
/// and the combined list is cut to [`MAX_QUESTIONS`], so a second matched
/// bank only contributes if the first one ran short.
const BANKS: [(&str, [&str; 5]); 3] = [
    (
        "mern",
        [
            "How does the virtual DOM in React decide what to re-render?",
            "How do you manage application state in a large React app, and when would you reach for Redux over context?",
            "What is middleware in Express, and how does the order of registration affect a request?",
            "How would you model a one-to-many relationship in MongoDB, and when would you embed versus reference?",
            "How does the Node.js event loop handle a slow database query without blocking other requests?",
        ],
    ),
    (
        "python",
        [
            "What is the difference between a list and a tuple in Python, and when does the distinction matter?",
            "How do Python decorators work? Walk through writing one that times a function.",
            "Explain how Python's GIL affects multi-threaded programs and what you would use instead for CPU-bound work.",
            "What are generators, and how do they differ from returning a list?",
            "How does Python manage memory, and what role does reference counting play?",
        ],
    ),
    (
        "sql",
        [
            "What is the difference between an INNER JOIN and a LEFT JOIN? Give an example where the results differ.",
            "How does an index speed up a query, and when can adding one make writes slower?",
            "Explain the difference between WHERE and HAVING.",
            "What is a transaction, and what do the ACID properties guarantee?",
            "How would you find and remove duplicate rows from a table?",
        ],
    ),
];

/// Generic fallback when no keyword matches the candidate's stack.
const FALLBACK: [&str; 3] = [
    "Describe a technically challenging problem you solved recently. What made it hard?",
    "How do you decide what to test in a feature you just built?",
    "Walk through how you would debug a service that suddenly became slow in production.",
];

/// Matches tech-stack keywords against fixed question banks. Never fails.
pub struct KeywordBank;

impl KeywordBank {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordBank {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionSource for KeywordBank {
    fn name(&self) -> &str {
        "keyword-bank"
    }

    async fn generate(
        &self,
        _desired_role: &str,
        _experience: &str,
        tech_stack: &str,
    ) -> Result<Vec<String>, QuestionError> {
        let haystack = tech_stack.to_lowercase();

        let mut questions: Vec<String> = Vec::new();
        for (keyword, bank) in BANKS {
            if haystack.contains(keyword) {
                tracing::debug!(keyword, "Tech stack matched question bank");
                questions.extend(bank.iter().map(|q| q.to_string()));
            }
        }

        if questions.is_empty() {
            tracing::debug!("No bank keyword matched; using the generic fallback");
            return Ok(FALLBACK.iter().map(|q| q.to_string()).collect());
        }

        questions.truncate(MAX_QUESTIONS);
        Ok(questions)
    }
}
