//! Gaming recommendation quiz.
//!
//! A fixed question set shown in the quiz dialog. Answers are collected by
//! the page but never scored.

use serde::Serialize;

/// Greeting shown when the quiz opens.
pub const WELCOME: &str = "Welcome to the Gaming Recommendation Quiz! This will help us suggest the perfect products for you!";

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`; unanswered when `None`.
    pub answer: Option<usize>,
}

/// The quiz questions, in display order.
pub const QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "What type of games do you prefer?",
        options: ["Action", "RPG", "Sports", "Strategy"],
        answer: None,
    },
    QuizQuestion {
        question: "What's your budget range?",
        options: ["Under $50", "$50-$100", "$100-$200", "Over $200"],
        answer: None,
    },
    QuizQuestion {
        question: "Which platform do you game on?",
        options: ["PC", "PlayStation", "Xbox", "Nintendo Switch"],
        answer: None,
    },
];

/// A freshly opened quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    pub notice: &'static str,
    pub questions: Vec<QuizQuestion>,
}

/// Open the quiz with every question unanswered.
#[must_use]
pub fn start_quiz() -> QuizSession {
    tracing::info!(questions = QUESTIONS.len(), "Gaming quiz started");
    QuizSession {
        notice: WELCOME,
        questions: QUESTIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_quiz_is_unanswered() {
        let session = start_quiz();
        assert_eq!(session.questions.len(), 3);
        assert!(session.questions.iter().all(|q| q.answer.is_none()));
        assert_eq!(session.questions[2].options[3], "Nintendo Switch");
    }
}
