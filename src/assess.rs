//! Skill-assessment quiz: fixed ordered question bank and local scoring.
//!
//! Scoring never touches the model. The mentor's assess-skill operation
//! only enriches a scored quiz with strengths/topics text; the tier is a
//! pure function of the percentage and stays local either way.

use crate::domain::SkillTier;

pub struct Question {
  pub id: &'static str,
  pub question: &'static str,
  pub options: [&'static str; 4],
  pub correct_answer: usize,
  pub explanation: &'static str,
  pub difficulty: SkillTier,
}

pub const QUESTION_BANK: &[Question] = &[
  Question {
    id: "1",
    question: "What is a variable in programming?",
    options: [
      "A container that stores data values",
      "A function that performs calculations",
      "A loop that repeats code",
      "A conditional statement",
    ],
    correct_answer: 0,
    explanation: "A variable is a container that stores data values that can be used throughout your program.",
    difficulty: SkillTier::Beginner,
  },
  Question {
    id: "2",
    question: "Which of the following is the correct way to declare a function in JavaScript?",
    options: [
      "function myFunction() {}",
      "def myFunction() {}",
      "func myFunction() {}",
      "function myFunction[] {}",
    ],
    correct_answer: 0,
    explanation: "In JavaScript, functions are declared using the \"function\" keyword followed by the function name and parentheses.",
    difficulty: SkillTier::Beginner,
  },
  Question {
    id: "3",
    question: "What does \"const\" mean in JavaScript?",
    options: [
      "It creates a variable that can be changed",
      "It creates a constant that cannot be reassigned",
      "It creates a temporary variable",
      "It creates a global variable",
    ],
    correct_answer: 1,
    explanation: "The \"const\" keyword creates a constant that cannot be reassigned after its initial declaration.",
    difficulty: SkillTier::Beginner,
  },
  Question {
    id: "4",
    question: "What is the purpose of a for loop?",
    options: [
      "To make decisions in code",
      "To repeat code a specific number of times",
      "To store multiple values",
      "To define a function",
    ],
    correct_answer: 1,
    explanation: "A for loop is used to repeat a block of code a specific number of times.",
    difficulty: SkillTier::Intermediate,
  },
  Question {
    id: "5",
    question: "What is an array?",
    options: [
      "A single data value",
      "A collection of related data items",
      "A type of function",
      "A conditional statement",
    ],
    correct_answer: 1,
    explanation: "An array is a data structure that can store multiple values in a single variable.",
    difficulty: SkillTier::Intermediate,
  },
];

/// Locally computed quiz score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredQuiz {
  pub raw_score: u32,
  pub total_questions: u32,
  pub percentage: f32,
  pub skill_tier: SkillTier,
}

/// Tier boundaries are inclusive: ≥80 advanced, ≥60 intermediate.
pub fn skill_tier_for(percentage: f32) -> SkillTier {
  if percentage >= 80.0 {
    SkillTier::Advanced
  } else if percentage >= 60.0 {
    SkillTier::Intermediate
  } else {
    SkillTier::Beginner
  }
}

/// Score an ordered answer set (option indices) against the bank. Missing
/// answers count as wrong; extra answers are ignored.
pub fn score_answers(answers: &[usize]) -> ScoredQuiz {
  let raw_score = QUESTION_BANK
    .iter()
    .zip(answers.iter())
    .filter(|(q, a)| q.correct_answer == **a)
    .count() as u32;
  let total_questions = QUESTION_BANK.len() as u32;
  let percentage = (raw_score as f32 / total_questions as f32) * 100.0;
  ScoredQuiz { raw_score, total_questions, percentage, skill_tier: skill_tier_for(percentage) }
}

/// Q&A transcript sent to the assess-skill operation as context.
pub fn qa_transcript(answers: &[usize]) -> String {
  QUESTION_BANK
    .iter()
    .enumerate()
    .map(|(i, q)| {
      let answer = answers
        .get(i)
        .and_then(|a| q.options.get(*a))
        .copied()
        .unwrap_or("(no answer)");
      format!("Q: {}\nA: {}", q.question, answer)
    })
    .collect::<Vec<_>>()
    .join("\n\n")
}

#[cfg(test)]
pub fn perfect_answers() -> Vec<usize> {
  QUESTION_BANK.iter().map(|q| q.correct_answer).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn perfect_score_is_advanced() {
    let score = score_answers(&perfect_answers());
    assert_eq!(score.raw_score, 5);
    assert_eq!(score.percentage, 100.0);
    assert_eq!(score.skill_tier, SkillTier::Advanced);
  }

  #[test]
  fn all_wrong_is_beginner() {
    // Option 3 is never the correct answer in the bank.
    let score = score_answers(&[3, 3, 3, 3, 3]);
    assert_eq!(score.raw_score, 0);
    assert_eq!(score.percentage, 0.0);
    assert_eq!(score.skill_tier, SkillTier::Beginner);
  }

  #[test]
  fn three_of_five_hits_the_intermediate_boundary() {
    let mut answers = perfect_answers();
    answers[3] = 3;
    answers[4] = 3;
    let score = score_answers(&answers);
    assert_eq!(score.raw_score, 3);
    assert_eq!(score.percentage, 60.0);
    assert_eq!(score.skill_tier, SkillTier::Intermediate);
  }

  #[test]
  fn missing_answers_count_as_wrong() {
    let score = score_answers(&[0, 0]);
    assert_eq!(score.raw_score, 2);
    assert_eq!(score.skill_tier, SkillTier::Beginner);
  }

  #[test]
  fn transcript_lists_every_question_in_order() {
    let t = qa_transcript(&[0, 1]);
    assert!(t.contains("What is a variable in programming?"));
    assert!(t.contains("(no answer)"));
    let first = t.find("variable").unwrap();
    let last = t.find("array").unwrap();
    assert!(first < last);
  }

  #[test]
  fn tier_boundaries_are_inclusive() {
    assert_eq!(skill_tier_for(80.0), SkillTier::Advanced);
    assert_eq!(skill_tier_for(79.9), SkillTier::Intermediate);
    assert_eq!(skill_tier_for(60.0), SkillTier::Intermediate);
    assert_eq!(skill_tier_for(59.9), SkillTier::Beginner);
  }
}
