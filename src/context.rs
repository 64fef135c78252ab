//! Chat context assembly: ordered history plus optional code context.
//!
//! This layer is lossless: it never truncates what it is given. The only
//! turn it drops is the canned introductory mentor turn (`seed`), which
//! must not be echoed back to the model.

use crate::config::Prompts;
use crate::domain::{ConversationRole, ConversationTurn};
use crate::util::fill_template;

/// Render outbound history lines, oldest first. Seed turns are skipped
/// wherever they appear in the sequence.
pub fn render_history(history: &[ConversationTurn]) -> String {
  let lines: Vec<String> = history
    .iter()
    .filter(|t| !t.seed)
    .map(|t| {
      let who = match t.role {
        ConversationRole::Learner => "Student",
        ConversationRole::Mentor => "DevMentor",
      };
      format!("{}: {}", who, t.text)
    })
    .collect();

  if lines.is_empty() {
    String::new()
  } else {
    format!("\n\nConversation History:\n{}\n", lines.join("\n"))
  }
}

/// Fenced code-context block. The language tag defaults to a generic
/// script language when the caller doesn't supply one.
pub fn render_code_context(code: Option<&str>, language: Option<&str>) -> String {
  match code {
    Some(c) if !c.trim().is_empty() => {
      let lang = language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("javascript");
      format!("\n\nCurrent Code Context:\n```{}\n{}\n```", lang, c)
    }
    _ => String::new(),
  }
}

/// Full chat prompt for one learner message.
pub fn build_chat_prompt(
  prompts: &Prompts,
  message: &str,
  history: &[ConversationTurn],
  code: Option<&str>,
  language: Option<&str>,
) -> String {
  fill_template(
    &prompts.chat_user_template,
    &[
      ("message", message),
      ("history", &render_history(history)),
      ("context", &render_code_context(code, language)),
    ],
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn turn(role: ConversationRole, text: &str, seed: bool) -> ConversationTurn {
    ConversationTurn { role, text: text.into(), seed }
  }

  #[test]
  fn seed_turn_is_excluded_regardless_of_position() {
    let history = vec![
      turn(ConversationRole::Mentor, "Welcome! Ask me anything.", true),
      turn(ConversationRole::Learner, "what is a closure?", false),
      turn(ConversationRole::Mentor, "A closure captures its scope.", false),
    ];
    let rendered = render_history(&history);
    assert!(!rendered.contains("Welcome!"));
    assert!(rendered.contains("Student: what is a closure?"));
    assert!(rendered.contains("DevMentor: A closure captures its scope."));

    // Same seed turn in the middle is still dropped.
    let reordered = vec![history[1].clone(), history[0].clone(), history[2].clone()];
    assert!(!render_history(&reordered).contains("Welcome!"));
  }

  #[test]
  fn history_order_is_preserved_oldest_first() {
    let history = vec![
      turn(ConversationRole::Learner, "first", false),
      turn(ConversationRole::Mentor, "second", false),
      turn(ConversationRole::Learner, "third", false),
    ];
    let rendered = render_history(&history);
    let first = rendered.find("first").unwrap();
    let second = rendered.find("second").unwrap();
    let third = rendered.find("third").unwrap();
    assert!(first < second && second < third);
  }

  #[test]
  fn empty_history_renders_nothing() {
    assert_eq!(render_history(&[]), "");
    let only_seed = vec![turn(ConversationRole::Mentor, "hi", true)];
    assert_eq!(render_history(&only_seed), "");
  }

  #[test]
  fn code_context_defaults_language_tag() {
    let block = render_code_context(Some("let x = 1;"), None);
    assert!(block.contains("```javascript\nlet x = 1;\n```"));
    let tagged = render_code_context(Some("p { color: red }"), Some("css"));
    assert!(tagged.contains("```css"));
    assert_eq!(render_code_context(None, Some("css")), "");
    assert_eq!(render_code_context(Some("   "), None), "");
  }

  #[test]
  fn chat_prompt_embeds_all_parts() {
    let prompts = Prompts::default();
    let history = vec![turn(ConversationRole::Learner, "earlier question", false)];
    let prompt =
      build_chat_prompt(&prompts, "help me debug", &history, Some("1+1"), Some("javascript"));
    assert!(prompt.contains("help me debug"));
    assert!(prompt.contains("Student: earlier question"));
    assert!(prompt.contains("```javascript\n1+1\n```"));
  }
}
