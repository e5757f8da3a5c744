//! Interactive review of generated keywords.

use anyhow::{Context, Result, bail};
use console::style;

use crate::ui::icons::KEY;

/// What the user wants to do with a batch of keywords.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    Accept,
    Regenerate,
    Quit,
}

/// Parse user input for review action.
pub fn parse_review_action(input: &str) -> Result<ReviewAction> {
    match input.trim().to_lowercase().as_str() {
        "a" | "accept" | "y" | "yes" => Ok(ReviewAction::Accept),
        "r" | "regenerate" => Ok(ReviewAction::Regenerate),
        "q" | "quit" => Ok(ReviewAction::Quit),
        _ => bail!("Invalid action. Use [a]ccept, [r]egenerate, or [q]uit"),
    }
}

/// Display a batch of keywords for review on stderr.
pub fn display_keywords(keywords: &[String]) {
    eprintln!();
    for keyword in keywords {
        eprintln!("  {}{}", KEY, keyword);
    }
    eprintln!();
}

/// Ask until the user enters a valid action.
pub fn prompt_review() -> Result<ReviewAction> {
    use dialoguer::Input;

    loop {
        eprintln!("[a]ccept  [r]egenerate  [q]uit");
        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(false)
            .interact_text()
            .context("Failed to read user input")?;

        match parse_review_action(&input) {
            Ok(action) => return Ok(action),
            Err(e) => eprintln!("{}", style(e).yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_action_accept() {
        assert_eq!(parse_review_action("a").unwrap(), ReviewAction::Accept);
        assert_eq!(parse_review_action("ACCEPT").unwrap(), ReviewAction::Accept);
        assert_eq!(parse_review_action(" y ").unwrap(), ReviewAction::Accept);
    }

    #[test]
    fn test_parse_review_action_regenerate() {
        assert_eq!(parse_review_action("r").unwrap(), ReviewAction::Regenerate);
        assert_eq!(
            parse_review_action("regenerate").unwrap(),
            ReviewAction::Regenerate
        );
    }

    #[test]
    fn test_parse_review_action_quit() {
        assert_eq!(parse_review_action("q").unwrap(), ReviewAction::Quit);
        assert_eq!(parse_review_action("Quit").unwrap(), ReviewAction::Quit);
    }

    #[test]
    fn test_parse_review_action_invalid() {
        let err = parse_review_action("edit 01").unwrap_err();
        assert!(err.to_string().contains("[a]ccept"));
    }
}
