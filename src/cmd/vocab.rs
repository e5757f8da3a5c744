//! Vocabulary listing: `keysmith vocab`.

use anyhow::Result;
use console::style;

use keysmith::vocabulary::{Complexity, Language, Vocabularies};

fn print_terms(label: &str, terms: &[&str]) {
    println!("  {}:", label);
    for term in terms {
        println!("    - {}", term);
    }
}

pub fn cmd_vocab(language: Option<&str>, complexity: Complexity) -> Result<()> {
    let vocabularies = Vocabularies::builtin();

    let languages: Vec<Language> = match language {
        Some(tag) => vec![vocabularies.resolve(tag)?.language],
        None => vocabularies.languages().collect(),
    };

    for language in languages {
        let Some(table) = vocabularies.get(language) else {
            continue;
        };
        println!();
        println!(
            "{} ({}) {}",
            style(language.code()).bold(),
            language.native_name(),
            style(format!("[{}]", complexity)).dim()
        );
        print_terms("modifiers", &table.modifiers);
        print_terms("categories", &table.categories);
        print_terms("extras", &table.extras_for(complexity));
        println!(
            "  {} terms eligible",
            table.candidate_pool(complexity).len()
        );
    }
    println!();

    Ok(())
}
