//! Plain-text rendering of dispatch results for the terminal.
//!
//! Mirrors what the web frontend shows for each payload variant: vocabulary
//! lists with pronunciation and example, grammar entries with conjugations,
//! the practice category, the translation card.

use std::fmt::Write;

use parla_core::{DispatchResult, Payload};

/// Reply text plus, when present, the rendered payload.
pub fn render_result(result: &DispatchResult) -> String {
    result.additional_data.as_ref().map_or_else(
        || result.response.clone(),
        |payload| format!("{}\n{}", result.response, render_payload(payload)),
    )
}

/// Render one payload variant as indented terminal text.
pub fn render_payload(payload: &Payload) -> String {
    let mut out = String::new();
    match payload {
        Payload::Vocabulary(topic) => {
            let _ = writeln!(out, "[{}]", topic.category);
            for word in &topic.words {
                let _ = writeln!(out, "  {} = {}", word.italian, word.english);
                let _ = writeln!(out, "    🗣️ {}", word.pronunciation);
                let _ = writeln!(out, "    \"{}\"", word.example);
            }
        }
        Payload::Grammar(family) => {
            let _ = writeln!(out, "[{}]", family.name);
            for entry in &family.entries {
                match &entry.english {
                    Some(english) => {
                        let _ = writeln!(out, "  {} ({english})", entry.name);
                    }
                    None => {
                        let _ = writeln!(out, "  {}", entry.name);
                    }
                }
                if let Some(conjugation) = &entry.conjugation {
                    let forms = conjugation
                        .iter()
                        .map(|c| format!("{}: {}", c.pronoun, c.form))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    let _ = writeln!(out, "    {forms}");
                }
                if let Some(examples) = &entry.examples {
                    for example in examples {
                        let _ = writeln!(out, "    • {example}");
                    }
                }
            }
        }
        Payload::Practice(question) => {
            let _ = writeln!(out, "  Categoria: {}", question.category);
        }
        Payload::Translation(translation) => {
            let _ = writeln!(out, "  Categoria: {}", translation.category);
        }
    }
    out.trim_end().to_string()
}
