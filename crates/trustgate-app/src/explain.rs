//! The `explain` use case: look up rule/code documentation.

use trustgate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available rule names and gate codes.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
        available_gate_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a rule name or gate code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
            available_gate_codes: explain::all_gate_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Configuration\n");
    out.push_str("-------------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Rejects:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Accepts:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    rule_ids: &[&'static str],
    gate_codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule or code: {}\n\n", identifier));
    out.push_str("Available rules:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable codes:\n");
    for code in gate_codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
