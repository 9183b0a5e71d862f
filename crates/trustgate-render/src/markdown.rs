use crate::RenderableDecision;

pub fn render_markdown(decision: &RenderableDecision) -> String {
    let mut out = String::new();

    out.push_str("# Trustgate decision\n\n");
    let verdict = if decision.allowed { "ALLOWED" } else { "REJECTED" };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Score: {:.2}\n- Reason: {}\n\n",
        verdict, decision.score, decision.reason
    ));

    if decision.policies.is_empty() {
        out.push_str("No policies evaluated.\n");
        return out;
    }

    out.push_str("## Policies\n\n");

    for policy in &decision.policies {
        let status = if policy.passed { "PASS" } else { "FAIL" };
        out.push_str(&format!(
            "- [{}] {} (score {:.2})\n",
            status, policy.name, policy.score
        ));
        for rule in &policy.rules {
            let marker = if rule.passed { "pass" } else { "fail" };
            out.push_str(&format!("  - [{}] {}: {}\n", marker, rule.name, rule.reason));
        }
    }

    out
}
