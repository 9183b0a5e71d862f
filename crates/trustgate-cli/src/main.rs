//! CLI entry point for trustgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `trustgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use trustgate_app::{
    append_audit_record, audit_record, decision_exit_code, error_envelope, format_explanation,
    format_not_found, parse_envelope_json, run_explain, run_verify, serialize_envelope,
    to_renderable, ExplainOutput, VerifyInput,
};
use trustgate_render::render_markdown;
use trustgate_settings::Overrides;
use trustgate_types::DecisionEnvelope;

#[derive(Parser, Debug)]
#[command(
    name = "trustgate",
    version,
    about = "Trust policy decision engine for credential-verified counterparties"
)]
struct Cli {
    /// Path to trustgate config TOML.
    #[arg(long, default_value = "trustgate.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Override the minimum aggregate score required for acceptance.
    #[arg(long)]
    threshold: Option<f64>,

    /// Override unrecognized-rule handling (permissive|strict).
    #[arg(long)]
    unknown_rules: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate trust between two entities and write the decision artifact.
    Verify {
        /// Path to the source entity JSON document.
        source: Utf8PathBuf,

        /// Path to the target entity JSON document.
        target: Utf8PathBuf,

        /// Where to write the JSON decision.
        #[arg(long, default_value = "artifacts/trustgate/decision.json")]
        decision_out: Utf8PathBuf,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/trustgate/decision.md")]
        markdown_out: Utf8PathBuf,

        /// Append the decision to a JSONL audit log.
        #[arg(long)]
        audit_log: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON decision.
    Md {
        /// Path to the JSON decision file.
        #[arg(long, default_value = "artifacts/trustgate/decision.json")]
        decision: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule name or gate code with configuration guidance.
    Explain {
        /// The rule (e.g., "esg_score") or code (e.g., "credential_verification") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Verify {
            ref source,
            ref target,
            ref decision_out,
            write_markdown,
            ref markdown_out,
            ref audit_log,
        } => cmd_verify(
            &cli,
            source.clone(),
            target.clone(),
            decision_out.clone(),
            write_markdown,
            markdown_out.clone(),
            audit_log.clone(),
        ),
        Commands::Md { decision, output } => cmd_md(decision, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_verify(
    cli: &Cli,
    source: Utf8PathBuf,
    target: Utf8PathBuf,
    decision_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    audit_log: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Load config if present; missing file is allowed (defaults apply).
        let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let source_json = std::fs::read_to_string(&source)
            .with_context(|| format!("read source entity: {source}"))?;
        let target_json = std::fs::read_to_string(&target)
            .with_context(|| format!("read target entity: {target}"))?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            accept_threshold: cli.threshold,
            unknown_rules: cli.unknown_rules.clone(),
        };

        let output = run_verify(VerifyInput {
            config_text: &config_text,
            source_json: &source_json,
            target_json: &target_json,
            overrides,
        })?;

        write_decision_file(&decision_out, &output.envelope).context("write decision json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.envelope));
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        if let Some(log_path) = &audit_log {
            let record = audit_record(&output.envelope);
            append_audit_record(log_path, &record).context("append audit log")?;
        }

        Ok(decision_exit_code(&output.envelope.decision))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = cli.profile.as_deref().unwrap_or("standard");
            let envelope = error_envelope(&format!("{err:#}"), profile);
            let _ = write_decision_file(&decision_out, &envelope);
            eprintln!("trustgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_decision_file(path: &Utf8Path, envelope: &DecisionEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_envelope(envelope).context("serialize decision")?;
    std::fs::write(path, data).with_context(|| format!("write decision: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(decision_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let decision_text = std::fs::read_to_string(&decision_path)
        .with_context(|| format!("read decision: {}", decision_path))?;
    let envelope = parse_envelope_json(&decision_text)?;
    let md = render_markdown(&to_renderable(&envelope));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_gate_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_gate_codes)
            );
            std::process::exit(1);
        }
    }
}
