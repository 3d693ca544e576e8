//! ethgate — policy-evaluation gate CLI
//!
//! Evaluates an action descriptor against a policy document and writes a
//! sealed JSON decision record plus a Markdown audit report.
//!
//! Usage:
//!   ethgate evaluate --action action.json --policy policy.json \
//!       --out out/decision.json --audit out/audit.md
//!   ethgate verify --record out/decision.json
//!   ethgate explain --policy policy.toml

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ethgate_audit::{render_report, verify_record, FileAuditWriter, InMemoryAuditWriter};
use ethgate_contracts::{
    action::ActionDocument,
    error::{EthgateError, EthgateResult},
    record::DecisionRecord,
};
use ethgate_core::Gate;
use ethgate_policy::{load_document, RuleEngine};

// ── CLI definition ────────────────────────────────────────────────────────────

/// ethgate — decide whether an action may proceed, must be modified, or is
/// rejected, and record why.
#[derive(Parser)]
#[command(
    name = "ethgate",
    version,
    about = "Policy-evaluation gate for proposed actions",
    long_about = "Evaluates an action descriptor against hard blocks, context rules,\n\
                  and soft constraints, then writes an auditable decision record."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one action and write the decision record and audit report.
    Evaluate {
        /// Action descriptor (JSON, or TOML by extension). Missing means `{}`.
        #[arg(long)]
        action: PathBuf,
        /// Policy document (JSON, or TOML by extension). Missing means `{}`.
        #[arg(long)]
        policy: PathBuf,
        /// Where to write the JSON decision record.
        #[arg(long, required_unless_present = "dry_run")]
        out: Option<PathBuf>,
        /// Where to write the Markdown audit report.
        #[arg(long, required_unless_present = "dry_run")]
        audit: Option<PathBuf>,
        /// Print the audit report instead of writing any files.
        #[arg(long)]
        dry_run: bool,
    },
    /// Check that a decision record still matches its digest.
    Verify {
        /// Path to a decision record written by `evaluate`.
        #[arg(long)]
        record: PathBuf,
    },
    /// Print the effective policy with all defaults applied.
    Explain {
        /// Policy document (JSON, or TOML by extension).
        #[arg(long)]
        policy: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging to stderr. Set RUST_LOG=debug for rule-level detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Evaluate {
            action,
            policy,
            out,
            audit,
            dry_run,
        } => run_evaluate(&action, &policy, out, audit, dry_run),
        Command::Verify { record } => run_verify(&record),
        Command::Explain { policy } => run_explain(&policy),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Both inputs are loaded before any output is written, so malformed input
/// aborts the run with no artifacts on disk.
fn run_evaluate(
    action_path: &Path,
    policy_path: &Path,
    out: Option<PathBuf>,
    audit: Option<PathBuf>,
    dry_run: bool,
) -> EthgateResult<bool> {
    let document = ActionDocument::new(load_document(action_path)?);
    let engine = RuleEngine::from_file(policy_path)?;

    debug!(
        action = %action_path.display(),
        policy = %policy_path.display(),
        dry_run,
        "inputs loaded"
    );

    if dry_run {
        let gate = Gate::new(Box::new(engine), Box::new(InMemoryAuditWriter::new()));
        let record = gate.check(document)?;
        print!("{}", render_report(&record));
        return Ok(true);
    }

    let (out, audit) = match (out, audit) {
        (Some(out), Some(audit)) => (out, audit),
        _ => {
            return Err(EthgateError::ConfigError {
                reason: "--out and --audit are required unless --dry-run is set".to_string(),
            })
        }
    };

    let writer = FileAuditWriter::new(&out, &audit);
    let gate = Gate::new(Box::new(engine), Box::new(writer));
    gate.check(document)?;

    println!("Wrote {}", out.display());
    println!("Wrote {}", audit.display());
    Ok(true)
}

fn run_verify(record_path: &Path) -> EthgateResult<bool> {
    let contents =
        std::fs::read_to_string(record_path).map_err(|e| EthgateError::ReadFailed {
            path: record_path.display().to_string(),
            reason: e.to_string(),
        })?;
    let record: DecisionRecord =
        serde_json::from_str(&contents).map_err(|e| EthgateError::MalformedDocument {
            path: record_path.display().to_string(),
            reason: format!("not a decision record: {}", e),
        })?;

    if verify_record(&record) {
        println!(
            "OK {} ({}) digest {}",
            record.evaluation_id.0, record.decision, record.digest
        );
        Ok(true)
    } else {
        println!("TAMPERED {} digest mismatch", record.evaluation_id.0);
        Ok(false)
    }
}

fn run_explain(policy_path: &Path) -> EthgateResult<bool> {
    let engine = RuleEngine::from_file(policy_path)?;
    let text =
        serde_json::to_string_pretty(engine.policy()).map_err(|e| EthgateError::Serialization {
            reason: e.to_string(),
        })?;
    println!("{}", text);
    Ok(true)
}
