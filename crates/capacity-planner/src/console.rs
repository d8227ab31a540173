//! Colorful console output for scoring events.
//!
//! Provides a custom `tracing` layer that formats planner events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Construction start and end
//! - **DEBUG**: Every score calculation, every placement
//! - **TRACE**: Per-constraint penalties
//! - **WARN**: Malformed input (unknown node references)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used by [`init`] when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "capacity_scoring=info";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_DIRECTIVES);
}

/// Like [`init`], with `directives` as the fallback filter.
///
/// `RUST_LOG` still wins when it is set and parses.
pub fn init_with_filter(directives: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn mark_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    START_NANOS.store(epoch.elapsed().as_nanos() as u64, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start = START_NANOS.load(Ordering::Relaxed);
    let now = epoch.elapsed().as_nanos() as u64;
    now.saturating_sub(start) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ___                    _ _           ___ _
 / __|__ _ _ __  __ _ __(_) |_ _  _   | _ \ |__ _ _ _  _ _  ___ _ _
| (__/ _` | '_ \/ _` / _| |  _| || |  |  _/ / _` | ' \| ' \/ -_) '_|
 \___\__,_| .__/\__,_\__|_|\__|\_, |  |_| |_\__,_|_||_|_||_\___|_|
          |_|                  |__/
"#;

    let version_line = format!("                   v{} - Tiered Capacity Scoring\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Planner crates and the programs built on them
        if !metadata.target().starts_with("capacity_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    constraint: Option<String>,
    level: Option<String>,
    process: Option<String>,
    node: Option<String>,
    penalty: Option<i64>,
    match_count: Option<u64>,
    process_count: Option<u64>,
    node_count: Option<u64>,
    used_nodes: Option<u64>,
    unassigned: Option<u64>,
    feasible: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "constraint" => self.constraint = Some(s),
            "level" => self.level = Some(s),
            "process" => self.process = Some(s),
            "node" => self.node = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "match_count" => self.match_count = Some(value),
            "process_count" => self.process_count = Some(value),
            "node_count" => self.node_count = Some(value),
            "used_nodes" => self.used_nodes = Some(value),
            "unassigned" => self.unassigned = Some(value),
            "penalty" => self.penalty = Some(i64::try_from(value).unwrap_or(i64::MAX)),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "penalty" {
            self.penalty = Some(value);
        } else if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "constraint" => self.constraint = Some(value.to_string()),
            "level" => self.level = Some(value.to_string()),
            "process" => self.process = Some(value.to_string()),
            "node" => self.node = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "construction_start" => format_construction_start(v),
        "construction_end" => format_construction_end(v),
        "process_placed" => format_process_placed(v),
        "score_calculated" => format_score_calculated(v),
        "constraint_evaluated" => format_constraint_evaluated(v, level),
        "unknown_node" => format_unknown_node(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_construction_start(v: &EventVisitor) -> String {
    mark_start();
    let processes = v.process_count.unwrap_or(0);
    let nodes = v.node_count.unwrap_or(0);

    format!(
        "{} {} Placing │ {} processes │ {} nodes │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        processes.to_formatted_string(&Locale::en).bright_yellow(),
        nodes.to_formatted_string(&Locale::en).bright_yellow(),
        problem_scale(processes as usize, nodes as usize).bright_magenta()
    )
}

fn format_construction_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let is_feasible = v
        .feasible
        .unwrap_or_else(|| score.starts_with("0hard") || !score.contains('-'));
    let unassigned = v.unassigned.unwrap_or(0);

    let status = if is_feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Placement complete │ {} │ {} │ {} unassigned",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_score(score),
        status,
        unassigned.to_formatted_string(&Locale::en).bright_yellow()
    );

    // Summary box
    let rule = "═".repeat(58);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", rule).bright_cyan().to_string());
    output.push('\n');

    let status_text = if is_feasible {
        "FEASIBLE PLACEMENT FOUND"
    } else {
        "INFEASIBLE (capacity exceeded)"
    };
    let total_pad = 58usize.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let status_colored = if is_feasible {
        status_text.bright_green().bold().to_string()
    } else {
        status_text.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╠{}╣", rule).bright_cyan().to_string());
    output.push('\n');

    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Final Score:",
        score,
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╚{}╝", rule).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_process_placed(v: &EventVisitor) -> String {
    let process = v.process.as_deref().unwrap_or("?");
    let node = v.node.as_deref().unwrap_or("unassigned");
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {:>12} → {:<12} │ {}",
        format_elapsed(),
        "→".bright_blue(),
        process.white(),
        node.white().bold(),
        format_score(score)
    )
}

fn format_score_calculated(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let processes = v.process_count.unwrap_or(0);
    let used = v.used_nodes.unwrap_or(0);
    let nodes = v.node_count.unwrap_or(0);

    format!(
        "{} {} {} │ {} processes │ {}/{} nodes used",
        format_elapsed(),
        "●".bright_cyan(),
        format_score(score),
        processes.to_formatted_string(&Locale::en).white(),
        used.to_formatted_string(&Locale::en).bright_yellow(),
        nodes.to_formatted_string(&Locale::en).white()
    )
}

fn format_constraint_evaluated(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let constraint = v.constraint.as_deref().unwrap_or("?");
    let tier = v.level.as_deref().unwrap_or("?").to_lowercase();
    let penalty = v.penalty.unwrap_or(0);
    let matches = v.match_count.unwrap_or(0);

    let penalty = if penalty < 0 {
        format!("{}{}", penalty.to_formatted_string(&Locale::en), tier)
            .bright_red()
            .to_string()
    } else {
        format!("{}{}", penalty, tier).bright_black().to_string()
    };

    format!(
        "{}   {:<20} │ {} │ {} matches",
        format_elapsed(),
        constraint.bright_black(),
        penalty,
        matches.to_formatted_string(&Locale::en).bright_black()
    )
}

fn format_unknown_node(v: &EventVisitor) -> String {
    let process = v.process.as_deref().unwrap_or("?");
    let node = v.node.as_deref().unwrap_or("?");

    format!(
        "{} {} {} is assigned to unknown node {}",
        format_elapsed(),
        "⚠".bright_red().bold(),
        process.white().bold(),
        node.bright_red()
    )
}

/// Colors each `"{n}{label}"` level of a score: red when a hard level is
/// negative, yellow for other negative levels.
fn format_score(score: &str) -> String {
    if !score.contains("hard") {
        return score.white().to_string();
    }

    score
        .split('/')
        .map(|part| {
            let label_start = part
                .find(|c: char| c.is_ascii_alphabetic())
                .unwrap_or(part.len());
            let value: i64 = part[..label_start].parse().unwrap_or(0);
            let is_hard = part.ends_with("hard");

            if value < 0 && is_hard {
                part.bright_red().to_string()
            } else if value < 0 {
                part.yellow().to_string()
            } else if is_hard {
                part.bright_green().to_string()
            } else {
                part.white().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

// nodes ^ processes, the size of the assignment space counting "unassigned"
// as one more value.
fn problem_scale(process_count: usize, node_count: usize) -> String {
    if process_count == 0 {
        return "0".to_string();
    }

    let log_scale = (process_count as f64) * ((node_count + 1) as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
