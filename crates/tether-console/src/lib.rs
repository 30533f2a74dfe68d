//! Colorful console output for shuffle events.
//!
//! Provides a custom `tracing` layer that formats shuffle events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (shuffle start/end)
//! - **DEBUG**: Anchor resolution and per-shuffle summaries
//! - **TRACE**: Raw permutations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "tether=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(
                DEFAULT_DIRECTIVE
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            )
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TetherConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats shuffle events with colors.
pub struct TetherConsoleLayer;

impl<S: Subscriber> Layer<S> for TetherConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from tether crates only
        if !metadata.target().starts_with("tether") {
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
    reason: Option<String>,
    order: Option<String>,
    seed: Option<u64>,
    slots: Option<u64>,
    slot: Option<u64>,
    target: Option<u64>,
    anchors_removed: Option<u64>,
    duration_us: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s.trim_matches('"').to_string()),
            "order" => self.order = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "seed" => self.seed = Some(value),
            "slots" => self.slots = Some(value),
            "slot" => self.slot = Some(value),
            "target" => self.target = Some(value),
            "anchors_removed" => self.anchors_removed = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "shuffle_start" => format_shuffle_start(v),
        "shuffle_end" => format_shuffle_end(v),
        "anchor_resolved" => format_anchor_resolved(v),
        "shuffle" => format_shuffle(v),
        "permutation" if level == Level::TRACE => format_permutation(v),
        _ => String::new(),
    }
}

fn format_shuffle_start(v: &EventVisitor) -> String {
    let slots = v.slots.unwrap_or(0);
    let seed = v.seed.unwrap_or(0);

    format!(
        "{} {} Shuffling │ {} items │ seed {}",
        timestamp().bright_black(),
        "▶".bright_green().bold(),
        slots.to_formatted_string(&Locale::en).bright_yellow(),
        format!("{:#018x}", seed).bright_magenta()
    )
}

fn format_shuffle_end(v: &EventVisitor) -> String {
    let slots = v.slots.unwrap_or(0);
    let duration = v.duration_us.unwrap_or(0);

    format!(
        "{} {} Shuffle complete │ {} items │ {}",
        timestamp().bright_black(),
        "■".bright_cyan().bold(),
        slots.to_formatted_string(&Locale::en).bright_yellow(),
        format_duration_us(duration).yellow()
    )
}

fn format_anchor_resolved(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("unknown");
    let slot = v.slot.unwrap_or(0);

    let mut output = format!(
        "{} {} Anchor dropped │ slot {} │ {}",
        timestamp().bright_black(),
        "✗".bright_red(),
        slot.to_formatted_string(&Locale::en).white(),
        reason.replace('_', " ").bright_yellow()
    );

    if let Some(target) = v.target {
        output.push_str(&format!(
            " │ target {}",
            target.to_formatted_string(&Locale::en).white()
        ));
    }

    output
}

fn format_shuffle(v: &EventVisitor) -> String {
    let slots = v.slots.unwrap_or(0);
    let removed = v.anchors_removed.unwrap_or(0);

    format!(
        "{} {} {} slots arranged │ {} anchors dropped",
        timestamp().bright_black(),
        "→".bright_blue(),
        slots.to_formatted_string(&Locale::en).white(),
        removed.to_formatted_string(&Locale::en).white()
    )
}

fn format_permutation(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        timestamp().bright_black(),
        "·".bright_black(),
        v.order.as_deref().unwrap_or("[]").bright_black()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}
