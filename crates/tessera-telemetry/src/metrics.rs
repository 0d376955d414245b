//! Parse metrics.
//!
//! Counters are emitted through the `metrics` facade. Without an installed
//! recorder they are no-ops; the embedding server picks the exporter.
//!
//! # Standard Metrics
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `tessera_arguments_parsed_total` | Counter | `parser`, `outcome` | Parse attempts by outcome |
//! | `tessera_parser_misses_total` | Counter | `type` | Lookups for unregistered types |
//! | `tessera_guard_failures_total` | Counter | `code` | Failures intercepted by a guard |

use metrics::{counter, describe_counter};

/// Counter name for parse attempts.
pub const ARGUMENTS_PARSED: &str = "tessera_arguments_parsed_total";

/// Counter name for registry misses.
pub const PARSER_MISSES: &str = "tessera_parser_misses_total";

/// Counter name for guard failures.
pub const GUARD_FAILURES: &str = "tessera_guard_failures_total";

/// Registers descriptions for all standard metrics.
pub fn describe_metrics() {
    describe_counter!(ARGUMENTS_PARSED, "Argument parse attempts by parser and outcome");
    describe_counter!(PARSER_MISSES, "Lookups for types without a registered parser");
    describe_counter!(GUARD_FAILURES, "Failures intercepted at a guarded call boundary");
}

/// Records one parse attempt.
pub fn record_parse(parser: &'static str, outcome: &'static str) {
    counter!(ARGUMENTS_PARSED, "parser" => parser, "outcome" => outcome).increment(1);
}

/// Records a lookup for a type without a parser.
pub fn record_parser_miss(type_name: &'static str) {
    counter!(PARSER_MISSES, "type" => type_name).increment(1);
}

/// Records a failure intercepted by a guard.
pub fn record_guard_failure(code: &'static str) {
    counter!(GUARD_FAILURES, "code" => code).increment(1);
}
