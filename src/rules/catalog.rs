//! Built-in rule catalog.

use std::sync::LazyLock;

use super::pattern::PatternRule;

/// `(id, description, pattern)` in catalog order.
const BUILTIN_SPECS: &[(&str, &str, &str)] = &[
    (
        "no-commit",
        "NO COMMIT / NOCOMMIT marker after a # or // comment opener",
        r"(#|//) ?NO ?COMMIT",
    ),
    (
        "debugger",
        "JavaScript debugger statement",
        r"\bdebugger\b",
    ),
    (
        "binding-pry",
        "Ruby pry breakpoint",
        r"\bbinding\.pry\b",
    ),
    (
        "console-call",
        "console logging call",
        r"\bconsole\.(log|dir|debug|warn|error|count|profile|profileEnd|trace)\b",
    ),
];

/// The built-in rules, compiled once per process.
pub static BUILTIN_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    BUILTIN_SPECS
        .iter()
        .map(|(id, description, pattern)| {
            PatternRule::new(*id, *description, pattern)
                .unwrap_or_else(|e| panic!("built-in rule '{}' failed to compile: {}", id, e))
        })
        .collect()
});

/// Ids of the built-in rules, in catalog order.
pub fn builtin_rule_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_SPECS.iter().map(|(id, _, _)| *id)
}
