//! Built-in function table
//!
//! Maps the fixed set of function names accepted by the grammar to the
//! unary operator each one compiles to. Lookup is case-insensitive.

use crate::evaluator::UnaryOp;

pub(crate) mod definitions;
pub(crate) mod registry;

pub use definitions::FunctionDefinition;

/// Resolve a function name to its operator, ignoring ASCII/Unicode case.
///
/// This is the public case-insensitive entry point; names already in lower
/// case (as the compiler passes them) skip the extra allocation.
///
/// # Example
/// ```
/// use mathparse::{UnaryOp, functions};
///
/// assert_eq!(functions::lookup("SIN"), Some(UnaryOp::Sin));
/// assert_eq!(functions::lookup("sinh"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<UnaryOp> {
    let def = if name.chars().any(char::is_uppercase) {
        registry::Registry::get(&name.to_lowercase())
    } else {
        registry::Registry::get(name)
    };
    def.map(|def| def.op)
}

/// All function definitions, in table order.
pub fn all() -> impl Iterator<Item = &'static FunctionDefinition> {
    definitions::DEFINITIONS.iter()
}

/// Function names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    all().map(|def| def.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_name() {
        for def in all() {
            assert_eq!(lookup(def.name), Some(def.op), "{}", def.name);
            assert_eq!(lookup(&def.name.to_uppercase()), Some(def.op));
        }
    }

    #[test]
    fn test_lookup_mixed_case() {
        assert_eq!(lookup("ArcTan"), Some(UnaryOp::Arctan));
        assert_eq!(lookup("Log10"), Some(UnaryOp::Log10));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(lookup("log"), None);
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("sin2"), None);
    }

    #[test]
    fn test_table_has_fifteen_functions() {
        assert_eq!(names().count(), 15);
        assert!(names().all(|n| n == n.to_lowercase()));
    }
}
