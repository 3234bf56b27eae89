//! CLI subcommand implementations

pub mod estimate;
pub mod fields;
pub mod instances;

use sizer_lib::params::ParamValue;
use sizer_lib::ParamBag;

use crate::output::print_warning;

/// Coerce `key=value` pairs into a parameter bag
///
/// `true`/`false` become flags; anything else is parsed as a number,
/// with parse failures coerced to 0 (the same recovery the original
/// form applied to unparsable text inputs).
pub fn parse_set_pairs(pairs: &[String]) -> ParamBag {
    let mut bag = ParamBag::new();
    for pair in pairs {
        let (key, raw) = match pair.split_once('=') {
            Some(split) => split,
            None => {
                print_warning(&format!("Ignoring malformed parameter '{}'", pair));
                continue;
            }
        };

        let value = match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => match raw.parse::<f64>() {
                Ok(n) => ParamValue::Number(n),
                Err(_) => {
                    print_warning(&format!("'{}' is not a number; using 0 for {}", raw, key));
                    ParamValue::Number(0.0)
                }
            },
        };
        bag.set(key, value);
    }
    bag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_flags_are_coerced() {
        let bag = parse_set_pairs(&[
            "replicas=3".to_string(),
            "hasHPA=true".to_string(),
            "requestedMemory=512.5".to_string(),
        ]);

        assert_eq!(bag.number("replicas"), Some(3.0));
        assert!(bag.flag("hasHPA"));
        assert_eq!(bag.number("requestedMemory"), Some(512.5));
    }

    #[test]
    fn unparsable_value_becomes_zero() {
        let bag = parse_set_pairs(&["replicas=lots".to_string()]);
        assert_eq!(bag.number("replicas"), Some(0.0));
    }

    #[test]
    fn pair_without_equals_is_skipped() {
        let bag = parse_set_pairs(&["replicas".to_string()]);
        assert!(bag.is_empty());
    }
}
