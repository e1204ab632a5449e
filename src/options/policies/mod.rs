mod argument_rules;

pub use argument_rules::{check_argument_rules, ArgumentRule, ARGUMENT_RULES};
