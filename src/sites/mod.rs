//! Built-in shop rulesets.

pub mod alternate;
pub mod amazon;
pub mod bonprix;
pub mod conrad;
pub mod cyberport;

#[cfg(test)]
mod tests;

use crate::extractor::Ruleset;

/// Every built-in ruleset, in dispatch order.
pub static ALL: &[&Ruleset] = &[
    &alternate::RULESET,
    &amazon::RULESET,
    &bonprix::RULESET,
    &conrad::RULESET,
    &cyberport::RULESET,
];
