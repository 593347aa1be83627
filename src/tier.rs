use std::collections::BTreeMap;

use crate::graph::OrderElement;
use crate::models::{FunctionCode, Tier};

/// Default tier per function from its position in the flattened hierarchy:
/// two Dominant, two High, two Middle, the rest Low. Members of an
/// unresolved block take positions in their stored order until the user
/// re-ranks them.
pub fn default_tier_map(
    order: &[OrderElement<FunctionCode>],
) -> BTreeMap<FunctionCode, Tier> {
    order
        .iter()
        .flat_map(|element| element.members().iter().copied())
        .enumerate()
        .map(|(rank, code)| (code, tier_for_rank(rank)))
        .collect()
}

/// Overlay user-picked tiers on the defaults. Overrides for functions
/// absent from the order are ignored.
pub fn merge_tier_map(
    order: &[OrderElement<FunctionCode>],
    overrides: &BTreeMap<FunctionCode, Tier>,
) -> BTreeMap<FunctionCode, Tier> {
    let mut map = default_tier_map(order);
    for (&code, &tier) in overrides {
        if map.contains_key(&code) {
            map.insert(code, tier);
        }
    }
    map
}

fn tier_for_rank(rank: usize) -> Tier {
    match rank {
        0 | 1 => Tier::Dominant,
        2 | 3 => Tier::High,
        4 | 5 => Tier::Middle,
        _ => Tier::Low,
    }
}
