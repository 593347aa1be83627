use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::Calculator;
use crate::graph::OrderElement;
use crate::models::{CalculateRequest, FunctionCode, Tier};
use crate::tier;

/// Handle the calculate command
pub fn handle_calculate(file: Option<&Path>, pretty: bool) -> Result<()> {
    let request = read_request(file)?;
    let calculation = Calculator::new().calculate(&request);

    let json = if pretty {
        serde_json::to_string_pretty(&calculation)?
    } else {
        serde_json::to_string(&calculation)?
    };
    println!("{json}");

    Ok(())
}

/// Handle the order command
pub fn handle_order(file: Option<&Path>, json: bool) -> Result<()> {
    let request = read_request(file)?;
    let order = Calculator::new().final_order(&request.matches);

    if json {
        println!("{}", serde_json::to_string(&order)?);
        return Ok(());
    }

    if order.is_empty() {
        println!("No matches, nothing to order.");
        return Ok(());
    }

    for (rank, element) in order.iter().enumerate() {
        match element {
            OrderElement::Single(code) => println!("{:>2}. {code}", rank + 1),
            OrderElement::Group(members) => {
                let joined = members
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{:>2}. {{ {joined} }}  (unresolved, rank manually)", rank + 1);
            }
        }
    }

    Ok(())
}

/// Handle the tiers command
pub fn handle_tiers(file: Option<&Path>, set: &[String]) -> Result<()> {
    let request = read_request(file)?;
    let order = Calculator::new().final_order(&request.matches);
    let overrides = parse_overrides(set)?;
    let tiers = tier::merge_tier_map(&order, &overrides);

    if tiers.is_empty() {
        println!("No matches, no tiers to assign.");
        return Ok(());
    }

    for (code, tier) in &tiers {
        println!("{code:<3} {tier}");
    }

    Ok(())
}

fn read_request(file: Option<&Path>) -> Result<CalculateRequest> {
    let body = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    CalculateRequest::from_json(&body).context("invalid request body")
}

fn parse_overrides(set: &[String]) -> Result<BTreeMap<FunctionCode, Tier>> {
    let mut overrides = BTreeMap::new();
    for entry in set {
        let Some((code, tier)) = entry.split_once('=') else {
            bail!("invalid --set value '{entry}', expected CODE=TIER");
        };
        overrides.insert(FunctionCode::try_from(code)?, Tier::try_from(tier)?);
    }
    Ok(overrides)
}
