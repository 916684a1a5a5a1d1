use anyhow::{bail, Result};
use ctx_router::compose;

pub fn execute(patterns: &[String]) -> Result<()> {
    let Some((own, ancestors)) = patterns.split_last() else {
        bail!("at least one pattern is required");
    };

    println!("{}", compose(ancestors, own));
    Ok(())
}
