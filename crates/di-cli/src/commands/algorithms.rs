use anyhow::Result;
use di_hash::HashProvider;

use crate::Cli;
use super::computer;

pub fn run(cli: &Cli) -> Result<i32> {
    let computer = computer(cli)?;
    let default = computer
        .resolve_algorithm(&computer.config().default_algorithm)
        .ok();
    for name in computer.provider().algorithms() {
        if Some(name) == default.as_deref() {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    Ok(0)
}
