use anyhow::Result;

pub fn run() -> Result<()> {
    println!("eventscout {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
