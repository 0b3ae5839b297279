pub fn run() -> anyhow::Result<()> {
    println!("carenest {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
