use carenest_records::Paths;

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    std::fs::create_dir_all(&paths.home)?;

    println!("Initialized data directory at {}", paths.home.display());
    println!("  observations: {}", paths.observations_file().display());
    println!("  logbook:      {}", paths.logbook_file().display());
    Ok(())
}
