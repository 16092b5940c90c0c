//! Show settings and catalog locations.

use super::common::CommonArgs;

pub fn run(common: &CommonArgs) -> anyhow::Result<()> {
    let settings_path = common.settings_path();
    let settings = common.load_settings()?;

    println!("Paths:");
    println!("======");
    println!();
    let marker = if settings_path.exists() { "" } else { " (not present, using defaults)" };
    println!("Settings file: {}{}", settings_path.display(), marker);
    println!("Alignment:     {:?}", settings.alignment);
    println!();
    println!("Catalog roots:");
    for root in &settings.catalog_dirs {
        let marker = if root.is_dir() { "" } else { " (missing)" };
        println!("  {}{}", root.display(), marker);
    }

    Ok(())
}
