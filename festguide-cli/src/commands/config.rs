use anyhow::Result;
use festguide_core::config::GuideConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = GuideConfig::config_path()?;
    let config = GuideConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Events:   {}", config.fixture_path().display());
    println!("  Likes:    {}", config.data_path().display());

    println!();
    println!("{}", "Filters".bold());
    println!("  Tags:     {}", config.available_tags.join(", "));
    println!("  Alphabet: {}", config.alphabet);

    Ok(())
}
