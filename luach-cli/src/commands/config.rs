use anyhow::Result;
use dialoguer::Confirm;
use luach_core::config::LuachConfig;
use owo_colors::OwoColorize;
use tracing::info;

use crate::context::Context;

pub fn show(ctx: &Context) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:  {}", ctx.config_path().display());
    println!("  Events:  {}", ctx.events_path().display());
    println!();
    println!("{}", "Settings".bold());
    for line in ctx.config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}

/// Changes one setting in the config file. Environment overrides are not
/// written back.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = ctx.config_path();

    let mut config = LuachConfig::read_file(path)?;
    config.set(key, value)?;
    config.save_to(path)?;

    info!(key, value, path = %path.display(), "updated setting");
    println!("{}", format!("  Updated: {key} = {value}").green());

    Ok(())
}

pub fn reset(ctx: &Context, yes: bool) -> Result<()> {
    let path = ctx.config_path();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Reset {} to defaults?", path.display()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    LuachConfig::create_default_config(path)?;

    info!(path = %path.display(), "reset config");
    println!("{}", "  Settings reset to defaults".green());

    Ok(())
}
