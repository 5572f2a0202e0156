use anyhow::Result;
use owo_colors::OwoColorize;
use remindir_core::config::RemindirConfig;

pub fn login(mut config: RemindirConfig, user_id: &str) -> Result<()> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        anyhow::bail!("User id must not be empty");
    }

    config.user_id = Some(user_id.to_string());
    config.save()?;

    println!("{}", format!("Signed in as {}", user_id).green());
    Ok(())
}

pub fn logout(mut config: RemindirConfig) -> Result<()> {
    if config.user_id.take().is_none() {
        println!("{}", "Not signed in".dimmed());
        return Ok(());
    }

    config.save()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(config: &RemindirConfig) -> Result<()> {
    let user_id = config.require_user()?;
    println!("{} {}", user_id, format!("@ {}", config.base_url()).dimmed());
    Ok(())
}
