use anyhow::{bail, Context, Result};
use tracing::info;
use url::Url;

/// Hands an application link to the platform browser.
pub fn open_application(raw: &str) -> Result<()> {
    let url = checked_url(raw)?;
    open::that_detached(url.as_str())
        .with_context(|| format!("failed to launch a browser for {}", url))?;
    info!("Opened application link {}", url);
    Ok(())
}

fn checked_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid application url '{}'", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("refusing to open '{}' link {}", other, url),
    }
}
