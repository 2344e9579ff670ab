use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the panel home directory into an absolute path.
///
/// - `Some("~")` / `Some("~/x")` expand against the user home directory.
/// - Relative paths are absolutized against the current directory.
/// - `None` (or empty upstream) falls back to `<user home>/<default_subdir>`.
///
/// With `create` set, the resolved directory is created if absent.
pub fn resolve_home_dir(
    dir: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match dir {
        Some(raw) => expand_user_path(&raw)?,
        None => user_home()?.join(default_subdir),
    };

    let absolute = if resolved.is_relative() {
        std::env::current_dir()
            .context("cannot resolve current directory")?
            .join(resolved)
    } else {
        resolved
    };

    if create {
        std::fs::create_dir_all(&absolute)
            .with_context(|| format!("cannot create home directory {}", absolute.display()))?;
    }

    Ok(absolute)
}

fn user_home() -> Result<PathBuf> {
    dirs::home_dir().context("cannot determine user home directory")
}

fn expand_user_path(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return user_home();
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return Ok(user_home()?.join(rest));
    }
    Ok(PathBuf::from(raw))
}
