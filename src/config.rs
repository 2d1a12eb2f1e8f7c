use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "media-lister")]
#[command(about = "Lists the files of a static media directory over HTTP", long_about = None)]
#[command(version)]
pub struct Args {
    /// TOML config file; missing file means defaults
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
    /// Address to bind, e.g. 127.0.0.1:8080
    #[arg(long, env = "MEDIA_LISTEN")]
    pub listen: Option<String>,
    /// Static assets root; media is served from its `media` subdirectory
    #[arg(long, env = "MEDIA_STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: String,
    pub static_dir: String,
    pub media_subdir: String,
    pub media_url_prefix: String,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8080".to_string(),
            static_dir: "./static".to_string(),
            media_subdir: "media".to_string(),
            media_url_prefix: "/media/".to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Reads `path` if it exists, falling back to defaults otherwise.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Defaults, then the config file, then `MEDIA_*` env vars and CLI flags.
    pub fn from_args_env() -> anyhow::Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut cfg = Self::load(&args.config)?;
        if let Some(listen) = args.listen {
            cfg.listen = listen;
        }
        if let Some(dir) = args.static_dir {
            cfg.static_dir = dir;
        }
        Ok(cfg)
    }

    pub fn media_dir(&self) -> PathBuf {
        Path::new(&self.static_dir).join(&self.media_subdir)
    }

    /// URL mount point for the static media files, without the trailing slash.
    pub fn media_mount(&self) -> &str {
        let mount = self.media_url_prefix.trim_end_matches('/');
        if mount.is_empty() { "/" } else { mount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.listen, "127.0.0.1:8080");
        assert_eq!(cfg.media_dir(), Path::new("./static").join("media"));
        assert_eq!(cfg.media_url_prefix, "/media/");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "static_dir = \"/srv/site\"\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.static_dir, "/srv/site");
        assert_eq!(cfg.listen, "127.0.0.1:8080");
        assert_eq!(cfg.media_dir(), PathBuf::from("/srv/site/media"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "listen = [").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "listen = \"0.0.0.0:9000\"\nstatic_dir = \"/file\"\n").unwrap();
        let config = path.to_string_lossy().to_string();

        let args =
            Args::try_parse_from(["media-lister", "--config", config.as_str(), "--static-dir=/cli"]).unwrap();
        let cfg = Config::from_args(args).unwrap();
        assert_eq!(cfg.listen, "0.0.0.0:9000");
        assert_eq!(cfg.static_dir, "/cli");
    }

    #[test]
    fn equals_form_is_accepted() {
        let args = Args::try_parse_from(["media-lister", "--listen=0.0.0.0:1"]).unwrap();
        assert_eq!(args.listen.as_deref(), Some("0.0.0.0:1"));
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn flag_is_not_taken_as_a_value() {
        assert!(Args::try_parse_from(["media-lister", "--listen", "--static-dir", "/srv"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["media-lister", "--port", "80"]).is_err());
    }

    #[test]
    fn media_mount_strips_trailing_slash() {
        let mut cfg = Config::default();
        assert_eq!(cfg.media_mount(), "/media");
        cfg.media_url_prefix = "/".to_string();
        assert_eq!(cfg.media_mount(), "/");
    }
}
