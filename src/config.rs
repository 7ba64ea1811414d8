//! Startup configuration from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::http::mime;

/// Ports outside this range are refused at startup.
pub const MIN_PORT: u16 = 1;
pub const MAX_PORT: u16 = 60000;

/// System directories that are never accepted as a document root.
pub const DENIED_ROOTS: &[&str] = &["/", "/etc", "/bin", "/lib", "/tmp", "/usr", "/dev", "/sbin"];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub root: PathBuf,
}

impl Config {
    /// Parses `<port-number> <root-directory>` from the command line.
    ///
    /// The port must be within [`MIN_PORT`]..=[`MAX_PORT`], the root must not
    /// be one of [`DENIED_ROOTS`], and the root must be a readable directory.
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self> {
        let args: Vec<String> = args.collect();
        if args.len() != 2 || args[0] == "-?" {
            bail!("{}", usage());
        }

        let port: u16 = args[0]
            .parse()
            .ok()
            .filter(|port| (MIN_PORT..=MAX_PORT).contains(port))
            .with_context(|| {
                format!(
                    "invalid port number {} (try between {MIN_PORT} and {MAX_PORT})",
                    args[0]
                )
            })?;

        if DENIED_ROOTS.contains(&args[1].as_str()) {
            bail!("bad root directory {}", args[1]);
        }

        let root = PathBuf::from(&args[1]);
        std::fs::read_dir(&root)
            .with_context(|| format!("cannot access root directory {}", root.display()))?;

        Ok(Self { port, root })
    }
}

/// Usage text, including the extension whitelist.
pub fn usage() -> String {
    let extensions: Vec<&str> = mime::EXTENSIONS.iter().map(|&(ext, _)| ext).collect();
    format!(
        "usage: {name} <port-number> <root-directory>\n\n\
         {name} is a small and very safe mini web server. It serves only\n\
         files with the extensions named below, and only from the named\n\
         directory or its sub-directories.\n\n\
         Example: {name} 8181 /home/wwwroot\n\n\
         Supported extensions: {extensions}\n\
         Not supported: URLs including \"..\", Java, Javascript, CGI\n\
         Not supported root directories: {roots}\n",
        name = env!("CARGO_PKG_NAME"),
        extensions = extensions.join(" "),
        roots = DENIED_ROOTS.join(" "),
    )
}
