//! Locating, and if need be downloading, the block definitions.
use crate::blocks::BlockTable;
use crate::error::{Error, Result};
use http_req::request::Request;
use http_req::uri::Uri;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

pub const BLOCKS_URL: &str = "https://www.unicode.org/Public/UCD/latest/ucd/Blocks.txt";

const BLOCKS_FILE_NAME: &str = "Blocks.txt";

lazy_static::lazy_static! {
    pub static ref CACHE_DIR: PathBuf = compute_cache_dir(std::env::var_os("XDG_CACHE_HOME"));
}

/// An empty or relative `XDG_CACHE_HOME` is ignored, as the XDG base
/// directory rules require
fn xdg_cache_home(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
    value
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
}

fn compute_cache_dir(xdg: Option<std::ffi::OsString>) -> PathBuf {
    xdg_cache_home(xdg)
        .or_else(dirs_next::cache_dir)
        .or_else(|| dirs_next::home_dir().map(|home| home.join(".cache")))
        .unwrap_or_default()
        .join("print-encoding")
}

/// Where the block definitions live when no path is given
pub fn default_blocks_path() -> PathBuf {
    CACHE_DIR.join(BLOCKS_FILE_NAME)
}

fn create_user_owned_dirs(p: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(p).map_err(|source| Error::Io {
        path: p.to_path_buf(),
        source,
    })
}

/// Perform a single GET of `url`, returning the body as text.
/// There is no retry; any failure is reported as `Error::Retrieval`.
pub fn fetch(url: &str) -> Result<String> {
    let retrieval = |reason: String| Error::Retrieval {
        url: url.to_string(),
        reason,
    };

    let uri = Uri::try_from(url).map_err(|err| retrieval(err.to_string()))?;
    let mut body = Vec::new();
    let res = Request::new(&uri)
        .header(
            "User-Agent",
            &format!("print-encoding/{}", env!("CARGO_PKG_VERSION")),
        )
        .send(&mut body)
        .map_err(|err| retrieval(err.to_string()))?;

    if !res.status_code().is_success() {
        return Err(retrieval(format!(
            "{} {}",
            res.status_code(),
            res.reason()
        )));
    }

    String::from_utf8(body).map_err(|err| retrieval(err.to_string()))
}

/// Load the block table from `path`, downloading it from `url` first
/// if it isn't there yet. The download is only saved once it has
/// parsed successfully.
pub fn load(path: &Path, url: &str) -> Result<BlockTable> {
    if path.exists() {
        log::debug!("using block definitions from {}", path.display());
        return BlockTable::load(path);
    }

    log::info!("Downloading {} from {}", path.display(), url);
    let data = fetch(url)?;
    let table = BlockTable::parse(&data)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_user_owned_dirs(parent)?;
    }
    std::fs::write(path, &data).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(table)
}
