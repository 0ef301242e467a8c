//! Repository archive fetching and extraction
//!
//! Builds the archive URL for a refspec, downloads it over blocking HTTP with
//! a bounded manual redirect loop, and unpacks the zip into the invocation's
//! scratch directory. Redirects are followed by re-issuing the GET (with the
//! auth header, when configured) against the `Location` target; automatic
//! client redirects are disabled so the header survives cross-origin hops to
//! the archive CDN.

use std::fs::File;
use std::path::{Path, PathBuf};

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url, header};

use crate::config::Config;
use crate::error::{GitpackError, Result};
use crate::progress;
use crate::refspec::RefSpec;
use crate::ui;

/// Redirect hop bound. The archive endpoint needs one hop to its CDN in
/// practice; anything past this is a loop.
const MAX_REDIRECTS: usize = 10;

/// Build the archive URL for a refspec: `{host}/{owner}/{repo}/zip/{ref}`.
pub fn archive_url(host: &str, spec: &RefSpec) -> String {
    format!(
        "{}/{}/{}/zip/{}",
        host.trim_end_matches('/'),
        spec.owner,
        spec.name,
        spec.git_ref
    )
}

/// Download and extract the repository archive for `spec` into `scratch`.
///
/// Returns the extracted repository root: the single top-level directory the
/// archive creates, or the extraction directory itself for flat archives.
pub fn fetch_repository(spec: &RefSpec, config: &Config, scratch: &Path) -> Result<PathBuf> {
    let url = archive_url(&config.host, spec);
    if config.verbose {
        ui::info(format!("fetching {url}"));
    }

    let archive = scratch.join("archive.zip");
    download(&url, config, &archive)?;

    let extract_root = scratch.join("repo");
    std::fs::create_dir_all(&extract_root)?;
    extract_archive(&archive, &extract_root)?;

    repository_root(&extract_root)
}

/// GET `url` and stream the body to `target`, following redirects manually.
fn download(url: &str, config: &Config, target: &Path) -> Result<()> {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let mut current = url.to_string();
    for _ in 0..=MAX_REDIRECTS {
        let mut request = client.get(&current);
        if let Some(token) = &config.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send()?;

        let status = response.status();
        if status.is_redirection() {
            current = redirect_target(&current, &response)?;
            continue;
        }
        if status != StatusCode::OK {
            return Err(GitpackError::HttpStatus {
                url: current,
                status: status.as_u16(),
            });
        }

        return write_body(response, target);
    }

    Err(GitpackError::TooManyRedirects {
        url: url.to_string(),
    })
}

/// Resolve the `Location` header of a redirect response against the request
/// URL (the header may be relative).
fn redirect_target(current: &str, response: &Response) -> Result<String> {
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| GitpackError::FetchFailed {
            url: current.to_string(),
            reason: "redirect response without a Location header".to_string(),
        })?;

    let base = Url::parse(current).map_err(|err| GitpackError::FetchFailed {
        url: current.to_string(),
        reason: err.to_string(),
    })?;
    let resolved = base.join(location).map_err(|err| GitpackError::FetchFailed {
        url: current.to_string(),
        reason: format!("invalid redirect target '{location}': {err}"),
    })?;

    Ok(resolved.to_string())
}

/// Stream a response body to disk, with a progress bar when the server
/// announced a length.
fn write_body(response: Response, target: &Path) -> Result<()> {
    let mut file = File::create(target)?;

    match response.content_length() {
        Some(length) if length > 0 => {
            let bar = progress::download_bar(length);
            let mut reader = bar.wrap_read(response);
            std::io::copy(&mut reader, &mut file)?;
            bar.finish_and_clear();
        }
        _ => {
            let mut response = response;
            std::io::copy(&mut response, &mut file)?;
        }
    }

    Ok(())
}

/// Unpack every archive entry under `dest`.
///
/// Entries whose destination already exists are skipped, so a partial
/// re-extraction picks up where it left off instead of overwriting. Entries
/// that would escape `dest` fail the extraction.
fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(GitpackError::ExtractFailed {
                message: format!("entry escapes extraction root: {}", entry.name()),
            });
        };

        let out = dest.join(relative);
        if out.exists() {
            continue;
        }

        if entry.is_dir() {
            std::fs::create_dir_all(&out)?;
            continue;
        }

        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut target = File::create(&out)?;
        std::io::copy(&mut entry, &mut target)?;

        // Keep packaged scripts executable.
        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&out, std::fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

/// Hosting-service archives wrap the repository in one `{repo}-{ref}/`
/// directory; that directory is the repository root.
fn repository_root(dest: &Path) -> Result<PathBuf> {
    let mut dirs = Vec::new();
    let mut file_count = 0usize;

    for entry in std::fs::read_dir(dest)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            file_count += 1;
        }
    }

    if file_count == 0 && dirs.len() == 1 {
        Ok(dirs.remove(0))
    } else {
        Ok(dest.to_path_buf())
    }
}
