use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::{ConvertError, TitleError, extract_title, markdown_to_html};

/// Template placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Template placeholder replaced by the rendered HTML.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
    #[error("Failed to find a title in {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
    #[error("Path {0} is not inside the content directory")]
    OutsideContent(PathBuf),
}

/// Replace `dst` with a copy of everything under `src`.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    copy_into(src, dst)
}

fn copy_into(src: &Path, dst: &Path) -> Result<(), IoError> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copy_into(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            log::info!("Copied file: {} to {}", from.display(), to.display());
        }
    }

    Ok(())
}

/// Render one page: convert the markdown, fill the template, and point
/// root-relative `href`/`src` URLs at `base_path`.
///
/// `path` only labels errors.
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
    path: &Path,
) -> Result<String, IoError> {
    let content = markdown_to_html(markdown).map_err(|source| IoError::Convert {
        path: path.to_path_buf(),
        source,
    })?;
    let title = extract_title(markdown).map_err(|source| IoError::Title {
        path: path.to_path_buf(),
        source,
    })?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Prefix root-relative `href="/` and `src="/` URLs with `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Generate `dest` from the markdown file `from` using `template_path`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read_file(from)?;
    let template = read_file(template_path)?;
    let page = render_page(&markdown, &template, base_path, from)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Generate an `.html` page in `dest_dir` for every `.md` file under
/// `content_dir`, mirroring the directory layout.
///
/// Returns the written paths, sorted.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, IoError> {
    if !content_dir.is_dir() {
        return Err(IoError::NotFound(content_dir.to_path_buf()));
    }

    let mut written = Vec::new();
    for source in scan_markdown_files(content_dir)? {
        let dest = page_destination(content_dir, &source, dest_dir)?;
        generate_page(&source, template_path, &dest, base_path)?;
        written.push(dest);
    }
    written.sort();
    Ok(written)
}

/// Output path for `source`: same location relative to `dest_dir`, with an
/// `.html` extension.
pub fn page_destination(
    content_dir: &Path,
    source: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, IoError> {
    let relative = source
        .strip_prefix(content_dir)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| IoError::OutsideContent(source.to_path_buf()))?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}

/// Scan for markdown files under `root`, sorted.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn render_page_fills_template() {
        let page = render_page("# Hi\n\nbody", TEMPLATE, "/", Path::new("x.md")).unwrap();
        assert_eq!(
            page,
            "<title>Hi</title><main><div><h1>Hi</h1><p>body</p></div></main>"
        );
    }

    #[test]
    fn render_page_rewrites_base_path() {
        let md = "# T\n\n[home](/index.html) ![i](/images/a.png) [ext](https://x.y/)";
        let page = render_page(md, "{{ Content }}", "/repo/", Path::new("x.md")).unwrap();
        assert_eq!(
            page,
            r#"<div><h1>T</h1><p><a href="/repo/index.html">home</a> <img src="/repo/images/a.png" alt="i"> <a href="https://x.y/">ext</a></p></div>"#
        );
    }

    #[test]
    fn render_page_requires_title() {
        let err = render_page("no heading", TEMPLATE, "/", Path::new("bad.md")).unwrap_err();
        match err {
            IoError::Title { path, source } => {
                assert_eq!(path, PathBuf::from("bad.md"));
                assert_eq!(source, TitleError::MissingTitle);
            }
            other => panic!("expected Title error, got {other:?}"),
        }
    }

    #[test]
    fn render_page_names_file_on_parse_error() {
        let err = render_page("# T\n\nodd `tick", TEMPLATE, "/", Path::new("odd.md")).unwrap_err();
        assert!(matches!(err, IoError::Convert { ref path, .. } if path == Path::new("odd.md")));
    }

    #[test]
    fn copy_dir_replaces_destination() {
        let src = create_test_dir();
        create_test_file(&src, "index.css", "body {}");
        create_test_file(&src, "images/tolkien.png", "png");
        let dst = create_test_dir();
        create_test_file(&dst, "stale.txt", "old");

        copy_dir_recursive(src.path(), dst.path()).unwrap();

        assert!(dst.path().join("index.css").exists());
        assert_eq!(
            fs::read_to_string(dst.path().join("images/tolkien.png")).unwrap(),
            "png"
        );
        assert!(!dst.path().join("stale.txt").exists());
    }

    #[test]
    fn copy_dir_missing_source() {
        let dst = create_test_dir();
        let missing = dst.path().join("nope");
        assert!(matches!(
            copy_dir_recursive(&missing, dst.path()),
            Err(IoError::NotFound(_))
        ));
    }

    #[test]
    fn generate_pages_mirrors_layout() {
        let content = create_test_dir();
        create_test_file(&content, "index.md", "# Home\n\nWelcome");
        create_test_file(&content, "blog/post.md", "# Post\n\n- a\n- b");
        create_test_file(&content, "blog/notes.txt", "ignored");
        let site = create_test_dir();
        let template = create_test_file(&site, "template.html", TEMPLATE);
        let out = site.path().join("public");

        let written = generate_pages_recursive(content.path(), &template, &out, "/").unwrap();

        assert_eq!(written, vec![out.join("blog/post.html"), out.join("index.html")]);
        assert_eq!(
            fs::read_to_string(out.join("blog/post.html")).unwrap(),
            "<title>Post</title><main><div><h1>Post</h1><ul><li>a</li><li>b</li></ul></div></main>"
        );
        assert!(!out.join("blog/notes.html").exists());
    }

    #[test]
    fn generate_page_missing_template() {
        let content = create_test_dir();
        let md = create_test_file(&content, "index.md", "# Home");
        let missing = content.path().join("missing.html");
        let err = generate_page(&md, &missing, &content.path().join("out.html"), "/").unwrap_err();
        assert!(matches!(err, IoError::NotFound(p) if p == missing));
    }

    #[test]
    fn page_destination_swaps_extension() {
        let dest = page_destination(
            Path::new("/site/content"),
            Path::new("/site/content/a/b.md"),
            Path::new("/site/public"),
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("/site/public/a/b.html"));
    }

    #[test]
    fn page_destination_outside_content() {
        assert!(matches!(
            page_destination(
                Path::new("/site/content"),
                Path::new("/elsewhere/a.md"),
                Path::new("/site/public"),
            ),
            Err(IoError::OutsideContent(_))
        ));
    }
}
