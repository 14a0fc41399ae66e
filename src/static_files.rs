use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A local directory served verbatim. The URL prefix it is mounted under
/// belongs to the router.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    base_dir: PathBuf,
}

impl StaticFiles {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base_dir: base.into(),
        }
    }

    fn map_path(&self, rel_path: &str) -> Option<PathBuf> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(rel_path.trim_start_matches('/')).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(pb)
    }

    /// Full `Content-Type` header line for a file, chosen by extension.
    pub fn content_type_header(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "png" => "Content-Type: image/png",
            "jpg" | "jpeg" => "Content-Type: image/jpeg",
            "gif" => "Content-Type: image/gif",
            "svg" => "Content-Type: image/svg+xml",
            "webp" => "Content-Type: image/webp",
            "ico" => "Content-Type: image/x-icon",
            "css" => "Content-Type: text/css",
            "js" => "Content-Type: application/javascript",
            "html" => "Content-Type: text/html; charset=utf-8",
            "txt" => "Content-Type: text/plain; charset=utf-8",
            _ => "Content-Type: application/octet-stream",
        }
    }

    /// Load a file relative to the mount directory.
    ///
    /// Paths that climb out of the directory (`..`, absolute roots) are
    /// reported as `NotFound`, same as missing files.
    pub fn load(&self, rel_path: &str) -> io::Result<(Vec<u8>, &'static str)> {
        let path = self
            .map_path(rel_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid path"))?;
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        }
        let bytes = fs::read(&path)?;
        Ok((bytes, Self::content_type_header(&path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_path_prevents_traversal() {
        let sf = StaticFiles::new("images");
        assert!(sf.map_path("../Cargo.toml").is_none());
        assert!(sf.map_path("a/../../Cargo.toml").is_none());
        assert_eq!(sf.map_path("./a/b.png"), Some(PathBuf::from("images/a/b.png")));
    }

    #[test]
    fn test_load_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cat.PNG"), [0x89, b'P', b'N', b'G']).unwrap();
        let sf = StaticFiles::new(dir.path());
        let (bytes, ct) = sf.load("cat.PNG").unwrap();
        assert_eq!(ct, "Content-Type: image/png");
        assert_eq!(bytes.len(), 4);
        assert_eq!(sf.load("dog.png").unwrap_err().kind(), io::ErrorKind::NotFound);
        assert_eq!(sf.load("../etc/passwd").unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
