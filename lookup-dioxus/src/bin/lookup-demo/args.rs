//! Command-line argument parsing.

use std::path::PathBuf;

/// Options taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Catalog file to show instead of the configured one.
    pub catalog: Option<PathBuf>,
    /// Use the mobile layout.
    pub mobile: bool,
}

/// Parse `lookup-demo [--mobile] [CATALOG]`.
pub fn parse_args() -> Args {
    parse(std::env::args().skip(1))
}

fn parse(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--mobile" => parsed.mobile = true,
            _ if arg.starts_with("--") => log::warn!("Ignoring unknown option {arg}"),
            _ => {
                let path = PathBuf::from(&arg);
                if path.is_file() {
                    parsed.catalog = Some(path);
                } else {
                    log::warn!("Catalog {arg} does not exist, using the configured catalog");
                }
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_arguments_use_defaults() {
        assert_eq!(parse(args(&[])), Args::default());
    }

    #[test]
    fn mobile_flag_is_recognized() {
        assert!(parse(args(&["--mobile"])).mobile);
    }

    #[test]
    fn missing_catalog_is_ignored() {
        assert!(parse(args(&["/nonexistent/catalog.toml"])).catalog.is_none());
    }

    #[test]
    fn existing_catalog_is_used() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(parse(vec![path]).catalog.as_deref(), Some(file.path()));
    }
}
