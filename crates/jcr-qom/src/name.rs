use std::fmt;

/// `true` if `name` already carries its own outer `[` … `]` pair.
pub(crate) fn is_bracketed(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('[') && name.ends_with(']')
}

/// Write a property or selector name, bracket-quoting it when it carries a
/// namespace prefix. `:` is not a legal SQL character, so `jcr:title` must
/// render as `[jcr:title]` while `title` stays bare.
pub(crate) fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if name.contains(':') {
        write!(f, "[{name}]")
    } else {
        write!(f, "{name}")
    }
}

/// Write a property reference, qualified by its selector when one is set.
pub(crate) fn write_property(
    f: &mut fmt::Formatter<'_>,
    selector: Option<&str>,
    property: &str,
) -> fmt::Result {
    if let Some(selector) = selector {
        write_name(f, selector)?;
        f.write_str(".")?;
    }
    write_name(f, property)
}

/// Write a repository path. Pre-bracketed paths pass through verbatim.
/// Otherwise the path is bracketed, and double-quoted inside the brackets
/// when it carries a space or a dot, neither of which survives bare.
pub(crate) fn write_path(f: &mut fmt::Formatter<'_>, path: &str) -> fmt::Result {
    if is_bracketed(path) {
        write!(f, "{path}")
    } else if path.contains(' ') || path.contains('.') {
        write!(f, "[\"{path}\"]")
    } else {
        write!(f, "[{path}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name<'a>(&'a str);
    struct Path<'a>(&'a str);

    impl fmt::Display for Name<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_name(f, self.0)
        }
    }

    impl fmt::Display for Path<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_path(f, self.0)
        }
    }

    #[test]
    fn it_brackets_namespaced_names_only() {
        assert_eq!(Name("jcr:title").to_string(), "[jcr:title]");
        assert_eq!(Name("title").to_string(), "title");
    }

    #[test]
    fn it_quotes_paths_with_spaces_or_dots() {
        assert_eq!(Path("/content/a b").to_string(), "[\"/content/a b\"]");
        assert_eq!(Path("/content/file.txt").to_string(), "[\"/content/file.txt\"]");
        assert_eq!(Path("/content/plain").to_string(), "[/content/plain]");
    }

    #[test]
    fn it_keeps_prebracketed_paths_verbatim() {
        assert_eq!(Path("[/content/a b]").to_string(), "[/content/a b]");
    }
}
