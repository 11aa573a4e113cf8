//! Checks that the unit test tree mirrors the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't require separate test files
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_rust_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                paths.extend(relative_rust_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = Path::new(SRC_DIR);
        let unit = Path::new(UNIT_DIR);
        let src_paths = relative_rust_paths(src, src).unwrap_or_default();
        let unit_paths = relative_rust_paths(unit, unit).unwrap_or_default();
        assert!(!src_paths.is_empty(), "No sources found under {SRC_DIR}");
        (src_paths, unit_paths)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_exempt(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let orphaned: Vec<_> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        collect_files_without_tests(tests_dir, tests_dir, &mut files_without_tests)
            .unwrap_or_else(|error| {
                assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
            });

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_files_without_tests(
        dir: &Path,
        base_dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                collect_files_without_tests(&path, base_dir, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if (path.parent() == Some(base_dir) && file_name == "main.rs") || file_name == "mod.rs"
            {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
