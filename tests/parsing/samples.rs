#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use ftl::parsing::{self, Context};

    fn ftl_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("ftl")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .ftl files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = ftl_files(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for context in [Context::full(), Context::partial()] {
                match parsing::parse(file, &content, context) {
                    Ok(_) => {}
                    Err(e) => {
                        println!("File {:?} failed to parse: {}", file, e);
                        failures.push(file.clone());
                    }
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = ftl_files(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            if parsing::parse(file, &content, Context::full()).is_ok() {
                println!("File {:?} unexpectedly parsed successfully", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn missing_file() {
        let error = parsing::load(Path::new("tests/samples/nonexistent.ftl")).unwrap_err();
        assert_eq!(error.problem, "File not found");
    }
}
