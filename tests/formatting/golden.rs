#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use ftl::formatting::*;
    use ftl::parsing::{self, Context};

    /// Golden test for the format command
    ///
    /// This test:
    /// 1. Reads all .ftl files from tests/golden/
    /// 2. Runs the equivalent of the `format` command on each file
    /// 3. Compares the formatted output with the original input
    /// 4. Shows clear diffs when differences are found
    ///
    /// The test expects files to be in their canonical formatted form. If
    /// files fail this test, either the parser & formatter is wrong (a bug
    /// that needs to be fixed!) or possibly the example file is wrong
    /// (perhaps because of a deliberate style change, and they thus might
    /// need reformatting)

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

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

        assert!(!files.is_empty(), "No .ftl files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let body = parsing::parse(file, &original, Context::full())
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            let result = render(&Identity, &body)
                .unwrap_or_else(|e| panic!("Failed to format file {:?}: {}", file, e));

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!("All golden files must format unchanged");
        }
    }

    #[test]
    fn final_newline_is_restored() {
        for name in ["messages.ftl", "selectors.ftl", "blocks.ftl"] {
            let file = Path::new("tests/golden").join(name);
            let original = parsing::load(&file).unwrap();
            let stripped = original
                .strip_suffix('\n')
                .unwrap_or(&original);

            let body = parsing::parse(&file, stripped, Context::full())
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));
            let result = serialize(&body).unwrap();

            if result != original {
                show_diff(&original, &result, &file);
                panic!("Formatting {:?} without its last newline differs", file);
            }
        }

        let file = Path::new("tests/samples/no-final-newline.ftl");
        let original = parsing::load(file).unwrap();
        assert!(!original.ends_with('\n'));

        let body = parsing::parse(file, &original, Context::full()).unwrap();
        assert_eq!(serialize(&body).unwrap(), format!("{}\n", original));
    }

    #[test]
    fn samples_reformat_stably() {
        let dir = Path::new("tests/samples");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        for entry in entries {
            let path = entry
                .expect("Failed to read directory entry")
                .path();
            if path
                .extension()
                .and_then(|s| s.to_str())
                != Some("ftl")
            {
                continue;
            }

            let original = parsing::load(&path).unwrap();
            let body = parsing::parse(&path, &original, Context::full()).unwrap();
            let once = serialize(&body).unwrap();

            let again = parsing::parse(&path, &once, Context::full())
                .unwrap_or_else(|e| panic!("Reformatted {:?} does not parse: {}", path, e));
            let twice = serialize(&again).unwrap();

            if once != twice {
                show_diff(&once, &twice, &path);
                panic!("Formatting {:?} is not stable", path);
            }
        }
    }
}
