#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use phrasing::parsing;

    fn template_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files.sort();
        files
    }

    #[test]
    fn ensure_samples_compile() {
        let files = template_files(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&file, &content) {
                Ok(sentences) => {
                    if sentences.is_empty() {
                        println!("File {:?} contained no sentences", file);
                        failures.push(file.clone());
                    }
                }
                Err(e) => {
                    println!("File {:?} failed to compile: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should compile successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = template_files(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            if parsing::parse(&file, &content).is_ok() {
                println!("File {:?} unexpectedly compiled successfully", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not compile successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn one_sentence_per_line() {
        let file = Path::new("tests/samples/lights.txt");
        let content = parsing::load(file).expect("Failed to load lights.txt");

        let expected = content
            .lines()
            .filter(|line| {
                !line
                    .trim()
                    .is_empty()
            })
            .count();

        let sentences = parsing::parse(file, &content).expect("lights.txt should compile");
        assert_eq!(sentences.len(), expected);
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/nonexistent.txt"));
        match result {
            Ok(_) => panic!("Expected loading to fail"),
            Err(error) => assert_eq!(error.problem, "File not found"),
        }
    }
}
