use std::fs;

use dakota::run_source_with_output;
use walkdir::WalkDir;

/// Runs every `.dakota` script under `tests/scripts/` and compares the
/// captured output against the `.out` file next to it.
#[test]
fn fixture_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "dakota")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Missing expected output {expected_path:?}: {e}")
                       });

        let mut output = Vec::new();
        if let Err(e) = run_source_with_output(&source, &mut output) {
            panic!("Script {path:?} failed: {e}");
        }

        let actual = String::from_utf8(output).expect("program output is UTF-8");
        assert_eq!(actual, expected, "output mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No fixture scripts found in tests/scripts");
}
