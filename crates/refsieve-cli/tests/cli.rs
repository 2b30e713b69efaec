use std::process::Command;

const ARTICLE: &str = "Some article body.\nReferences\nAuthor A. Title one. Journal X 1, 1 (2019).\nArticle  Google Scholar\n\nAuthor B. Title two. Trends Genet. 2, 2 (2020).\nArticle  Google Scholar\n\nAcknowledgements\nWe thank everyone.";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_refsieve-cli"))
}

#[test]
fn writes_csv_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("article.md");
    let output = dir.path().join("reviews.csv");
    std::fs::write(&input, ARTICLE).unwrap();

    let out = bin()
        .arg(&input)
        .arg(&output)
        .arg("--no-color")
        .output()
        .unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Found 1 review-like references out of 2 total."));
    assert!(stdout.contains(&format!("Output: {}", output.display())));

    let csv = std::fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("authors,year,title,journal,raw_reference,"));
    assert!(rows[1].contains("Trends Genet"));
    assert!(!csv.contains("Journal X"));
}

#[test]
fn print_entries_lists_every_reference() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("article.md");
    let output = dir.path().join("reviews.csv");
    std::fs::write(&input, ARTICLE).unwrap();

    let out = bin()
        .arg(&input)
        .arg(&output)
        .arg("--no-color")
        .arg("--print-entries")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("[1]"));
    assert!(stdout.contains("[2]"));
    assert!(stdout.contains("Journal: Trends Genet"));
    assert!(stdout.contains("REVIEW"));
}

#[test]
fn missing_input_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.md");
    let output = dir.path().join("reviews.csv");

    let out = bin().arg(&input).arg(&output).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Input file not found"));
    assert!(!output.exists());
}

#[test]
fn missing_references_section_exits_with_status_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("article.md");
    let output = dir.path().join("reviews.csv");
    std::fs::write(&input, "A body with no reference list at all.\n").unwrap();

    let out = bin().arg(&input).arg(&output).output().unwrap();

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Could not locate References section."));
    assert!(!output.exists());
}
