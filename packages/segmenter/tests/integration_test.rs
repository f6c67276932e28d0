//! End-to-end integration tests for the segmentation pipeline.
//!
//! Runs the fixture statutes through loading, segmentation, combining and
//! rendering, covering both heading dialects.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use regelrecht_segmenter::combine::combine_documents;
use regelrecht_segmenter::converter::convert_directory;
use regelrecht_segmenter::output::{generate_combined_csv, generate_csv, generate_yaml};
use regelrecht_segmenter::{convert_file, Document, Record};
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> Document {
    let path = fixture_path(name);
    convert_file(&path).unwrap_or_else(|e| panic!("Failed to convert {}: {}", path.display(), e))
}

fn record(fields: [&str; 10]) -> Record {
    let [chapter, chapter_title, sub_chapter, sub_chapter_title, section, section_title, subsection, point, subpoint, text] =
        fields;
    Record {
        chapter: chapter.to_string(),
        chapter_title: chapter_title.to_string(),
        sub_chapter: sub_chapter.to_string(),
        sub_chapter_title: sub_chapter_title.to_string(),
        section: section.to_string(),
        section_title: section_title.to_string(),
        subsection: subsection.to_string(),
        point: point.to_string(),
        subpoint: subpoint.to_string(),
        text: text.to_string(),
    }
}

// =============================================================================
// Article dialect
// =============================================================================

#[test]
fn test_basic_law_records() {
    let document = load_fixture("basic_law.txt");

    assert_eq!(document.id, "basic_law");
    assert!(document.warnings.is_empty());

    const DIGNITY: &str = "Human dignity – Human rights – Legally binding force of basic rights";
    assert_eq!(
        document.records,
        vec![
            record(["", "", "", "", "", "", "", "", "", "Basic Law for the Federal Republic of Germany"]),
            record([
                "I", "Basic Rights", "", "", "1", DIGNITY, "(1)", "", "",
                "Human dignity shall be inviolable. To respect and protect it shall be the duty of all state authority.",
            ]),
            record([
                "I", "Basic Rights", "", "", "1", DIGNITY, "(2)", "", "",
                "The German people therefore acknowledge inviolable and inalienable human rights as the basis of every community, of peace and of justice in the world.",
            ]),
            record([
                "I", "Basic Rights", "", "", "1", DIGNITY, "(3)", "", "",
                "The following basic rights shall bind the legislature, the executive and the judiciary as directly applicable law.",
            ]),
            record([
                "I", "Basic Rights", "", "", "2", "Personal freedoms", "(1)", "", "",
                "Every person shall have the right to free development of his personality insofar as he does not violate the rights of others.",
            ]),
            record([
                "II", "The Federation and the States", "", "", "20",
                "Constitutional principles – Right of resistance", "(1)", "", "",
                "The Federal Republic of Germany is a democratic and social federal state.",
            ]),
        ]
    );
}

// =============================================================================
// Section dialect
// =============================================================================

#[test]
fn test_criminal_code_records() {
    let document = load_fixture("criminal_code.txt");

    assert_eq!(document.id, "criminal_code");
    assert!(document.warnings.is_empty());

    let ch1 = ["1", "The Criminal Law", "1", "Scope of application"];
    let in_3a = |subsection: &str, point: &str, subpoint: &str, text: &str| {
        record([
            ch1[0], ch1[1], ch1[2], ch1[3], "3a", "Definitions", subsection, point, subpoint, text,
        ])
    };

    assert_eq!(
        document.records,
        vec![
            record(["", "", "", "", "", "", "", "", "", "German Criminal Code (Strafgesetzbuch – StGB)"]),
            record([
                ch1[0], ch1[1], ch1[2], ch1[3], "1", "No punishment without law", "", "", "",
                "An act may only incur a penalty if criminal liability was established by law before the act was committed.",
            ]),
            in_3a("(1)", "", "", "Within the meaning of this Act"),
            in_3a("(1)", "1.", "", "a relative is"),
            in_3a("(1)", "1.", "a)", "a relative in direct line,"),
            in_3a("(1)", "1.", "b)", "a spouse, a civil partner, a fiancé;"),
            in_3a("(1)", "2.", "", "a public official is anyone who holds public office."),
            in_3a(
                "(2)",
                "",
                "",
                "An unlawful act is only one which satisfies the statutory elements of a criminal provision.",
            ),
            record([
                "2", "The Offence", "", "", "13", "Omissions", "(1)", "", "",
                "Whoever fails to avert a result is only liable if responsible under law.",
            ]),
        ]
    );
}

#[test]
fn test_boilerplate_never_reaches_output() {
    for name in ["basic_law.txt", "criminal_code.txt"] {
        let document = load_fixture(name);
        for record in &document.records {
            assert!(!record.text.contains("Translated by"), "{name}: {}", record.text);
            assert!(!record.text.contains("Übersetzung"), "{name}: {}", record.text);
            assert!(!record.text.contains("Table of Contents"), "{name}: {}", record.text);
        }
    }
}

#[test]
fn test_segmentation_is_deterministic() {
    let first = load_fixture("criminal_code.txt");
    let second = load_fixture("criminal_code.txt");
    assert_eq!(first, second);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_criminal_code_csv() {
    let document = load_fixture("criminal_code.txt");
    let csv = generate_csv(&document.records);
    let lines: Vec<&str> = csv.split("\r\n").collect();

    assert_eq!(
        lines[0],
        "Chapter,ChapterTitle,SubChapter,SubChapterTitle,Section,SectionTitle,Subsection,Point,Subpoint,Text"
    );
    // Header, nine records and the empty remainder after the last terminator.
    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[6],
        "1,The Criminal Law,1,Scope of application,3a,Definitions,(1),1.,b),\"a spouse, a civil partner, a fiancé;\""
    );
}

#[test]
fn test_basic_law_yaml() {
    let document = load_fixture("basic_law.txt");
    let yaml = generate_yaml(&document).unwrap();

    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("document: basic_law"));
    assert!(yaml.contains("section_title: Personal freedoms"));
    assert!(!yaml.contains("warnings:"));
}

// =============================================================================
// Combining
// =============================================================================

#[test]
fn test_combine_fixture_directory() {
    let dir = tempdir().unwrap();
    for name in ["basic_law.txt", "criminal_code.txt"] {
        fs::copy(fixture_path(name), dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join("urls.csv"), "name,url\n").unwrap();

    let documents: Vec<Document> = convert_directory(dir.path())
        .unwrap()
        .into_iter()
        .map(|outcome| outcome.result.unwrap())
        .collect();
    let rows = combine_documents(&documents);

    assert_eq!(rows.len(), 15);
    assert_eq!(
        rows.iter().map(|r| r.global_index).collect::<Vec<_>>(),
        (0..15).collect::<Vec<_>>()
    );
    assert_eq!(rows[0].law_name, "basic_law");
    assert_eq!(rows[6].law_name, "criminal_code");

    // Preamble rows carry the sentinel in every number column.
    let preamble = &rows[0].record;
    assert_eq!(
        [
            preamble.chapter.as_str(),
            preamble.sub_chapter.as_str(),
            preamble.section.as_str(),
            preamble.subsection.as_str(),
            preamble.point.as_str(),
            preamble.subpoint.as_str(),
        ],
        ["0"; 6]
    );
    assert_eq!(preamble.chapter_title, "");

    let csv = generate_combined_csv(&rows);
    assert!(csv.starts_with(
        "Chapter,ChapterTitle,SubChapter,SubChapterTitle,Section,SectionTitle,Subsection,Point,Subpoint,Text,law_name,global_index\r\n"
    ));
    assert!(csv.ends_with(",criminal_code,14\r\n"));
}

// =============================================================================
// Mixed dialects
// =============================================================================

#[test]
fn test_mixed_dialects_flagged_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(
        &path,
        "Section 1\nScope\n(1) First.\nArticle 2\n[Second]\n(1) Second.\nSection 3\nThird\n(1) Third.\n",
    )
    .unwrap();

    let document = convert_file(&path).unwrap();
    let sections: Vec<&str> = document.records.iter().map(|r| r.section.as_str()).collect();
    assert_eq!(sections, vec!["1", "2", "3"]);
    assert_eq!(document.records[1].section_title, "Second");
    assert_eq!(document.warnings.len(), 1);
}
