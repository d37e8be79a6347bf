// Composition tests — the full pipeline chained end to end.
//
// These tests exercise the data flow between modules:
//   Roster Loader -> Partitioner -> Commonality Engine -> Serializer
// against real files in a temp directory, with seeded rngs so every run is
// reproducible.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mingle::config::FieldTable;
use mingle::errors::MingleError;
use mingle::output::to_json;
use mingle::pipeline;

fn write_roster(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("roster.csv");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const FOUR_PEOPLE: &str = "name,school,interests\n\
    Ada,MIT,\"math,climbing,chess\"\n\
    Grace,Yale,\"compilers,sailing,chess\"\n\
    Alan,Cambridge,\"logic,running,chess\"\n\
    Katherine,WVSU,\"math,flying,chess\"\n";

// ============================================================
// End-to-end scenario: 4 people, groups of 2
// ============================================================

#[test]
fn four_people_in_pairs_yields_two_full_groups() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([0_u8; 32]);
    let groups =
        pipeline::run(&roster, 2, &out, &FieldTable::default(), &mut rng).unwrap();

    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert_eq!(group.matches.len(), 2);
        assert!(group.common_attributes.len() <= 5);
        assert!(!group.common_attributes.iter().any(String::is_empty));
    }
}

#[test]
fn every_person_lands_in_exactly_one_group() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([1_u8; 32]);
    let groups =
        pipeline::run(&roster, 3, &out, &FieldTable::default(), &mut rng).unwrap();

    let mut names: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.matches.iter())
        .map(|p| p.get("name").unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ada", "Alan", "Grace", "Katherine"]);
}

#[test]
fn universally_shared_interest_reaches_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([2_u8; 32]);
    let groups =
        pipeline::run(&roster, 4, &out, &FieldTable::default(), &mut rng).unwrap();

    // One group of four; everyone lists chess.
    assert_eq!(groups.len(), 1);
    assert!(groups[0].common_attributes.iter().any(|a| a == "chess"));
}

// ============================================================
// Written document shape
// ============================================================

#[test]
fn document_on_disk_matches_the_returned_groups() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([3_u8; 32]);
    let groups =
        pipeline::run(&roster, 2, &out, &FieldTable::default(), &mut rng).unwrap();

    let on_disk = fs::read_to_string(&out).unwrap();
    assert_eq!(on_disk, to_json(&groups).unwrap());
}

#[test]
fn document_shape_is_the_renderer_contract() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([4_u8; 32]);
    pipeline::run(&roster, 2, &out, &FieldTable::default(), &mut rng).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let list = doc.as_array().expect("top level is a list");
    assert_eq!(list.len(), 2);
    for entry in list {
        let obj = entry.as_object().unwrap();
        assert!(obj.contains_key("matches"));
        assert!(obj.contains_key("common_attributes"));
        // Raw records: original casing preserved.
        let matches = obj["matches"].as_array().unwrap();
        for person in matches {
            assert!(person.get("name").is_some());
            assert!(person.get("school").is_some());
            assert!(person.get("interests").is_some());
        }
    }
}

#[test]
fn same_seed_produces_byte_identical_documents() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);

    let out_a = dir.path().join("a.json");
    let out_b = dir.path().join("b.json");
    pipeline::run(
        &roster,
        2,
        &out_a,
        &FieldTable::default(),
        &mut StdRng::from_seed([5_u8; 32]),
    )
    .unwrap();
    pipeline::run(
        &roster,
        2,
        &out_b,
        &FieldTable::default(),
        &mut StdRng::from_seed([5_u8; 32]),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&out_a).unwrap(),
        fs::read_to_string(&out_b).unwrap()
    );
}

// ============================================================
// Failure paths
// ============================================================

#[test]
fn ragged_roster_aborts_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, "name,school\nAda,MIT\nGrace\n");
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([6_u8; 32]);
    let err =
        pipeline::run(&roster, 2, &out, &FieldTable::default(), &mut rng).unwrap_err();

    assert!(matches!(err, MingleError::MalformedRoster(_)), "{err}");
    assert!(!out.exists(), "no partial document on failure");
}

#[test]
fn zero_group_size_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, FOUR_PEOPLE);
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([7_u8; 32]);
    let err =
        pipeline::run(&roster, 0, &out, &FieldTable::default(), &mut rng).unwrap_err();

    assert!(matches!(err, MingleError::InvalidGroupSize(0)), "{err}");
    assert!(!out.exists());
}

#[test]
fn empty_roster_writes_an_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let roster = write_roster(&dir, "name,school,interests\n");
    let out = dir.path().join("matches.json");

    let mut rng = StdRng::from_seed([8_u8; 32]);
    let groups =
        pipeline::run(&roster, 2, &out, &FieldTable::default(), &mut rng).unwrap();

    assert!(groups.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "[]");
}
