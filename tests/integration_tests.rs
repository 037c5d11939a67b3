//! End-to-end tests over WCS-format fixture files

use std::fmt::Write as _;
use std::io::Cursor;

use wcsgrid::layout::{self, ChartLayout, CHART_CHIPS, CORE_COLUMNS, CORE_ROWS, POLE_ROWS};
use wcsgrid::models::ChipName;
use wcsgrid::output::save_png;
use wcsgrid::parser::{load_clab_data, load_foci_data, load_naming_data, load_speaker_data};
use wcsgrid::registry::ChipRegistry;
use wcsgrid::renderer::{render_chart, ChartStyle};
use wcsgrid::values::{assign_random_values, map_through};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// A complete 330-chip definition file. Chip numbers are assigned by a
/// stride permutation, so chip order and chart order disagree the way they
/// do in the real numbering.
fn chip_file_content() -> String {
    let mut labels = Vec::with_capacity(CHART_CHIPS);
    for row in POLE_ROWS {
        labels.push((row, 0u32));
    }
    for row in CORE_ROWS {
        for column in 1..=CORE_COLUMNS {
            labels.push((row, column));
        }
    }

    let mut content = String::new();
    for (i, (row, column)) in labels.iter().enumerate() {
        let chip = (i * 7) % CHART_CHIPS + 1;
        writeln!(content, "{}\t{}\t{}\t{}{}", chip, row, column, row, column).unwrap();
    }
    content
}

#[test]
fn chip_registry_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chip.txt");
    std::fs::write(&path, chip_file_content()).unwrap();

    let registry = ChipRegistry::load(&path).unwrap();
    assert_eq!(registry.len(), CHART_CHIPS);
    assert_eq!(registry.max_chip(), CHART_CHIPS as u32);

    let chip = registry.chip_number("B3").unwrap();
    assert_eq!(
        registry.chip_name(chip),
        Some(&ChipName { row: 'B', column: "3".to_string() })
    );
    assert_eq!(registry.chip_name(chip).unwrap().label(), "B3");
}

#[test]
fn naming_fixture_loads_with_last_line_winning() {
    let data = load_naming_data(fixture("term.txt")).unwrap();

    // The fixture repeats (1, 1, 1); the final line's term wins
    assert_eq!(data.term(1, 1, 1), Some("LB2"));
    assert_eq!(data.term(1, 1, 2), Some("WA"));
    assert_eq!(data.term(1, 2, 1), Some("G"));
    assert_eq!(data.term(2, 1, 5), Some("F"));
    assert_eq!(data.term(9, 9, 9), None);
}

#[test]
fn foci_fixture_collapses_poles_and_deduplicates() {
    let data = load_foci_data(fixture("foci-exp.txt")).unwrap();

    let lb = data.foci(1, 1, "LB").unwrap();
    let tokens: Vec<String> = lb.iter().map(|c| c.to_string()).collect();
    assert_eq!(tokens, ["F:29", "G:1"]);

    // A12 and A0 are the same pole chip after collapse
    let wa = data.foci(1, 1, "WA").unwrap();
    assert_eq!(wa.len(), 1);
    assert_eq!(wa[0].to_string(), "A:0");

    let g = data.foci(1, 2, "G").unwrap();
    assert_eq!(g[0].to_string(), "J:0");
}

#[test]
fn speaker_fixture_keeps_raw_ages_and_drops_duplicates() {
    let data = load_speaker_data(fixture("spkr-lsas.txt")).unwrap();

    assert_eq!(data.records(1, 2).unwrap()[0].age, "adult");
    assert_eq!(data.records(1, 2).unwrap()[0].gender, "F");
    // Language 2 speaker 1 appears twice with identical fields
    assert_eq!(data.records(2, 1).unwrap().len(), 1);
}

#[test]
fn clab_fixture_takes_the_last_three_fields() {
    let data = load_clab_data(fixture("cnum-vhcm-lab-new.txt")).unwrap();

    assert_eq!(
        data.coords(141),
        Some(&["96.00".to_string(), "-.06".to_string(), ".06".to_string()])
    );
    let [l, a, b] = data.lab(330).unwrap();
    assert!((l - 15.60).abs() < 1e-9);
    assert!((a + 14.89).abs() < 1e-9);
    assert!((b + 27.51).abs() < 1e-9);
}

#[test]
fn reorder_agrees_with_registry_lookup() {
    let registry = ChipRegistry::parse(Cursor::new(chip_file_content())).unwrap();
    let values: Vec<u32> = (0..CHART_CHIPS as u32).collect();
    let chart = layout::reorder(&values, &registry).unwrap();

    for (i, row) in POLE_ROWS.iter().enumerate() {
        let label = format!("{}0", row);
        assert_eq!(chart.pole[i], registry.chip_number(&label).unwrap() - 1);
    }
    assert_eq!(chart.core[0], registry.chip_number("B1").unwrap() - 1);
    assert_eq!(
        *chart.core_at(7, 39),
        registry.chip_number("I40").unwrap() - 1
    );
}

#[test]
fn random_valuation_renders_to_a_png() {
    let registry = ChipRegistry::parse(Cursor::new(chip_file_content())).unwrap();

    // One naming term per chip, cycling a small vocabulary
    let vocabulary = ["LB", "WA", "G", "F"];
    let terms: Vec<String> = (0..CHART_CHIPS)
        .map(|i| vocabulary[i % vocabulary.len()].to_string())
        .collect();

    let valuation = assign_random_values(vocabulary);
    let values = map_through(&terms, &valuation).unwrap();
    assert_eq!(values.len(), CHART_CHIPS);

    let style = ChartStyle { cell_size: 4, gutter: 2 };
    let image = render_chart(&values, &registry, &style).unwrap();
    assert_eq!(image.dimensions(), style.dimensions());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");
    save_png(&image, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), style.dimensions());
}

#[test]
fn axis_labels_match_the_published_chart() {
    assert_eq!(
        ChartLayout::<f64>::pole_row_labels(),
        ["J", "I", "H", "G", "F", "E", "D", "C", "B", "A"]
    );
    assert_eq!(
        ChartLayout::<f64>::core_row_labels(),
        ["B", "C", "D", "E", "F", "G", "H", "I"]
    );
}

#[test]
fn loaded_structures_serialize_to_json() {
    let naming = load_naming_data(fixture("term.txt")).unwrap();
    let json = serde_json::to_string(&naming).unwrap();
    let restored: wcsgrid::models::NamingData = serde_json::from_str(&json).unwrap();
    assert_eq!(naming, restored);
}
