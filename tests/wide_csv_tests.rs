// Wide CSV serialization tests

mod common;

use common::series;
use promwide::models::WideTable;
use promwide::wide_csv::write_wide;

fn render(table: &WideTable) -> String {
    let mut out = Vec::new();
    write_wide(table, &mut out).expect("write_wide");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn test_two_series_example() {
    let mut table = WideTable::new();
    table.ingest_series(
        "node_cpu_usage",
        &[series(&[(100.0, "1.0")]), series(&[(100.0, "2.0")])],
    );

    let rendered = render(&table);
    let mut lines = rendered.lines();
    assert_eq!(
        lines.next(),
        Some("timestamp,node_cpu_usage_0,node_cpu_usage_1")
    );
    assert_eq!(lines.next(), Some("100,1.0,2.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_column_order_is_first_seen_not_alphabetical() {
    let mut table = WideTable::new();
    table.ingest_series("node_z_metric", &[series(&[(10.0, "1")])]);
    table.ingest_series("container_a_metric", &[series(&[(10.0, "2")])]);

    let rendered = render(&table);
    assert!(rendered.starts_with("timestamp,node_z_metric_0,container_a_metric_0"));
}

#[test]
fn test_rows_are_ascending_by_timestamp() {
    let mut table = WideTable::new();
    table.ingest_series(
        "node_load1",
        &[series(&[(300.0, "c"), (100.0, "a"), (200.0, "b")])],
    );

    let rendered = render(&table);
    let timestamps: Vec<&str> = rendered
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(timestamps, vec!["100", "200", "300"]);
}

#[test]
fn test_missing_cells_are_blank() {
    let mut table = WideTable::new();
    table.ingest_series("node_a", &[series(&[(100.0, "1")])]);
    table.ingest_series("node_b", &[series(&[(200.0, "2")])]);

    let rendered = render(&table);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("timestamp,node_a_0,node_b_0"));
    assert_eq!(lines.next(), Some("100,1,"));
    assert_eq!(lines.next(), Some("200,,2"));
}

#[test]
fn test_empty_table_writes_header_only() {
    let table = WideTable::new();
    let rendered = render(&table);
    assert_eq!(rendered.trim_end(), "timestamp");
}

#[test]
fn test_round_trip_reproduces_cell_mapping() {
    let mut table = WideTable::new();
    table.ingest_series(
        "container_cpu",
        &[
            series(&[(100.0, "0.5"), (200.0, "0.6")]),
            series(&[(100.0, "0.7")]),
        ],
    );
    table.ingest_series("node_mem", &[series(&[(200.0, "42")])]);

    let rendered = render(&table);
    let mut reader = csv::Reader::from_reader(rendered.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers[0], "timestamp");

    for record in reader.records() {
        let record = record.unwrap();
        let ts: i64 = record[0].parse().unwrap();
        for (i, alias) in headers.iter().enumerate().skip(1) {
            let expected = table.get(ts, alias).unwrap_or("");
            assert_eq!(&record[i], expected, "cell ({}, {})", ts, alias);
        }
    }
}
