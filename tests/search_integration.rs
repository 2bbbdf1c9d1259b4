//! End-to-end tests: build the index over a postal-style source file and
//! search it through the service.

use std::fs;

use encoding_rs::SHIFT_JIS;
use tempfile::TempDir;

use yubin::search::{SearchConfig, SearchOutcome, SearchService};
use yubin::storage;

// A small cut of the postal master file: quoted comma-separated fields,
// one record per line, Shift-JIS on disk.
const KEN_ALL_SAMPLE: &str = "\
\"13101\",\"100  \",\"1000001\",\"トウキョウト\",\"東京都\",\"千代田区\",\"千代田\"\n\
\"13113\",\"150  \",\"1500002\",\"トウキョウト\",\"東京都\",\"渋谷区\",\"渋谷\"\n\
\"13113\",\"150  \",\"1500045\",\"トウキョウト\",\"東京都\",\"渋谷区\",\"神泉町\"\n\
\"26102\",\"602  \",\"6020000\",\"キョウトフ\",\"京都府\",\"京都市上京区\",\"\"\n\
\"27123\",\"545  \",\"5450052\",\"オオサカフ\",\"大阪府\",\"大阪市阿倍野区\",\"阿倍野筋\"\n\
\"14130\",\"211  \",\"2110063\",\"カナガワケン\",\"神奈川県\",\"川崎市中原区\",\"小杉町\"\n";

fn setup() -> (TempDir, SearchService) {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("ken_all.csv");
    storage::write_string(&data_path, KEN_ALL_SAMPLE, SHIFT_JIS).unwrap();
    let service = SearchService::new(dir.path(), SearchConfig::default()).unwrap();
    (dir, service)
}

fn search_lines(service: &SearchService, keyword: &str) -> Vec<String> {
    match service.search(keyword).unwrap() {
        SearchOutcome::NoIndex => panic!("index missing"),
        SearchOutcome::Rows(lines) => lines.collect(),
    }
}

#[test]
fn search_two_char_keyword_requires_both_tokens() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    let rows = search_lines(&service, "渋谷");
    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.contains("渋"));
        assert!(row.contains("谷"));
    }
}

#[test]
fn search_three_char_keyword_requires_both_bigrams() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    let rows = search_lines(&service, "東京都");
    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.contains("東京"));
        assert!(row.contains("京都"));
    }
    // The 京都府 row contains 京都 but not 東京 and must not match.
    assert!(rows.iter().all(|row| !row.contains("京都府")));
}

#[test]
fn search_absent_keyword_yields_empty_not_error() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    assert!(search_lines(&service, "ダミー").is_empty());
}

#[test]
fn search_single_char_keyword_uses_substring_match() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    let rows = search_lines(&service, "谷");
    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.contains("谷"));
    }
}

#[test]
fn results_stream_in_source_file_order() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    let rows = search_lines(&service, "東京");
    let positions: Vec<usize> = rows
        .iter()
        .map(|row| {
            KEN_ALL_SAMPLE
                .lines()
                .position(|line| line == row)
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn search_before_build_reports_no_index() {
    let (_dir, service) = setup();
    match service.search("渋谷").unwrap() {
        SearchOutcome::NoIndex => {}
        SearchOutcome::Rows(_) => panic!("no index was built yet"),
    }
}

#[test]
fn search_is_repeatable() {
    let (_dir, service) = setup();
    service.create_index().unwrap();

    let first = search_lines(&service, "渋谷");
    let second = search_lines(&service, "渋谷");
    assert_eq!(first, second);
}

#[test]
fn rebuild_from_unchanged_source_is_byte_identical() {
    let (dir, service) = setup();
    service.create_index().unwrap();
    let index_path = storage::find_index_file(dir.path()).unwrap();
    let first = fs::read(&index_path).unwrap();

    service.create_index().unwrap();
    let second = fs::read(&index_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn index_file_is_written_next_to_data_file() {
    let (dir, service) = setup();
    service.create_index().unwrap();

    let index_path = storage::find_index_file(dir.path()).unwrap();
    assert_eq!(index_path, dir.path().join("ken_all.csv.idx"));
}
