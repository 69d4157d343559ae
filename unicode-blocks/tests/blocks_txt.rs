use unicode_blocks::*;

const BLOCKS: &str = include_str!("../data/Blocks.txt");

fn table() -> BlockTable {
    let _ = env_logger::Builder::new().is_test(true).try_init();
    BlockTable::parse(BLOCKS).unwrap()
}

fn data_lines() -> usize {
    BLOCKS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}

#[test]
fn one_block_per_data_line() {
    let table = table();
    assert_eq!(table.len(), data_lines());
    assert_eq!(table.len(), 320);
    for (idx, block) in table.iter().enumerate() {
        assert_eq!(block.order, idx + 1);
    }
}

#[test]
fn ascending_and_disjoint() {
    let table = table();
    let ranges: Vec<&BlockRange> = table.iter().collect();
    for pair in ranges.windows(2) {
        assert!(
            pair[0].end < pair[1].begin,
            "{} overlaps or precedes {}",
            pair[1],
            pair[0]
        );
    }
    for block in &table {
        assert!(block.begin <= block.end, "{block}");
        assert!(block.begin >= 32, "{block}");
    }
}

#[test]
fn every_member_classifies_to_its_block() {
    let table = table();
    for block in &table {
        for code_point in [block.begin, (block.begin + block.end) / 2, block.end] {
            assert_eq!(
                table.find_block(code_point),
                BlockMatch::Found {
                    order: block.order,
                    description: &block.description
                }
            );
        }
    }
}

#[test]
fn well_known_blocks() {
    let table = table();
    assert_eq!(
        table.block(1).unwrap().to_string(),
        "1. [0x20..0x7f] Basic Latin"
    );
    assert_eq!(table.find_block('é' as u32).description(), "Latin-1 Supplement");
    assert_eq!(table.find_block(0x4e2d).description(), "CJK Unified Ideographs");
    assert_eq!(table.find_block(0x1f600).order(), 300);
    assert_eq!(table.find_block(0xd800).description(), "High Surrogates");
}

#[test]
fn gaps_are_not_found() {
    let table = table();
    for code_point in [0x1f, 0x2fe0, 0xe0080] {
        assert_eq!(table.find_block(code_point), BlockMatch::NotFound);
    }
}

#[test]
fn block_index_bounds() {
    let table = table();
    let engine = QueryEngine::new(&table);
    assert!(matches!(
        engine.expand_block(0),
        Err(Error::BlockOutOfRange { index: 0, count: 320 })
    ));
    assert!(matches!(
        engine.expand_block(321),
        Err(Error::BlockOutOfRange {
            index: 321,
            count: 320
        })
    ));
    assert!(engine.expand_block(320).is_ok());
}

#[test]
fn expand_basic_latin() {
    let table = table();
    let engine = QueryEngine::new(&table);
    let (block, records) = engine.expand_block(1).unwrap();
    let records: Vec<EncodedChar> = records.collect();
    assert_eq!(block.description, "Basic Latin");
    assert_eq!(records.len(), 0x80 - 0x20);
    assert_eq!(records[0].glyph, ' ');
    assert_eq!(records[0].utf32be, "00000020");
    assert!(records.iter().all(|r| r.block_order == 1));
    assert!(records.iter().all(|r| r.utf8.len() == 2));
}

#[test]
fn expand_surrogate_blocks() {
    let table = table();
    let engine = QueryEngine::new(&table);
    for block in table.iter().filter(|b| b.description.contains("Surrogates")) {
        let (_, records) = engine.expand_block(block.order).unwrap();
        assert_eq!(records.count(), 0, "{block}");
    }
}

#[test]
fn expand_supplementary_plane() {
    let table = table();
    let engine = QueryEngine::new(&table);
    let (_, records) = engine.expand_block(300).unwrap();
    for record in records {
        assert_eq!(record.utf8.len(), 8);
        assert_eq!(record.utf16le.len(), 8);
        assert_eq!(record.block_description, "Emoticons");
    }
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Blocks.txt");
    std::fs::write(&path, BLOCKS).unwrap();
    assert_eq!(BlockTable::load(&path).unwrap(), table());
    assert_eq!(source::load(&path, source::BLOCKS_URL).unwrap(), table());

    let missing = dir.path().join("missing.txt");
    assert!(matches!(BlockTable::load(&missing), Err(Error::Io { .. })));
}
