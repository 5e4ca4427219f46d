use mobi_dict::mobi::codec::inflection::{
    apply_rule, decode, decode_rule, Direction, Mode, RuleBuffer, RuleDecoder,
};
use mobi_dict::mobi::config::RULE_BUFFER_CAPACITY;
use mobi_dict::MobiDictError;
use proptest::prelude::*;

const INSERT_RIGHT: u8 = 0x01;
const INSERT_LEFT: u8 = 0x02;
const DELETE_LEFT: u8 = 0x03;
const DELETE_RIGHT: u8 = 0x04;

/// (headword, rule, expected form)
const RULE_CASES: &[(&str, &[u8], &str)] = &[
    ("run", &[INSERT_LEFT, b'g', b'n', b'i', b'n'], "running"),
    ("run", b"s", "runs"),
    ("do", &[INSERT_RIGHT, b'u', b'n'], "undo"),
    ("carry", &[DELETE_LEFT, b'y', INSERT_LEFT, b's', b'e', b'i'], "carries"),
    ("happy", &[DELETE_LEFT, b'y', INSERT_LEFT, b'r', b'e', b'i', INSERT_RIGHT, b'u', b'n'], "unhappier"),
    ("redo", &[DELETE_RIGHT, b'r', b'e'], "do"),
    ("run", &[INSERT_LEFT, b's', 0x00, b'x'], "runs"),
    ("abc", &[0x0B, INSERT_RIGHT, b'z'], "abzc"),
    ("abc", &[INSERT_RIGHT, 0x0C, b'z'], "azbc"),
];

fn assert_corrupt(result: mobi_dict::Result<Vec<u8>>, context: &str) {
    match result {
        Err(e @ MobiDictError::CorruptRule(_)) => assert!(e.is_corruption()),
        other => panic!("expected corrupt rule error for {}, got {:?}", context, other),
    }
}

#[test]
fn rules_produce_expected_forms() {
    for (headword, rule, expected) in RULE_CASES {
        let decoded = apply_rule(headword.as_bytes(), rule)
            .unwrap_or_else(|e| panic!("rule {:02x?} on {} failed: {}", rule, headword, e));
        assert_eq!(
            String::from_utf8(decoded).expect("ascii output"),
            *expected,
            "rule {:02x?} applied to {}",
            rule,
            headword
        );
    }
}

#[test]
fn fresh_buffer_decoding() {
    assert_eq!(decode(&[]).expect("empty rule"), Vec::<u8>::new());
    assert_eq!(decode(&[INSERT_RIGHT, b'a', b'b']).expect("right insert"), b"ab");
    assert_eq!(decode(&[INSERT_LEFT, b'b', b'a']).expect("left insert"), b"ab");
}

#[test]
fn delete_mismatch_is_corrupt() {
    assert_corrupt(apply_rule(b"run", &[DELETE_LEFT, b'x']), "mismatched delete");
    assert_corrupt(decode(&[DELETE_LEFT, b'x']), "delete on empty buffer");
    assert_corrupt(apply_rule(b"run", &[DELETE_RIGHT, b'x']), "mismatched right delete");
}

#[test]
fn delete_past_logical_end_is_corrupt() {
    // seek to -1 past the start, then a no-direction delete
    assert_corrupt(apply_rule(b"ab", &[DELETE_LEFT, 0x0B, 0x0B, 0x0B, b'a']), "cursor before start");
    // a delete with no direction leaves the cursor where it was
    let mut buffer = RuleBuffer::seeded(b"ab").expect("seed");
    let mut decoder = RuleDecoder::new(&buffer);
    decoder.step(&mut buffer, DELETE_RIGHT).expect("mode switch");
    assert_eq!(decoder.cursor(), 0);
    decoder.step(&mut buffer, 0x0B).expect("seek");
    assert_eq!(decoder.cursor(), 1, "seek from right snaps to the end first");
    decoder.step(&mut buffer, b'b').expect("delete b");
    assert_eq!(buffer.as_bytes(), b"a");
    assert!(decoder.step(&mut buffer, b'x').is_err(), "nothing left at cursor 1");
}

#[test]
fn insert_then_delete_restores_word() {
    let mut buffer = RuleBuffer::seeded(b"run").expect("seed");
    decode_rule(&mut buffer, &[INSERT_LEFT, b's']).expect("insert");
    assert_eq!(buffer.as_bytes(), b"runs");
    decode_rule(&mut buffer, &[DELETE_LEFT, b's']).expect("delete");
    assert_eq!(buffer.as_bytes(), b"run");
    assert_eq!(buffer.len(), 3);

    // Same thing inside one script, using direction flips to return to the end
    let restored = apply_rule(b"run", &[INSERT_LEFT, b's', DELETE_RIGHT, DELETE_LEFT, b's'])
        .expect("single script");
    assert_eq!(restored, b"run");
}

#[test]
fn direction_changes_reset_cursor() {
    let mut buffer = RuleBuffer::seeded(b"abc").expect("seed");
    let mut decoder = RuleDecoder::new(&buffer);
    assert_eq!(decoder.cursor(), 3);
    assert_eq!(decoder.direction(), Direction::Left);
    assert_eq!(decoder.mode(), Mode::Insert);

    decoder.step(&mut buffer, INSERT_RIGHT).expect("to right");
    assert_eq!(decoder.cursor(), 0, "switching to right restarts at 0");
    assert_eq!(decoder.direction(), Direction::Right);

    decoder.step(&mut buffer, b'x').expect("insert x");
    assert_eq!(decoder.cursor(), 1);

    decoder.step(&mut buffer, INSERT_LEFT).expect("to left");
    assert_eq!(decoder.cursor(), 4, "switching to left restarts at the output length");

    decoder.step(&mut buffer, b'y').expect("insert y");
    assert_eq!(buffer.as_bytes(), b"xabcy");

    decoder.step(&mut buffer, 0x0B).expect("seek");
    assert_eq!(decoder.direction(), Direction::None);
    decoder.step(&mut buffer, DELETE_RIGHT).expect("no reset after seek");
    assert_eq!(decoder.cursor(), 3, "a seek clears direction tracking");
    assert_eq!(decoder.mode(), Mode::Delete);
}

#[test]
fn seeks_past_start_are_corrupt() {
    assert_corrupt(apply_rule(b"run", &[0x13, b'a']), "seek of 9 on a 3 byte word");
}

#[test]
fn buffer_capacity_is_enforced() {
    let full = vec![b'a'; RULE_BUFFER_CAPACITY - 1];
    let grown = apply_rule(&full, b"s").expect("one byte of headroom");
    assert_eq!(grown.len(), RULE_BUFFER_CAPACITY);

    let at_capacity = vec![b'a'; RULE_BUFFER_CAPACITY];
    assert_corrupt(apply_rule(&at_capacity, b"s"), "insert into a full buffer");

    let oversized = vec![b'a'; RULE_BUFFER_CAPACITY + 1];
    assert!(matches!(
        RuleBuffer::seeded(&oversized),
        Err(MobiDictError::CorruptRule(_))
    ));
}

proptest! {
    #[test]
    fn prop_decoder_stays_in_bounds(
        seed in proptest::collection::vec(any::<u8>(), 0..=RULE_BUFFER_CAPACITY),
        rule in proptest::collection::vec(any::<u8>(), 0..96),
    ) {
        match apply_rule(&seed, &rule) {
            Ok(decoded) => prop_assert!(decoded.len() <= RULE_BUFFER_CAPACITY),
            Err(e) => prop_assert!(e.is_corruption()),
        }
    }

    #[test]
    fn prop_control_heavy_scripts_never_panic(
        rule in proptest::collection::vec(
            prop_oneof![1u8..=4, 11u8..=19, Just(b'a'), Just(b'z')],
            0..128,
        ),
    ) {
        let mut buffer = RuleBuffer::seeded(b"zebra").expect("seed");
        if decode_rule(&mut buffer, &rule).is_ok() {
            prop_assert!(buffer.len() <= RULE_BUFFER_CAPACITY);
        }
    }
}
