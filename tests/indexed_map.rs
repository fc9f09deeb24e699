//! Behavioral tests for IndexedMap through the public API.

use indexed_map::{IndexedMap, MapError, get_with_default};
use rstest::{fixture, rstest};

#[fixture]
fn abc() -> IndexedMap<String, i32> {
    IndexedMap::from([
        ("a".to_string(), 1),
        ("b".to_string(), 2),
        ("c".to_string(), 3),
    ])
}

// =============================================================================
// Absent keys
// =============================================================================

#[rstest]
#[case("z")]
#[case("")]
#[case("ab")]
fn absent_key_reads_as_none_or_default(abc: IndexedMap<String, i32>, #[case] key: &str) {
    assert_eq!(abc.get(key), None);
    assert_eq!(abc.index_of_key(key), None);
    assert_eq!(abc.get_with_default(key, -7), -7);
    assert_eq!(get_with_default(Some(&abc), key, -7), -7);
}

#[test]
fn missing_map_reads_as_empty() {
    let none: Option<&IndexedMap<String, i32>> = None;
    assert_eq!(get_with_default(none, "a", 5), 5);
}

// =============================================================================
// put / get
// =============================================================================

#[rstest]
#[case("a", 10)]
#[case("m", 0)]
#[case("zz", -1)]
fn put_then_get_yields_value(mut abc: IndexedMap<String, i32>, #[case] key: &str, #[case] value: i32) {
    abc.put(key.to_string(), value);
    assert_eq!(abc.get(key), Some(&value));
}

#[test]
fn keys_stay_sorted_across_mutations() {
    let mut map = IndexedMap::new();
    for key in [5, 1, 9, 3, 7, 2, 8] {
        map.put(key, key * 10);
    }
    map.remove(&3);
    map -= &9;
    map.set(4, 40);
    map.remove_at(0).unwrap();

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![2, 4, 5, 7, 8]);
    assert!(map.all_indexed(|i, k, v| map.index_of_key(k) == Some(i) && *v == k * 10));
}

#[rstest]
fn key_at_len_is_out_of_range(abc: IndexedMap<String, i32>) {
    assert_eq!(
        abc.key_at(abc.len()),
        Err(MapError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(abc.last_index(), Some(2));
}

// =============================================================================
// get_or_put
// =============================================================================

#[rstest]
fn get_or_put_twice_calls_supplier_once(mut abc: IndexedMap<String, i32>) {
    let mut calls = 0;
    let mut supply = || {
        calls += 1;
        100
    };

    *abc.get_or_put("x".to_string(), &mut supply) += 1;
    let second = *abc.get_or_put("x".to_string(), &mut supply);

    assert_eq!(second, 101);
    assert_eq!(calls, 1);
}

// =============================================================================
// put_with_default
// =============================================================================

#[rstest]
#[case("a")]
#[case("x")]
fn put_with_default_of_default_leaves_key_absent(mut abc: IndexedMap<String, i32>, #[case] key: &str) {
    abc.put_with_default(key.to_string(), 0, 0);
    assert!(!abc.contains_key(key));
}

#[rstest]
#[case("a")]
#[case("k")]
fn put_with_default_drops_key_already_holding_default(mut abc: IndexedMap<String, i32>, #[case] key: &str) {
    abc.put(key.to_string(), 0);

    assert_eq!(abc.put_with_default(key.to_string(), 0, 0), 0);
    assert!(!abc.contains_key(key));
}

#[test]
fn put_with_default_on_empty_returns_default() {
    let mut map: IndexedMap<String, i32> = IndexedMap::new();
    assert_eq!(map.put_with_default("x".to_string(), 0, 0), 0);
    assert!(map.is_empty());
}

#[rstest]
#[case("b", 2, 2)]
#[case("b", 9, 2)]
#[case("q", 9, 0)]
fn put_with_default_returns_previous_association(
    mut abc: IndexedMap<String, i32>,
    #[case] key: &str,
    #[case] value: i32,
    #[case] previous: i32,
) {
    assert_eq!(abc.put_with_default(key.to_string(), value, 0), previous);
    assert_eq!(abc.get(key), Some(&value));
}

// =============================================================================
// remove_all_indexed / retain_all_indexed
// =============================================================================

#[rstest]
fn remove_all_indexed_example(mut abc: IndexedMap<String, i32>) {
    abc.remove_all_indexed(|_, _, v| *v == 2);

    assert_eq!(abc, IndexedMap::from([("a".to_string(), 1), ("c".to_string(), 3)]));
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
fn remove_all_indexed_leaves_no_match_and_keeps_order(#[case] divisor: i32) {
    let mut map: IndexedMap<i32, i32> = (0..30).map(|k| (k, k * 7 % 11)).collect();
    let expected: Vec<(i32, i32)> = map
        .iter()
        .filter(|(_, v)| **v % divisor != 0)
        .map(|(k, v)| (*k, *v))
        .collect();

    map.remove_all_indexed(|_, _, v| v % divisor == 0);

    assert!(!map.any_indexed(|_, _, v| v % divisor == 0));
    assert_eq!(map.into_iter().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn retain_all_matches_remove_all_of_negation(abc: IndexedMap<String, i32>, #[case] pivot: usize) {
    let mut retained = abc.clone();
    let mut removed = abc;

    let kept = retained.len() - retained.retain_all_indexed(|i, _, _| i != pivot);
    removed.remove_all_indexed(|i, _, _| i == pivot);

    assert_eq!(retained, removed);
    assert_eq!(kept, 2);
}

// =============================================================================
// copy
// =============================================================================

#[rstest]
fn copy_preserves_keys_and_transforms_values(abc: IndexedMap<String, i32>) {
    let copied = abc.copy(|v| v + 100);

    assert_eq!(copied.len(), abc.len());
    abc.for_each_indexed(|i, k, v| {
        assert_eq!(copied.key_at(i), Ok(k));
        assert_eq!(copied.value_at(i), Ok(&(v + 100)));
    });
}
