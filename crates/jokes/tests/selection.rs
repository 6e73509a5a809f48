//! Integration tests for dataset loading and selection.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use jokes::{
    DatasetError, Descriptor, JokeDataset, JokeError, JokeSelector, QUERY_TIME_FORMAT,
    RandomSource,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CORNY: [&str; 2] = [
    "为什么数学书总是很忧郁？因为它有太多的问题。",
    "什么水果最让人感到害怕？—— 芒果，因为“芒”（盲）目的害怕。",
];

#[test]
fn corny_category_returns_known_joke() {
    let selector = JokeSelector::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let response = selector.select(Some("冷笑话"), &mut rng).unwrap();
    assert_eq!(response.category, "冷笑话");
    assert!(CORNY.contains(&response.joke.as_str()));
}

#[test]
fn both_jokes_of_a_category_are_reachable() {
    let selector = JokeSelector::default();
    let mut rng = StdRng::seed_from_u64(8);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..200 {
        let response = selector.select(Some("冷笑话"), &mut rng).unwrap();
        *counts.entry(response.joke).or_default() += 1;
    }
    assert_eq!(counts.len(), 2);
}

#[test]
fn descriptor_and_selector_agree_on_categories() {
    let selector = JokeSelector::default();
    let descriptor = Descriptor::for_dataset(selector.dataset());
    let mut rng = StdRng::seed_from_u64(0);

    for name in &descriptor.parameters.properties.category.allowed {
        assert!(selector.select(Some(name.as_str()), &mut rng).is_ok());
    }
    assert_eq!(
        descriptor.parameters.properties.category.allowed.len(),
        selector.dataset().len()
    );
}

#[test]
fn query_time_is_parseable() {
    let selector = JokeSelector::default();
    let source = RandomSource::Thread;
    let response = source
        .with_rng(|rng| selector.select(None, rng))
        .unwrap();
    assert_eq!(response.query_time.len(), 19);
    assert!(NaiveDateTime::parse_from_str(&response.query_time, QUERY_TIME_FORMAT).is_ok());
}

#[test]
fn seeded_source_is_reproducible() {
    let selector = JokeSelector::default();
    let a = RandomSource::seeded(77);
    let b = RandomSource::seeded(77);
    for _ in 0..16 {
        let x = a.with_rng(|rng| selector.select(None, rng)).unwrap();
        let y = b.with_rng(|rng| selector.select(None, rng)).unwrap();
        assert_eq!(x.joke, y.joke);
        assert_eq!(x.category, y.category);
    }
}

#[test]
fn custom_dataset_loaded_from_file() {
    let path = std::env::temp_dir().join(format!("jokes-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[{"category": "动物", "jokes": ["小猫钓鱼"]}, {"category": "天气", "jokes": ["下雨了"]}]"#,
    )
    .unwrap();

    let dataset = JokeDataset::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let selector = JokeSelector::new(dataset);
    let mut rng = StdRng::seed_from_u64(1);
    let response = selector.select(Some("天气"), &mut rng).unwrap();
    assert_eq!(response.joke, "下雨了");

    let err = selector.select(Some("冷笑话"), &mut rng).unwrap_err();
    assert!(matches!(err, JokeError::InvalidCategory { .. }));
    assert_eq!(err.to_string(), "不支持的分类，请从['动物', '天气']中选择");
}

#[test]
fn invalid_file_is_a_startup_error() {
    let err = JokeDataset::from_json_str(r#"[{"category": "x", "jokes": []}]"#).unwrap_err();
    assert!(matches!(err, DatasetError::EmptyCategory(_)));
}
