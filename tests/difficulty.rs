use castpath_core::{Difficulty, PathfindingConfig, PopularityBand, SelectionConfig};

#[test]
fn test_difficulty_default() {
    assert_eq!(Difficulty::default(), Difficulty::Normal);
}

#[test]
fn test_difficulty_from_str() {
    assert_eq!(Difficulty::from("easy"), Difficulty::Easy);
    assert_eq!(Difficulty::from("HARD"), Difficulty::Hard);
    assert_eq!(Difficulty::from(" Normal "), Difficulty::Normal);
    assert_eq!(Difficulty::from("unknown"), Difficulty::Normal); // Default to normal
    assert_eq!(Difficulty::from("hard".to_string()), Difficulty::Hard);
}

#[test]
fn test_difficulty_serde() {
    assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), r#""easy""#);
    let hard: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
    assert_eq!(hard, Difficulty::Hard);
    assert_eq!(Difficulty::Hard.as_str(), "hard");
}

#[test]
fn test_profiles_scale_with_difficulty() {
    let easy = Difficulty::Easy.profile();
    let normal = Difficulty::Normal.profile();
    let hard = Difficulty::Hard.profile();

    assert_eq!((easy.min_connections, easy.max_connections), (1, 3));
    assert_eq!((normal.min_connections, normal.max_connections), (3, 5));
    assert_eq!((hard.min_connections, hard.max_connections), (5, 8));
    assert!(!easy.include_tv && normal.include_tv && hard.include_tv);

    // Every profile can reach its own longest range
    for profile in [&easy, &normal, &hard] {
        assert!(profile.max_depth >= 2 * profile.max_connections);
        assert!(!profile.exclude_franchise);
    }

    // Harder targets come from less popular performers
    assert!(easy.target_band.from <= normal.target_band.from);
    assert!(normal.target_band.from <= hard.target_band.from);
}

#[test]
fn test_profile_range_and_franchise_toggle() {
    let profile = Difficulty::Normal.profile().with_franchise_excluded(true);

    assert!(profile.accepts(3) && profile.accepts(5));
    assert!(!profile.accepts(2) && !profile.accepts(6));
    assert_eq!(profile.midpoint(), 4.0);
    assert!(profile.filter_options().exclude_franchise);
    assert_eq!(PathfindingConfig::for_profile(&profile).max_depth, 10);
}

#[test]
fn test_popularity_band_ranges() {
    assert_eq!(PopularityBand::new(0.0, 0.3).index_range(10), 0..3);
    assert_eq!(PopularityBand::new(0.4, 1.0).index_range(10), 4..10);
    assert_eq!(PopularityBand::new(0.15, 0.6).index_range(3), 0..2);
    // Never empty for a non-empty pool
    assert_eq!(PopularityBand::new(1.0, 1.0).index_range(4), 3..4);
    assert_eq!(PopularityBand::new(0.0, 1.0).index_range(0), 0..0);
}

#[test]
fn test_configs_load_from_json() {
    let config: PathfindingConfig = serde_json::from_str(
        r#"{"max_depth": 8, "credits_per_performer": 10, "performers_per_credit": 25}"#,
    )
    .unwrap();
    assert_eq!(config, PathfindingConfig::new(8, 10, 25));

    let selection = SelectionConfig::default().with_seed(99);
    let json = serde_json::to_string(&selection).unwrap();
    let restored: SelectionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, selection);
}
