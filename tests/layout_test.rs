//! Width-tier classification across the breakpoints

use chirp::ui::layout::{ResponsiveClassifier, Tier, CELL_PX};

#[test]
fn pixel_breakpoints_are_exact() {
    assert_eq!(Tier::from_width(0), Tier::Mobile);
    assert_eq!(Tier::from_width(767), Tier::Mobile);
    assert_eq!(Tier::from_width(768), Tier::Tablet);
    assert_eq!(Tier::from_width(1023), Tier::Tablet);
    assert_eq!(Tier::from_width(1024), Tier::Desktop);
    assert_eq!(Tier::from_width(2560), Tier::Desktop);
}

#[test]
fn terminal_columns_scale_by_the_nominal_cell_width() {
    assert_eq!(CELL_PX, 8);
    // 95 cols = 760 px, 96 cols = 768 px
    assert_eq!(Tier::from_columns(95), Tier::Mobile);
    assert_eq!(Tier::from_columns(96), Tier::Tablet);
    // 127 cols = 1016 px, 128 cols = 1024 px
    assert_eq!(Tier::from_columns(127), Tier::Tablet);
    assert_eq!(Tier::from_columns(128), Tier::Desktop);
}

#[test]
fn classifier_is_quiet_until_the_tier_changes() {
    let mut classifier = ResponsiveClassifier::new();
    assert_eq!(classifier.current(), None);

    assert_eq!(classifier.observe(200), Some(Tier::Desktop));
    for cols in [201, 250, 128] {
        assert_eq!(classifier.observe(cols), None, "no transition at {cols}");
    }

    assert_eq!(classifier.observe(100), Some(Tier::Tablet));
    assert_eq!(classifier.observe(60), Some(Tier::Mobile));
    assert_eq!(classifier.observe(60), None);
    assert_eq!(classifier.current(), Some(Tier::Mobile));
}

#[test]
fn only_mobile_collapses_the_sidebar() {
    assert!(Tier::Mobile.sidebar_collapsed());
    assert!(!Tier::Tablet.sidebar_collapsed());
    assert!(!Tier::Desktop.sidebar_collapsed());
}
