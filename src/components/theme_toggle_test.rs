use super::*;

#[test]
fn label_names_the_theme_to_switch_to() {
    assert_eq!(next_label(Theme::Light), "dark");
    assert_eq!(next_label(Theme::Dark), "light");
}

#[test]
fn label_flips_across_a_toggle_round_trip() {
    let mut active = Theme::Dark;
    assert_eq!(next_label(active), "light");
    active = active.opposite();
    assert_eq!(next_label(active), "dark");
    active = active.opposite();
    assert_eq!(next_label(active), "light");
}
