use approx::assert_relative_eq;
use showroom_rs::core::types::{Viewport, ViewportClass};
use showroom_rs::core::{HeroCarousel, HeroLayout, HeroTiming};
use showroom_rs::render::NullRenderer;
use showroom_rs::{ShowroomEngine, ShowroomEngineConfig};

fn hero() -> HeroCarousel {
    HeroCarousel::new(4, HeroTiming::default()).expect("hero init")
}

fn hero_engine(width: u32) -> ShowroomEngine<NullRenderer> {
    let config = ShowroomEngineConfig::new(Viewport::new(width, 800)).with_hero_images(vec![
        "img/shop-1.jpg".to_owned(),
        "img/shop-2.jpg".to_owned(),
        "img/shop-3.jpg".to_owned(),
    ]);
    ShowroomEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn wide_layout_centers_the_active_slide() {
    let layout = HeroLayout::wide();
    // -(index * (420 + 20)) - 420/2 - 60
    assert_relative_eq!(layout.offset_px(0), -270.0);
    assert_relative_eq!(layout.offset_px(2), -1150.0);
}

#[test]
fn compact_layout_uses_its_own_constants() {
    let layout = HeroLayout::compact();
    // -(index * (280 + 15)) - 280/2 - 30
    assert_relative_eq!(layout.offset_px(0), -170.0);
    assert_relative_eq!(layout.offset_px(1), -465.0);
}

#[test]
fn layout_follows_the_viewport_class() {
    assert_eq!(ViewportClass::for_width(768, 768), ViewportClass::Compact);
    assert_eq!(ViewportClass::for_width(769, 768), ViewportClass::Wide);
    assert_eq!(
        HeroLayout::for_class(ViewportClass::Compact),
        HeroLayout::compact()
    );
}

#[test]
fn auto_advance_fires_after_exactly_one_interval() {
    let mut hero = hero();
    assert_eq!(hero.tick(6.9), 0);
    assert_eq!(hero.current(), 0);
    assert_eq!(hero.tick(0.1), 1);
    assert_eq!(hero.current(), 1);
}

#[test]
fn a_long_tick_accumulates_multiple_advances() {
    let mut hero = hero();
    assert_eq!(hero.tick(21.0), 3);
    assert_eq!(hero.current(), 3);
    assert_eq!(hero.tick(7.0), 1);
    assert_eq!(hero.current(), 0);
}

#[test]
fn manual_navigation_holds_auto_advance_for_the_resume_delay() {
    let mut hero = hero();
    hero.prev();
    assert_eq!(hero.current(), 3);
    assert!(hero.is_user_interacting());

    // One full interval elapses, but three of those seconds are cooldown:
    // the restarted timer has only accumulated four.
    assert_eq!(hero.tick(7.0), 0);
    assert_eq!(hero.current(), 3);
    assert!(!hero.is_user_interacting());

    assert_eq!(hero.tick(3.0), 1);
    assert_eq!(hero.current(), 0);
}

#[test]
fn hover_suspends_auto_advance_until_the_pointer_leaves() {
    let mut hero = hero();
    hero.tick(5.0);
    hero.hover_enter();
    assert!(hero.is_user_interacting());
    assert_eq!(hero.tick(100.0), 0);

    // Leaving restarts the full interval from zero.
    hero.hover_leave();
    assert_eq!(hero.tick(5.0), 0);
    assert_eq!(hero.tick(2.0), 1);
    assert_eq!(hero.current(), 1);
}

#[test]
fn cooldown_keeps_ticking_while_hovering() {
    let mut hero = hero();
    hero.next();
    hero.hover_enter();
    assert_eq!(hero.tick(5.0), 0);
    assert!(hero.is_user_interacting());

    hero.hover_leave();
    assert!(!hero.is_user_interacting());
    assert_eq!(hero.tick(7.0), 1);
}

#[test]
fn go_to_rejection_does_not_start_a_hold() {
    let mut hero = hero();
    hero.go_to(9).expect_err("out of range must fail");
    assert!(!hero.is_user_interacting());
    assert_eq!(hero.current(), 0);
}

#[test]
fn engine_tick_drives_the_hero_timer() {
    let mut engine = hero_engine(1000);
    engine.tick(7.0);
    assert_eq!(engine.hero().expect("hero configured").current(), 1);

    engine.hero_prev();
    engine.tick(7.0);
    assert_eq!(engine.hero().expect("hero configured").current(), 0);
}

#[test]
fn swipe_past_the_threshold_navigates_and_holds() {
    let mut engine = hero_engine(1000);
    engine.hero_touch_start(300.0);
    assert!(engine.hero_touch_end(190.0).is_some());

    let hero = engine.hero().expect("hero configured");
    assert_eq!(hero.current(), 1);
    assert!(hero.is_user_interacting());
}

#[test]
fn swipe_below_the_threshold_changes_nothing() {
    let mut engine = hero_engine(1000);
    engine.hero_touch_start(300.0);
    assert!(engine.hero_touch_end(250.0).is_none());

    let hero = engine.hero().expect("hero configured");
    assert_eq!(hero.current(), 0);
    assert!(!hero.is_user_interacting());
}

#[test]
fn hero_offset_tracks_the_viewport_class() {
    let mut engine = hero_engine(1600);
    assert_relative_eq!(engine.hero_offset_px().expect("hero"), -270.0);

    engine.hero_next();
    assert_relative_eq!(engine.hero_offset_px().expect("hero"), -710.0);

    engine.resize_now(Viewport::new(600, 800)).expect("resize");
    assert_relative_eq!(engine.hero_offset_px().expect("hero"), -465.0);
}

#[test]
fn engine_without_hero_images_has_no_hero() {
    let config = ShowroomEngineConfig::new(Viewport::new(1000, 800));
    let engine = ShowroomEngine::new(NullRenderer::default(), config).expect("engine init");
    assert!(engine.hero().is_none());
    assert!(engine.hero_offset_px().is_none());
}
