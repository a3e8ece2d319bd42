use showroom_rs::core::types::{Viewport, ViewportClass};
use showroom_rs::core::{FilterCriteria, HeroTiming};
use showroom_rs::loader::prepare_catalog;
use showroom_rs::render::NullRenderer;
use showroom_rs::{ShowroomEngine, ShowroomEngineConfig, ShowroomError};

const TWO_BRAND_JSON: &str = r#"{
  "brands": [
    {
      "id": "fiat",
      "name": "Fiat",
      "cars": [
        {"id": "fiat-1", "name": "Panda", "anno": 2019, "chilometraggio": 60000,
         "carburante": "Benzina", "tipo_cambio": "Manuale", "cavalli": 70, "prezzo": 10000},
        {"id": "fiat-2", "name": "500X", "anno": 2022, "chilometraggio": 20000,
         "carburante": "Diesel", "tipo_cambio": "Automatico", "cavalli": 130, "prezzo": 25000,
         "gallery": ["img/a.jpg", "img/b.jpg", "img/c.jpg"]}
      ]
    },
    {
      "id": "bmw",
      "name": "BMW",
      "cars": [
        {"id": "bmw-1", "name": "320d", "anno": 2021, "chilometraggio": 45000,
         "carburante": "Diesel", "tipo_cambio": "Automatico", "cavalli": 190, "prezzo": 40000,
         "venduto": true}
      ]
    }
  ]
}"#;

fn engine() -> ShowroomEngine<NullRenderer> {
    let config = ShowroomEngineConfig::new(Viewport::new(1280, 720));
    let mut engine = ShowroomEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_catalog(prepare_catalog(TWO_BRAND_JSON).expect("catalog prepares"));
    engine
}

#[test]
fn loaded_catalog_drops_the_sold_out_brand_end_to_end() {
    let mut engine = engine();

    assert_eq!(engine.catalog().brands.len(), 1);
    assert_eq!(engine.visible_vehicles().len(), 2);
    assert!(engine.catalog().vehicle("bmw-1").is_none());

    engine.submit_filters(FilterCriteria::default().with_price_range(None, Some(15_000)));
    let visible = engine.visible_vehicles();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "fiat-1");
    assert_eq!(visible[0].prezzo, 10_000);

    engine.reset_filters();
    assert_eq!(engine.visible_vehicles().len(), 2);
}

#[test]
fn config_round_trips_through_json() {
    let config = ShowroomEngineConfig::new(Viewport::new(1280, 720))
        .with_compact_max_width(900)
        .with_swipe_threshold_px(64.0)
        .with_hero_timing(HeroTiming {
            advance_interval_s: 5.0,
            resume_delay_s: 2.0,
        })
        .with_hero_images(vec!["img/shop.jpg".to_owned()]);

    let json = config.to_json_pretty().expect("config serializes");
    let restored = ShowroomEngineConfig::from_json_str(&json).expect("config parses");
    assert_eq!(restored, config);
}

#[test]
fn config_defaults_fill_in_missing_json_fields() {
    let config = ShowroomEngineConfig::from_json_str(
        r#"{"viewport": {"width": 1024, "height": 768}}"#,
    )
    .expect("config parses");

    assert_eq!(config.compact_max_width, 768);
    assert_eq!(config.recent_carousel_max_width, 1400);
    assert!((config.swipe_threshold_px - 80.0).abs() < f64::EPSILON);
    assert!((config.resize_quiet_period_s - 0.25).abs() < f64::EPSILON);
    assert!((config.hero_timing.advance_interval_s - 7.0).abs() < f64::EPSILON);
    assert!((config.hero_timing.resume_delay_s - 3.0).abs() < f64::EPSILON);
    assert!(config.hero_images.is_empty());
}

#[test]
fn zero_sized_viewports_are_rejected() {
    let config = ShowroomEngineConfig::new(Viewport::new(0, 720));
    let err = ShowroomEngine::new(NullRenderer::default(), config).expect_err("must fail");
    assert!(matches!(err, ShowroomError::InvalidViewport { width: 0, .. }));
}

#[test]
fn nonsensical_timing_constants_are_rejected() {
    let config = ShowroomEngineConfig::new(Viewport::new(1280, 720)).with_hero_timing(HeroTiming {
        advance_interval_s: 0.0,
        resume_delay_s: 3.0,
    });
    let err = ShowroomEngine::new(NullRenderer::default(), config).expect_err("must fail");
    assert!(matches!(err, ShowroomError::InvalidData(_)));

    let config = ShowroomEngineConfig::new(Viewport::new(1280, 720)).with_swipe_threshold_px(-1.0);
    let err = ShowroomEngine::new(NullRenderer::default(), config).expect_err("must fail");
    assert!(matches!(err, ShowroomError::InvalidData(_)));
}

#[test]
fn resize_requests_are_debounced_until_the_quiet_period_passes() {
    let mut engine = engine();
    engine
        .request_resize(Viewport::new(700, 900))
        .expect("resize queued");

    // Not applied yet: the quiet period has not elapsed.
    assert_eq!(engine.viewport(), Viewport::new(1280, 720));
    engine.tick(0.1);
    assert_eq!(engine.viewport(), Viewport::new(1280, 720));

    // A second request restarts the quiet period.
    engine
        .request_resize(Viewport::new(720, 900))
        .expect("resize queued");
    engine.tick(0.2);
    assert_eq!(engine.viewport(), Viewport::new(1280, 720));

    engine.tick(0.1);
    assert_eq!(engine.viewport(), Viewport::new(720, 900));
    assert_eq!(engine.viewport_class(), ViewportClass::Compact);
}

#[test]
fn invalid_resize_requests_fail_fast() {
    let mut engine = engine();
    let err = engine
        .request_resize(Viewport::new(800, 0))
        .expect_err("must fail");
    assert!(matches!(err, ShowroomError::InvalidViewport { .. }));
}

#[test]
fn card_carousels_are_registered_per_vehicle() {
    let mut engine = engine();

    let state = engine.card_carousel("fiat-2").expect("carousel exists");
    assert_eq!(state.slide_count(), 3);
    assert!(state.controls_visible());

    assert_eq!(engine.card_carousel_next("fiat-2").expect("advance"), 1);
    assert_eq!(engine.card_carousel_prev("fiat-2").expect("step back"), 0);
    engine.card_carousel_go_to("fiat-2", 2).expect("jump");

    // Single-image vehicles keep a one-slide state with hidden controls.
    let single = engine.card_carousel("fiat-1").expect("carousel exists");
    assert_eq!(single.slide_count(), 1);
    assert!(!single.controls_visible());
}

#[test]
fn unknown_vehicle_ids_are_rejected_by_the_registry() {
    let mut engine = engine();
    let err = engine.card_carousel_next("nope").expect_err("must fail");
    assert!(matches!(err, ShowroomError::UnknownVehicle(_)));
}

#[test]
fn submitting_filters_restarts_card_carousels() {
    let mut engine = engine();
    engine.card_carousel_go_to("fiat-2", 2).expect("jump");

    engine.submit_filters(FilterCriteria::default().with_fuel("Diesel"));
    let state = engine.card_carousel("fiat-2").expect("carousel exists");
    assert_eq!(state.current(), 0);
}

#[test]
fn replacing_the_catalog_discards_open_overlays() {
    let mut engine = engine();
    engine.open_vehicle_detail("fiat-2").expect("detail opens");
    assert!(engine.scroll_locked());

    engine.set_catalog(prepare_catalog(TWO_BRAND_JSON).expect("catalog prepares"));
    assert!(!engine.detail_modal().is_open());
    assert!(!engine.scroll_locked());
}

#[test]
fn brand_match_queries_follow_the_active_criteria() {
    let mut engine = engine();
    assert!(engine.brand_has_matches("fiat"));
    assert!(!engine.brand_has_matches("bmw"));

    engine.submit_filters(FilterCriteria::default().with_price_range(Some(30_000), None));
    assert!(!engine.brand_has_matches("fiat"));
}
