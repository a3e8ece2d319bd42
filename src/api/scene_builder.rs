//! Projects engine state into a [`CatalogScene`].
//!
//! The builder is a pure read of controller state: sorting and section
//! selection happen here, filtering semantics stay in the filter engine,
//! and carousel/modal indices come from their controllers untouched.

use crate::core::carousel::CarouselState;
use crate::core::catalog::{Brand, NoviceEligibility, Vehicle};
use crate::core::filter::apply_filters;
use crate::render::{
    BrandNavEntry, BrandSection, CardView, CarouselView, CatalogScene, DetailView, FullscreenView,
    HeroView, LightboxView, MediaView, OverlayView, RecentLayout, RecentSection, Renderer, SpecRow,
};

use super::labels::{car_title, format_number, format_price};
use super::ShowroomEngine;

pub(super) fn build_scene<R: Renderer>(engine: &ShowroomEngine<R>) -> CatalogScene {
    let has_filters = !engine.criteria.is_empty();

    let mut sorted_brands: Vec<&Brand> = engine.catalog.brands.iter().collect();
    sorted_brands.sort_by_key(|brand| brand.name.to_lowercase());

    let brand_nav = sorted_brands
        .iter()
        .map(|brand| BrandNavEntry {
            brand_id: brand.id.clone(),
            name: brand.name.clone(),
            logo: brand.logo.clone(),
            enabled: engine.brand_has_matches(&brand.id),
        })
        .collect();

    let mut sections = Vec::new();
    for &brand in &sorted_brands {
        let mut matching = apply_filters(&brand.cars, &engine.criteria);
        // Under active filters an emptied brand disappears; unfiltered it
        // renders as an empty-section placeholder.
        if matching.is_empty() && has_filters {
            continue;
        }
        matching.sort_by_key(|car| car.name.to_lowercase());

        sections.push(BrandSection {
            brand_id: brand.id.clone(),
            name: brand.name.clone(),
            empty_placeholder: matching.is_empty(),
            cards: matching
                .iter()
                .map(|&car| build_card(engine, brand, car))
                .collect(),
        });
    }

    CatalogScene {
        viewport: engine.viewport,
        brand_nav,
        sections,
        recently_added: build_recent_section(engine, has_filters),
        hero: build_hero(engine),
        overlay: build_overlay(engine),
        scroll_locked: engine.scroll_locked(),
    }
}

fn build_card<R: Renderer>(engine: &ShowroomEngine<R>, brand: &Brand, car: &Vehicle) -> CardView {
    let media = if car.has_carousel() {
        let state = engine
            .card_carousels
            .get(&car.id)
            .copied()
            .or_else(|| CarouselState::new(car.gallery.len()).ok());
        match state {
            Some(state) => MediaView::Carousel(CarouselView {
                images: car.gallery.clone(),
                active_index: state.current(),
                offset_percent: state.offset_percent(),
                controls_visible: state.controls_visible(),
            }),
            None => MediaView::Placeholder,
        }
    } else if !car.image.is_empty() {
        MediaView::Image(car.image.clone())
    } else {
        MediaView::Placeholder
    };

    CardView {
        vehicle_id: car.id.clone(),
        title: car_title(&brand.name, car),
        year: car.anno,
        mileage_label: format_number(car.chilometraggio),
        fuel: car.carburante.clone(),
        transmission: car.tipo_cambio.clone(),
        price_label: format_price(car.prezzo),
        recently_added: car.aggiunto,
        media,
    }
}

fn build_recent_section<R: Renderer>(
    engine: &ShowroomEngine<R>,
    has_filters: bool,
) -> Option<RecentSection> {
    let recent = engine.recently_added_vehicles();
    if recent.is_empty() && has_filters {
        return None;
    }

    let layout = if engine.viewport().width <= engine.config().recent_carousel_max_width {
        RecentLayout::Carousel
    } else {
        RecentLayout::Grid
    };

    let (active_index, offset_percent) = engine
        .recent_carousel
        .map_or((0, 0.0), |state| (state.current(), state.offset_percent()));

    Some(RecentSection {
        layout,
        active_index,
        offset_percent,
        empty_placeholder: recent.is_empty(),
        cards: recent
            .iter()
            .map(|&(brand, car)| build_card(engine, brand, car))
            .collect(),
    })
}

fn build_hero<R: Renderer>(engine: &ShowroomEngine<R>) -> Option<HeroView> {
    let hero = engine.hero()?;
    Some(HeroView {
        images: engine.config().hero_images.clone(),
        active_index: hero.current(),
        offset_px: engine.hero_layout().offset_px(hero.current()),
        auto_advance_held: hero.is_user_interacting(),
    })
}

fn build_overlay<R: Renderer>(engine: &ShowroomEngine<R>) -> OverlayView {
    if engine.detail_modal().is_open() {
        if let Some(detail) = build_detail_view(engine) {
            return OverlayView::Detail(detail);
        }
    }

    let lightbox = engine.lightbox();
    if lightbox.is_open()
        && let Some(current) = lightbox.viewer().current()
    {
        let images = lightbox.viewer().images();
        return OverlayView::Lightbox(LightboxView {
            image: images[current].clone(),
            title: lightbox.title().map(ToOwned::to_owned),
            counter_label: counter_label(current, images.len()),
            controls_visible: lightbox.viewer().controls_visible(),
        });
    }

    OverlayView::None
}

fn build_detail_view<R: Renderer>(engine: &ShowroomEngine<R>) -> Option<DetailView> {
    let modal = engine.detail_modal();
    let vehicle_id = modal.vehicle_id()?;
    let (brand, car) = engine.catalog().vehicle(vehicle_id)?;
    let current = modal.viewer().current()?;
    let images = modal.viewer().images().to_vec();

    let fullscreen = modal.fullscreen_open().then(|| FullscreenView {
        image: images[current].clone(),
        counter_label: counter_label(current, images.len()),
    });

    Some(DetailView {
        vehicle_id: vehicle_id.to_owned(),
        title: car_title(&brand.name, car),
        price_label: format_price(car.prezzo),
        specs: build_spec_rows(car),
        active_index: current,
        controls_visible: modal.viewer().controls_visible(),
        images,
        fullscreen,
    })
}

fn build_spec_rows(car: &Vehicle) -> Vec<SpecRow> {
    let mut specs = vec![
        SpecRow {
            label: "Anno".to_owned(),
            value: car.anno.to_string(),
        },
        SpecRow {
            label: "Chilometraggio".to_owned(),
            value: format!("{} km", format_number(car.chilometraggio)),
        },
        SpecRow {
            label: "Condizioni".to_owned(),
            value: car.condizioni.clone().unwrap_or_else(|| "Usato".to_owned()),
        },
        SpecRow {
            label: "Carburante".to_owned(),
            value: car.carburante.clone(),
        },
        SpecRow {
            label: "Cambio".to_owned(),
            value: car.tipo_cambio.clone(),
        },
        SpecRow {
            label: "Cilindrata".to_owned(),
            value: match car.cilindrata {
                Some(cc) if cc > 0 => format!("{cc} cc"),
                _ => "N/A".to_owned(),
            },
        },
        SpecRow {
            label: "Potenza".to_owned(),
            value: match car.kw {
                Some(kw) => format!("{} CV ({kw} kW)", car.cavalli),
                None => format!("{} CV", car.cavalli),
            },
        },
        SpecRow {
            label: "Euro".to_owned(),
            value: car.euro.clone(),
        },
    ];

    if let Some(posti) = car.posti {
        specs.push(SpecRow {
            label: "Posti".to_owned(),
            value: posti.to_string(),
        });
    }

    specs.push(SpecRow {
        label: "Neopatentati".to_owned(),
        value: match car.neopatentati {
            NoviceEligibility::Eligible => "SI".to_owned(),
            NoviceEligibility::NotEligible => "NO".to_owned(),
        },
    });

    specs
}

fn counter_label(index: usize, len: usize) -> String {
    format!("{} / {len}", index + 1)
}
