//! Overlay viewers: the vehicle-detail modal (with its nested fullscreen
//! overlay) and the standalone lightbox.
//!
//! Both share one state-machine shape: a captured image list, a current
//! index, and an open flag. Index navigation never changes the open/closed
//! state, and every navigation operation is inert while closed.

use tracing::debug;

use crate::core::carousel::CarouselState;
use crate::core::catalog::Vehicle;
use crate::error::{ShowroomError, ShowroomResult};

/// Open/closed lifecycle plus cyclic index navigation over a captured
/// image list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    images: Vec<String>,
    slides: Option<CarouselState>,
}

impl ViewerState {
    /// Captures `images` and `start_index`, entering the open state.
    ///
    /// Rejects out-of-bounds start indices with `InvalidStartIndex` (never
    /// clamps) and leaves the viewer closed in that case. Re-opening an
    /// already-open viewer replaces its state.
    pub fn open(&mut self, images: Vec<String>, start_index: usize) -> ShowroomResult<()> {
        if images.is_empty() || start_index >= images.len() {
            return Err(ShowroomError::InvalidStartIndex {
                index: start_index,
                len: images.len(),
            });
        }
        let mut slides = CarouselState::new(images.len())?;
        slides.go_to(start_index)?;
        self.images = images;
        self.slides = Some(slides);
        Ok(())
    }

    pub fn close(&mut self) {
        self.images.clear();
        self.slides = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slides.is_some()
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.slides.map(CarouselState::current)
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.slides
            .is_some_and(|slides| slides.controls_visible())
    }

    pub fn next(&mut self) {
        if let Some(slides) = &mut self.slides {
            slides.next();
        }
    }

    pub fn prev(&mut self) {
        if let Some(slides) = &mut self.slides {
            slides.prev();
        }
    }

    pub fn go_to(&mut self, index: usize) -> ShowroomResult<()> {
        match &mut self.slides {
            Some(slides) => slides.go_to(index),
            None => Ok(()),
        }
    }
}

/// Fullscreen image overlay with an optional caption, independent of the
/// detail modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    viewer: ViewerState,
    title: Option<String>,
}

impl Lightbox {
    pub fn open(
        &mut self,
        images: Vec<String>,
        start_index: usize,
        title: Option<String>,
    ) -> ShowroomResult<()> {
        self.viewer.open(images, start_index)?;
        self.title = title;
        Ok(())
    }

    pub fn close(&mut self) {
        self.viewer.close();
        self.title = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn next(&mut self) {
        self.viewer.next();
    }

    pub fn prev(&mut self) {
        self.viewer.prev();
    }

    pub fn go_to(&mut self, index: usize) -> ShowroomResult<()> {
        self.viewer.go_to(index)
    }
}

/// Vehicle-detail modal.
///
/// The nested fullscreen overlay (mobile path) shares the detail carousel
/// index: navigating fullscreen moves the underlying carousel too. Closing
/// the modal tears the overlay down first so the engine never observes a
/// closed-but-visible overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModal {
    viewer: ViewerState,
    vehicle_id: Option<String>,
    fullscreen_open: bool,
}

impl DetailModal {
    /// Opens the modal on a vehicle's display gallery at the first image.
    /// Re-opening on another vehicle replaces the state.
    pub fn open(&mut self, vehicle: &Vehicle) -> ShowroomResult<()> {
        self.viewer.open(vehicle.display_gallery(), 0)?;
        self.vehicle_id = Some(vehicle.id.clone());
        self.fullscreen_open = false;
        Ok(())
    }

    /// Ordered teardown: the fullscreen overlay closes before the modal.
    pub fn close(&mut self) {
        if self.fullscreen_open {
            self.close_fullscreen();
        }
        self.viewer.close();
        self.vehicle_id = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref()
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn fullscreen_open(&self) -> bool {
        self.fullscreen_open
    }

    pub fn next(&mut self) {
        self.viewer.next();
    }

    pub fn prev(&mut self) {
        self.viewer.prev();
    }

    pub fn go_to(&mut self, index: usize) -> ShowroomResult<()> {
        self.viewer.go_to(index)
    }

    /// Opens the fullscreen overlay at `index`, syncing the shared carousel
    /// index. Inert while the modal is closed.
    pub fn open_fullscreen_at(&mut self, index: usize) -> ShowroomResult<()> {
        if !self.viewer.is_open() {
            debug!("ignoring fullscreen request while detail modal is closed");
            return Ok(());
        }
        self.viewer.go_to(index)?;
        self.fullscreen_open = true;
        Ok(())
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen_open = false;
    }
}
