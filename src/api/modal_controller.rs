use crate::core::modal::{DetailModal, Lightbox};
use crate::error::{ShowroomError, ShowroomResult};
use crate::interaction::{Key, SwipeDirection};
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    /// Opens the detail modal on a vehicle. An already-open overlay of
    /// either kind is replaced, never stacked.
    pub fn open_vehicle_detail(&mut self, vehicle_id: &str) -> ShowroomResult<()> {
        let vehicle = self
            .catalog
            .vehicle(vehicle_id)
            .map(|(_, car)| car.clone())
            .ok_or_else(|| ShowroomError::UnknownVehicle(vehicle_id.to_owned()))?;

        self.detail.open(&vehicle)?;
        self.lightbox.close();
        Ok(())
    }

    pub fn close_vehicle_detail(&mut self) {
        self.detail.close();
    }

    #[must_use]
    pub fn detail_modal(&self) -> &DetailModal {
        &self.detail
    }

    pub fn detail_next(&mut self) {
        self.detail.next();
    }

    pub fn detail_prev(&mut self) {
        self.detail.prev();
    }

    pub fn detail_go_to(&mut self, index: usize) -> ShowroomResult<()> {
        self.detail.go_to(index)
    }

    /// Opens the nested fullscreen overlay on the detail image at `index`.
    pub fn open_detail_fullscreen_at(&mut self, index: usize) -> ShowroomResult<()> {
        self.detail.open_fullscreen_at(index)
    }

    pub fn close_detail_fullscreen(&mut self) {
        self.detail.close_fullscreen();
    }

    /// Swipe path shared by the detail carousel and its fullscreen
    /// overlay; both navigate the same index.
    pub fn detail_touch_start(&mut self, x: f64) {
        self.overlay_swipe.begin(x);
    }

    pub fn detail_touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let direction = self.overlay_swipe.end(x)?;
        if !self.detail.is_open() {
            return None;
        }
        match direction {
            SwipeDirection::Next => self.detail.next(),
            SwipeDirection::Prev => self.detail.prev(),
        }
        Some(direction)
    }

    /// Opens the lightbox over an explicit image list. Replaces any open
    /// overlay; rejects out-of-bounds start indices without opening.
    pub fn open_lightbox(
        &mut self,
        images: Vec<String>,
        start_index: usize,
        title: Option<String>,
    ) -> ShowroomResult<()> {
        self.lightbox.open(images, start_index, title)?;
        self.detail.close();
        Ok(())
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox.next();
    }

    pub fn lightbox_prev(&mut self) {
        self.lightbox.prev();
    }

    pub fn lightbox_go_to(&mut self, index: usize) -> ShowroomResult<()> {
        self.lightbox.go_to(index)
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Background scroll is disallowed while any overlay is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.detail.is_open() || self.lightbox.is_open()
    }

    /// Keyboard dispatch for the overlay surfaces. Returns true when the
    /// key was consumed; bindings are inert while everything is closed.
    /// Escape peels one layer at a time: fullscreen overlay first, then
    /// the modal itself.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.lightbox.is_open() {
            match key {
                Key::Escape => self.lightbox.close(),
                Key::ArrowLeft => self.lightbox.prev(),
                Key::ArrowRight => self.lightbox.next(),
            }
            return true;
        }

        if self.detail.is_open() {
            match key {
                Key::Escape if self.detail.fullscreen_open() => self.detail.close_fullscreen(),
                Key::Escape => self.detail.close(),
                Key::ArrowLeft => self.detail.prev(),
                Key::ArrowRight => self.detail.next(),
            }
            return true;
        }

        false
    }
}
