use tracing::debug;

use crate::core::types::{Viewport, ViewportClass};
use crate::error::{ShowroomError, ShowroomResult};
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::for_width(self.viewport.width, self.config.compact_max_width)
    }

    /// Queues a resize; the debouncer collapses a burst of requests into a
    /// single relayout once the quiet period passes on [`super::ShowroomEngine::tick`].
    pub fn request_resize(&mut self, viewport: Viewport) -> ShowroomResult<()> {
        if !viewport.is_valid() {
            return Err(ShowroomError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.pending_viewport = Some(viewport);
        self.resize_debouncer.note_event();
        Ok(())
    }

    /// Applies a resize immediately, bypassing the debounce.
    pub fn resize_now(&mut self, viewport: Viewport) -> ShowroomResult<()> {
        if !viewport.is_valid() {
            return Err(ShowroomError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.pending_viewport = None;
        self.apply_viewport(viewport);
        Ok(())
    }

    pub(super) fn apply_viewport(&mut self, viewport: Viewport) {
        let previous_class = self.viewport_class();
        self.viewport = viewport;
        if self.viewport_class() != previous_class {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport class changed"
            );
        }
        // The recently-added section may flip between grid and carousel.
        self.rebuild_recent_carousel();
    }
}
