use std::sync::Arc;

use threadpool::ThreadPool;

use crate::decomposer::{decompose, decompose_in_parallel, ChannelImages};
use crate::error::Error;
use crate::geometry::{DisplayGeometry, Point, Size};
use crate::image::{Image, ImageReader, PixelSample};
use crate::logger::log_geometry;
use crate::mapper::Mapping;
use crate::status::{StatusMessage, StatusSink};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Left,
}

struct LoadedImage {
    image: Arc<Image>,
    geometry: DisplayGeometry,
    channels: ChannelImages,
}

/// Owns the currently loaded image and everything derived from it.
///
/// Events arrive one at a time from the owning thread; every outcome is
/// reported to the status sink.
pub struct Session<S: StatusSink> {
    viewport: Size,
    loaded: Option<LoadedImage>,
    threadpool: Option<ThreadPool>,
    sink: S,
}

impl<S: StatusSink> Session<S> {
    pub fn new(viewport: Size, mut sink: S) -> Self {
        sink.show(StatusMessage::Prompt);
        Session {
            viewport,
            loaded: None,
            threadpool: None,
            sink,
        }
    }

    /// Decompose loaded images in row bands on `threadpool`.
    pub fn with_threadpool(mut self, threadpool: ThreadPool) -> Self {
        self.threadpool = Some(threadpool);
        self
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn image(&self) -> Option<&Image> {
        self.loaded.as_ref().map(|loaded| loaded.image.as_ref())
    }

    pub fn display_geometry(&self) -> Option<&DisplayGeometry> {
        self.loaded.as_ref().map(|loaded| &loaded.geometry)
    }

    pub fn channel_images(&self) -> Option<&ChannelImages> {
        self.loaded.as_ref().map(|loaded| &loaded.channels)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replaces the current image with whatever `reader` produces.
    ///
    /// On failure the previous image is discarded as well.
    pub fn load<R: ImageReader>(&mut self, reader: &mut R) -> Result<()> {
        let result = reader
            .read_image()
            .and_then(|image| self.replace_image(image));
        if let Err(error) = &result {
            log::warn!("loading image failed: {}", error);
            self.loaded = None;
            self.sink.show(StatusMessage::LoadFailed(error.to_string()));
        }
        result
    }

    pub fn replace_image(&mut self, image: Image) -> Result<()> {
        let image = Arc::new(image);
        let channels = match &self.threadpool {
            Some(threadpool) => decompose_in_parallel(&image, threadpool)?,
            None => decompose(&image),
        };
        let geometry = DisplayGeometry::new(self.viewport, image.size());
        log_geometry(&geometry);
        self.loaded = Some(LoadedImage {
            image,
            geometry,
            channels,
        });
        self.sink.show(StatusMessage::Prompt);
        Ok(())
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        if let Some(loaded) = &mut self.loaded {
            loaded.geometry = DisplayGeometry::new(viewport, loaded.image.size());
            log_geometry(&loaded.geometry);
        }
    }

    /// The pixel under `pointer`, `None` in the letterbox margin.
    pub fn sample_at(&self, pointer: Point) -> Result<Option<PixelSample>> {
        let loaded = self.loaded.as_ref().ok_or(Error::NoImageLoaded)?;
        match loaded.geometry.map(pointer)? {
            Mapping::Inside(coordinate) => Ok(loaded.image.sample(coordinate)),
            Mapping::Outside => Ok(None),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.loaded.is_none() {
            return;
        }
        match event {
            PointerEvent::Moved(pointer) => match self.sample_at(pointer) {
                Ok(Some(sample)) => self.sink.show(StatusMessage::Sample(sample)),
                Ok(None) => self.sink.show(StatusMessage::Prompt),
                Err(error) => log::debug!("pointer at {:?} ignored: {}", pointer, error),
            },
            PointerEvent::Left => self.sink.show(StatusMessage::Prompt),
        }
    }
}
