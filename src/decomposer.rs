use std::sync::mpsc;
use std::sync::Arc;

use threadpool::ThreadPool;

use crate::color::{Channel, Rgba};
use crate::error::Error;
use crate::geometry::Size;
use crate::image::Image;
use crate::Result;

/// One opaque grayscale image per color channel, all sized like their source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelImages {
    pub red: Image,
    pub green: Image,
    pub blue: Image,
}

impl ChannelImages {
    pub fn get(&self, channel: Channel) -> &Image {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Image)> {
        Channel::ALL
            .into_iter()
            .map(move |channel| (channel, self.get(channel)))
    }
}

struct SeparateColorChannels {
    red: Vec<Rgba>,
    green: Vec<Rgba>,
    blue: Vec<Rgba>,
}

impl SeparateColorChannels {
    fn with_capacity(capacity: usize) -> Self {
        SeparateColorChannels {
            red: Vec::with_capacity(capacity),
            green: Vec::with_capacity(capacity),
            blue: Vec::with_capacity(capacity),
        }
    }

    fn split(pixels: &[Rgba]) -> Self {
        let mut channels = Self::with_capacity(pixels.len());
        for pixel in pixels {
            channels.red.push(pixel.grayscale(Channel::Red));
            channels.green.push(pixel.grayscale(Channel::Green));
            channels.blue.push(pixel.grayscale(Channel::Blue));
        }
        channels
    }

    fn append(&mut self, mut other: SeparateColorChannels) {
        self.red.append(&mut other.red);
        self.green.append(&mut other.green);
        self.blue.append(&mut other.blue);
    }

    fn into_images(self, size: Size) -> ChannelImages {
        ChannelImages {
            red: Image::from_parts(size, self.red),
            green: Image::from_parts(size, self.green),
            blue: Image::from_parts(size, self.blue),
        }
    }
}

/// Splits `image` into its red, green and blue channels.
///
/// Every output pixel is `(c, c, c, 255)` where `c` is the source pixel's
/// component for that channel. Source alpha is dropped.
pub fn decompose(image: &Image) -> ChannelImages {
    SeparateColorChannels::split(image.pixels()).into_images(image.size())
}

/// Same result as [`decompose`], computed in horizontal bands on `threadpool`.
pub fn decompose_in_parallel(image: &Arc<Image>, threadpool: &ThreadPool) -> Result<ChannelImages> {
    let height = image.height();
    let band_count = (threadpool.max_count() as u32).clamp(1, height.max(1));
    if image.is_empty() || band_count == 1 {
        return Ok(decompose(image));
    }
    let rows_per_band = height.div_ceil(band_count);
    let (sender, receiver) = mpsc::channel();
    let mut scheduled = 0;
    for first_row in (0..height).step_by(rows_per_band as usize) {
        let band_index = scheduled;
        let image = Arc::clone(image);
        let sender = sender.clone();
        threadpool.execute(move || {
            let rows = image.rows(first_row, first_row + rows_per_band);
            let _ = sender.send((band_index, SeparateColorChannels::split(rows)));
        });
        scheduled += 1;
    }
    drop(sender);

    let mut bands: Vec<(usize, SeparateColorChannels)> = receiver.iter().take(scheduled).collect();
    if bands.len() != scheduled {
        return Err(Error::DecompositionWorkerDisconnected);
    }
    bands.sort_by_key(|(band_index, _)| *band_index);
    log::debug!("decomposed {} in {} bands", image.size(), scheduled);

    let mut channels = SeparateColorChannels::with_capacity(image.size().area());
    for (_, band) in bands {
        channels.append(band);
    }
    Ok(channels.into_images(image.size()))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use threadpool::ThreadPool;

    use super::{decompose, decompose_in_parallel};
    use crate::color::{Channel, Rgba};
    use crate::geometry::{PixelCoordinate, Size};
    use crate::image::Image;

    fn primaries() -> Image {
        Image::new(
            2,
            2,
            vec![
                Rgba::new(255, 0, 0, 255),
                Rgba::new(0, 255, 0, 255),
                Rgba::new(0, 0, 255, 255),
                Rgba::new(128, 128, 128, 255),
            ],
        )
        .unwrap()
    }

    fn noise(width: u32, height: u32) -> Image {
        let mut state = 0x2545_f491_u32;
        let pixels = (0..width * height)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                Rgba::from(state.to_le_bytes())
            })
            .collect();
        Image::new(width, height, pixels).unwrap()
    }

    #[test]
    fn decompose_primaries() {
        let channels = decompose(&primaries());
        let black = Rgba::opaque_gray(0);
        let white = Rgba::opaque_gray(255);
        let gray = Rgba::opaque_gray(128);
        assert_eq!(channels.red.pixels(), &[white, black, black, gray]);
        assert_eq!(channels.green.pixels(), &[black, white, black, gray]);
        assert_eq!(channels.blue.pixels(), &[black, black, white, gray]);
    }

    #[test]
    fn decompose_keeps_dimensions() {
        let image = noise(7, 3);
        for (channel, output) in decompose(&image).iter() {
            assert_eq!(output.size(), image.size(), "{} channel resized", channel);
        }
    }

    #[test]
    fn decompose_ignores_source_alpha() {
        let image = Image::new(1, 1, vec![Rgba::new(10, 20, 30, 0)]).unwrap();
        let channels = decompose(&image);
        assert_eq!(
            channels.get(Channel::Green).pixel(PixelCoordinate::new(0, 0)),
            Some(Rgba::new(20, 20, 20, 255))
        );
    }

    #[test]
    fn decompose_is_idempotent() {
        let image = noise(31, 17);
        assert_eq!(decompose(&image), decompose(&image));
    }

    #[test]
    fn decompose_empty_image() {
        let image = Image::new(0, 5, Vec::new()).unwrap();
        let channels = decompose(&image);
        for (_, output) in channels.iter() {
            assert_eq!(output.size(), Size::new(0, 5));
            assert!(output.pixels().is_empty());
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let image = Arc::new(noise(53, 41));
        let threadpool = ThreadPool::new(4);
        let parallel = decompose_in_parallel(&image, &threadpool).unwrap();
        assert_eq!(parallel, decompose(&image));
    }

    #[test]
    fn parallel_with_more_workers_than_rows() {
        let image = Arc::new(noise(9, 2));
        let threadpool = ThreadPool::new(8);
        let parallel = decompose_in_parallel(&image, &threadpool).unwrap();
        assert_eq!(parallel, decompose(&image));
    }

    #[test]
    fn parallel_on_empty_image() {
        let image = Arc::new(Image::new(0, 0, Vec::new()).unwrap());
        let threadpool = ThreadPool::new(2);
        let parallel = decompose_in_parallel(&image, &threadpool).unwrap();
        assert!(parallel.red.is_empty());
    }
}
