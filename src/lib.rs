use std::{
    path::{Path, PathBuf},
    sync::mpsc,
};

pub use cli::CLIParser;
use color::Channel;
use error::Error;
use geometry::{Point, ScalingPolicy, Size};
use session::{PointerEvent, Session};
use status::{StatusMessage, StatusSink};
use threadpool::ThreadPool;

use crate::image::{
    reader::FileImageReader,
    renderer::{render_into_panel, render_scaled},
    writer::{create_output_directory, save_png},
};

mod cli;
pub mod color;
pub mod decomposer;
pub mod error;
pub mod geometry;
pub mod image;
mod logger;
pub mod mapper;
pub mod session;
pub mod status;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    viewport: Size,
    probes: Vec<Point>,
    output_directory: Option<PathBuf>,
    preview_size: u32,
    channels: Vec<Channel>,
    number_of_threads: usize,
}

const DISPLAY_FILE_NAME: &str = "display.png";

/// Loads the input image, replays every probe as a pointer move followed by a
/// pointer leave and returns the status messages those events produced.
pub fn inspect_image(arguments: &Arguments) -> Result<Vec<StatusMessage>> {
    let (sender, receiver) = mpsc::channel();
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let mut session = Session::new(arguments.viewport, sender).with_threadpool(threadpool);
    session.load(&mut FileImageReader::new(&arguments.input_file))?;
    receiver.try_iter().for_each(drop);

    for &probe in &arguments.probes {
        session.handle_pointer(PointerEvent::Moved(probe));
    }
    session.handle_pointer(PointerEvent::Left);

    if let Some(output_directory) = &arguments.output_directory {
        export_renderings(&session, output_directory, arguments)?;
    }
    drop(session);
    Ok(receiver.iter().collect())
}

fn export_renderings<S: StatusSink>(
    session: &Session<S>,
    output_directory: &Path,
    arguments: &Arguments,
) -> Result<()> {
    let (Some(image), Some(geometry), Some(channel_images)) = (
        session.image(),
        session.display_geometry(),
        session.channel_images(),
    ) else {
        return Err(Error::NoImageLoaded);
    };
    create_output_directory(output_directory)?;
    let display = render_scaled(image, geometry.displayed_size());
    save_png(&output_directory.join(DISPLAY_FILE_NAME), &display)?;

    let panel = Size::new(arguments.preview_size, arguments.preview_size);
    for &channel in &arguments.channels {
        let preview = render_into_panel(channel_images.get(channel), panel, ScalingPolicy::Fit);
        let file_name = format!("{}.png", channel.name());
        save_png(&output_directory.join(file_name), &preview)?;
    }
    Ok(())
}
