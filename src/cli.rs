use crate::color::Channel;
use crate::error::Error;
use crate::geometry::{Point, Size};
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_viewport_arguments(command);
        let command = Self::register_probe_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_preview_size_argument(command);
        let command = Self::register_channel_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_viewport_arguments(command: Command) -> Command {
        command
            .arg(Self::create_viewport_width_argument())
            .arg(Self::create_viewport_height_argument())
    }

    fn register_probe_argument(command: Command) -> Command {
        command.arg(Self::create_probe_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_preview_size_argument(command: Command) -> Command {
        command.arg(Self::create_preview_size_argument())
    }

    fn register_channel_argument(command: Command) -> Command {
        command.arg(Self::create_channel_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the image to inspect (PNG, JPEG, BMP, ...)")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_viewport_width_argument() -> Arg {
        arg!(viewport_width: -W --viewport_width <PX> "Width of the display viewport")
            .default_value("900")
            .value_parser(value_parser!(u32))
    }

    fn create_viewport_height_argument() -> Arg {
        arg!(viewport_height: -H --viewport_height <PX> "Height of the display viewport")
            .default_value("700")
            .value_parser(value_parser!(u32))
    }

    fn create_probe_argument() -> Arg {
        arg!(probe: -p --probe <POSITION> "Pointer position X,Y inside the viewport")
            .required(false)
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .value_parser(parse_probe_position)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIR> "Directory for the rendered display and channel images")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_preview_size_argument() -> Arg {
        arg!(preview_size: -P --preview_size <PX> "Edge length of the square channel preview panels")
            .default_value("200")
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_channel_argument() -> Arg {
        arg!(channel: -c --channel <CHANNEL> "Channel preview to write")
            .action(ArgAction::Append)
            .default_values(["red", "green", "blue"])
            .value_parser(value_parser!(Channel))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            viewport: Self::extract_viewport_arguments(matches),
            probes: Self::extract_probe_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            preview_size: Self::extract_preview_size_argument(matches),
            channels: Self::extract_channel_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_viewport_arguments(matches: &ArgMatches) -> Size {
        let width = matches
            .get_one::<u32>("viewport_width")
            .expect("Viewport width must be provided, but was unset.");
        let height = matches
            .get_one::<u32>("viewport_height")
            .expect("Viewport height must be provided, but was unset.");
        Size::new(*width, *height)
    }

    fn extract_probe_argument(matches: &ArgMatches) -> Vec<Point> {
        matches
            .get_many::<Point>("probe")
            .map(|probes| probes.copied().collect())
            .unwrap_or_default()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_directory").cloned()
    }

    fn extract_preview_size_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("preview_size")
            .expect("Preview size must be provided, but was unset.")
            .to_owned()
    }

    fn extract_channel_argument(matches: &ArgMatches) -> Vec<Channel> {
        matches
            .get_many::<Channel>("channel")
            .map(|channels| channels.copied().collect())
            .unwrap_or_default()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_probe_position(value: &str) -> crate::Result<Point> {
    let malformed = || Error::MalformedProbePosition(value.to_owned());
    let (x, y) = value.split_once(',').ok_or_else(malformed)?;
    let x: f64 = x.trim().parse().map_err(|_| malformed())?;
    let y: f64 = y.trim().parse().map_err(|_| malformed())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(malformed());
    }
    Ok(Point::new(x, y))
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
