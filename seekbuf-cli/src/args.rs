use std::{
    io::SeekFrom,
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use clap::{
    builder::{
        styling::{
            AnsiColor,
            Color,
            Style,
        },
        Styles,
    },
    Parser,
};

/// seekbuf - dump and patch bytes through a seekable cursor
#[derive(Debug, Parser)]
#[clap(styles(Args::STYLES))]
pub struct Args {
    /// General options for the seekbuf command-line.
    #[clap(flatten)]
    pub options: Options,

    /// The specific command to run.
    #[clap(subcommand)]
    pub command: Command,
}

impl Args {
    const STYLES: Styles = Styles::styled()
        .header(Style::new().bold())
        .usage(Style::new().bold())
        .literal(
            Style::new()
                .italic()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        )
        .placeholder(
            Style::new()
                .italic()
                .fg_color(Some(Color::Ansi(AnsiColor::BrightGreen))),
        )
        .valid(Style::new().italic())
        .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))));
}

#[derive(Debug, Parser)]
pub struct Options {
    /// File to read the buffer from. If not specified, stdin is read until it
    /// is closed.
    #[clap(short, long, env = "SEEKBUF_INPUT")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Print a hexdump of the buffer.
    Dump(DumpArgs),
    /// Overwrite bytes in the buffer and print the whole buffer.
    Patch(PatchArgs),
}

#[derive(Debug, Parser)]
pub struct DumpArgs {
    /// Where to start dumping, e.g. `start:16`, `end:-32` or `current:4`.
    #[clap(short, long, value_name("ORIGIN:OFFSET"), default_value = "start:0")]
    pub seek: SeekArg,

    /// Maximum number of bytes to dump. Dumps to the end of the buffer by
    /// default.
    #[clap(short, long)]
    pub length: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct PatchArgs {
    /// Where to write the patch. Writes that start past the end of the buffer
    /// are appended to it.
    #[clap(short, long, value_name("ORIGIN:OFFSET"))]
    pub seek: SeekArg,

    /// The bytes to write, as hex (e.g. `de ad be ef`).
    #[clap(long, value_name("HEX"))]
    pub hex: HexBytes,

    /// File to write the patched buffer to. If not specified, it's written to
    /// stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid seek origin: {0} (expected start, end or current)")]
    Origin(String),

    #[error("Invalid offset: {input}")]
    Offset {
        #[source]
        error: ParseIntError,
        input: String,
    },

    #[error("Invalid hex string: {input}")]
    Hex {
        #[source]
        error: hex::FromHexError,
        input: String,
    },
}

/// A seek given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::From, derive_more::Into)]
pub struct SeekArg(pub SeekFrom);

impl FromStr for SeekArg {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let from = match s.split_once(':') {
            None => SeekFrom::Start(parse_offset(s)?),
            Some(("start", offset)) => SeekFrom::Start(parse_offset(offset)?),
            Some(("end", offset)) => SeekFrom::End(parse_offset(offset)?),
            Some(("current", offset)) => SeekFrom::Current(parse_offset(offset)?),
            Some((origin, _)) => return Err(ParseError::Origin(origin.to_owned())),
        };
        Ok(Self(from))
    }
}

fn parse_offset<T: FromStr<Err = ParseIntError>>(s: &str) -> Result<T, ParseError> {
    s.trim().parse().map_err(|error| {
        ParseError::Offset {
            error,
            input: s.to_owned(),
        }
    })
}

/// Bytes given as a hex string on the command line. Whitespace is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, derive_more::From, derive_more::Into)]
pub struct HexBytes(pub Vec<u8>);

impl FromStr for HexBytes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>();

        hex::decode(&digits).map(Self).map_err(|error| {
            ParseError::Hex {
                error,
                input: s.to_owned(),
            }
        })
    }
}
