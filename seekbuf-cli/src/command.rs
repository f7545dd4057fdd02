use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use color_eyre::eyre::{
    Error,
    WrapErr,
};
use seekbuf::{
    Cursor,
    End,
    Hexdump,
};

use crate::args::{
    Args,
    Command,
    DumpArgs,
    PatchArgs,
};

pub fn run(args: Args) -> Result<(), Error> {
    let mut cursor = open_input(args.options.input.as_deref())?;

    match args.command {
        Command::Dump(args) => {
            dump(&mut cursor, &args, std::io::stdout().lock())?;
        }
        Command::Patch(args) => {
            match &args.output {
                Some(path) => {
                    let file = File::create(path)
                        .wrap_err_with(|| format!("Could not create file: {}", path.display()))?;
                    patch(&mut cursor, &args, BufWriter::new(file))?;
                    tracing::info!("patched buffer written to: {}", path.display());
                }
                None => patch(&mut cursor, &args, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Cursor, Error> {
    let cursor = if let Some(path) = path {
        let file =
            File::open(path).wrap_err_with(|| format!("Could not open file: {}", path.display()))?;
        Cursor::from_reader(file)
            .wrap_err_with(|| format!("Could not read file: {}", path.display()))?
    }
    else {
        Cursor::from_reader(std::io::stdin().lock()).wrap_err("Could not read stdin")?
    };

    tracing::debug!(bytes = cursor.get_ref().len(), "read input");
    Ok(cursor)
}

/// Seeks and prints a hexdump of up to `args.length` bytes from there.
pub fn dump(cursor: &mut Cursor, args: &DumpArgs, mut output: impl Write) -> Result<(), Error> {
    let offset = cursor.seek(args.seek.into())?;

    let available = cursor.remaining().len();
    let mut bytes = vec![0; args.length.map_or(available, |n| n.min(available))];
    let n = match cursor.read(&mut bytes) {
        Ok(n) => n,
        Err(End) => 0,
    };
    bytes.truncate(n);
    tracing::debug!(offset, length = n, "dumping");

    let hexdump = Hexdump::new(&bytes).with_offset(cursor.position() - n);
    write!(output, "{hexdump}")?;
    output.flush()?;

    Ok(())
}

/// Seeks, writes `args.hex` and outputs the whole patched buffer.
pub fn patch(cursor: &mut Cursor, args: &PatchArgs, mut output: impl Write) -> Result<(), Error> {
    let offset = cursor.seek(args.seek.into())?;
    let n = cursor.write(&args.hex.0)?;
    tracing::debug!(offset, length = n, "patched");

    output.write_all(cursor.get_ref())?;
    output.flush()?;
    Ok(())
}
