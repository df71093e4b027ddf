use std::io::{stdin, stdout, BufWriter, Read};

use anyhow::{Context, Result};
use clap::{value_t, App, Arg};
use log::info;
use paddock_io::{
    ascii::{AsciiFormat, AsciiReader, AsciiWriter, DEFAULT_PRECISION},
    base::{PointReader, PointWriter},
};

struct Args {
    pub source_format: String,
    pub target_format: String,
    pub precision: usize,
}

fn get_args() -> Result<Args> {
    let matches = App::new("paddock convert")
        .version("0.1")
        .about("Converts a text point cloud read from stdin into another text format, written to stdout")
        .arg(
            Arg::with_name("FROM")
                .long("from")
                .takes_value(true)
                .value_name("FORMAT")
                .help("Format of the input data, one of xyz, xyzn, xyzrgb or xyznrgb")
                .required(true),
        )
        .arg(
            Arg::with_name("TO")
                .long("to")
                .takes_value(true)
                .value_name("FORMAT")
                .help("Format of the output data, one of xyz, xyzn, xyzrgb or xyznrgb")
                .required(true),
        )
        .arg(
            Arg::with_name("PRECISION")
                .short("p")
                .long("precision")
                .takes_value(true)
                .value_name("DIGITS")
                .help("Number of fractional digits for positions and normals"),
        )
        .get_matches();

    let source_format = matches
        .value_of("FROM")
        .context("Missing input format")?
        .to_owned();
    let target_format = matches
        .value_of("TO")
        .context("Missing output format")?
        .to_owned();
    let precision = if matches.is_present("PRECISION") {
        value_t!(matches, "PRECISION", usize)?
    } else {
        DEFAULT_PRECISION
    };

    Ok(Args {
        source_format,
        target_format,
        precision,
    })
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut buffer = Vec::new();
    stdin()
        .lock()
        .read_to_end(&mut buffer)
        .context("Could not read point data from stdin")?;

    let mut reader = AsciiReader::from_bytes(&buffer, &args.source_format)?;
    let num_points = reader.remaining_points();
    let point_cloud = reader.read(num_points)?;
    info!(
        "Converting {} points from {} to {}",
        point_cloud.len(),
        args.source_format,
        args.target_format
    );

    let stdout = stdout();
    let mut writer = AsciiWriter::from_write(BufWriter::new(stdout.lock()), &args.target_format)?;
    writer.set_precision(args.precision);
    writer.write(&point_cloud)?;
    writer.flush()?;

    Ok(())
}
