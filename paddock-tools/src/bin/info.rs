use std::{
    io::{stdin, Read},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::info;
use paddock_core::{
    containers::PointCloud,
    layout::PointAttribute,
    math::AABB,
    nalgebra::Point3,
};
use paddock_io::{
    ascii::{AsciiReader, FormatTag},
    base::PointReader,
};

struct Args {
    pub format: String,
    pub detailed: bool,
}

fn get_args() -> Result<Args> {
    let matches = App::new("paddock info")
        .version("0.1")
        .about("Prints information about a text point cloud read from stdin")
        .arg(
            Arg::with_name("FORMAT")
                .short("f")
                .long("format")
                .takes_value(true)
                .value_name("FORMAT")
                .help("Format of the input data, one of xyz, xyzn, xyzrgb or xyznrgb")
                .required(true),
        )
        .arg(
            Arg::with_name("DETAILED")
                .short("d")
                .long("detailed")
                .help("Output a detailed analysis of the point cloud, showing min and max values for all point attributes")
        )
        .get_matches();

    let format = matches
        .value_of("FORMAT")
        .context("Missing input format")?
        .to_owned();
    let detailed = matches.is_present("DETAILED");

    Ok(Args { format, detailed })
}

fn print_attributes(format: FormatTag) {
    println!("Attributes");
    for column in format.descriptor().columns() {
        println!("\t{}", column);
    }
}

fn print_minmax(label: &str, bounds: &AABB<f64>, component_names: [&str; 3]) {
    for (component, name) in component_names.iter().enumerate() {
        println!(
            "\t{:<24}{}  {}",
            format!("{} {}:", label, name),
            bounds.min()[component],
            bounds.max()[component]
        );
    }
}

fn analyze_cloud(point_cloud: &PointCloud) {
    let t_start = Instant::now();

    println!("Analyzing minimum and maximum values for all point attributes...");

    for attribute in [
        PointAttribute::Position3D,
        PointAttribute::Normal3D,
        PointAttribute::ColorRgb,
    ] {
        if !point_cloud.has_attribute(attribute) {
            continue;
        }
        let values = point_cloud.attribute(attribute);
        let bounds = match AABB::from_points(values.iter().map(|value| Point3::from(*value))) {
            Some(bounds) => bounds,
            None => continue,
        };
        match attribute {
            PointAttribute::Position3D => print_minmax("Position", &bounds, ["X", "Y", "Z"]),
            PointAttribute::Normal3D => print_minmax("Normal", &bounds, ["X", "Y", "Z"]),
            PointAttribute::ColorRgb => print_minmax("Color", &bounds, ["R", "G", "B"]),
        }
    }

    println!("Took {:.2}s", t_start.elapsed().as_secs_f64());
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut buffer = Vec::new();
    stdin()
        .lock()
        .read_to_end(&mut buffer)
        .context("Could not read point data from stdin")?;
    info!("Read {} bytes from stdin", buffer.len());

    let mut reader = AsciiReader::from_bytes(&buffer, &args.format)?;
    let format = reader.format().tag();
    println!("paddock info report for {} data", format);
    println!("{}", reader.get_metadata());
    print_attributes(format);

    if args.detailed {
        let num_points = reader.remaining_points();
        let point_cloud = reader.read(num_points)?;
        analyze_cloud(&point_cloud);
    }

    Ok(())
}
