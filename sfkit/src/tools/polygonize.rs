use crate::{
	config::Config,
	formats::{Format, encode_geometries, output_format, read_geometries, write_output},
};
use anyhow::Result;
use sfkit_geometry::{
	Geometry, LineString,
	polygonize::{PolygonizeResult, Polygonizer},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file with the line work: *.wkt, *.wkb, *.hex, *.gml or *.xml
	#[arg()]
	input_file: String,

	/// format of the input, if it can not be told from the file extension
	#[arg(long, value_enum, display_order = 1)]
	from: Option<Format>,

	/// format of the output, if it can not be told from the file extension
	#[arg(long, value_enum, display_order = 1)]
	to: Option<Format>,

	/// split lines where they cross before assembling polygons
	#[arg(long, short, display_order = 2)]
	node: bool,

	/// where to write the polygons, one per line; "-" for stdout
	#[arg(long, short, value_name = "FILE", default_value = "-", display_order = 3)]
	output: String,

	/// also write dangles, cut edges and invalid rings after the polygons
	#[arg(long, display_order = 3)]
	all: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("polygonize {:?}", arguments.input_file);

	let config = Config::default();
	let format = output_format(&arguments.output, arguments.to)?;
	let geometries = read_geometries(&arguments.input_file, arguments.from, &config)?;

	let mut polygonizer = Polygonizer::new().node_input(arguments.node);
	for geometry in &geometries {
		polygonizer.add(geometry);
	}
	log::debug!("collected {} lines", polygonizer.num_lines());

	let result = polygonizer.polygonize()?;
	eprintln!("{}", summary(&result));

	let content = encode_geometries(&output_geometries(result, arguments.all), format, &config)?;
	write_output(&arguments.output, &content)
}

fn summary(result: &PolygonizeResult) -> String {
	format!(
		"found {} polygons, {} dangles, {} cut edges and {} invalid rings",
		result.polygons.len(),
		result.dangles.len(),
		result.cut_edges.len(),
		result.invalid_ring_lines.len()
	)
}

fn output_geometries(result: PolygonizeResult, all: bool) -> Vec<Geometry> {
	let mut geometries: Vec<Geometry> = result.polygons.into_iter().map(Geometry::from).collect();
	if all {
		let lines = |lines: Vec<LineString>| lines.into_iter().map(Geometry::from);
		geometries.extend(lines(result.dangles));
		geometries.extend(lines(result.cut_edges));
		geometries.extend(lines(result.invalid_ring_lines));
	}
	geometries
}
