use crate::{
	config::Config,
	formats::{Format, read_geometries},
};
use anyhow::Result;
use sfkit_geometry::{Geometry, GeometryTrait};
use std::fmt::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geometry file you want to probe
	/// supported formats are: *.wkt, *.wkb, *.hex, *.gml, *.xml
	#[arg(required = true, verbatim_doc_comment)]
	filename: String,

	/// format of the input, if it can not be told from the file extension
	#[arg(long, value_enum)]
	from: Option<Format>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("probe {:?}", arguments.filename);

	let geometries = read_geometries(&arguments.filename, arguments.from, &Config::default())?;
	print!("{}", describe_all(&geometries)?);
	Ok(())
}

fn describe_all(geometries: &[Geometry]) -> Result<String> {
	let mut text = format!("geometries: {}\n", geometries.len());
	for (index, geometry) in geometries.iter().enumerate() {
		writeln!(text, "\ngeometry #{index}:")?;
		describe(geometry, 1, &mut text)?;
	}
	Ok(text)
}

fn describe(geometry: &dyn GeometryTrait, level: usize, text: &mut String) -> std::fmt::Result {
	let indent = "  ".repeat(level);
	writeln!(text, "{indent}type: {}", geometry.geometry_type())?;
	if let Some(srid) = geometry.srid() {
		writeln!(text, "{indent}srid: {srid}")?;
	}
	if let Some(gid) = geometry.gid() {
		writeln!(text, "{indent}gid: {gid}")?;
	}
	writeln!(text, "{indent}coordinates: {}", geometry.coordinate_type())?;
	if geometry.is_empty() {
		return writeln!(text, "{indent}empty");
	}
	writeln!(text, "{indent}points: {}", geometry.num_points())?;
	if let Some(envelope) = geometry.envelope() {
		writeln!(
			text,
			"{indent}envelope: [{}, {}, {}, {}]",
			envelope.min_x, envelope.min_y, envelope.max_x, envelope.max_y
		)?;
	}
	match geometry.dimension() {
		1 => writeln!(text, "{indent}length: {}", geometry.length())?,
		2 => writeln!(text, "{indent}area: {}", geometry.area())?,
		_ => {}
	}
	Ok(())
}
