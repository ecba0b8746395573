use crate::{
	config::Config,
	formats::{Format, encode_geometries, output_format, read_geometries, write_output},
};
use anyhow::{Result, ensure};
use sfkit_core::io::ByteOrder;
use sfkit_geometry::{PrecisionModel, wkb::WkbFormat};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// supported formats: *.wkt, *.wkb, *.hex, *.gml or *.xml, "-" reads stdin
	#[arg()]
	input_file: String,

	/// supported formats: *.wkt, *.wkb, *.hex, *.gml or *.xml, "-" writes WKT to stdout
	#[arg()]
	output_file: String,

	/// format of the input, if it can not be told from the file extension
	#[arg(long, value_enum, display_order = 1)]
	from: Option<Format>,

	/// format of the output, if it can not be told from the file extension
	#[arg(long, value_enum, display_order = 1)]
	to: Option<Format>,

	/// WKB dialect: standard, proposed or postgis
	#[arg(long, value_name = "DIALECT", value_parser = WkbFormat::parse_str, display_order = 2)]
	wkb_format: Option<WkbFormat>,

	/// WKB byte order: le or be
	#[arg(long, value_name = "ORDER", value_parser = ByteOrder::parse_str, display_order = 2)]
	byte_order: Option<ByteOrder>,

	/// indent nested WKT and GML
	#[arg(long, display_order = 3)]
	pretty: bool,

	/// round coordinates to a grid of 1/SCALE, e.g. 1000 keeps three decimals
	#[arg(long, value_name = "SCALE", display_order = 3)]
	precision: Option<f64>,

	/// YAML file with codec settings, overridden by the flags above
	#[arg(long, short, value_name = "FILE", display_order = 4)]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let config = get_config(arguments)?;
	let format = output_format(&arguments.output_file, arguments.to)?;

	let geometries = read_geometries(&arguments.input_file, arguments.from, &config)?;
	log::debug!("read {} geometries", geometries.len());

	let content = encode_geometries(&geometries, format, &config)?;
	write_output(&arguments.output_file, &content)?;

	log::info!("finished converting {} geometries to {}", geometries.len(), format.name());
	Ok(())
}

fn get_config(arguments: &Subcommand) -> Result<Config> {
	let mut config = Config::load(arguments.config.as_deref())?;

	if let Some(scale) = arguments.precision {
		ensure!(
			scale.is_finite() && scale > 0.0,
			"precision scale must be a positive number, but is {scale}"
		);
		config.precision = PrecisionModel::fixed(scale);
	}
	if let Some(format) = arguments.wkb_format {
		config.wkb.format = Some(format);
	}
	if let Some(byte_order) = arguments.byte_order {
		config.wkb.byte_order = byte_order;
	}
	if arguments.pretty {
		config.wkt = config.wkt.pretty(true);
		config.gml.write.pretty = true;
	}
	Ok(config)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use pretty_assertions::assert_eq;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn wkt_to_hex_and_back() {
		let dir = tempdir().unwrap();
		let hex = dir.path().join("polygon.hex");
		let wkt = dir.path().join("polygon.wkt");

		run_command(vec![
			"sfkit",
			"convert",
			"-q",
			"../testdata/polygon.wkt",
			hex.to_str().unwrap(),
		])
		.unwrap();
		assert!(fs::read_to_string(&hex).unwrap().starts_with("0103000020E6100000"));

		run_command(vec!["sfkit", "convert", "-q", hex.to_str().unwrap(), wkt.to_str().unwrap()]).unwrap();
		assert_eq!(
			fs::read_to_string(&wkt).unwrap(),
			fs::read_to_string("../testdata/polygon.wkt").unwrap()
		);
	}

	#[test]
	fn flags_override_config() {
		let dir = tempdir().unwrap();
		let config = dir.path().join("sfkit.yaml");
		fs::write(&config, "wkb:\n  format: standard\n  byte_order: le\n").unwrap();
		let output = dir.path().join("point.hex");

		run_command(vec![
			"sfkit",
			"convert",
			"-q",
			"--config",
			config.to_str().unwrap(),
			"--byte-order",
			"be",
			"../testdata/point.wkb",
			output.to_str().unwrap(),
		])
		.unwrap();
		assert_eq!(
			fs::read_to_string(&output).unwrap(),
			"00000000014024000000000000C034000000000000\n"
		);
	}

	#[test]
	fn invalid_arguments() {
		let error = run_command(vec!["sfkit", "convert", "--wkb-format", "iso", "a.wkt", "b.wkb"]).unwrap_err();
		assert!(error.to_string().contains("unknown WKB format 'iso'"), "{error}");

		let error = run_command(vec!["sfkit", "convert", "--precision=0", "a.wkt", "b.wkb"]).unwrap_err();
		assert_eq!(error.to_string(), "precision scale must be a positive number, but is 0");

		let error = run_command(vec!["sfkit", "convert", "../testdata/lines.wkt", "lines.json"]).unwrap_err();
		assert_eq!(error.to_string(), "cannot tell the output format from \"lines.json\", use --to");
	}
}
