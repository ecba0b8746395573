mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use std::fs;
use test_utilities::{convert_stdin, get_temp_output, get_testdata, sfkit_cmd};

#[test]
fn convert_requires_input_and_output() {
	sfkit_cmd()
		.arg("convert")
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: sfkit convert"));
}

#[test]
fn convert_wkt_to_stdout() {
	sfkit_cmd()
		.args(["convert", &get_testdata("polygon.wkt"), "-"])
		.assert()
		.success()
		.stdout("SRID=4326;POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 4, 4 4, 4 2, 2 2))\n");
}

#[test]
fn convert_stdin_is_sniffed() {
	assert_eq!(
		convert_stdin(&[], "0101000020E6100000000000000000244000000000000034C0\n"),
		"SRID=4326;POINT (10 -20)\n"
	);
	assert_eq!(
		convert_stdin(&["--to", "wkb-hex", "--wkb-format", "proposed"], "POINT Z (1 2 3)"),
		"0101000080000000000000F03F00000000000000400000000000000840\n"
	);
	assert_eq!(
		convert_stdin(&["--to", "gml"], "<Point><coordinates>1,2</coordinates></Point>"),
		"<gml:Point xmlns:gml=\"http://www.opengis.net/gml\"><gml:coordinates>1,2</gml:coordinates></gml:Point>\n"
	);
}

#[test]
fn convert_several_geometries() {
	assert_eq!(
		convert_stdin(&["--to", "wkb-hex"], "POINT (1 2)\nLINESTRING (0 0, 1 1)\n"),
		"0101000000000000000000F03F0000000000000040\n01020000000200000000000000000000000000000000000000000000000000F03F000000000000F03F\n"
	);
	assert_eq!(
		fs::read_to_string(get_testdata("points.hex")).unwrap(),
		convert_stdin(&["--to", "wkb-hex"], "POINT (1 2)\nLINESTRING (0 0, 1 1)")
	);
}

#[test]
fn convert_wkb_to_gml_and_back() {
	let (_dir, gml) = get_temp_output("point.gml");
	let (_dir2, wkb) = get_temp_output("point.wkb");

	sfkit_cmd()
		.args(["convert", &get_testdata("point.wkb"), gml.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty());
	assert_eq!(
		fs::read_to_string(&gml).unwrap(),
		"<gml:Point xmlns:gml=\"http://www.opengis.net/gml\"><gml:coordinates>10,-20</gml:coordinates></gml:Point>\n"
	);

	sfkit_cmd()
		.args(["convert", "--byte-order", "be", gml.to_str().unwrap(), wkb.to_str().unwrap()])
		.assert()
		.success();
	assert_eq!(fs::read(&wkb).unwrap(), fs::read(get_testdata("point.wkb")).unwrap());
}

#[test]
fn convert_with_precision_and_pretty() {
	sfkit_cmd()
		.args(["convert", "--pretty", "--precision", "1", &get_testdata("features.gml"), "-"])
		.assert()
		.success()
		.stdout("SRID=4326;LINESTRING (0 0, 1 0, 1 1)\nSRID=4326;LINESTRING (1 1, 0 1, 0 0)\n");
}

#[test]
fn convert_reports_parse_errors() {
	sfkit_cmd()
		.args(["convert", "--from", "wkt", "-", "-"])
		.write_stdin("POINT (1 2")
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("while reading WKT from \"-\""))
		.stderr(str::contains("while parsing WKT"))
		.stderr(str::contains("parse error at position"));
}

#[test]
fn probe_prints_summary() {
	sfkit_cmd()
		.args(["probe", &get_testdata("points.hex")])
		.assert()
		.success()
		.stdout(str::starts_with("geometries: 2\n"))
		.stdout(str::contains("type: LineString"))
		.stdout(str::contains("length: 1.4142135623730951"));
}

#[test]
fn polygonize_reports_leftovers() {
	sfkit_cmd()
		.args(["polygonize", &get_testdata("lines.wkt")])
		.assert()
		.success()
		.stdout(str::starts_with("POLYGON (("))
		.stderr(str::contains("found 1 polygons, 1 dangles, 0 cut edges and 0 invalid rings"));
}
