//! Inspect command - streaming summary of an SVG using quick-xml.
//!
//! Counts rectangles and polygons, records the canvas size, and tallies
//! fill colors, without building a tree. Handy for checking a generated
//! flag has its 13 stripes, 1 canton, and N stars.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::Serialize;

use super::args::InspectArgs;
use super::common::read_input;

/// Summary of one SVG document.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct SvgReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_box: Option<String>,
    pub rects: usize,
    pub polygons: usize,
    /// Elements other than svg, rect, and polygon
    pub other_elements: usize,
    /// Vertex counts seen on polygons, with how many polygons had each
    pub polygon_vertices: BTreeMap<usize, usize>,
    /// Fill colors with use counts
    pub fill_colors: BTreeMap<String, usize>,
}

/// Streaming analyzer for SVG content.
#[derive(Default)]
struct Analyzer {
    report: SvgReport,
}

impl Analyzer {
    fn process_element(&mut self, e: &BytesStart) {
        let name_bytes = e.name();
        let name = std::str::from_utf8(name_bytes.as_ref()).unwrap_or("");

        match name {
            "svg" => self.process_svg_attrs(e),
            "rect" => self.report.rects += 1,
            "polygon" => {
                self.report.polygons += 1;
                if let Some(points) = attr_value(e, "points") {
                    let vertices = points.split_whitespace().count();
                    *self.report.polygon_vertices.entry(vertices).or_insert(0) += 1;
                }
            }
            _ => self.report.other_elements += 1,
        }

        if let Some(fill) = attr_value(e, "fill") {
            if !fill.is_empty() && fill != "none" {
                *self.report.fill_colors.entry(fill.to_uppercase()).or_insert(0) += 1;
            }
        }
    }

    fn process_svg_attrs(&mut self, e: &BytesStart) {
        self.report.width = attr_value(e, "width");
        self.report.height = attr_value(e, "height");
        self.report.view_box = attr_value(e, "viewBox").or_else(|| attr_value(e, "viewbox"));
    }
}

fn attr_value(e: &BytesStart, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Analyze SVG content in one streaming pass.
pub fn inspect_svg(content: &str) -> Result<SvgReport> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut analyzer = Analyzer::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => analyzer.process_element(e),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(anyhow!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(analyzer.report)
}

/// Execute the inspect command.
pub fn cmd_inspect(args: &InspectArgs) -> Result<()> {
    let content = read_input(&args.file)?;
    let report = inspect_svg(&content)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File:      {}", args.file.display());
    println!(
        "Canvas:    {} x {}",
        report.width.as_deref().unwrap_or("?"),
        report.height.as_deref().unwrap_or("?")
    );
    if let Some(view_box) = &report.view_box {
        println!("viewBox:   {}", view_box);
    }
    println!("Rects:     {}", report.rects);
    println!("Polygons:  {}", report.polygons);
    for (vertices, count) in &report.polygon_vertices {
        println!("  {} with {} vertices", count, vertices);
    }
    if report.other_elements > 0 {
        println!("Other:     {}", report.other_elements);
    }
    println!("Fills:");
    for (color, count) in &report.fill_colors {
        println!("  {:<10} {}", color, count);
    }
    Ok(())
}
