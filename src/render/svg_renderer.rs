use std::fmt::Write as _;

use crate::core::{escape_xml, format_number, format_style, make_translate};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ClassList, Element, LegendItem, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame,
    Renderer, TextAnchor, TextPrimitive,
};

/// Serializes frames into standalone SVG documents plus an HTML color key.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: String,
    last_legend_html: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG document of the most recent frame.
    #[must_use]
    pub fn last_svg(&self) -> &str {
        &self.last_svg
    }

    /// `<ul class="key">` markup of the most recent frame; empty without a legend.
    #[must_use]
    pub fn last_legend_html(&self) -> &str {
        &self.last_legend_html
    }

    pub fn to_svg_string(frame: &RenderFrame) -> ChartResult<String> {
        let mut out = String::new();
        write_document(&mut out, frame).map_err(map_fmt_error)?;
        Ok(out)
    }

    pub fn to_legend_html(legend: &[LegendItem]) -> ChartResult<String> {
        let mut out = String::new();
        write_legend(&mut out, legend).map_err(map_fmt_error)?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_svg = Self::to_svg_string(frame)?;
        self.last_legend_html = Self::to_legend_html(&frame.legend)?;
        Ok(())
    }
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::Render(format!("failed to write svg: {err}"))
}

fn write_document(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        format_number(frame.width),
        format_number(frame.height)
    )?;
    writeln!(
        out,
        r#"<g transform="{}">"#,
        make_translate(frame.origin_x, frame.origin_y)
    )?;
    for element in &frame.elements {
        match element {
            Element::Rect(rect) => write_rect(out, rect)?,
            Element::Line(line) => write_line(out, line)?,
            Element::Path(path) => write_path(out, path)?,
            Element::Text(text) => write_text(out, text)?,
        }
    }
    out.push_str("</g>\n</svg>\n");
    Ok(())
}

fn write_class(out: &mut String, class: &ClassList, extra: Option<&str>) -> std::fmt::Result {
    let mut classes = class.as_str().trim().to_owned();
    if let Some(extra) = extra {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(extra);
    }
    if classes.is_empty() {
        return Ok(());
    }
    write!(out, r#" class="{}""#, escape_xml(&classes))
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        format_number(rect.x),
        format_number(rect.y),
        format_number(rect.width),
        format_number(rect.height),
        escape_xml(&rect.fill)
    )?;
    write_class(out, &rect.class, None)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        format_number(line.x1),
        format_number(line.y1),
        format_number(line.x2),
        format_number(line.y2)
    )?;
    write_class(out, &line.class, None)?;
    let style = format_style(&[
        ("stroke", escape_xml(&line.stroke)),
        ("stroke-width", format_number(line.stroke_width)),
    ]);
    writeln!(out, r#" style="{}"/>"#, style.trim_end())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<path transform="{}" d="{}""#,
        make_translate(path.x, path.y),
        escape_xml(&path.data)
    )?;
    write_class(out, &path.class, None)?;
    writeln!(
        out,
        r#" style="{}"/>"#,
        format_style(&[("fill", escape_xml(&path.fill))]).trim_end()
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{}""#,
        format_number(text.x),
        format_number(text.y),
        anchor
    )?;
    if let Some(fill) = &text.fill {
        write!(out, r#" fill="{}""#, escape_xml(fill))?;
    }
    write_class(out, &text.class, text.hidden.then_some("hidden"))?;
    out.push('>');

    match text.lines.as_slice() {
        [line] if line.dx == 0.0 && line.dy == 0.0 => out.push_str(&escape_xml(&line.text)),
        lines => {
            for line in lines {
                write!(
                    out,
                    r#"<tspan x="{}" y="{}" dx="{}" dy="{}">{}</tspan>"#,
                    format_number(text.x),
                    format_number(text.y),
                    format_number(line.dx),
                    format_number(line.dy),
                    escape_xml(&line.text)
                )?;
            }
        }
    }
    out.push_str("</text>\n");
    Ok(())
}

fn write_legend(out: &mut String, legend: &[LegendItem]) -> std::fmt::Result {
    if legend.is_empty() {
        return Ok(());
    }
    out.push_str("<ul class=\"key\">\n");
    for item in legend {
        writeln!(
            out,
            r#"<li class="{}"><b style="{}"></b><label>{}</label></li>"#,
            escape_xml(item.class.as_str()),
            format_style(&[("background-color", escape_xml(&item.color))]).trim_end(),
            escape_xml(&item.label)
        )?;
    }
    out.push_str("</ul>\n");
    Ok(())
}
