use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{PathCommand, RenderFrame, Renderer, TextAnchor};

/// Serializes render frames into standalone SVG documents.
///
/// The root element carries `role="img"` and an `aria-label` so embedded
/// charts stay readable to assistive technology.
#[derive(Debug)]
pub struct SvgRenderer {
    aria_label: String,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(aria_label: impl Into<String>) -> Self {
        Self {
            aria_label: aria_label.into(),
            document: String::new(),
        }
    }

    /// Last serialized document; empty before the first `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = serialize(frame, &self.aria_label);
        Ok(())
    }
}

fn serialize(frame: &RenderFrame, aria_label: &str) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;

    let mut out = String::with_capacity(1024);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" role=\"img\" aria-label=\"{}\">",
        escape(aria_label)
    );

    // Paint order: grid/axis lines first, then shapes, labels on top.
    for line in &frame.lines {
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.stroke.color.to_svg_paint(),
            num(line.stroke.width)
        );
    }

    for rect in &frame.rects {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height)
        );
        match rect.fill {
            Some(fill) => {
                let _ = write!(out, " fill=\"{}\"", fill.to_svg_paint());
            }
            None => out.push_str(" fill=\"none\""),
        }
        if let Some(stroke) = rect.stroke {
            let _ = write!(
                out,
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.color.to_svg_paint(),
                num(stroke.width)
            );
        }
        out.push_str("/>");
    }

    for path in &frame.paths {
        let _ = write!(out, "<path d=\"{}\"", path_data(&path.commands));
        match path.fill {
            Some(fill) => {
                let _ = write!(out, " fill=\"{}\"", fill.to_svg_paint());
            }
            None => out.push_str(" fill=\"none\""),
        }
        if let Some(stroke) = path.stroke {
            let _ = write!(
                out,
                " stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"",
                stroke.color.to_svg_paint(),
                num(stroke.width)
            );
        }
        out.push_str("/>");
    }

    for circle in &frame.circles {
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
            circle.fill.to_svg_paint()
        );
        if let Some(stroke) = circle.stroke {
            let _ = write!(
                out,
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.color.to_svg_paint(),
                num(stroke.width)
            );
        }
        out.push_str("/>");
    }

    for text in &frame.texts {
        let anchor = match text.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\" \
             font-family=\"sans-serif\">{}</text>",
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            text.color.to_svg_paint(),
            escape(&text.text)
        );
    }

    out.push_str("</svg>");
    out
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::with_capacity(commands.len() * 16);
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => {
                let _ = write!(data, "M {} {}", num(x), num(y));
            }
            PathCommand::LineTo { x, y } => {
                let _ = write!(data, "L {} {}", num(x), num(y));
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let _ = write!(
                    data,
                    "C {} {} {} {} {} {}",
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2),
                    num(x),
                    num(y)
                );
            }
            PathCommand::Arc {
                rx,
                ry,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let _ = write!(
                    data,
                    "A {} {} 0 {} {} {} {}",
                    num(rx),
                    num(ry),
                    u8::from(large_arc),
                    u8::from(sweep),
                    num(x),
                    num(y)
                );
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

/// Formats a coordinate rounded to 1/100 px, without trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
