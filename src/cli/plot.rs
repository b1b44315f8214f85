//! SVG chart of the session: one bar per cost line and a utilization gauge

use std::io;

use svg::{
    node::element::{Line, Rectangle, Text},
    node,
    Document,
};

use crate::util::{
    choices::Choices,
    currency::round_places,
    entry::CostLine,
    session::Session,
    summary::{Status, Summary},
};

pub struct Plotter<'d> {
    session: &'d Session,
}

const FWIDTH: f64 = 1000.0;
const LABEL_WIDTH: f64 = 260.0;
const BAR_HEIGHT: f64 = 24.0;
const BAR_GAP: f64 = 8.0;
const GAUGE_HEIGHT: f64 = 32.0;
const MARGIN: f64 = 20.0;
const FONT_SIZE: f64 = 14.0;

impl<'d> Plotter<'d> {
    pub fn from(session: &'d Session) -> Self {
        Self { session }
    }

    /// Write the chart to `file`, stamped with the current local time
    pub fn render(&self, file: &str) -> io::Result<()> {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        svg::save(file, &self.document(&stamp))
    }

    fn document(&self, stamp: &str) -> Document {
        let lines = self.session.ledger().lines();
        let summary = self.session.summary();
        let bars = BarDrawer::new(lines);
        let top = bars.height() + 2.0 * BAR_GAP;
        let gauge = GaugeDrawer { summary, top };
        let fheight = top + gauge.height() + 2.0 * BAR_GAP + FONT_SIZE;
        let caption = label(
            0.0,
            fheight,
            &format!("{} lines, generated {}", summary.count(), stamp),
        )
        .set("fill", "gray");
        let doc = bars
            .draw()
            .into_iter()
            .chain(gauge.draw())
            .fold(Document::new(), |doc, shape| doc.add_shape(shape));
        doc.add(caption).set(
            "viewBox",
            (-MARGIN, -MARGIN, FWIDTH + 2.0 * MARGIN, fheight + 2.0 * MARGIN),
        )
    }
}

/// Anything the chart is made of
enum Shape {
    Rect(Rectangle),
    Text(Text),
    Line(Line),
}

trait DocumentExt {
    fn add_shape(self, shape: Shape) -> Self;
}

impl DocumentExt for Document {
    fn add_shape(self, shape: Shape) -> Self {
        match shape {
            Shape::Rect(r) => self.add(r),
            Shape::Text(t) => self.add(t),
            Shape::Line(l) => self.add(l),
        }
    }
}

fn label(x: f64, y: f64, text: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-size", FONT_SIZE)
        .set("font-family", "sans-serif")
        .add(node::Text::new(text))
}

/// Horizontal bars scaled to the most expensive line
///
/// Amounts in different currencies share the same scale, like the total does.
struct BarDrawer<'d> {
    lines: &'d [CostLine],
    max: f64,
}

impl<'d> BarDrawer<'d> {
    fn new(lines: &'d [CostLine]) -> Self {
        let max = lines
            .iter()
            .map(CostLine::internal_cost)
            .fold(0.0, f64::max);
        Self { lines, max }
    }

    fn height(&self) -> f64 {
        self.lines.len() as f64 * (BAR_HEIGHT + BAR_GAP)
    }

    /// Zero for amounts that cannot be scaled
    fn width(&self, cost: f64) -> f64 {
        if self.max > 0.0 && self.max.is_finite() && cost.is_finite() {
            cost / self.max * (FWIDTH - LABEL_WIDTH)
        } else {
            0.0
        }
    }

    fn draw(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            let y = i as f64 * (BAR_HEIGHT + BAR_GAP);
            let text = format!(
                "{}. {} ({})",
                i + 1,
                line.cost_type().label(),
                line.vendor()
            );
            shapes.push(Shape::Text(label(0.0, y + BAR_HEIGHT * 0.7, &text)));
            shapes.push(Shape::Rect(
                Rectangle::new()
                    .set("x", LABEL_WIDTH)
                    .set("y", y)
                    .set("width", self.width(line.internal_cost()))
                    .set("height", BAR_HEIGHT)
                    .set("fill", COLORS[line.cost_type() as usize % COLORS.len()]),
            ));
            let amount = format!(
                "{} {}",
                line.currency().format(line.internal_cost()),
                line.currency()
            );
            shapes.push(Shape::Text(label(
                LABEL_WIDTH + self.width(line.internal_cost()) + BAR_GAP,
                y + BAR_HEIGHT * 0.7,
                &amount,
            )));
        }
        shapes
    }
}

/// Utilization gauge, filled up to the clamped progress fraction
struct GaugeDrawer {
    summary: Summary,
    top: f64,
}

impl GaugeDrawer {
    fn height(&self) -> f64 {
        GAUGE_HEIGHT + BAR_GAP + FONT_SIZE
    }

    fn draw(&self) -> Vec<Shape> {
        let width = FWIDTH - LABEL_WIDTH;
        let fill = match self.summary.status() {
            Status::Healthy => "green",
            Status::Warning => "orange",
            Status::Exceeded => "red",
        };
        let y = self.top;
        let threshold = LABEL_WIDTH + width * 0.8;
        vec![
            Shape::Text(label(0.0, y + GAUGE_HEIGHT * 0.7, "Budget utilization")),
            Shape::Rect(
                Rectangle::new()
                    .set("x", LABEL_WIDTH)
                    .set("y", y)
                    .set("width", width)
                    .set("height", GAUGE_HEIGHT)
                    .set("fill", "lightgray"),
            ),
            Shape::Rect(
                Rectangle::new()
                    .set("x", LABEL_WIDTH)
                    .set("y", y)
                    .set("width", width * self.summary.progress())
                    .set("height", GAUGE_HEIGHT)
                    .set("fill", fill),
            ),
            Shape::Line(
                Line::new()
                    .set("x1", threshold)
                    .set("x2", threshold)
                    .set("y1", y)
                    .set("y2", y + GAUGE_HEIGHT)
                    .set("stroke", "black")
                    .set("stroke-width", 2.0),
            ),
            Shape::Text(label(
                LABEL_WIDTH,
                y + GAUGE_HEIGHT + BAR_GAP + FONT_SIZE,
                &format!(
                    "{:.2} % ({})",
                    round_places(self.summary.utilization(), 2),
                    self.summary.status().message()
                ),
            )),
        ]
    }
}

const COLORS: &[&str] = &[
    "red",
    "green",
    "blue",
    "gold",
    "orange",
    "purple",
    "cyan",
];
