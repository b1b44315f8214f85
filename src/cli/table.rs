use std::fmt;

use crate::util::{
    choices::Choices,
    entry::{CostLine, Method},
};

/// Box-drawn listing of the ledger, one row per line in ledger order
pub struct Table<'d> {
    data: &'d [CostLine],
    title: Option<String>,
}

struct BoxFmt {
    width: usize,
    text: String,
}

struct ColFmt {
    width: usize,
    right: bool,
    label: BoxFmt,
    boxes: Vec<BoxFmt>,
}

struct GridFmt {
    title: Option<String>,
    labels: ColFmt,
    columns: Vec<ColFmt>,
}

const HEADERS: &[(&str, bool)] = &[
    ("Cost Type", false),
    ("Vendor", false),
    ("Method", false),
    ("Volume", true),
    ("Rate", true),
    ("Internal Cost", true),
    ("Currency", false),
];

impl<'d> Table<'d> {
    pub fn from(data: &'d [CostLine]) -> Self {
        Self { data, title: None }
    }

    pub fn with_title<S: ToString>(mut self, title: S) -> Self {
        self.title = Some(title.to_string());
        self
    }

    fn to_formatter(&self) -> GridFmt {
        let cols = HEADERS
            .iter()
            .map(|(h, right)| ColFmt::with_label(BoxFmt::from(h.to_string()), *right))
            .collect::<Vec<_>>();
        let mut grid = GridFmt::with_columns(self.title.clone(), cols);
        for (i, line) in self.data.iter().enumerate() {
            let currency = line.currency();
            grid.push_line(
                BoxFmt::from(format!("{}", i + 1)),
                vec![
                    BoxFmt::from(line.cost_type().label().to_string()),
                    BoxFmt::from(line.vendor().to_string()),
                    BoxFmt::from(line.method().label().to_string()),
                    BoxFmt::volume(line.volume(), line.method()),
                    BoxFmt::from(format!("{}", line.rate())),
                    BoxFmt::from(currency.format(line.internal_cost())),
                    BoxFmt::from(currency.to_string()),
                ],
            );
        }
        grid
    }
}

impl BoxFmt {
    fn from(text: String) -> Self {
        let width = text.chars().count();
        Self { text, width }
    }

    fn volume(v: f64, method: Method) -> Self {
        match method.unit() {
            Some(unit) => Self::from(format!("{} {}", v, unit)),
            None => Self::from(String::new()),
        }
    }
}

impl ColFmt {
    fn with_label(label: BoxFmt, right: bool) -> Self {
        Self {
            width: label.width,
            right,
            label,
            boxes: Vec::new(),
        }
    }

    fn push(&mut self, b: BoxFmt) {
        self.width = self.width.max(b.width);
        self.boxes.push(b);
    }
}

impl GridFmt {
    fn with_columns(title: Option<String>, columns: Vec<ColFmt>) -> Self {
        Self {
            title,
            labels: ColFmt::with_label(BoxFmt::from(String::from("#")), true),
            columns,
        }
    }

    fn push_line(&mut self, label: BoxFmt, boxes: Vec<BoxFmt>) {
        self.labels.push(label);
        for (i, b) in boxes.into_iter().enumerate() {
            self.columns[i].push(b);
        }
    }

    fn border(&self, f: &mut fmt::Formatter, left: &str, join: &str, right: &str) -> fmt::Result {
        write!(f, "{}", left)?;
        self.labels.hline(f)?;
        for c in &self.columns {
            write!(f, "{}", join)?;
            c.hline(f)?;
        }
        writeln!(f, "{}", right)
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_formatter())
    }
}

impl fmt::Display for GridFmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
        }
        self.border(f, ULCORNER, LOJOIN, URCORNER)?;
        // title line
        write!(f, "{}", VLINE)?;
        self.labels.write_label(f)?;
        for c in &self.columns {
            write!(f, "{}", VLINE)?;
            c.write_label(f)?;
        }
        writeln!(f, "{}", VLINE)?;
        self.border(f, RTJOIN, CROSS, LTJOIN)?;
        // main block
        for idx in 0..self.labels.len() {
            write!(f, "{}", VLINE)?;
            self.labels.write_item(f, idx)?;
            for c in &self.columns {
                write!(f, "{}", VLINE)?;
                c.write_item(f, idx)?;
            }
            writeln!(f, "{}", VLINE)?;
        }
        self.border(f, DLCORNER, HIJOIN, DRCORNER)
    }
}

impl ColFmt {
    fn write_label(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.label.write(f, self.width, false)
    }

    fn write_item(&self, f: &mut fmt::Formatter, idx: usize) -> fmt::Result {
        self.boxes[idx].write(f, self.width, self.right)
    }

    fn len(&self) -> usize {
        self.boxes.len()
    }

    fn hline(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", HLINE.repeat(self.width + 2))
    }
}

const HLINE: &str = "─";
const VLINE: &str = "│";
const ULCORNER: &str = "┌";
const URCORNER: &str = "┐";
const DLCORNER: &str = "└";
const DRCORNER: &str = "┘";
const LTJOIN: &str = "┤";
const RTJOIN: &str = "├";
const HIJOIN: &str = "┴";
const LOJOIN: &str = "┬";
const CROSS: &str = "┼";

impl BoxFmt {
    fn write(&self, f: &mut fmt::Formatter, width: usize, right: bool) -> fmt::Result {
        let pad = " ".repeat(width.saturating_sub(self.width));
        if right {
            write!(f, " {}{} ", pad, self.text)
        } else {
            write!(f, " {}{} ", self.text, pad)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::entry::{fields::*, NO_VENDOR};

    fn sample() -> Vec<CostLine> {
        vec![
            CostLine::new(CostType::Translator, Vendor::named("Acme"), Method::Word, 1200.0, 0.12, Currency::USD),
            CostLine::new(CostType::LQA, Vendor(None), Method::Flat, 0.0, 30000.0, Currency::JPY),
        ]
    }

    #[test]
    fn rows_in_ledger_order() {
        let lines = sample();
        let out = format!("{}", Table::from(&lines).with_title("Internal Cost Breakdown"));
        let rows = out.lines().collect::<Vec<_>>();
        // title, top border, header, separator, 2 rows, bottom border
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "Internal Cost Breakdown");
        assert!(rows[2].contains("Cost Type"));
        assert!(rows[4].contains("Translator fees"));
        assert!(rows[4].contains("1200 words"));
        assert!(rows[4].contains("144.00"));
        assert!(rows[5].contains("LQA fees"));
        assert!(rows[5].contains(NO_VENDOR));
        assert!(rows[5].contains("30000"));
    }

    #[test]
    fn columns_are_aligned() {
        let lines = sample();
        let out = format!("{}", Table::from(&lines));
        let widths = out
            .lines()
            .map(|l| l.chars().count())
            .collect::<Vec<_>>();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
    }
}
