//! Spreadsheet export of a priced lattice.
//!
//! The workbook has one sheet, `tree_vals`, laid out in columns A to D:
//!
//! ```text
//! A1   User inputs:
//! A2   S_0    B2   15.0000   D2   Initial stock price
//! ...
//! A12  Calculated constants:
//! A13  u      B13  1.1934    D13  Up rate of the stock
//! ...
//! A18  Prices and payoffs:
//! A19  Price 1  B19  15.0000  C19  Payoff 1  D19  2.6661
//! ...
//! ```
//!
//! D19 holds the option value and is highlighted. The same grid can be
//! written as CSV.

use std::io::Write;
use std::path::Path;

use bopm_core::lattice::LatticePricing;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatUnderline, Workbook};

use crate::error::RenderResult;
use crate::labels::format_value;

/// Decimal places used by the sheet.
pub const SHEET_PRECISION: u32 = 4;

/// Name of the exported worksheet.
pub const SHEET_NAME: &str = "tree_vals";

/// Zero-based row of the first node (A19).
const NODE_ROW: u32 = 18;

const GRID_COLUMNS: usize = 4;
const COLUMN_WIDTHS: [f64; GRID_COLUMNS] = [10.0, 16.0, 10.0, 16.0];

/// Content of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Literal text.
    Text(String),
    /// Number shown at the sheet precision.
    Number(f64),
}

/// Presentation of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Section title: bold, underlined, left-aligned.
    Header,
    /// Variable name: bold, right-aligned.
    Variable,
    /// Right-aligned text value.
    Text,
    /// Fixed-decimal number.
    Number,
    /// Italic description.
    Description,
    /// Highlighted option value.
    CurrentPayoff,
}

/// One written cell, zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetCell {
    /// Row, 0 is row 1.
    pub row: u32,
    /// Column, 0 is column A.
    pub col: u16,
    /// Content.
    pub value: CellValue,
    /// Format.
    pub style: CellStyle,
}

impl SheetCell {
    /// A1-style reference, e.g. `D19`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}{}", char::from(b'A' + self.col as u8), self.row + 1)
    }
}

fn number_format(precision: u32) -> String {
    if precision == 0 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(precision as usize))
    }
}

struct SheetFormats {
    header: Format,
    variable: Format,
    text: Format,
    number: Format,
    description: Format,
    current_payoff: Format,
}

impl SheetFormats {
    fn new(precision: u32) -> Self {
        let num_format = number_format(precision);
        Self {
            header: Format::new()
                .set_bold()
                .set_underline(FormatUnderline::Single)
                .set_align(FormatAlign::Left),
            variable: Format::new().set_bold().set_align(FormatAlign::Right),
            text: Format::new().set_align(FormatAlign::Right),
            number: Format::new().set_num_format(&num_format),
            description: Format::new().set_italic(),
            current_payoff: Format::new()
                .set_background_color(Color::RGB(0x00DA_F2D0))
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_num_format(&num_format),
        }
    }

    fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Header => &self.header,
            CellStyle::Variable => &self.variable,
            CellStyle::Text => &self.text,
            CellStyle::Number => &self.number,
            CellStyle::Description => &self.description,
            CellStyle::CurrentPayoff => &self.current_payoff,
        }
    }
}

/// Workbook of inputs, constants and every node of one pricing run.
#[derive(Debug, Clone, Copy)]
pub struct SheetExport<'a> {
    pricing: &'a LatticePricing,
    precision: u32,
}

impl<'a> SheetExport<'a> {
    /// Creates an export at the default four decimal places.
    #[must_use]
    pub fn new(pricing: &'a LatticePricing) -> Self {
        Self {
            pricing,
            precision: SHEET_PRECISION,
        }
    }

    /// Overrides the number of decimal places.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Every written cell, in writing order.
    #[must_use]
    pub fn cells(&self) -> Vec<SheetCell> {
        let params = &self.pricing.params;
        let constants = &self.pricing.constants;
        let text = |s: &str| CellValue::Text(s.to_string());

        let mut cells = Vec::new();
        let mut put = |row: u32, col: u16, value: CellValue, style: CellStyle| {
            cells.push(SheetCell {
                row,
                col,
                value,
                style,
            });
        };

        put(0, 0, text("User inputs:"), CellStyle::Header);
        let inputs = [
            ("S_0", CellValue::Number(params.spot), "Initial stock price"),
            ("K", CellValue::Number(params.strike), "Strike price"),
            (
                "T",
                CellValue::Number(params.maturity),
                "Time to maturity (in years)",
            ),
            (
                "N",
                CellValue::Number(params.periods as f64),
                "No. of future periods",
            ),
            (
                "Δt",
                CellValue::Number(constants.dt),
                "Time step between each period (T/N)",
            ),
            (
                "r",
                CellValue::Number(params.rate),
                "Annual discount rate (continuous compounding)",
            ),
            (
                "σ",
                CellValue::Number(params.volatility),
                "Annual stock volatility",
            ),
            (
                "Opt Type",
                CellValue::Text(params.option_type.to_string()),
                "Type of option (Call or Put)",
            ),
            (
                "Opt Style",
                CellValue::Text(params.exercise.to_string()),
                "Style of option (European or American)",
            ),
        ];
        for (row, (name, value, description)) in (1..).zip(inputs) {
            let style = match value {
                CellValue::Number(_) => CellStyle::Number,
                CellValue::Text(_) => CellStyle::Text,
            };
            put(row, 0, text(name), CellStyle::Variable);
            put(row, 1, value, style);
            put(row, 3, text(description), CellStyle::Description);
        }

        put(11, 0, text("Calculated constants:"), CellStyle::Header);
        let derived = [
            ("u", constants.up, "Up rate of the stock"),
            ("d", constants.down, "Down rate of the stock"),
            (
                "p",
                constants.probability,
                "Probability stock price will go up (by u) in next period",
            ),
            (
                "1 - p",
                constants.down_probability(),
                "Probability stock price will go down (by d) in next period",
            ),
        ];
        for (row, (name, value, description)) in (12..).zip(derived) {
            put(row, 0, text(name), CellStyle::Variable);
            put(row, 1, CellValue::Number(value), CellStyle::Number);
            put(row, 3, text(description), CellStyle::Description);
        }

        put(NODE_ROW - 1, 0, text("Prices and payoffs:"), CellStyle::Header);
        for (row, node) in (NODE_ROW..).zip(&self.pricing.nodes) {
            let i = node.index.get();
            // The root row carries the option value.
            let payoff_style = if row == NODE_ROW {
                CellStyle::CurrentPayoff
            } else {
                CellStyle::Number
            };
            put(row, 0, CellValue::Text(format!("Price {i}")), CellStyle::Variable);
            put(row, 1, CellValue::Number(node.price), CellStyle::Number);
            put(row, 2, CellValue::Text(format!("Payoff {i}")), CellStyle::Variable);
            put(row, 3, CellValue::Number(node.payoff), payoff_style);
        }

        cells
    }

    fn display(&self, value: &CellValue) -> String {
        match value {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => format_value(*number, self.precision),
        }
    }

    /// The sheet as a rectangular grid of formatted cells, columns A to D.
    #[must_use]
    pub fn grid(&self) -> Vec<Vec<String>> {
        let cells = self.cells();
        let height = cells.iter().map(|c| c.row as usize + 1).max().unwrap_or(0);
        let mut grid = vec![vec![String::new(); GRID_COLUMNS]; height];
        for cell in &cells {
            grid[cell.row as usize][usize::from(cell.col)] = self.display(&cell.value);
        }
        grid
    }

    fn workbook(&self) -> RenderResult<Workbook> {
        let formats = SheetFormats::new(self.precision);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for (col, width) in (0..).zip(COLUMN_WIDTHS) {
            sheet.set_column_width(col, width)?;
        }
        sheet.set_screen_gridlines(false);

        for cell in self.cells() {
            let format = formats.get(cell.style);
            match &cell.value {
                CellValue::Number(number) if number.is_finite() => {
                    sheet.write_number_with_format(cell.row, cell.col, *number, format)?;
                }
                // Excel has no NaN or infinity.
                value => {
                    sheet.write_string_with_format(
                        cell.row,
                        cell.col,
                        self.display(value),
                        format,
                    )?;
                }
            }
        }
        Ok(workbook)
    }

    /// Renders the workbook as `.xlsx` bytes.
    pub fn to_xlsx_buffer(&self) -> RenderResult<Vec<u8>> {
        let bytes = self.workbook()?.save_to_buffer()?;
        tracing::debug!(bytes = bytes.len(), "workbook rendered");
        Ok(bytes)
    }

    /// Writes the workbook to an `.xlsx` file.
    pub fn save_xlsx(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.workbook()?.save(path)?;
        tracing::debug!(path = %path.display(), "workbook saved");
        Ok(())
    }

    /// Writes the grid as CSV to `writer`.
    pub fn write_csv<W: Write>(&self, writer: W) -> RenderResult<()> {
        let grid = self.grid();
        let mut out = csv::Writer::from_writer(writer);
        for row in &grid {
            out.write_record(row)?;
        }
        out.flush()?;
        tracing::debug!(rows = grid.len(), "sheet written as csv");
        Ok(())
    }

    /// Renders the grid as a CSV string.
    pub fn to_csv_string(&self) -> RenderResult<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
