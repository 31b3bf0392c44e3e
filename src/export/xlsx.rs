//! Spreadsheet report generator
//!
//! Turns a [`MonthlySummary`] into a single-sheet xlsx workbook serialized
//! to an in-memory byte buffer. The numeric content is exactly the rounded
//! matrix figures; everything else here (header styling, frozen panes,
//! alternating row fills, borders, currency number formats, column widths)
//! is presentation metadata on the serialized document.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::info;

use crate::error::{FinoraError, FinoraResult};
use crate::models::Transaction;
use crate::reports::MonthlySummary;

/// Fixed logical filename of the exported artifact
pub const REPORT_FILE_NAME: &str = "monthly-budget.xlsx";

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Monthly Budget";

/// Header label of the description column
const DESCRIPTION_HEADER: &str = "Description";
/// Header label of the trailing totals column
const YEARLY_TOTAL_HEADER: &str = "Yearly Total";

// Styling constants
const HEADER_FILL: Color = Color::RGB(0x4F46E5);
const BORDER_COLOR: Color = Color::RGB(0xAAAAAA);
const STRIPE_FILL: Color = Color::RGB(0xF3F4F6);
/// Localized currency with negatives rendered red
const CURRENCY_FORMAT: &str = "$#,##0.00;[Red]-$#,##0.00";
const DESCRIPTION_WIDTH: f64 = 35.0;
const MONTH_WIDTH: f64 = 15.0;
const TOTAL_WIDTH: f64 = 18.0;
const HEADER_HEIGHT: f64 = 20.0;

/// Aggregate a transaction snapshot and serialize the report in one step
///
/// Propagates [`FinoraError::EmptyReport`] unchanged when the set yields no
/// active months.
pub fn export_monthly_report(transactions: &[Transaction]) -> FinoraResult<Vec<u8>> {
    let summary = MonthlySummary::aggregate(transactions)?;
    write_report(&summary)
}

/// Serialize a monthly summary as a styled xlsx workbook
pub fn write_report(summary: &MonthlySummary) -> FinoraResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = header_format();
    // Index 0 = unshaded, 1 = shaded stripe
    let description = [description_format(false), description_format(true)];
    let currency = [currency_format(false), currency_format(true)];

    let labels = summary.month_labels();
    let total_col = (labels.len() + 1) as u16;

    // Header row, visually distinguished and separated by a heavier rule
    worksheet.write_string_with_format(0, 0, DESCRIPTION_HEADER, &header)?;
    for (i, label) in labels.iter().enumerate() {
        worksheet.write_string_with_format(0, (i + 1) as u16, *label, &header)?;
    }
    worksheet.write_string_with_format(0, total_col, YEARLY_TOTAL_HEADER, &header)?;
    worksheet.set_row_height(0, HEADER_HEIGHT)?;

    // Description column wider than the numeric columns
    worksheet.set_column_width(0, DESCRIPTION_WIDTH)?;
    for i in 0..labels.len() {
        worksheet.set_column_width((i + 1) as u16, MONTH_WIDTH)?;
    }
    worksheet.set_column_width(total_col, TOTAL_WIDTH)?;

    // Keep the header row and description column visible while scrolling
    worksheet.set_freeze_panes(1, 1)?;

    for (i, row) in summary.rows().iter().enumerate() {
        let sheet_row = (i + 1) as u32;
        // First data row is shaded, then the fills alternate
        let stripe = usize::from(i % 2 == 0);

        worksheet.write_string_with_format(sheet_row, 0, row.label, &description[stripe])?;
        for (c, value) in row.monthly.iter().enumerate() {
            worksheet.write_number_with_format(
                sheet_row,
                (c + 1) as u16,
                to_f64(*value)?,
                &currency[stripe],
            )?;
        }
        worksheet.write_number_with_format(
            sheet_row,
            total_col,
            to_f64(row.yearly_total)?,
            &currency[stripe],
        )?;
    }

    let buffer = workbook.save_to_buffer()?;
    info!(
        bytes = buffer.len(),
        months = labels.len(),
        "monthly report serialized"
    );
    Ok(buffer)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_font_size(12)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR)
        .set_border_bottom(FormatBorder::Thick)
        .set_border_bottom_color(HEADER_FILL)
}

fn description_format(shaded: bool) -> Format {
    let format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);
    if shaded {
        format.set_background_color(STRIPE_FILL)
    } else {
        format
    }
}

fn currency_format(shaded: bool) -> Format {
    let format = Format::new()
        .set_num_format(CURRENCY_FORMAT)
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);
    if shaded {
        format.set_background_color(STRIPE_FILL)
    } else {
        format
    }
}

fn to_f64(value: Decimal) -> FinoraResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| FinoraError::Export(format!("Value {} is not representable", value)))
}
